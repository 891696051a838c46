//! Sensible Token Output Decoder
//!
//! Recognises Sensible FT, Unique and NFT locking scripts and extracts their
//! token metadata. See [`decoder::decode_sensible_txo`].

pub mod cli;
pub mod config;
pub mod crypto;
pub mod decoder;
pub mod errors;
pub mod processor;
pub mod types;
pub mod utils;

pub use decoder::{decode_into, decode_script, decode_sensible_txo};
pub use types::{CodeType, TxoData};

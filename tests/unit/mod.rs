//! Unit Tests Module
//!
//! Per-layout decoder tests plus the dispatcher's ordering and rejection rules.

pub mod dispatcher;
pub mod ft_decoder;
pub mod nft_decoder;

//! Shared helpers

pub mod varint;

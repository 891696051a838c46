//! Integration Tests Module
//!
//! Encoder round trips and the CSV scan pipeline.

//! Error types and error handling for the tokenizer.
//!
//! Scanning itself never fails. These errors are produced when a caller
//! asks for strict tokenization and an unknown character shows up:
//!
//! - Error structures with source position information
//! - Error formatting and suggestions

pub mod errors;

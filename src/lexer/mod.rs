//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of classified tokens for a downstream parser. It handles:
//!
//! - Matching the remaining input against an ordered regex pattern table
//! - First-match precedence between token kinds
//! - Row and column tracking, including tokens that span newlines
//! - Falling back to single-character `Unk` tokens for unmatched input

pub mod lexer;
pub mod tokens;

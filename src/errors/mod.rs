//! Error types for the front end.
//!
//! This module defines the diagnostic values accumulated during a parse.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexing/parsing phases
//! - Error formatting and display functionality

pub mod errors;

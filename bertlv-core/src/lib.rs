//! Core types and utilities for the BER-TLV codec
//!
//! This crate provides the error type, the hex boundary helpers and the
//! codec configuration shared by the other crates of the workspace.

pub mod config;
pub mod error;
pub mod hex_string;

pub use config::CodecConfig;
pub use error::{TlvError, TlvResult};
pub use hex_string::{decode_hex, encode_hex};

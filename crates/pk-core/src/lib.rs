//! # pk-core
//!
//! Core utilities, configuration, and error handling for profilekit.
//!
//! This crate provides foundational types used across the other profilekit
//! crates: the shared [`Error`] type, the [`Config`] structure and the
//! tracing bootstrap in [`logging`].

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod logging;

pub use config::Config;
pub use error::{Error, Result};

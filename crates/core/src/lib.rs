//! Core types shared across the geonet workspace.
//!
//! Holds the configuration/I-O error type and the `Result` alias used by
//! anything that touches the outside world. Graph-domain failures live in
//! `geonet-graph`.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;

//! CLI utilities for bgmask
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Labelled detail lines and hints

#![warn(missing_docs)]

pub mod output;

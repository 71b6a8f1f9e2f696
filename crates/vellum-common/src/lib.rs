//! Common utilities for the Vellum document toolkit.
//!
//! This crate provides shared infrastructure used by the document components:
//! - **Warning System** - colored terminal output for tolerated-but-ignored input

pub mod warning;

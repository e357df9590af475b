//! Parse phase tests.
//!
//! Tests for the `xla_parse` and `xla_diagnostic` crates working together,
//! validating:
//! - Bracket structure of whole programs
//! - Tag collapse on realistic input
//! - Diagnostics produced for malformed input
//!
//! # Test Organization
//!
//! - `structure` - Collected and collapsed trees
//! - `diagnostics` - Error codes, positions and rendered output

mod diagnostics;
mod structure;

//! Integration tests for cvd-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the cvd-rs crates.

#[cfg(test)]
mod golden;

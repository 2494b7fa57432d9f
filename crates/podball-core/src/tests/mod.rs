//! Integration tests for the steering core.
//!
//! - `integration.rs`: end-to-end scenarios through [`crate::Simulation`] —
//!   boost cycles, lifecycle transitions, defender hysteresis
//! - `properties.rs`: property-based tests of the steering geometry
//! - `helpers.rs`: factory functions and the recording boost hooks

mod helpers;

pub use helpers::*;

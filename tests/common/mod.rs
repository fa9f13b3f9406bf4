//! Shared test infrastructure for the resolver integration tests.

#![allow(dead_code)] // Not every test binary uses every helper

pub mod builders;
pub mod mocks;
pub mod strategies;

pub use builders::*;
pub use mocks::*;

//! Remote Data Service
//!
//! Client and types for the hosted table API.

pub mod client;
pub mod types;

pub use client::*;

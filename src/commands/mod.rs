//! Command implementations for the slipfind CLI

pub mod resolve;

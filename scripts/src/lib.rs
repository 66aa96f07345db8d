//! Tasks for deploying the swap contract and minting tokens on EVM chains.

#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;
pub mod extractor;
pub mod runtime;
pub mod tx;

/// Our deploy utils
mod deploy;

/// Our output utils
pub mod output_writer;

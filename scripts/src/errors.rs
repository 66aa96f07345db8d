//! Definitions of errors that can occur during the execution of the contract tasks

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the contract tasks
#[derive(Debug)]
pub enum ScriptError {
    /// No signer is configured, carries the remediation hint
    WalletNotFound(String),
    /// Error writing the task output
    OutputError(String),
    /// Error when creating the client
    ClientInitialization(String),
    /// Error when fetching the nonce to predict a deployment address
    NonceFetching(String),
    /// No compiled artifact for the requested contract name
    ArtifactNotFound(String),
    /// The compiled artifact could not be read or parsed
    ArtifactParsing(String),
    /// Error turning task arguments into ABI encoded calldata
    AbiEncoding(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error calling a contract method
    ContractInteraction(String),
    /// The mint receipt did not yield a token id while one was required
    MissingTokenId(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::WalletNotFound(s) => write!(f, "wallet not found: {}", s),
            ScriptError::OutputError(s) => write!(f, "error writing output: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error during client init: {}", s),
            ScriptError::NonceFetching(s) => {
                write!(f, "error during nonce fetching for client signing: {}", s)
            }
            ScriptError::ArtifactNotFound(s) => write!(f, "contract artifact not found: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing contract artifact: {}", s),
            ScriptError::AbiEncoding(s) => write!(f, "error encoding contract arguments: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::MissingTokenId(s) => write!(f, "no token id in mint receipt: {}", s),
        }
    }
}

impl Error for ScriptError {}

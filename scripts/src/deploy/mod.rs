//! Contract creation over RPC

#[allow(clippy::module_inception)]
mod deploy;

pub use deploy::deploy_contract;

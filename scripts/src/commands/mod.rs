//! The task bodies behind each CLI command

use alloy::primitives::Address;

use crate::{constants::WALLET_NOT_FOUND_HINT, errors::ScriptError, runtime::Runtime};

mod deploy;
mod mint;

pub use deploy::deploy;
pub use mint::mint;

/// First signer of the runtime, every task starts here
///
/// Fails before any contract is touched when no wallet is configured.
async fn resolve_signer(runtime: &dyn Runtime) -> Result<Address, ScriptError> {
    runtime
        .get_signers()
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ScriptError::WalletNotFound(String::from(WALLET_NOT_FOUND_HINT)))
}

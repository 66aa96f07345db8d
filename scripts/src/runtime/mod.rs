//! The runtime capabilities the tasks are written against.
//!
//! A [`Runtime`] hands out signers, contract factories and handles on
//! already deployed contracts. The tasks only ever talk to these traits, the
//! RPC backed implementation lives in [`rpc`].

use alloy::{
    dyn_abi::DynSolValue,
    primitives::{Address, TxHash},
};
use async_trait::async_trait;

use crate::errors::ScriptError;

pub mod artifacts;
pub mod rpc;

/// Source of signers and contract handles for a single network
#[async_trait]
pub trait Runtime: Send + Sync {
    /// Name of the network the runtime is bound to
    fn network_name(&self) -> &str;

    /// The configured signers, empty when no wallet is set up
    async fn get_signers(&self) -> Result<Vec<Address>, ScriptError>;

    /// Factory able to deploy the contract compiled under `name`
    async fn get_contract_factory(
        &self,
        name: &str,
    ) -> Result<Box<dyn ContractFactory>, ScriptError>;

    /// Handle on the contract deployed at `address`, using the interface of `name`
    async fn get_contract_at(
        &self,
        name: &str,
        address: Address,
    ) -> Result<Box<dyn Contract>, ScriptError>;
}

/// Deploys new instances of one contract
#[async_trait]
pub trait ContractFactory: Send + Sync {
    /// Deploy with the given constructor arguments and wait for confirmation
    async fn deploy(&self, args: &[String]) -> Result<DeployedContract, ScriptError>;
}

/// A contract living on chain
#[async_trait]
pub trait Contract: Send + Sync {
    /// Address of the contract
    fn address(&self) -> Address;

    /// Submit a state changing call to `method` and wait for its receipt
    async fn send(&self, method: &str, args: &[String]) -> Result<TxOutcome, ScriptError>;
}

/// A contract whose creation transaction is confirmed
#[derive(Clone, Debug)]
pub struct DeployedContract {
    /// Artifact name of the contract
    pub name: String,
    /// Address the contract was created at
    pub address: Address,
    /// The creation transaction
    pub deploy_transaction: TxOutcome,
}

/// A submitted transaction together with its confirmed receipt
#[derive(Clone, Debug)]
pub struct TxOutcome {
    /// Hash of the submitted transaction
    pub hash: TxHash,
    /// Receipt once the transaction is mined
    pub receipt: TxReceipt,
}

/// The parts of a receipt the tasks read
#[derive(Clone, Debug, Default)]
pub struct TxReceipt {
    /// Block the transaction was included in
    pub block_number: Option<u64>,
    /// Created contract, for deployments
    pub contract_address: Option<Address>,
    /// Logs of the transaction
    pub events: Vec<EventRecord>,
}

/// A log emitted by a transaction, decoded when its event is known
#[derive(Clone, Debug)]
pub struct EventRecord {
    /// Emitting contract
    pub address: Address,
    /// Event name, `None` when the log matched no event of the interface
    pub event: Option<String>,
    /// Named event arguments, in declaration order
    pub args: Vec<(String, DynSolValue)>,
}

impl EventRecord {
    /// Value of the argument called `name`
    pub fn arg(&self, name: &str) -> Option<&DynSolValue> {
        self.args
            .iter()
            .find(|(arg_name, _)| arg_name == name)
            .map(|(_, value)| value)
    }
}

impl TxReceipt {
    /// First event called `name`
    pub fn find_event(&self, name: &str) -> Option<&EventRecord> {
        self.events
            .iter()
            .find(|event| event.event.as_deref() == Some(name))
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use super::*;

    fn record(event: Option<&str>, args: Vec<(&str, DynSolValue)>) -> EventRecord {
        EventRecord {
            address: Address::ZERO,
            event: event.map(String::from),
            args: args
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        }
    }

    #[test]
    fn finds_first_event_by_name() {
        let receipt = TxReceipt {
            events: vec![
                record(None, vec![]),
                record(
                    Some("Transfer"),
                    vec![("tokenId", DynSolValue::Uint(U256::from(1), 256))],
                ),
                record(
                    Some("Transfer"),
                    vec![("tokenId", DynSolValue::Uint(U256::from(2), 256))],
                ),
            ],
            ..Default::default()
        };

        let event = receipt.find_event("Transfer").unwrap();
        assert_eq!(
            event.arg("tokenId"),
            Some(&DynSolValue::Uint(U256::from(1), 256))
        );
        assert!(event.arg("amount").is_none());
        assert!(receipt.find_event("Approval").is_none());
    }
}

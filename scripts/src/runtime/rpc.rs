//! [`Runtime`] backed by an HTTP JSON-RPC endpoint and a local private key

use std::path::PathBuf;

use alloy::{
    network::TransactionBuilder,
    primitives::Address,
    rpc::types::eth::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use async_trait::async_trait;
use tracing::debug;

use crate::{
    config::NetworkConfig,
    constants::WALLET_NOT_FOUND_HINT,
    deploy::deploy_contract,
    errors::ScriptError,
    runtime::{
        artifacts::ContractArtifact, Contract, ContractFactory, DeployedContract, Runtime,
        TxOutcome,
    },
    tx::{
        abi::encode_call,
        client::{create_rpc_provider, parse_private_key, RpcProvider},
        sender::send_and_confirm,
    },
};

/// Runtime talking to a real node
pub struct RpcRuntime {
    /// Network the runtime is bound to
    network: NetworkConfig,
    /// Local signer, absent when no private key was configured
    signer: Option<PrivateKeySigner>,
    /// Where the compiled artifacts are looked up
    artifacts_dir: PathBuf,
}

impl RpcRuntime {
    /// Build the runtime, nothing is sent to the node yet
    pub fn new(
        network: NetworkConfig,
        private_key: Option<&str>,
        artifacts_dir: PathBuf,
    ) -> Result<Self, ScriptError> {
        let signer = private_key
            .filter(|key| !key.trim().is_empty())
            .map(parse_private_key)
            .transpose()?;

        Ok(RpcRuntime {
            network,
            signer,
            artifacts_dir,
        })
    }

    /// The signing client, requires a configured wallet
    fn client(&self) -> Result<(Address, RpcProvider), ScriptError> {
        let signer = self
            .signer
            .clone()
            .ok_or_else(|| ScriptError::WalletNotFound(String::from(WALLET_NOT_FOUND_HINT)))?;
        let address = signer.address();

        Ok((address, create_rpc_provider(&self.network.rpc_url, signer)?))
    }
}

#[async_trait]
impl Runtime for RpcRuntime {
    fn network_name(&self) -> &str {
        &self.network.name
    }

    async fn get_signers(&self) -> Result<Vec<Address>, ScriptError> {
        Ok(self.signer.iter().map(|signer| signer.address()).collect())
    }

    async fn get_contract_factory(
        &self,
        name: &str,
    ) -> Result<Box<dyn ContractFactory>, ScriptError> {
        let artifact = ContractArtifact::load(&self.artifacts_dir, name)?;
        let (deployer, client) = self.client()?;

        Ok(Box::new(RpcContractFactory {
            artifact,
            deployer,
            client,
        }))
    }

    async fn get_contract_at(
        &self,
        name: &str,
        address: Address,
    ) -> Result<Box<dyn Contract>, ScriptError> {
        let artifact = ContractArtifact::load(&self.artifacts_dir, name)?;
        let (sender, client) = self.client()?;
        debug!("Attached to {} at {}", name, address);

        Ok(Box::new(RpcContract {
            artifact,
            address,
            sender,
            client,
        }))
    }
}

/// Deploys one artifact from the configured signer
struct RpcContractFactory {
    /// Artifact being deployed
    artifact: ContractArtifact,
    /// Account paying for the deployment
    deployer: Address,
    /// Signing client
    client: RpcProvider,
}

#[async_trait]
impl ContractFactory for RpcContractFactory {
    async fn deploy(&self, args: &[String]) -> Result<DeployedContract, ScriptError> {
        deploy_contract(&self.artifact, args, self.deployer, &self.client).await
    }
}

/// A deployed contract seen through the interface of an artifact
struct RpcContract {
    /// Interface of the contract
    artifact: ContractArtifact,
    /// Address of the contract
    address: Address,
    /// Account sending the calls
    sender: Address,
    /// Signing client
    client: RpcProvider,
}

#[async_trait]
impl Contract for RpcContract {
    fn address(&self) -> Address {
        self.address
    }

    async fn send(&self, method: &str, args: &[String]) -> Result<TxOutcome, ScriptError> {
        let calldata = encode_call(&self.artifact.abi, method, args)?;

        // Build the tx
        let tx_request = TransactionRequest::default()
            .from(self.sender)
            .to(self.address)
            .with_input(calldata);

        send_and_confirm(
            &self.client,
            tx_request,
            &self.artifact.abi,
            method,
            ScriptError::ContractInteraction,
        )
        .await
    }
}

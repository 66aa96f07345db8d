use alloy::{
    network::TransactionBuilder,
    primitives::Address,
    providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use ethers::{types::H160, utils::get_contract_address};
use tracing::info;

use crate::{
    errors::ScriptError,
    runtime::{artifacts::ContractArtifact, DeployedContract, TxReceipt},
    tx::{abi::encode_deploy_data, client::RpcProvider, sender::send_and_confirm},
};

/// Deploy a compiled contract with the given constructor arguments
///
/// Waits for the creation transaction to be mined before returning.
pub async fn deploy_contract(
    artifact: &ContractArtifact,
    args: &[String],
    deployer: Address,
    client: &RpcProvider,
) -> Result<DeployedContract, ScriptError> {
    let deploy_data = encode_deploy_data(&artifact.abi, artifact.creation_code()?, args)?;

    // Predict the contract address
    let deployer_nonce = client
        .get_transaction_count(deployer)
        .await
        .map_err(|e| ScriptError::NonceFetching(e.to_string()))?;
    let predicted_address = predict_contract_address(deployer, deployer_nonce);
    info!(
        "Deploying {} from {}, expected at {}",
        artifact.name, deployer, predicted_address
    );

    let tx_request = TransactionRequest::default()
        .from(deployer)
        .with_deploy_code(deploy_data);
    let outcome = send_and_confirm(
        client,
        tx_request,
        &artifact.abi,
        "deploy",
        ScriptError::ContractDeployment,
    )
    .await?;

    let address = deployed_address(&outcome.receipt, predicted_address);

    Ok(DeployedContract {
        name: artifact.name.clone(),
        address,
        deploy_transaction: outcome,
    })
}

/// Address of the created contract
///
/// The receipt is authoritative, some nodes leave it empty though.
pub fn deployed_address(receipt: &TxReceipt, predicted: Address) -> Address {
    receipt.contract_address.unwrap_or(predicted)
}

/// Predict the address of a contract created by `deployer` at `nonce`
pub fn predict_contract_address(deployer: Address, nonce: u64) -> Address {
    let created = get_contract_address(H160::from_slice(deployer.as_slice()), nonce);
    Address::from_slice(created.as_bytes())
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    #[test]
    fn predicts_create_address() {
        let deployer = address!("6ac7ea33f8831ea9dcc53393aaa88b25a785dbf0");

        assert_eq!(
            predict_contract_address(deployer, 0),
            address!("cd234a471b72ba2f1ccf0a70fcaba648a5eecd8d")
        );
        for nonce in [1, 2, 127, 128, 1024] {
            assert_eq!(
                predict_contract_address(deployer, nonce),
                deployer.create(nonce)
            );
        }
    }

    #[test]
    fn receipt_address_wins_over_prediction() {
        let predicted = address!("cd234a471b72ba2f1ccf0a70fcaba648a5eecd8d");
        let created = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

        let receipt = TxReceipt {
            contract_address: Some(created),
            ..Default::default()
        };
        assert_eq!(deployed_address(&receipt, predicted), created);

        assert_eq!(deployed_address(&TxReceipt::default(), predicted), predicted);
    }
}

use alloy::{
    json_abi::JsonAbi,
    primitives::{Address, Log, TxHash},
    providers::Provider,
    rpc::types::eth::TransactionRequest,
};
use tracing::info;

use crate::{
    errors::ScriptError,
    runtime::{TxOutcome, TxReceipt},
    tx::{client::RpcProvider, events::decode_log},
};

/// Send a transaction, wait for it to be mined and decode its logs with `abi`
///
/// `label` names the transaction in the logs, `to_error` builds the error
/// variant of the calling operation. A reverted transaction is an error.
pub async fn send_and_confirm(
    client: &RpcProvider,
    tx_request: TransactionRequest,
    abi: &JsonAbi,
    label: &str,
    to_error: fn(String) -> ScriptError,
) -> Result<TxOutcome, ScriptError> {
    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| to_error(e.to_string()))?;
    let tx_hash = *pending_tx.tx_hash();
    info!("Pending {} transaction... {}", label, tx_hash);

    // Wait for the transaction to be included.
    let receipt = pending_tx
        .get_receipt()
        .await
        .map_err(|e| to_error(e.to_string()))?;

    let logs: Vec<Log> = receipt
        .inner
        .logs()
        .iter()
        .map(|log| log.inner.clone())
        .collect();
    let outcome = confirmed_outcome(
        tx_hash,
        receipt.inner.status(),
        receipt.block_number,
        receipt.contract_address,
        &logs,
        abi,
        to_error,
    )?;
    info!(
        "{} tx done on block: {}",
        label,
        outcome
            .receipt
            .block_number
            .map_or_else(|| String::from("unknown"), |b| b.to_string())
    );

    Ok(outcome)
}

/// Turn the fields of a mined receipt into a [`TxOutcome`]
///
/// A failed `status` means the transaction reverted and is reported through
/// `to_error`. Logs are decoded against `abi`.
pub fn confirmed_outcome(
    tx_hash: TxHash,
    status: bool,
    block_number: Option<u64>,
    contract_address: Option<Address>,
    logs: &[Log],
    abi: &JsonAbi,
    to_error: fn(String) -> ScriptError,
) -> Result<TxOutcome, ScriptError> {
    if !status {
        return Err(to_error(format!("transaction {} reverted", tx_hash)));
    }

    let events = logs
        .iter()
        .map(|log| decode_log(abi, log.address, &log.data))
        .collect();

    Ok(TxOutcome {
        hash: tx_hash,
        receipt: TxReceipt {
            block_number,
            contract_address,
            events,
        },
    })
}

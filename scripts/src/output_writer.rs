use std::io::Write;

use alloy::primitives::Address;
use json::JsonValue;

use crate::{constants::UNDEFINED_TOKEN_ID, errors::ScriptError, runtime::DeployedContract};

/// How a task reports its result
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Emoji prefixed lines
    Human,
    /// A single JSON object
    Json,
}

impl OutputFormat {
    /// Pick the format from the `--json` flag
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Result of a mint, as reported to the user
#[derive(Clone, Debug)]
pub struct MintReport {
    /// The contract argument, as given
    pub contract_address: String,
    /// Hash of the mint transaction
    pub transaction_hash: String,
    /// Account the tokens were minted to
    pub recipient: String,
    /// The token uri argument, echoed verbatim
    pub token_uri: Option<String>,
    /// Extracted token id
    pub token_id: Option<String>,
}

/// Write the outcome of a deployment
pub fn write_deploy_output<W: Write>(
    out: &mut W,
    format: OutputFormat,
    signer: Address,
    network: &str,
    contract: &DeployedContract,
) -> Result<(), ScriptError> {
    let text = match format {
        OutputFormat::Json => {
            let mut deploy_tx = JsonValue::new_object();
            deploy_tx["hash"] = contract.deploy_transaction.hash.to_string().into();
            deploy_tx["blockNumber"] = match contract.deploy_transaction.receipt.block_number {
                Some(block) => block.into(),
                None => JsonValue::Null,
            };

            let mut parsed_json = JsonValue::new_object();
            parsed_json["address"] = contract.address.to_string().into();
            parsed_json["contractName"] = contract.name.as_str().into();
            parsed_json["network"] = network.into();
            parsed_json["signer"] = signer.to_string().into();
            parsed_json["deployTransaction"] = deploy_tx;

            json::stringify(parsed_json)
        }
        OutputFormat::Human => format!(
            "🔑 Using account: {}\n\n🚀 Successfully deployed contract on {}.\n📜 Contract address: {}\n",
            signer, network, contract.address
        ),
    };

    writeln!(out, "{text}").map_err(|e| ScriptError::OutputError(e.to_string()))
}

/// Write the outcome of a mint
pub fn write_mint_output<W: Write>(
    out: &mut W,
    format: OutputFormat,
    report: &MintReport,
) -> Result<(), ScriptError> {
    let token_id = report.token_id.as_deref().unwrap_or(UNDEFINED_TOKEN_ID);

    let text = match format {
        OutputFormat::Json => {
            let mut parsed_json = JsonValue::new_object();
            parsed_json["contractAddress"] = report.contract_address.as_str().into();
            parsed_json["mintTransactionHash"] = report.transaction_hash.as_str().into();
            parsed_json["recipient"] = report.recipient.as_str().into();
            // Only echoed when passed
            if let Some(token_uri) = &report.token_uri {
                parsed_json["tokenURI"] = token_uri.as_str().into();
            }
            parsed_json["tokenId"] = token_id.into();

            json::stringify(parsed_json)
        }
        OutputFormat::Human => format!(
            "🚀 Successfully minted NFT.\n📜 Contract address: {}\n👤 Recipient: {}\n🆔 Token ID: {}\n🔗 Transaction hash: {}",
            report.contract_address, report.recipient, token_id, report.transaction_hash
        ),
    };

    writeln!(out, "{text}").map_err(|e| ScriptError::OutputError(e.to_string()))
}

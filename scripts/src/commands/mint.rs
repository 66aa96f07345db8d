use std::io::Write;

use alloy::primitives::Address;
use tracing::{info, warn};

use crate::{
    cli::MintArgs,
    constants::MINT_METHOD,
    errors::ScriptError,
    extractor::TokenIdExtractor,
    output_writer::{write_mint_output, MintReport, OutputFormat},
    runtime::Runtime,
};

use super::resolve_signer;

/// Mint `args.amount` to the recipient and report the minted token id
///
/// A receipt the extractor finds no token id in is still a success, unless
/// `args.require_token_id` is set.
pub async fn mint<W: Write>(
    args: &MintArgs,
    runtime: &dyn Runtime,
    extractor: &dyn TokenIdExtractor,
    out: &mut W,
) -> Result<MintReport, ScriptError> {
    let signer = resolve_signer(runtime).await?;

    let contract_address = args.contract.parse::<Address>().map_err(|e| {
        ScriptError::ContractInteraction(format!(
            "invalid contract address {}: {}",
            args.contract, e
        ))
    })?;
    let contract = runtime.get_contract_at(&args.name, contract_address).await?;

    let recipient = args.to.clone().unwrap_or_else(|| signer.to_string());
    info!("Minting {} to {} on {}", args.amount, recipient, contract.address());

    let outcome = contract
        .send(MINT_METHOD, &[recipient.clone(), args.amount.clone()])
        .await?;

    let token_id = extractor.extract(&outcome.receipt);
    match &token_id {
        Some(token_id) => info!("Minted token {} in {}", token_id, outcome.hash),
        None if args.require_token_id => {
            return Err(ScriptError::MissingTokenId(format!(
                "transaction {} emitted no token id",
                outcome.hash
            )))
        }
        None => warn!("No token id found in the receipt of {}", outcome.hash),
    }

    let report = MintReport {
        contract_address: args.contract.clone(),
        transaction_hash: outcome.hash.to_string(),
        recipient,
        token_uri: args.token_uri.clone(),
        token_id,
    };
    write_mint_output(out, OutputFormat::from_json_flag(args.json), &report)?;

    Ok(report)
}

#[cfg(test)]
mod tests {
    use alloy::{
        dyn_abi::DynSolValue,
        primitives::{address, U256},
    };

    use super::*;
    use crate::{
        commands::fake::{FakeRuntime, SIGNER},
        extractor::EventArgExtractor,
        runtime::EventRecord,
    };

    const CONTRACT: &str = "0xABC0000000000000000000000000000000000abc";

    fn args(json: bool) -> MintArgs {
        MintArgs {
            contract: String::from(CONTRACT),
            to: None,
            amount: String::from("5"),
            name: String::from("Universal"),
            token_uri: None,
            require_token_id: false,
            json,
        }
    }

    fn transfer(token_id: u64) -> EventRecord {
        EventRecord {
            address: address!("ABC0000000000000000000000000000000000abc"),
            event: Some(String::from("Transfer")),
            args: vec![
                (String::from("from"), DynSolValue::Address(Address::ZERO)),
                (String::from("to"), DynSolValue::Address(SIGNER)),
                (
                    String::from("tokenId"),
                    DynSolValue::Uint(U256::from(token_id), 256),
                ),
            ],
        }
    }

    async fn run(
        runtime: &FakeRuntime,
        args: &MintArgs,
    ) -> (Result<MintReport, ScriptError>, String) {
        let mut out = Vec::new();
        let res = mint(args, runtime, &EventArgExtractor::default(), &mut out).await;
        (res, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn no_wallet_fails_before_any_lookup() {
        let runtime = FakeRuntime::without_signer();

        let (res, out) = run(&runtime, &args(false)).await;

        let err = res.unwrap_err();
        assert!(matches!(err, ScriptError::WalletNotFound(_)));
        assert!(err.to_string().contains("PRIVATE_KEY"));
        assert_eq!(runtime.lookups(), 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn json_reports_transfer_token_id() {
        let runtime = FakeRuntime::new(vec![transfer(42)]);

        let (res, out) = run(&runtime, &args(true)).await;
        let report = res.unwrap();

        let parsed = json::parse(&out).unwrap();
        assert_eq!(parsed["tokenId"], "42");
        assert_eq!(parsed["contractAddress"], CONTRACT);
        assert_eq!(parsed["recipient"], SIGNER.to_string().as_str());
        assert_eq!(parsed["mintTransactionHash"], report.transaction_hash.as_str());
        assert!(!parsed.has_key("tokenURI"));

        assert_eq!(
            runtime.sent(),
            vec![(
                String::from("mint"),
                vec![SIGNER.to_string(), String::from("5")]
            )]
        );
    }

    #[tokio::test]
    async fn missing_transfer_prints_undefined() {
        let runtime = FakeRuntime::new(Vec::new());

        let (res, out) = run(&runtime, &args(false)).await;

        assert!(res.unwrap().token_id.is_none());
        assert!(out.starts_with("🚀 Successfully minted NFT.\n"));
        assert!(out.contains(&format!("📜 Contract address: {CONTRACT}\n")));
        assert!(out.contains(&format!("👤 Recipient: {SIGNER}\n")));
        assert!(out.contains("🆔 Token ID: undefined\n"));

        let (res, out) = run(&runtime, &args(true)).await;
        assert!(res.is_ok());
        assert_eq!(json::parse(&out).unwrap()["tokenId"], "undefined");
    }

    #[tokio::test]
    async fn strict_policy_rejects_missing_token_id() {
        let runtime = FakeRuntime::new(Vec::new());
        let strict = MintArgs {
            require_token_id: true,
            ..args(false)
        };

        let (res, out) = run(&runtime, &strict).await;

        assert!(matches!(res, Err(ScriptError::MissingTokenId(_))));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn explicit_recipient_and_token_uri_are_echoed() {
        let runtime = FakeRuntime::new(vec![transfer(7)]);
        let recipient = "0x9A676e781A523b5d0C0e43731313A708CB607508";
        let explicit = MintArgs {
            to: Some(String::from(recipient)),
            token_uri: Some(String::from("ipfs://token/7")),
            ..args(true)
        };

        let (res, out) = run(&runtime, &explicit).await;
        res.unwrap();

        let parsed = json::parse(&out).unwrap();
        assert_eq!(parsed["recipient"], recipient);
        assert_eq!(parsed["tokenURI"], "ipfs://token/7");
        assert_eq!(parsed["tokenId"], "7");
        assert_eq!(runtime.sent()[0].1[0], recipient);
    }

    #[tokio::test]
    async fn revert_propagates_and_bad_address_is_rejected() {
        let runtime = FakeRuntime {
            fail_with: Some(String::from("execution reverted")),
            ..FakeRuntime::new(Vec::new())
        };
        let (res, _) = run(&runtime, &args(false)).await;
        assert!(matches!(
            res,
            Err(ScriptError::ContractInteraction(ref m)) if m == "execution reverted"
        ));

        let runtime = FakeRuntime::new(Vec::new());
        let bad = MintArgs {
            contract: String::from("0xnope"),
            ..args(false)
        };
        let (res, _) = run(&runtime, &bad).await;
        assert!(matches!(res, Err(ScriptError::ContractInteraction(_))));
        assert_eq!(runtime.lookups(), 0);
    }

    #[tokio::test]
    async fn every_mint_is_a_new_transaction() {
        let runtime = FakeRuntime::new(vec![transfer(1)]);

        let (first, _) = run(&runtime, &args(true)).await;
        let (second, _) = run(&runtime, &args(true)).await;

        assert_ne!(
            first.unwrap().transaction_hash,
            second.unwrap().transaction_hash
        );
        assert_eq!(runtime.sent().len(), 2);
    }
}

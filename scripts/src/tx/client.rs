use alloy::{
    hex,
    network::{Ethereum, EthereumWallet},
    primitives::B256,
    providers::{
        fillers::{ChainIdFiller, FillProvider, GasFiller, JoinFill, NonceFiller, WalletFiller},
        Identity, ProviderBuilder, ReqwestProvider,
    },
    signers::local::PrivateKeySigner,
};
use reqwest::{Client, Url};
use tracing::debug;

use crate::errors::ScriptError;

/// Re-export from alloy recommend filter
type RecommendFiller =
    JoinFill<JoinFill<JoinFill<Identity, GasFiller>, NonceFiller>, ChainIdFiller>;

/// An alloy provider that uses a `PrivateKeySigner` to generate signatures
/// & interfaces with the RPC endpoint over HTTP
pub type RpcProvider = FillProvider<
    JoinFill<RecommendFiller, WalletFiller<EthereumWallet>>,
    ReqwestProvider,
    alloy::transports::http::Http<Client>,
    Ethereum,
>;

/// Build a signer from a hex encoded private key, with or without `0x`
pub fn parse_private_key(private_key: &str) -> Result<PrivateKeySigner, ScriptError> {
    let key_bytes = hex::decode(private_key.trim())
        .map_err(|e| ScriptError::ClientInitialization(format!("invalid private key: {}", e)))?;
    let private_key = B256::try_from(key_bytes.as_slice()).map_err(|_| {
        ScriptError::ClientInitialization(String::from("private key must be 32 bytes long"))
    })?;

    PrivateKeySigner::from_bytes(&private_key)
        .map_err(|e| ScriptError::ClientInitialization(e.to_string()))
}

/// Creates the provider with the rpc client + signer.
///
/// No request is sent here, the first RPC call happens when a transaction
/// is built.
pub fn create_rpc_provider(
    rpc_url: &str,
    signer: PrivateKeySigner,
) -> Result<RpcProvider, ScriptError> {
    let url = rpc_url
        .parse::<Url>()
        .map_err(|e| ScriptError::ClientInitialization(format!("invalid rpc url: {}", e)))?;

    debug!("Building client for {} with signer {}", url, signer.address());
    let wallet = EthereumWallet::from(signer);

    let provider = ProviderBuilder::new()
        .with_recommended_fillers()
        .wallet(wallet)
        .on_http(url);

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    // Well known first account of the local development node
    const DEV_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn parses_key_with_or_without_prefix() {
        let expected = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");

        assert_eq!(parse_private_key(DEV_KEY).unwrap().address(), expected);
        assert_eq!(
            parse_private_key(&format!("0x{DEV_KEY}")).unwrap().address(),
            expected
        );
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!(matches!(
            parse_private_key("0x1234"),
            Err(ScriptError::ClientInitialization(_))
        ));
        assert!(matches!(
            parse_private_key("not hex"),
            Err(ScriptError::ClientInitialization(_))
        ));
    }

    #[test]
    fn rejects_bad_rpc_url() {
        let signer = parse_private_key(DEV_KEY).unwrap();
        assert!(matches!(
            create_rpc_provider("not a url", signer),
            Err(ScriptError::ClientInitialization(_))
        ));
    }
}

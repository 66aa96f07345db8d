//! Constants used in the contract tasks

/// Network used when none is given
pub const DEFAULT_NETWORK: &str = "localhost";

/// Known networks and their public RPC endpoints
pub const KNOWN_NETWORKS: &[(&str, &str)] = &[
    ("localhost", "http://127.0.0.1:8545"),
    (
        "zeta_testnet",
        "https://zetachain-athens-evm.blockpi.network/v1/rpc/public",
    ),
    (
        "zeta_mainnet",
        "https://zetachain-evm.blockpi.network/v1/rpc/public",
    ),
];

/// Directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Contract deployed by the `deploy` task when no name is given
pub const DEFAULT_DEPLOY_CONTRACT: &str = "Swap";

/// Default system contract passed to the swap constructor
pub const DEFAULT_SYSTEM_CONTRACT: &str = "0xA51c1fc2f0D1a1b8494Ed1FE312d7C3a78Ed91C0";

/// Default gateway passed to the swap constructor
pub const DEFAULT_GATEWAY: &str = "0x9A676e781A523b5d0C0e43731313A708CB607508";

/// Contract interface used by the `mint` task when no name is given
pub const DEFAULT_MINT_CONTRACT: &str = "Universal";

/// Method invoked by the `mint` task
pub const MINT_METHOD: &str = "mint";

/// Event carrying the minted token id
pub const TRANSFER_EVENT: &str = "Transfer";

/// Argument of the transfer event holding the token id
pub const TOKEN_ID_ARG: &str = "tokenId";

/// Printed in place of a token id the receipt did not carry
pub const UNDEFINED_TOKEN_ID: &str = "undefined";

/// Remediation printed when no signer is configured
pub const WALLET_NOT_FOUND_HINT: &str = "Please, set the PRIVATE_KEY env variable (for example, in a .env file) or pass --private-key";

//! Resolution of the network the tasks run against

use crate::{constants::KNOWN_NETWORKS, errors::ScriptError};

/// A named network and the RPC endpoint used to reach it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Name reported in the task output
    pub name: String,
    /// HTTP RPC endpoint
    pub rpc_url: String,
}

impl NetworkConfig {
    /// Resolve `name` against the known networks, an explicit `rpc_url` wins
    pub fn resolve(name: &str, rpc_url: Option<&str>) -> Result<Self, ScriptError> {
        let rpc_url = match rpc_url {
            Some(url) => url.to_string(),
            None => KNOWN_NETWORKS
                .iter()
                .find(|(known, _)| *known == name)
                .map(|(_, url)| url.to_string())
                .ok_or_else(|| {
                    ScriptError::ClientInitialization(format!(
                        "unknown network {}, pass --rpc-url or use one of: {}",
                        name,
                        KNOWN_NETWORKS
                            .iter()
                            .map(|(known, _)| *known)
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                })?,
        };

        Ok(NetworkConfig {
            name: name.to_string(),
            rpc_url,
        })
    }
}

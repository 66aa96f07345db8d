//! Lookup of compiled contract artifacts by contract name

use std::{
    fs,
    path::{Path, PathBuf},
};

use alloy::{hex, json_abi::JsonAbi, primitives::Bytes};
use json::JsonValue;
use tracing::debug;

use crate::errors::ScriptError;

/// The ABI and creation code of a compiled contract
#[derive(Clone, Debug)]
pub struct ContractArtifact {
    /// Name the artifact was looked up with
    pub name: String,
    /// Interface of the contract
    pub abi: JsonAbi,
    /// Creation code, absent for interfaces and abstract contracts
    pub bytecode: Option<Bytes>,
}

impl ContractArtifact {
    /// Find and load the artifact of `name` below `artifacts_dir`
    pub fn load(artifacts_dir: &Path, name: &str) -> Result<Self, ScriptError> {
        let path = find_artifact(artifacts_dir, name)?.ok_or_else(|| {
            ScriptError::ArtifactNotFound(format!(
                "no artifact for {} in {}",
                name,
                artifacts_dir.display()
            ))
        })?;
        debug!("Loading artifact {}", path.display());

        let contents =
            fs::read_to_string(&path).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
        Self::parse(name, &contents)
    }

    /// Parse a Hardhat or Foundry artifact
    pub fn parse(name: &str, contents: &str) -> Result<Self, ScriptError> {
        let mut document: serde_json::Value = serde_json::from_str(contents)
            .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        let abi = match document.get_mut("abi").map(serde_json::Value::take) {
            Some(abi @ serde_json::Value::Array(_)) => serde_json::from_value::<JsonAbi>(abi)
                .map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?,
            _ => {
                return Err(ScriptError::ArtifactParsing(format!(
                    "artifact of {} has no abi",
                    name
                )))
            }
        };

        let parsed =
            json::parse(contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

        // Hardhat stores the code as a string, Foundry nests it under `object`
        let bytecode = match &parsed["bytecode"] {
            JsonValue::Object(_) => parse_bytecode(&parsed["bytecode"]["object"])?,
            value => parse_bytecode(value)?,
        };

        Ok(ContractArtifact {
            name: name.to_string(),
            abi,
            bytecode,
        })
    }

    /// The creation code, failing for artifacts that cannot be deployed
    pub fn creation_code(&self) -> Result<&Bytes, ScriptError> {
        self.bytecode.as_ref().ok_or_else(|| {
            ScriptError::ContractDeployment(format!(
                "artifact of {} has no bytecode, is it abstract or an interface?",
                self.name
            ))
        })
    }
}

/// Decode a hex bytecode field, empty code counts as absent
fn parse_bytecode(value: &JsonValue) -> Result<Option<Bytes>, ScriptError> {
    let Some(code) = value.as_str() else {
        return Ok(None);
    };
    let code = code.trim_start_matches("0x");
    if code.is_empty() {
        return Ok(None);
    }

    let bytes = hex::decode(code).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;
    Ok(Some(Bytes::from(bytes)))
}

/// Recursively search `dir` for `<name>.json`
fn find_artifact(dir: &Path, name: &str) -> Result<Option<PathBuf>, ScriptError> {
    let file_name = format!("{name}.json");
    let entries = fs::read_dir(dir).map_err(|e| {
        ScriptError::ArtifactNotFound(format!("cannot read {}: {}", dir.display(), e))
    })?;

    let mut sub_dirs = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| ScriptError::ArtifactNotFound(e.to_string()))?
            .path();
        if path.is_dir() {
            sub_dirs.push(path);
        } else if path.file_name().is_some_and(|f| f == file_name.as_str()) {
            return Ok(Some(path));
        }
    }

    // Keep the lookup stable across platforms
    sub_dirs.sort();
    for sub_dir in sub_dirs {
        if let Some(path) = find_artifact(&sub_dir, name)? {
            return Ok(Some(path));
        }
    }

    Ok(None)
}

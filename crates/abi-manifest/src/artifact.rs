//! Reading ABIs out of compiled contract artifacts.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::value::RawValue;
use tracing::debug;

use crate::error::ManifestError;
use crate::table::Abi;
use crate::CONTRACT_NAMES;

#[derive(Deserialize)]
struct Artifact {
    abi: Option<Box<RawValue>>,
}

/// Return the `abi` field of one artifact file as raw JSON text.
pub fn read_abi(path: &Path) -> Result<String, ManifestError> {
    let data = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let artifact: Artifact =
        serde_json::from_str(&data).map_err(|e| ManifestError::InvalidArtifact {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    match artifact.abi {
        Some(raw) => Ok(raw.get().to_string()),
        None => Err(ManifestError::InvalidArtifact {
            path: path.to_path_buf(),
            reason: "missing \"abi\" field".to_string(),
        }),
    }
}

/// Read every contract in [`CONTRACT_NAMES`] from `build_dir`.
///
/// Stops at the first artifact that is missing, malformed or whose ABI does
/// not parse as an ABI descriptor.
pub fn collect_abis(build_dir: &Path) -> Result<BTreeMap<String, String>, ManifestError> {
    let mut abis = BTreeMap::new();
    for name in CONTRACT_NAMES {
        let path = build_dir.join(format!("{}.json", name));
        let raw = read_abi(&path)?;
        Abi::parse(&raw).map_err(|source| ManifestError::InvalidAbi {
            name: name.to_string(),
            source,
        })?;
        debug!(contract = %name, bytes = raw.len(), "collected ABI");
        abis.insert(name.to_string(), raw);
    }
    Ok(abis)
}

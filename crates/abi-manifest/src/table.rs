//! Parsed ABI descriptors and the name-keyed table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ManifestError;

/// One input or output parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiParam {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,

    /// Only meaningful for event inputs
    #[serde(default)]
    pub indexed: bool,

    /// Tuple members
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<AbiParam>,
}

/// One ABI entry: function, event, constructor, fallback or receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiItem {
    #[serde(rename = "type", default = "default_item_kind")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default)]
    pub inputs: Vec<AbiParam>,

    #[serde(default)]
    pub outputs: Vec<AbiParam>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<String>,

    #[serde(default)]
    pub anonymous: bool,
}

fn default_item_kind() -> String {
    "function".to_string()
}

/// A contract's interface descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Abi {
    pub items: Vec<AbiItem>,
}

impl Abi {
    /// Parse a raw JSON ABI array.
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    fn named(&self, kind: &str, name: &str) -> Option<&AbiItem> {
        self.items
            .iter()
            .find(|item| item.kind == kind && item.name.as_deref() == Some(name))
    }

    pub fn function(&self, name: &str) -> Option<&AbiItem> {
        self.named("function", name)
    }

    pub fn event(&self, name: &str) -> Option<&AbiItem> {
        self.named("event", name)
    }

    pub fn functions(&self) -> impl Iterator<Item = &AbiItem> {
        self.items.iter().filter(|item| item.kind == "function")
    }
}

/// Contract name to parsed ABI.
#[derive(Debug, Clone, Default)]
pub struct AbiTable {
    abis: BTreeMap<String, Abi>,
}

impl AbiTable {
    /// Parse every `(name, raw_abi)` entry. One bad entry fails the whole table.
    pub fn from_entries(entries: &[(&str, &str)]) -> Result<Self, ManifestError> {
        let mut abis = BTreeMap::new();
        for (name, raw) in entries {
            let abi = Abi::parse(raw).map_err(|source| ManifestError::InvalidAbi {
                name: name.to_string(),
                source,
            })?;
            abis.insert(name.to_string(), abi);
        }
        Ok(Self { abis })
    }

    pub fn get(&self, name: &str) -> Option<&Abi> {
        self.abis.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.abis.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.abis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abis.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_ABI: &str = r#"[
        {"type":"function","name":"balanceOf","constant":true,
         "inputs":[{"name":"owner","type":"address"}],
         "outputs":[{"name":"","type":"uint256"}],
         "stateMutability":"view"},
        {"type":"event","name":"Transfer","anonymous":false,
         "inputs":[{"name":"from","type":"address","indexed":true},
                   {"name":"to","type":"address","indexed":true},
                   {"name":"value","type":"uint256","indexed":false}]},
        {"type":"constructor","inputs":[{"name":"test","type":"bool"}]}
    ]"#;

    #[test]
    fn test_parse_abi() {
        let abi = Abi::parse(TOKEN_ABI).unwrap();
        assert_eq!(abi.items.len(), 3);
        assert_eq!(abi.functions().count(), 1);

        let balance_of = abi.function("balanceOf").unwrap();
        assert_eq!(balance_of.inputs[0].kind, "address");
        assert_eq!(balance_of.state_mutability.as_deref(), Some("view"));

        let transfer = abi.event("Transfer").unwrap();
        assert!(transfer.inputs[0].indexed);
        assert!(!transfer.inputs[2].indexed);

        assert!(abi.function("Transfer").is_none());
    }

    #[test]
    fn test_missing_type_defaults_to_function() {
        let abi = Abi::parse(r#"[{"name":"owner","inputs":[],"outputs":[]}]"#).unwrap();
        assert!(abi.function("owner").is_some());
    }

    #[test]
    fn test_table_from_entries() {
        let table = AbiTable::from_entries(&[("Token", TOKEN_ABI), ("Empty", "[]")]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["Empty", "Token"]);
        assert!(table.get("Token").unwrap().event("Transfer").is_some());
        assert!(table.get("Registry").is_none());
    }

    #[test]
    fn test_table_rejects_bad_entry() {
        let err = AbiTable::from_entries(&[("Token", TOKEN_ABI), ("Broken", "{\"abi\":1}")])
            .unwrap_err();
        match err {
            ManifestError::InvalidAbi { name, .. } => assert_eq!(name, "Broken"),
            other => panic!("unexpected error: {}", other),
        }
    }
}

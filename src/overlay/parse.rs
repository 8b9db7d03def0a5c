//! Overlay document parsing.
//!
//! Decoding is all-or-nothing: keys are checked against the classification
//! table, then each value is type-checked on its own so the failure can
//! name the offending key, and only then is the whole view built.

use tracing::debug;

use super::error::ParseFailure;
use super::fields::{lookup, Visibility};
use super::view::OverlayView;

/// Parse raw document bytes.
pub fn parse_overlay(bytes: &[u8]) -> Result<OverlayView, ParseFailure> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParseFailure::Syntax {
        cause: format!("invalid UTF-8: {}", e),
    })?;
    parse_overlay_str(text)
}

/// Parse a TOML overlay document.
pub fn parse_overlay_str(text: &str) -> Result<OverlayView, ParseFailure> {
    let table: toml::Table = toml::from_str(text).map_err(|e| ParseFailure::Syntax {
        cause: e.message().to_string(),
    })?;

    // toml::Table iterates in sorted key order, so the reported key is stable.
    for (key, value) in &table {
        match lookup(key).map(|f| f.visibility) {
            None => {
                return Err(ParseFailure::UnknownField { field: key.clone() });
            }
            Some(Visibility::Suppressed) => {
                return Err(ParseFailure::SuppressedField { field: key.clone() });
            }
            Some(_) => check_value(key, value)?,
        }
    }

    let keys: Vec<&str> = table.keys().map(String::as_str).collect();
    debug!(fields = ?keys, "parsed configuration overlay");

    toml::Value::Table(table)
        .try_into::<OverlayView>()
        .map_err(|e| ParseFailure::Syntax {
            cause: e.message().to_string(),
        })
}

/// Type-check a single key by decoding it alone into an otherwise empty view.
fn check_value(key: &str, value: &toml::Value) -> Result<(), ParseFailure> {
    let mut single = toml::Table::new();
    single.insert(key.to_string(), value.clone());
    toml::Value::Table(single)
        .try_into::<OverlayView>()
        .map(|_| ())
        .map_err(|e| ParseFailure::InvalidValue {
            field: key.to_string(),
            cause: e.message().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_parse_single_field() {
        let view = parse_overlay_str("LightServ = 10\n").unwrap();
        assert_eq!(view.light_serv, Some(10));
        assert!(view.network_id.is_none());
        assert!(view.database_cache.is_none());
    }

    #[test]
    fn test_parse_empty_document() {
        let view = parse_overlay_str("").unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_explicit_zero_is_present() {
        let view = parse_overlay_str("NetworkId = 0\nDatabaseFreezer = \"\"\n").unwrap();
        assert_eq!(view.network_id, Some(0));
        assert_eq!(view.database_freezer, Some(String::new()));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = parse_overlay_str("NetworkID = 5\n").unwrap_err();
        assert_eq!(
            err,
            ParseFailure::UnknownField {
                field: "NetworkID".to_string()
            }
        );
    }

    #[test]
    fn test_suppressed_field_rejected() {
        let err = parse_overlay_str("NetworkId = 5\nDocRoot = \"/srv\"\n").unwrap_err();
        assert_eq!(
            err,
            ParseFailure::SuppressedField {
                field: "DocRoot".to_string()
            }
        );
    }

    #[test]
    fn test_wrong_type_names_field() {
        let err = parse_overlay_str("DatabaseCache = \"lots\"\n").unwrap_err();
        assert_eq!(err.field(), Some("DatabaseCache"));
        assert!(matches!(err, ParseFailure::InvalidValue { .. }));
    }

    #[test]
    fn test_negative_for_unsigned_rejected() {
        let err = parse_overlay_str("LightPeers = -1\n").unwrap_err();
        assert_eq!(err.field(), Some("LightPeers"));
    }

    #[test]
    fn test_nested_unknown_key_names_record() {
        let err = parse_overlay_str("[TxPool]\nPriceLimt = 1\n").unwrap_err();
        assert_eq!(err.field(), Some("TxPool"));
    }

    #[test]
    fn test_syntax_error() {
        let err = parse_overlay_str("NetworkId = \n").unwrap_err();
        assert!(matches!(err, ParseFailure::Syntax { .. }));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn test_invalid_utf8() {
        let err = parse_overlay(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ParseFailure::Syntax { .. }));
    }

    #[test]
    fn test_durations_and_acronym_keys() {
        let doc = r#"
TrieTimeout = "30m"
RPCGasCap = 50000000
EthDiscoveryURLs = ["enrtree://a@b"]
BLSbase = "0x1111111111111111111111111111111111111111"
"#;
        let view = parse_overlay_str(doc).unwrap();
        assert_eq!(view.trie_timeout, Some(Duration::from_secs(30 * 60)));
        assert_eq!(view.rpc_gas_cap, Some(50_000_000));
        assert_eq!(view.eth_discovery_urls, Some(vec!["enrtree://a@b".to_string()]));
        assert!(view.bls_base.is_some());
    }

    #[test]
    fn test_first_bad_key_wins_in_sorted_order() {
        let err = parse_overlay_str("Zebra = 1\nAardvark = 2\n").unwrap_err();
        assert_eq!(err.field(), Some("Aardvark"));
    }
}

//! Overlay document scenarios
//!
//! End-to-end checks of export, parse and apply against hand-written
//! documents, the way an operator would edit them.

use alloy_primitives::{Address, U256};
use ethconfig::config::{SyncMode, TxPoolConfig};
use ethconfig::overlay::fields::{document_fields, suppressed_fields};
use ethconfig::{apply_overlay, parse_overlay, parse_overlay_str, to_overlay_view, Config, ParseFailure};

fn base() -> Config {
    let mut cfg = Config::default();
    cfg.network_id = 1;
    cfg.light_serv = 0;
    cfg.database_cache = 512;
    cfg
}

// =============================================================================
// Export
// =============================================================================

#[test]
fn test_export_scenario() {
    let doc = to_overlay_view(&base()).to_toml_string().unwrap();
    let table: toml::Table = toml::from_str(&doc).unwrap();

    assert_eq!(table["NetworkId"].as_integer(), Some(1));
    assert_eq!(table["DatabaseCache"].as_integer(), Some(512));
    assert!(!table.contains_key("LightServ"));
}

#[test]
fn test_export_never_contains_suppressed() {
    let mut cfg = base();
    cfg.doc_root = "/srv/www".to_string();
    cfg.skip_bc_version_check = true;
    let doc = to_overlay_view(&cfg).to_toml_string().unwrap();

    for name in suppressed_fields() {
        assert!(!doc.contains(name), "{} present in:\n{}", name, doc);
    }
}

#[test]
fn test_exported_document_parses() {
    let doc = to_overlay_view(&base()).to_toml_string().unwrap();
    let view = parse_overlay_str(&doc).unwrap();
    assert_eq!(apply_overlay(&base(), &view), base());
}

// =============================================================================
// Parse + apply
// =============================================================================

#[test]
fn test_apply_scenario() {
    let view = parse_overlay(b"LightServ = 10\n").unwrap();
    let merged = apply_overlay(&base(), &view);

    assert_eq!(merged.network_id, 1);
    assert_eq!(merged.light_serv, 10);
    assert_eq!(merged.database_cache, 512);

    let mut expected = base();
    expected.light_serv = 10;
    assert_eq!(merged, expected);
}

#[test]
fn test_nested_atomic_replacement() {
    let mut cfg = base();
    cfg.tx_pool = TxPoolConfig {
        price_limit: 1,
        price_bump: 2,
        ..Default::default()
    };

    let view = parse_overlay_str("[TxPool]\nPriceLimit = 9\n").unwrap();
    let merged = apply_overlay(&cfg, &view);

    assert_eq!(merged.tx_pool.price_limit, 9);
    assert_eq!(merged.tx_pool.price_bump, 0);
}

#[test]
fn test_nested_record_from_defaults_is_replaced_whole() {
    let view = parse_overlay_str("[Istanbul]\nEpoch = 17280\n").unwrap();
    let merged = apply_overlay(&Config::default(), &view);

    assert_eq!(merged.istanbul.epoch, 17280);
    assert_eq!(merged.istanbul.request_timeout, 0);
    assert_eq!(merged.istanbul.replica_state_db_path, "");
}

#[test]
fn test_full_operator_document() {
    let doc = r#"
NetworkId = 44787
SyncMode = "lightest"
EthDiscoveryURLs = []
LightPeers = 50
GatewayFee = "0x2540be400"
Validator = "0x000000000000000000000000000000000000dead"
TrieCleanCacheRejournal = "30m"
OverrideEHardfork = "0x64"

[Miner]
GasFloor = 10000000
Recommit = "5s"

[CheckpointOracle]
Address = "0x9a0a5f1b2d3dc2f7e19d1b4a7b29a6e3f0d1a2b3"
Signers = ["0x000000000000000000000000000000000000dead"]
Threshold = 1
"#;
    let view = parse_overlay_str(doc).unwrap();
    let merged = apply_overlay(&Config::default(), &view);

    assert_eq!(merged.network_id, 44787);
    assert_eq!(merged.sync_mode, SyncMode::Lightest);
    assert!(merged.eth_discovery_urls.is_empty());
    assert_eq!(merged.light_peers, 50);
    assert_eq!(merged.gateway_fee, Some(U256::from(10_000_000_000u64)));
    assert_ne!(merged.validator, Address::ZERO);
    assert_eq!(merged.trie_clean_cache_rejournal.as_secs(), 1800);
    assert_eq!(merged.override_e_hardfork, Some(U256::from(100u64)));
    assert_eq!(merged.miner.gas_floor, 10_000_000);
    assert_eq!(merged.miner.gas_ceil, 0);
    assert_eq!(merged.checkpoint_oracle.as_ref().map(|o| o.threshold), Some(1));

    // Untouched
    assert_eq!(merged.database_cache, Config::default().database_cache);
    assert_eq!(merged.tx_pool, Config::default().tx_pool);
}

// =============================================================================
// Rejections
// =============================================================================

#[test]
fn test_every_suppressed_field_rejected() {
    let values = [
        ("Whitelist", "{}"),
        ("SkipBcVersionCheck", "true"),
        ("DatabaseHandles", "1024"),
        ("DocRoot", "\"/srv\""),
    ];
    for (name, value) in values {
        let doc = format!("{} = {}\n", name, value);
        let err = parse_overlay_str(&doc).unwrap_err();
        assert_eq!(
            err,
            ParseFailure::SuppressedField {
                field: name.to_string()
            }
        );
    }
}

#[test]
fn test_unknown_key_rejected() {
    let err = parse_overlay_str("NetworkId = 1\nLightServe = 10\n").unwrap_err();
    assert_eq!(err.field(), Some("LightServe"));
    assert!(matches!(err, ParseFailure::UnknownField { .. }));
}

#[test]
fn test_wrong_case_rejected() {
    let err = parse_overlay_str("networkid = 1\n").unwrap_err();
    assert!(matches!(err, ParseFailure::UnknownField { .. }));
}

#[test]
fn test_bad_address_names_field() {
    let err = parse_overlay_str("TxFeeRecipient = \"0x1234\"\n").unwrap_err();
    assert_eq!(err.field(), Some("TxFeeRecipient"));
}

#[test]
fn test_bad_sync_mode_names_field() {
    let err = parse_overlay_str("SyncMode = \"snap\"\n").unwrap_err();
    assert_eq!(err.field(), Some("SyncMode"));
}

#[test]
fn test_bad_duration_names_field() {
    let err = parse_overlay_str("TrieTimeout = \"soon\"\n").unwrap_err();
    assert_eq!(err.field(), Some("TrieTimeout"));
}

#[test]
fn test_failure_is_atomic() {
    // A valid key alongside a bad one yields no view at all.
    let result = parse_overlay_str("LightServ = 10\nDatabaseCache = true\n");
    assert!(result.is_err());
}

#[test]
fn test_every_document_field_accepted_by_name() {
    // Round-trip a fully exported config to make sure the decoder accepts
    // every name the encoder can emit.
    let mut cfg = Config::default();
    cfg.light_serv = 1;
    cfg.light_ingress = 1;
    cfg.light_egress = 1;
    cfg.light_no_prune = true;
    cfg.light_no_sync_serve = true;
    cfg.sync_from_checkpoint = true;
    cfg.gateway_fee = Some(U256::from(1u64));
    cfg.validator = Address::repeat_byte(1);
    cfg.tx_fee_recipient = Address::repeat_byte(2);
    cfg.bls_base = Address::repeat_byte(3);
    cfg.ultra_light_servers = vec!["enode://x@127.0.0.1:30303".to_string()];
    cfg.ultra_light_only_announce = true;
    cfg.genesis = Some(Default::default());
    cfg.checkpoint = Some(Default::default());
    cfg.checkpoint_oracle = Some(Default::default());
    cfg.override_e_hardfork = Some(U256::from(1u64));
    cfg.override_v2_istanbul_fork = Some(U256::from(2u64));

    let doc = to_overlay_view(&cfg).to_toml_string().unwrap();
    let table: toml::Table = toml::from_str(&doc).unwrap();
    assert_eq!(table.len(), document_fields().count());

    let view = parse_overlay_str(&doc).unwrap();
    assert_eq!(apply_overlay(&Config::default(), &view), cfg);
}

#[test]
fn test_quantity_fields_accept_plain_integers() {
    let view = parse_overlay_str("GatewayFee = 10000\nOverrideEHardfork = 100\n").unwrap();
    let merged = apply_overlay(&Config::default(), &view);
    assert_eq!(merged.gateway_fee, Some(U256::from(10_000u64)));
    assert_eq!(merged.override_e_hardfork, Some(U256::from(100u64)));

    let err = parse_overlay_str("OverrideEHardfork = -5\n").unwrap_err();
    assert_eq!(err.field(), Some("OverrideEHardfork"));
}

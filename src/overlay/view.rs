//! Sparse, serializable projection of [`Config`].

use std::time::Duration;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use super::fields::project_field;
use crate::config::{
    CheckpointOracleConfig, Config, ConfigError, Genesis, IstanbulConfig, MinerConfig, SyncMode,
    TrustedCheckpoint, TxPoolConfig,
};

/// Every document-visible [`Config`] field wrapped as present-or-absent.
///
/// `None` means "leave the base value alone"; `Some(0)` means "set to 0".
/// Suppressed fields have no slot. Nested records are single slots and are
/// replaced whole.
///
/// `U256` slots (`GatewayFee`, the fork overrides) are written as `0x` hex
/// strings and accept plain integers or decimal strings on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "PascalCase")]
pub struct OverlayView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genesis: Option<Genesis>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_mode: Option<SyncMode>,

    #[serde(rename = "EthDiscoveryURLs", skip_serializing_if = "Option::is_none")]
    pub eth_discovery_urls: Option<Vec<String>>,

    #[serde(rename = "SnapDiscoveryURLs", skip_serializing_if = "Option::is_none")]
    pub snap_discovery_urls: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_pruning: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_prefetch: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_lookup_limit: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_serv: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_ingress: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_egress: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_peers: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_no_prune: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_no_sync_serve: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_from_checkpoint: Option<bool>,

    #[serde(deserialize_with = "quantity::deserialize", skip_serializing_if = "Option::is_none")]
    pub gateway_fee: Option<U256>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_fee_recipient: Option<Address>,

    #[serde(rename = "BLSbase", skip_serializing_if = "Option::is_none")]
    pub bls_base: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultra_light_servers: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultra_light_fraction: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ultra_light_only_announce: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_cache: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_freezer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trie_clean_cache: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trie_clean_cache_journal: Option<String>,

    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub trie_clean_cache_rejournal: Option<Duration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trie_dirty_cache: Option<u64>,

    #[serde(with = "humantime_serde", skip_serializing_if = "Option::is_none")]
    pub trie_timeout: Option<Duration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_cache: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preimages: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub miner: Option<MinerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_pool: Option<TxPoolConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_preimage_recording: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub istanbul: Option<IstanbulConfig>,

    #[serde(rename = "RPCGasInflationRate", skip_serializing_if = "Option::is_none")]
    pub rpc_gas_inflation_rate: Option<f64>,

    #[serde(rename = "RPCGasCap", skip_serializing_if = "Option::is_none")]
    pub rpc_gas_cap: Option<u64>,

    #[serde(rename = "RPCTxFeeCap", skip_serializing_if = "Option::is_none")]
    pub rpc_tx_fee_cap: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint: Option<TrustedCheckpoint>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint_oracle: Option<CheckpointOracleConfig>,

    #[serde(deserialize_with = "quantity::deserialize", skip_serializing_if = "Option::is_none")]
    pub override_e_hardfork: Option<U256>,

    #[serde(deserialize_with = "quantity::deserialize", skip_serializing_if = "Option::is_none")]
    pub override_v2_istanbul_fork: Option<U256>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sync_peers: Option<u32>,
}

impl OverlayView {
    /// Project a configuration, honoring each field's visibility.
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            // Nullable fields: the slot is present only when the value is.
            genesis: project_field!("Genesis", &cfg.genesis).flatten(),
            network_id: project_field!("NetworkId", &cfg.network_id),
            sync_mode: project_field!("SyncMode", &cfg.sync_mode),
            eth_discovery_urls: project_field!("EthDiscoveryURLs", &cfg.eth_discovery_urls),
            snap_discovery_urls: project_field!("SnapDiscoveryURLs", &cfg.snap_discovery_urls),
            no_pruning: project_field!("NoPruning", &cfg.no_pruning),
            no_prefetch: project_field!("NoPrefetch", &cfg.no_prefetch),
            tx_lookup_limit: project_field!("TxLookupLimit", &cfg.tx_lookup_limit),
            light_serv: project_field!("LightServ", &cfg.light_serv),
            light_ingress: project_field!("LightIngress", &cfg.light_ingress),
            light_egress: project_field!("LightEgress", &cfg.light_egress),
            light_peers: project_field!("LightPeers", &cfg.light_peers),
            light_no_prune: project_field!("LightNoPrune", &cfg.light_no_prune),
            light_no_sync_serve: project_field!("LightNoSyncServe", &cfg.light_no_sync_serve),
            sync_from_checkpoint: project_field!("SyncFromCheckpoint", &cfg.sync_from_checkpoint),
            gateway_fee: project_field!("GatewayFee", &cfg.gateway_fee).flatten(),
            validator: project_field!("Validator", &cfg.validator),
            tx_fee_recipient: project_field!("TxFeeRecipient", &cfg.tx_fee_recipient),
            bls_base: project_field!("BLSbase", &cfg.bls_base),
            ultra_light_servers: project_field!("UltraLightServers", &cfg.ultra_light_servers),
            ultra_light_fraction: project_field!("UltraLightFraction", &cfg.ultra_light_fraction),
            ultra_light_only_announce: project_field!(
                "UltraLightOnlyAnnounce",
                &cfg.ultra_light_only_announce,
            ),
            database_cache: project_field!("DatabaseCache", &cfg.database_cache),
            database_freezer: project_field!("DatabaseFreezer", &cfg.database_freezer),
            trie_clean_cache: project_field!("TrieCleanCache", &cfg.trie_clean_cache),
            trie_clean_cache_journal: project_field!(
                "TrieCleanCacheJournal",
                &cfg.trie_clean_cache_journal,
            ),
            trie_clean_cache_rejournal: project_field!(
                "TrieCleanCacheRejournal",
                &cfg.trie_clean_cache_rejournal,
            ),
            trie_dirty_cache: project_field!("TrieDirtyCache", &cfg.trie_dirty_cache),
            trie_timeout: project_field!("TrieTimeout", &cfg.trie_timeout),
            snapshot_cache: project_field!("SnapshotCache", &cfg.snapshot_cache),
            preimages: project_field!("Preimages", &cfg.preimages),
            miner: project_field!("Miner", &cfg.miner),
            tx_pool: project_field!("TxPool", &cfg.tx_pool),
            enable_preimage_recording: project_field!(
                "EnablePreimageRecording",
                &cfg.enable_preimage_recording,
            ),
            istanbul: project_field!("Istanbul", &cfg.istanbul),
            rpc_gas_inflation_rate: project_field!("RPCGasInflationRate", &cfg.rpc_gas_inflation_rate),
            rpc_gas_cap: project_field!("RPCGasCap", &cfg.rpc_gas_cap),
            rpc_tx_fee_cap: project_field!("RPCTxFeeCap", &cfg.rpc_tx_fee_cap),
            checkpoint: project_field!("Checkpoint", &cfg.checkpoint).flatten(),
            checkpoint_oracle: project_field!("CheckpointOracle", &cfg.checkpoint_oracle).flatten(),
            override_e_hardfork: project_field!("OverrideEHardfork", &cfg.override_e_hardfork).flatten(),
            override_v2_istanbul_fork: project_field!(
                "OverrideV2IstanbulFork",
                &cfg.override_v2_istanbul_fork,
            )
            .flatten(),
            min_sync_peers: project_field!("MinSyncPeers", &cfg.min_sync_peers),
        }
    }

    /// True when no slot is present.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Render as a TOML overlay document. Absent slots are omitted.
    ///
    /// TOML integers are signed 64-bit, so a `u64` value above `i64::MAX`
    /// anywhere in the view (e.g. `RPCGasCap`, `Miner.GasCeil`) cannot be
    /// written and yields [`ConfigError::Serialize`].
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| {
            ConfigError::Serialize(format!(
                "{} (document integers are limited to {})",
                e,
                i64::MAX
            ))
        })
    }
}

/// `U256` input as a TOML integer, a decimal string or a `0x` hex string.
mod quantity {
    use std::fmt;
    use std::str::FromStr;

    use alloy_primitives::U256;
    use serde::de::{self, Deserializer, Unexpected, Visitor};

    struct QuantityVisitor;

    impl<'de> Visitor<'de> for QuantityVisitor {
        type Value = U256;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative integer, decimal string or 0x-prefixed hex string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<U256, E> {
            Ok(U256::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<U256, E> {
            u64::try_from(v)
                .map(U256::from)
                .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<U256, E> {
            U256::from_str(v).map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<U256>, D::Error> {
        d.deserialize_any(QuantityVisitor).map(Some)
    }
}

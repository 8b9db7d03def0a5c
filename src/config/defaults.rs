//! Built-in node defaults (layer 1)
//!
//! Hardcoded defaults for every configuration value. Nested records get
//! explicit values here because their own `Default` is all-zero.

use std::collections::BTreeMap;
use std::time::Duration;

use alloy_primitives::{Address, Bytes};

use super::types::{IstanbulConfig, MinerConfig, SyncMode, TxPoolConfig};
use super::Config;

/// Mainnet network ID
pub const DEFAULT_NETWORK_ID: u64 = 1;

impl Default for Config {
    fn default() -> Self {
        Self {
            genesis: None,
            network_id: DEFAULT_NETWORK_ID,
            sync_mode: SyncMode::Fast,
            eth_discovery_urls: Vec::new(),
            snap_discovery_urls: Vec::new(),
            no_pruning: false,
            no_prefetch: false,
            tx_lookup_limit: 2_350_000, // about one year of blocks
            whitelist: BTreeMap::new(),
            light_serv: 0,
            light_ingress: 0,
            light_egress: 0,
            light_peers: 100,
            light_no_prune: false,
            light_no_sync_serve: false,
            sync_from_checkpoint: false,
            gateway_fee: None,
            validator: Address::ZERO,
            tx_fee_recipient: Address::ZERO,
            bls_base: Address::ZERO,
            ultra_light_servers: Vec::new(),
            ultra_light_fraction: 75,
            ultra_light_only_announce: false,
            skip_bc_version_check: false,
            database_handles: 512,
            database_cache: 768,
            database_freezer: String::new(),
            trie_clean_cache: 256,
            trie_clean_cache_journal: "triecache".to_string(),
            trie_clean_cache_rejournal: Duration::from_secs(60 * 60),
            trie_dirty_cache: 256,
            trie_timeout: Duration::from_secs(60 * 60),
            snapshot_cache: 102,
            preimages: false,
            miner: default_miner(),
            tx_pool: default_tx_pool(),
            enable_preimage_recording: false,
            istanbul: default_istanbul(),
            doc_root: String::new(),
            rpc_gas_inflation_rate: 1.0,
            rpc_gas_cap: 25_000_000,
            rpc_tx_fee_cap: 500.0,
            checkpoint: None,
            checkpoint_oracle: None,
            override_e_hardfork: None,
            override_v2_istanbul_fork: None,
            min_sync_peers: 5,
        }
    }
}

fn default_miner() -> MinerConfig {
    MinerConfig {
        validator: Address::ZERO,
        tx_fee_recipient: Address::ZERO,
        extra_data: Bytes::new(),
        gas_floor: 8_000_000,
        gas_ceil: 8_000_000,
        recommit: Duration::from_secs(3),
        noverify: false,
    }
}

fn default_tx_pool() -> TxPoolConfig {
    TxPoolConfig {
        locals: Vec::new(),
        no_locals: false,
        journal: "transactions.rlp".to_string(),
        rejournal: Duration::from_secs(60 * 60),
        price_limit: 0,
        price_bump: 10,
        account_slots: 16,
        global_slots: 4096,
        account_queue: 64,
        global_queue: 1024,
        lifetime: Duration::from_secs(3 * 60 * 60),
    }
}

fn default_istanbul() -> IstanbulConfig {
    IstanbulConfig {
        request_timeout: 3000,
        timeout_backoff_factor: 1000,
        min_resend_round_change_timeout: 15 * 1000,
        max_resend_round_change_timeout: 2 * 60 * 1000,
        block_period: 5,
        proposer_policy: 2, // sticky
        epoch: 30_000,
        lookback_window: 12,
        replica_state_db_path: "replicastate".to_string(),
        validator_enode_db_path: "validatorenodes".to_string(),
        version_certificate_db_path: "versioncertificates".to_string(),
        round_state_db_path: "roundstate".to_string(),
        proxy: false,
        proxied: false,
    }
}

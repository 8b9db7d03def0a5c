//! Node configuration
//!
//! [`Config`] is the fully-populated settings record the node runs with.
//! It is built from the built-in defaults and then folded with zero or more
//! overlay documents:
//! 1. Built-in defaults (`Config::default()`)
//! 2. Overlay files, in the order given
//!
//! Overlay handling itself lives in [`crate::overlay`].

mod defaults;
mod effective;
mod types;

use std::collections::BTreeMap;
use std::time::Duration;

use alloy_primitives::{Address, B256, U256};

pub use effective::{ConfigError, ConfigOrigin, ConfigSource, EffectiveConfig};
pub use types::{
    CheckpointOracleConfig, Genesis, IstanbulConfig, MinerConfig, SyncMode, TrustedCheckpoint,
    TxPoolConfig,
};

/// Full node configuration.
///
/// Zero values here are real settings: `light_serv = 0` disables serving
/// light clients, it does not mean "unset". Use
/// [`OverlayView`](crate::overlay::OverlayView) to express partial updates.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Genesis block to initialise an empty database with (None = network default)
    pub genesis: Option<Genesis>,

    /// Network ID advertised in the protocol handshake
    pub network_id: u64,

    /// Chain synchronisation strategy
    pub sync_mode: SyncMode,

    /// DNS discovery URLs for eth peers
    pub eth_discovery_urls: Vec<String>,

    /// DNS discovery URLs for snap peers
    pub snap_discovery_urls: Vec<String>,

    /// Keep every historical state (archive mode)
    pub no_pruning: bool,

    /// Disable prefetching of state during block import
    pub no_prefetch: bool,

    /// Maximum number of recent blocks to keep a transaction index for (0 = all)
    pub tx_lookup_limit: u64,

    /// Required block hashes by number for peer filtering; never set from documents
    pub whitelist: BTreeMap<u64, B256>,

    /// Percentage of time allowed for serving light client requests
    pub light_serv: u32,

    /// Incoming bandwidth limit for light servers, in kilobytes/s
    pub light_ingress: u32,

    /// Outgoing bandwidth limit for light servers, in kilobytes/s
    pub light_egress: u32,

    /// Maximum number of light client peers
    pub light_peers: u32,

    /// Disable ancient data pruning in light client mode
    pub light_no_prune: bool,

    /// Do not serve light clients before the node is synced
    pub light_no_sync_serve: bool,

    /// Sync light clients from the configured checkpoint
    pub sync_from_checkpoint: bool,

    /// Fee a light server charges for relaying transactions
    pub gateway_fee: Option<U256>,

    /// Validator account (BFT signer)
    pub validator: Address,

    /// Recipient of transaction fees for blocks this node produces
    pub tx_fee_recipient: Address,

    /// Account holding the BLS signing key
    pub bls_base: Address,

    /// Trusted ultra-light servers
    pub ultra_light_servers: Vec<String>,

    /// Percentage of trusted servers required to accept an announcement
    pub ultra_light_fraction: u32,

    /// Only accept announcements, never request headers
    pub ultra_light_only_announce: bool,

    /// Skip the blockchain version check at startup; in-memory only
    pub skip_bc_version_check: bool,

    /// Number of file handles granted to the database; computed at runtime
    pub database_handles: u32,

    /// Database cache size in megabytes
    pub database_cache: u64,

    /// Ancient data directory (empty = inside chaindata)
    pub database_freezer: String,

    /// Trie clean cache size in megabytes
    pub trie_clean_cache: u64,

    /// Disk journal for the trie clean cache
    pub trie_clean_cache_journal: String,

    /// Interval at which the clean cache journal is rewritten
    pub trie_clean_cache_rejournal: Duration,

    /// Trie dirty cache size in megabytes
    pub trie_dirty_cache: u64,

    /// Time after which in-memory tries are flushed
    pub trie_timeout: Duration,

    /// Snapshot cache size in megabytes
    pub snapshot_cache: u64,

    /// Keep trie node preimages
    pub preimages: bool,

    /// Block production policy
    pub miner: MinerConfig,

    /// Transaction pool policy
    pub tx_pool: TxPoolConfig,

    /// Record SHA3 preimages in the EVM
    pub enable_preimage_recording: bool,

    /// Istanbul BFT policy
    pub istanbul: IstanbulConfig,

    /// Miscellaneous document root for the legacy HTTP file server; in-memory only
    pub doc_root: String,

    /// Multiplier applied to gas estimates in RPC calls
    pub rpc_gas_inflation_rate: f64,

    /// Gas cap for eth_call and eth_estimateGas (0 = no cap)
    pub rpc_gas_cap: u64,

    /// Transaction fee cap for send-transaction RPCs, in whole tokens (0 = no cap)
    pub rpc_tx_fee_cap: f64,

    /// Hard-coded checkpoint (None = use the network's built-in one)
    pub checkpoint: Option<TrustedCheckpoint>,

    /// Checkpoint oracle contract (None = network default)
    pub checkpoint_oracle: Option<CheckpointOracleConfig>,

    /// Override for the E hardfork activation block
    pub override_e_hardfork: Option<U256>,

    /// Override for the V2 Istanbul fork activation block
    pub override_v2_istanbul_fork: Option<U256>,

    /// Minimum number of peers before sync starts
    pub min_sync_peers: u32,
}

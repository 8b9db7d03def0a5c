//! Nested sub-configurations carried by [`Config`](super::Config).
//!
//! Each record's `Default` is its zero value: every integer 0, every string
//! empty, every address zero. The node's opinionated values live in
//! `defaults.rs`. Overlay documents replace these records as a whole, so a
//! key left out of a `[TxPool]` table ends up zeroed rather than inherited.

use std::time::Duration;

use alloy_primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};

/// Chain synchronisation strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Download and execute every block.
    #[default]
    Full,
    /// Download state at a pivot block, execute from there on.
    Fast,
    /// Headers only, state on demand from light servers.
    Light,
    /// Epoch headers only.
    Lightest,
}

/// Block production policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "PascalCase")]
pub struct MinerConfig {
    /// Validator account that signs blocks
    pub validator: Address,

    /// Recipient of transaction fees
    pub tx_fee_recipient: Address,

    /// Block extra-data set by the miner
    pub extra_data: Bytes,

    /// Target gas floor for mined blocks
    pub gas_floor: u64,

    /// Target gas ceiling for mined blocks
    pub gas_ceil: u64,

    /// Time interval to recreate the block being mined
    #[serde(with = "humantime_serde")]
    pub recommit: Duration,

    /// Disable remote sealing verification
    pub noverify: bool,
}

/// Transaction pool policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "PascalCase")]
pub struct TxPoolConfig {
    /// Addresses treated as local by default
    pub locals: Vec<Address>,

    /// Disable local transaction handling
    pub no_locals: bool,

    /// Journal of local transactions to survive node restarts
    pub journal: String,

    /// Time interval to regenerate the local transaction journal
    #[serde(with = "humantime_serde")]
    pub rejournal: Duration,

    /// Minimum gas price to enforce for acceptance into the pool
    pub price_limit: u64,

    /// Minimum price bump percentage to replace an already existing transaction
    pub price_bump: u64,

    /// Executable transaction slots guaranteed per account
    pub account_slots: u64,

    /// Maximum executable transaction slots for all accounts
    pub global_slots: u64,

    /// Non-executable transaction slots permitted per account
    pub account_queue: u64,

    /// Maximum non-executable transaction slots for all accounts
    pub global_queue: u64,

    /// Maximum time non-executable transactions are queued
    #[serde(with = "humantime_serde")]
    pub lifetime: Duration,
}

/// Istanbul BFT consensus policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "PascalCase")]
pub struct IstanbulConfig {
    /// Round-change timeout base in milliseconds
    pub request_timeout: u64,

    /// Backoff factor applied per round, in milliseconds
    pub timeout_backoff_factor: u64,

    /// Minimum interval between round-change resends, in milliseconds
    pub min_resend_round_change_timeout: u64,

    /// Maximum interval between round-change resends, in milliseconds
    pub max_resend_round_change_timeout: u64,

    /// Default minimum difference between two consecutive blocks' timestamps, in seconds
    pub block_period: u64,

    /// Proposer selection policy identifier
    pub proposer_policy: u64,

    /// Number of blocks per validator-set epoch
    pub epoch: u64,

    /// Window of blocks used for uptime scoring
    pub lookback_window: u64,

    #[serde(rename = "ReplicaStateDBPath")]
    pub replica_state_db_path: String,

    #[serde(rename = "ValidatorEnodeDBPath")]
    pub validator_enode_db_path: String,

    #[serde(rename = "VersionCertificateDBPath")]
    pub version_certificate_db_path: String,

    #[serde(rename = "RoundStateDBPath")]
    pub round_state_db_path: String,

    /// Run as a proxy in front of a validator
    pub proxy: bool,

    /// Run as a validator behind one or more proxies
    pub proxied: bool,
}

/// Genesis block specification used to initialise an empty database.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "PascalCase")]
pub struct Genesis {
    pub chain_id: u64,
    pub nonce: u64,
    pub timestamp: u64,
    pub extra_data: Bytes,
    pub gas_limit: u64,
    pub coinbase: Address,
    pub parent_hash: B256,
}

/// Hard-coded checkpoint used to bootstrap light and fast sync.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "PascalCase")]
pub struct TrustedCheckpoint {
    pub section_index: u64,
    pub section_head: B256,
    #[serde(rename = "CHTRoot")]
    pub cht_root: B256,
    pub bloom_root: B256,
}

/// On-chain checkpoint oracle contract and its signer set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "PascalCase")]
pub struct CheckpointOracleConfig {
    pub address: Address,
    pub signers: Vec<Address>,
    pub threshold: u64,
}

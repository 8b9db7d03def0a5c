//! Overlay merge logic
//!
//! Merge semantics:
//! - Present slot: replaces the base value wholesale
//! - Nested records: REPLACE (no per-field merge; missing inner keys are zero)
//! - Absent slot: base value kept

use tracing::trace;

use super::view::OverlayView;
use crate::config::Config;

/// Fold an overlay onto a copy of `base`.
pub fn apply_overlay(base: &Config, overlay: &OverlayView) -> Config {
    let mut cfg = base.clone();
    overlay.clone().apply_to(&mut cfg);
    cfg
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn set_nullable<T>(slot: &mut Option<T>, value: Option<T>) {
    if value.is_some() {
        *slot = value;
    }
}

impl OverlayView {
    /// Fold this overlay onto `cfg` in place.
    pub fn apply_to(self, cfg: &mut Config) {
        trace!("applying configuration overlay");

        set_nullable(&mut cfg.genesis, self.genesis);
        set(&mut cfg.network_id, self.network_id);
        set(&mut cfg.sync_mode, self.sync_mode);
        set(&mut cfg.eth_discovery_urls, self.eth_discovery_urls);
        set(&mut cfg.snap_discovery_urls, self.snap_discovery_urls);
        set(&mut cfg.no_pruning, self.no_pruning);
        set(&mut cfg.no_prefetch, self.no_prefetch);
        set(&mut cfg.tx_lookup_limit, self.tx_lookup_limit);
        set(&mut cfg.light_serv, self.light_serv);
        set(&mut cfg.light_ingress, self.light_ingress);
        set(&mut cfg.light_egress, self.light_egress);
        set(&mut cfg.light_peers, self.light_peers);
        set(&mut cfg.light_no_prune, self.light_no_prune);
        set(&mut cfg.light_no_sync_serve, self.light_no_sync_serve);
        set(&mut cfg.sync_from_checkpoint, self.sync_from_checkpoint);
        set_nullable(&mut cfg.gateway_fee, self.gateway_fee);
        set(&mut cfg.validator, self.validator);
        set(&mut cfg.tx_fee_recipient, self.tx_fee_recipient);
        set(&mut cfg.bls_base, self.bls_base);
        set(&mut cfg.ultra_light_servers, self.ultra_light_servers);
        set(&mut cfg.ultra_light_fraction, self.ultra_light_fraction);
        set(&mut cfg.ultra_light_only_announce, self.ultra_light_only_announce);
        set(&mut cfg.database_cache, self.database_cache);
        set(&mut cfg.database_freezer, self.database_freezer);
        set(&mut cfg.trie_clean_cache, self.trie_clean_cache);
        set(&mut cfg.trie_clean_cache_journal, self.trie_clean_cache_journal);
        set(&mut cfg.trie_clean_cache_rejournal, self.trie_clean_cache_rejournal);
        set(&mut cfg.trie_dirty_cache, self.trie_dirty_cache);
        set(&mut cfg.trie_timeout, self.trie_timeout);
        set(&mut cfg.snapshot_cache, self.snapshot_cache);
        set(&mut cfg.preimages, self.preimages);
        set(&mut cfg.miner, self.miner);
        set(&mut cfg.tx_pool, self.tx_pool);
        set(&mut cfg.enable_preimage_recording, self.enable_preimage_recording);
        set(&mut cfg.istanbul, self.istanbul);
        set(&mut cfg.rpc_gas_inflation_rate, self.rpc_gas_inflation_rate);
        set(&mut cfg.rpc_gas_cap, self.rpc_gas_cap);
        set(&mut cfg.rpc_tx_fee_cap, self.rpc_tx_fee_cap);
        set_nullable(&mut cfg.checkpoint, self.checkpoint);
        set_nullable(&mut cfg.checkpoint_oracle, self.checkpoint_oracle);
        set_nullable(&mut cfg.override_e_hardfork, self.override_e_hardfork);
        set_nullable(&mut cfg.override_v2_istanbul_fork, self.override_v2_istanbul_fork);
        set(&mut cfg.min_sync_peers, self.min_sync_peers);
    }
}

//! Field classification table.
//!
//! Every [`Config`](crate::config::Config) field has exactly one entry in
//! [`FIELDS`]. Export (`to_overlay_view`) and import (`parse_overlay`) both
//! resolve visibility through this table.

use std::collections::BTreeMap;
use std::time::Duration;

use alloy_primitives::{Address, Bytes, B256, U256};

use crate::config::{
    CheckpointOracleConfig, Genesis, IstanbulConfig, MinerConfig, SyncMode, TrustedCheckpoint,
    TxPoolConfig,
};

/// How a field is represented in overlay documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Always written, even when zero.
    Always,
    /// Written only when different from the type's zero value.
    OmitIfDefault,
    /// Never written and never accepted.
    Suppressed,
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Document key
    pub name: &'static str,
    pub visibility: Visibility,
}

const fn field(name: &'static str, visibility: Visibility) -> FieldSpec {
    FieldSpec { name, visibility }
}

use Visibility::{Always, OmitIfDefault, Suppressed};

/// All configuration fields in declaration order.
pub const FIELDS: &[FieldSpec] = &[
    field("Genesis", OmitIfDefault),
    field("NetworkId", Always),
    field("SyncMode", Always),
    field("EthDiscoveryURLs", Always),
    field("SnapDiscoveryURLs", Always),
    field("NoPruning", Always),
    field("NoPrefetch", Always),
    field("TxLookupLimit", OmitIfDefault),
    field("Whitelist", Suppressed),
    field("LightServ", OmitIfDefault),
    field("LightIngress", OmitIfDefault),
    field("LightEgress", OmitIfDefault),
    field("LightPeers", OmitIfDefault),
    field("LightNoPrune", OmitIfDefault),
    field("LightNoSyncServe", OmitIfDefault),
    field("SyncFromCheckpoint", OmitIfDefault),
    field("GatewayFee", OmitIfDefault),
    field("Validator", OmitIfDefault),
    field("TxFeeRecipient", OmitIfDefault),
    field("BLSbase", OmitIfDefault),
    field("UltraLightServers", OmitIfDefault),
    field("UltraLightFraction", OmitIfDefault),
    field("UltraLightOnlyAnnounce", OmitIfDefault),
    field("SkipBcVersionCheck", Suppressed),
    field("DatabaseHandles", Suppressed),
    field("DatabaseCache", Always),
    field("DatabaseFreezer", Always),
    field("TrieCleanCache", Always),
    field("TrieCleanCacheJournal", OmitIfDefault),
    field("TrieCleanCacheRejournal", OmitIfDefault),
    field("TrieDirtyCache", Always),
    field("TrieTimeout", Always),
    field("SnapshotCache", Always),
    field("Preimages", Always),
    field("Miner", Always),
    field("TxPool", Always),
    field("EnablePreimageRecording", Always),
    field("Istanbul", Always),
    field("DocRoot", Suppressed),
    field("RPCGasInflationRate", Always),
    field("RPCGasCap", Always),
    field("RPCTxFeeCap", Always),
    field("Checkpoint", OmitIfDefault),
    field("CheckpointOracle", OmitIfDefault),
    field("OverrideEHardfork", OmitIfDefault),
    field("OverrideV2IstanbulFork", OmitIfDefault),
    field("MinSyncPeers", OmitIfDefault),
];

/// Look up a field by its document key. Matching is case-sensitive.
pub fn lookup(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|f| f.name == name)
}

/// Names of fields that may appear in overlay documents.
pub fn document_fields() -> impl Iterator<Item = &'static str> {
    FIELDS
        .iter()
        .filter(|f| f.visibility != Suppressed)
        .map(|f| f.name)
}

/// Names of fields that exist only in memory.
pub fn suppressed_fields() -> impl Iterator<Item = &'static str> {
    FIELDS
        .iter()
        .filter(|f| f.visibility == Suppressed)
        .map(|f| f.name)
}

const fn same_name(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Visibility of `name`, resolvable in const context.
///
/// Panics if `name` has no row in [`FIELDS`]; evaluated in a `const` item
/// that panic is a compile error.
pub const fn visibility_of(name: &str) -> Visibility {
    let mut i = 0;
    while i < FIELDS.len() {
        if same_name(FIELDS[i].name, name) {
            return FIELDS[i].visibility;
        }
        i += 1;
    }
    panic!("field missing from FIELDS")
}

/// Project one configuration value into its overlay slot.
pub(crate) fn project<T: ZeroValue + Clone>(visibility: Visibility, value: &T) -> Option<T> {
    match visibility {
        Always => Some(value.clone()),
        OmitIfDefault if !value.is_zero_value() => Some(value.clone()),
        OmitIfDefault | Suppressed => None,
    }
}

/// Project `$value` under the table row named `$name`. The row is looked up
/// at compile time.
macro_rules! project_field {
    ($name:literal, $value:expr $(,)?) => {{
        const VISIBILITY: $crate::overlay::fields::Visibility =
            $crate::overlay::fields::visibility_of($name);
        $crate::overlay::fields::project(VISIBILITY, $value)
    }};
}

pub(crate) use project_field;

/// Exact comparison against a type's zero value.
pub trait ZeroValue {
    fn is_zero_value(&self) -> bool;
}

macro_rules! numeric_zero {
    ($($ty:ty),*) => {
        $(impl ZeroValue for $ty {
            fn is_zero_value(&self) -> bool {
                *self == 0 as $ty
            }
        })*
    };
}

numeric_zero!(u32, u64, i64, f64);

impl ZeroValue for bool {
    fn is_zero_value(&self) -> bool {
        !*self
    }
}

impl ZeroValue for String {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for Duration {
    fn is_zero_value(&self) -> bool {
        self.is_zero()
    }
}

impl<T> ZeroValue for Vec<T> {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> ZeroValue for BTreeMap<K, V> {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> ZeroValue for Option<T> {
    fn is_zero_value(&self) -> bool {
        self.is_none()
    }
}

impl ZeroValue for Address {
    fn is_zero_value(&self) -> bool {
        *self == Address::ZERO
    }
}

impl ZeroValue for B256 {
    fn is_zero_value(&self) -> bool {
        *self == B256::ZERO
    }
}

impl ZeroValue for U256 {
    fn is_zero_value(&self) -> bool {
        self.is_zero()
    }
}

impl ZeroValue for Bytes {
    fn is_zero_value(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for SyncMode {
    fn is_zero_value(&self) -> bool {
        *self == SyncMode::Full
    }
}

macro_rules! record_zero {
    ($($ty:ty),*) => {
        $(impl ZeroValue for $ty {
            fn is_zero_value(&self) -> bool {
                *self == <$ty>::default()
            }
        })*
    };
}

record_zero!(
    MinerConfig,
    TxPoolConfig,
    IstanbulConfig,
    Genesis,
    TrustedCheckpoint,
    CheckpointOracleConfig
);

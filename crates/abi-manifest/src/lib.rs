//! Contract ABI manifest compiler
//!
//! Reads the compiled artifact (`<Name>.json`) of every core contract and
//! bakes their ABIs into a generated Rust source file, so the node can look
//! up a contract interface by name without touching the filesystem.

pub mod artifact;
pub mod error;
pub mod render;
pub mod table;

pub use artifact::{collect_abis, read_abi};
pub use error::ManifestError;
pub use render::{generate, render_table, OUTPUT_FILE};
pub use table::{Abi, AbiItem, AbiParam, AbiTable};

/// Contracts whose ABIs go into the generated table, in deployment order.
pub const CONTRACT_NAMES: &[&str] = &[
    "Proxy",
    "Registry",
    "Freezer",
    "TransferWhitelist",
    "FeeCurrencyWhitelist",
    "GoldToken",
    "SortedOracles",
    "GasPriceMinimum",
    "ReserveSpenderMultiSig",
    "Reserve",
    "StableToken",
    "StableTokenEUR",
    "StableTokenBRL",
    "Exchange",
    "ExchangeEUR",
    "ExchangeBRL",
    "Accounts",
    "LockedGold",
    "Validators",
    "Election",
    "EpochRewards",
    "Random",
    "Attestations",
    "Escrow",
    "BlockchainParameters",
    "GovernanceSlasher",
    "DoubleSigningSlasher",
    "DowntimeSlasher",
    "GovernanceApproverMultiSig",
    "Governance",
];

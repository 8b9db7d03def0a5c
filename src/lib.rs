//! ethconfig - selective-field overlays for the node configuration
//!
//! A fully-defaulted [`Config`] can be exported as a sparse TOML document,
//! and hand-edited documents can override a subset of its fields without
//! disturbing the rest.

pub mod config;
pub mod logging;
pub mod overlay;

pub use config::{Config, ConfigError, EffectiveConfig};
pub use overlay::{
    apply_overlay, parse_overlay, parse_overlay_str, to_overlay_view, OverlayView, ParseFailure,
};

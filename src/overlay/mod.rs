//! Configuration overlays
//!
//! Three pure operations over [`Config`](crate::config::Config):
//! - [`to_overlay_view`]: project a config into a sparse [`OverlayView`]
//! - [`parse_overlay`]: decode a TOML document into an [`OverlayView`]
//! - [`apply_overlay`]: fold an [`OverlayView`] onto a base config
//!
//! Which fields take part is fixed by [`fields::FIELDS`].

pub mod fields;

mod error;
mod merge;
mod parse;
mod view;

pub use error::ParseFailure;
pub use fields::{FieldSpec, Visibility, ZeroValue, FIELDS};
pub use merge::apply_overlay;
pub use parse::{parse_overlay, parse_overlay_str};
pub use view::OverlayView;

use crate::config::Config;

/// Project `cfg` into its overlay view.
pub fn to_overlay_view(cfg: &Config) -> OverlayView {
    OverlayView::from_config(cfg)
}

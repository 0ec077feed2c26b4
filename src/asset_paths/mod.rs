//! Helpers for building and classifying relative asset paths.
//!
//! Path joining and reference filtering live in separate submodules so each can be
//! tested on its own. The manifest tables and the base-url resolver both go through
//! these helpers, which keeps every produced path in the same canonical form.

mod bundle;
mod filters;

pub use bundle::{ASSETS_BASE_PATH, join_url, make_asset_path};
pub use filters::is_absolute_reference;

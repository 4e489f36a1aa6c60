//! # assetkit
//!
//! Named asset registry with dependency-ordered CSS/JS emission.
//!
//! Callers register style and script assets (file paths, full URLs, or
//! literal inline markup) with declared same-group dependencies, then
//! materialize a group into HTML: each group is topologically ordered so
//! every asset is emitted after its dependencies, and each asset is
//! rendered lazily at that point — URL composition and tag wrapping only
//! happen when a group is read, never at registration.
//!
//! The container is request-scoped plain data. Base-URL and theme
//! configuration are passed in at construction; nothing here touches the
//! filesystem or global state.

pub mod container;
pub mod render;
pub mod resolve;
pub mod url;
pub mod utils;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use container::{AssetContainer, AssetEntry};
pub use render::{AttrValue, Attributes};
pub use url::{AssetConfig, RequestInfo, Scheme, StaticThemes, ThemeResolver, UrlResolver};

// ---------------------------------------------------------------------------
// Asset Group
// ---------------------------------------------------------------------------

/// The wrapper an asset renders with.
///
/// Styles become `<link>` tags with stylesheet defaults, scripts become
/// `<script>` tags. Dependencies only ever refer to names within the same
/// group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetGroup {
    Style,
    Script,
}

impl AssetGroup {
    /// Classify a source by file extension: `.css` is a style, anything
    /// else is a script.
    pub fn from_source(source: &str) -> Self {
        if utils::has_css_extension(source) {
            AssetGroup::Style
        } else {
            AssetGroup::Script
        }
    }
}

// ---------------------------------------------------------------------------
// AssetError
// ---------------------------------------------------------------------------

/// Errors raised while ordering a group.
///
/// Registration never fails; a dependency on a name that was never
/// registered is dropped silently. Only self-references and cycles are
/// fatal, and they surface when the group is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("Asset [{name}] is dependent on itself.")]
    SelfDependency { name: String },

    #[error("Assets [{name}] and [{dependency}] have a circular dependency.")]
    CircularDependency { name: String, dependency: String },
}

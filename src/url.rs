//! URL composition for registered assets.
//!
//! Pure string work: no request is inspected and no file is checked.
//! Everything ambient in a web stack — the configured asset base URL, the
//! current request's scheme and root, the active theme — arrives here as
//! explicit construction-time configuration so resolution is
//! deterministic and independently testable.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default-document segment stripped from configured and derived bases.
const DEFAULT_DOCUMENT: &str = "index.php";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn prefix(self) -> &'static str {
        match self {
            Scheme::Http => "http://",
            Scheme::Https => "https://",
        }
    }
}

/// The ambient request values URL derivation falls back on when no asset
/// base URL is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInfo {
    pub scheme: Scheme,
    /// Root URL of the current request, e.g. `https://shop.example.com`.
    pub root: String,
}

/// Construction-time configuration for a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Configured asset base URL (CDN or subdirectory). When set it wins
    /// over request-derived bases.
    pub asset_url: Option<String>,
    pub request: RequestInfo,
    /// Path prefix for theme-relative sources, e.g. `themes/ripple/`.
    pub theme_path: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            asset_url: None,
            request: RequestInfo {
                scheme: Scheme::Http,
                root: "http://localhost".to_string(),
            },
            theme_path: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Theme resolver
// ---------------------------------------------------------------------------

/// External theme collaborator, consulted only by the one-shot
/// theme-path registration mode.
pub trait ThemeResolver {
    /// Name of the currently active theme.
    fn active_theme(&self) -> &str;

    /// Whether a theme with this name is installed.
    fn exists(&self, theme: &str) -> bool;
}

/// Fixed theme listing, enough for most hosts and for tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticThemes {
    active: String,
    known: Vec<String>,
}

impl StaticThemes {
    pub fn new(active: impl Into<String>, known: Vec<String>) -> Self {
        Self {
            active: active.into(),
            known,
        }
    }
}

impl ThemeResolver for StaticThemes {
    fn active_theme(&self) -> &str {
        &self.active
    }

    fn exists(&self, theme: &str) -> bool {
        self.known.iter().any(|t| t == theme)
    }
}

// ---------------------------------------------------------------------------
// UrlResolver
// ---------------------------------------------------------------------------

fn absolute_url_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*://").expect("valid regex"))
}

/// Whether a source is already a fully-qualified URL (`scheme://...`).
pub fn is_absolute_url(source: &str) -> bool {
    absolute_url_re().is_match(source)
}

/// Whether a source should bypass theme-path prefixing: fully qualified
/// or protocol-relative.
pub fn is_external_url(source: &str) -> bool {
    source.starts_with("//") || is_absolute_url(source)
}

/// Composes absolute asset URLs from a base and a relative path.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    config: AssetConfig,
}

impl UrlResolver {
    pub fn new(config: AssetConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AssetConfig {
        &self.config
    }

    /// Resolve a path to an absolute asset URL.
    ///
    /// Already-absolute paths pass through untouched. Otherwise the base
    /// is the configured asset URL when present, else the request root
    /// with its scheme forced per `secure` (`None` keeps the request
    /// scheme). A trailing `index.php` default-document segment is
    /// stripped from either base.
    pub fn resolve(&self, path: &str, secure: Option<bool>) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }

        let base = match &self.config.asset_url {
            Some(asset_url) if !asset_url.is_empty() => {
                strip_default_document(asset_url.trim_end_matches('/'))
            }
            _ => {
                let scheme = match secure {
                    None => self.config.request.scheme,
                    Some(true) => Scheme::Https,
                    Some(false) => Scheme::Http,
                };
                let root = force_scheme(&self.config.request.root, scheme);
                strip_default_document(root.trim_end_matches('/'))
            }
        };

        format!("{}/{}", base, path)
    }

    /// Theme-relative variant: external sources pass through, everything
    /// else is prefixed with the configured theme path first.
    pub fn resolve_themed(&self, uri: &str, secure: Option<bool>) -> String {
        if is_external_url(uri) {
            return uri.to_string();
        }

        self.resolve(&format!("{}{}", self.config.theme_path, uri), secure)
    }
}

/// Rewrite the scheme of a root URL, leaving the rest intact.
fn force_scheme(root: &str, scheme: Scheme) -> String {
    for existing in ["http://", "https://"] {
        if let Some(rest) = root.strip_prefix(existing) {
            return format!("{}{}", scheme.prefix(), rest);
        }
    }
    format!("{}{}", scheme.prefix(), root)
}

fn strip_default_document(base: &str) -> String {
    let needle = format!("/{}", DEFAULT_DOCUMENT);
    if base.contains(&needle) {
        base.replace(&needle, "")
    } else {
        base.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! The asset container: per-group registries plus the registration API.
//!
//! Registration is total — nothing is validated until a group is read.
//! Reading a group (`styles()`, `scripts()`, `urls()`) recomputes the
//! dependency order from the current registry, so re-resolving after
//! further registrations reflects the latest state.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::{self, AttrValue, Attributes};
use crate::url::{AssetConfig, ThemeResolver, UrlResolver};
use crate::{resolve, utils, AssetError, AssetGroup};

// ---------------------------------------------------------------------------
// AssetEntry
// ---------------------------------------------------------------------------

/// One registered asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetEntry {
    /// Relative path, absolute URL, or literal markup.
    pub source: String,
    /// Same-group names that must be emitted before this entry.
    pub dependencies: Vec<String>,
    /// Extra attributes serialized into the rendered tag.
    pub attributes: Attributes,
}

/// One-shot theme-path mode, consumed by the next style/script
/// registration and then reset.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PathMode {
    Off,
    CurrentTheme,
    Theme(String),
}

// ---------------------------------------------------------------------------
// AssetContainer
// ---------------------------------------------------------------------------

/// Request-scoped registry of named style and script assets.
pub struct AssetContainer {
    name: String,
    resolver: UrlResolver,
    themes: Option<Box<dyn ThemeResolver>>,
    path_mode: PathMode,
    styles: IndexMap<String, AssetEntry>,
    scripts: IndexMap<String, AssetEntry>,
}

impl AssetContainer {
    /// Create an empty container.
    ///
    /// `name` distinguishes containers when a page keeps several (header
    /// and footer, say); it has no effect on resolution.
    pub fn new(name: impl Into<String>, config: AssetConfig) -> Self {
        Self {
            name: name.into(),
            resolver: UrlResolver::new(config),
            themes: None,
            path_mode: PathMode::Off,
            styles: IndexMap::new(),
            scripts: IndexMap::new(),
        }
    }

    /// Attach the theme collaborator used by the one-shot theme-path mode.
    pub fn with_themes(mut self, themes: Box<dyn ThemeResolver>) -> Self {
        self.themes = Some(themes);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn group(&self, group: AssetGroup) -> &IndexMap<String, AssetEntry> {
        match group {
            AssetGroup::Style => &self.styles,
            AssetGroup::Script => &self.scripts,
        }
    }

    fn group_mut(&mut self, group: AssetGroup) -> &mut IndexMap<String, AssetEntry> {
        match group {
            AssetGroup::Style => &mut self.styles,
            AssetGroup::Script => &mut self.scripts,
        }
    }

    pub fn entry(&self, group: AssetGroup, name: &str) -> Option<&AssetEntry> {
        self.group(group).get(name)
    }

    pub fn contains(&self, group: AssetGroup, name: &str) -> bool {
        self.group(group).contains_key(name)
    }

    pub fn count(&self, group: AssetGroup) -> usize {
        self.group(group).len()
    }

    // -----------------------------------------------------------------------
    // Registration
    // -----------------------------------------------------------------------

    /// Store an entry under its group. Re-registering a name overwrites
    /// the prior entry; the name keeps its original registration slot for
    /// tie ordering.
    pub fn register(
        &mut self,
        group: AssetGroup,
        name: impl Into<String>,
        source: impl Into<String>,
        dependencies: &[&str],
        attributes: Attributes,
    ) -> &mut Self {
        let entry = AssetEntry {
            source: source.into(),
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
            attributes,
        };
        self.group_mut(group).insert(name.into(), entry);
        self
    }

    /// Register a source, inferring the group from its extension:
    /// `.css` is a style, anything else a script. Redundant leading
    /// slashes are stripped from internal paths.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
        dependencies: &[&str],
        attributes: Attributes,
    ) -> &mut Self {
        let source = source.into();
        let source = utils::normalize_source(&source).to_string();
        match AssetGroup::from_source(&source) {
            AssetGroup::Style => self.add_style(name, source, dependencies, attributes),
            AssetGroup::Script => self.add_script(name, source, dependencies, attributes),
        }
    }

    /// Bulk registration: each path lands under `name-<hash>` so a list
    /// of files shares one logical name without collisions. Every path is
    /// classified by its own extension.
    pub fn add_many(
        &mut self,
        name: &str,
        sources: &[&str],
        dependencies: &[&str],
        attributes: Attributes,
    ) -> &mut Self {
        for path in sources {
            self.add(
                utils::bulk_name(name, path),
                *path,
                dependencies,
                attributes.clone(),
            );
        }
        self
    }

    /// Register a stylesheet. `media="all"` is filled in unless the
    /// caller set `media` explicitly.
    pub fn add_style(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
        dependencies: &[&str],
        mut attributes: Attributes,
    ) -> &mut Self {
        if !attributes.contains("media") {
            attributes.insert("media", AttrValue::Value("all".to_string()));
        }
        let source = self.apply_path_mode(source.into());
        self.register(AssetGroup::Style, name, source, dependencies, attributes)
    }

    /// Register a script.
    pub fn add_script(
        &mut self,
        name: impl Into<String>,
        source: impl Into<String>,
        dependencies: &[&str],
        attributes: Attributes,
    ) -> &mut Self {
        let source = self.apply_path_mode(source.into());
        self.register(AssetGroup::Script, name, source, dependencies, attributes)
    }

    /// Register literal script content; it renders verbatim inside a
    /// `<script>` wrapper, never as a URL.
    pub fn write_script(
        &mut self,
        name: impl Into<String>,
        content: &str,
        dependencies: &[&str],
    ) -> &mut Self {
        let source = format!("<script>{}</script>", content);
        self.register(AssetGroup::Script, name, source, dependencies, Attributes::new())
    }

    /// Register literal style content inside a `<style>` wrapper.
    pub fn write_style(
        &mut self,
        name: impl Into<String>,
        content: &str,
        dependencies: &[&str],
    ) -> &mut Self {
        let source = format!("<style>{}</style>", content);
        self.register(AssetGroup::Style, name, source, dependencies, Attributes::new())
    }

    /// Register pre-rendered markup under the script group, no wrapper.
    pub fn write_content(
        &mut self,
        name: impl Into<String>,
        content: &str,
        dependencies: &[&str],
    ) -> &mut Self {
        self.register(AssetGroup::Script, name, content, dependencies, Attributes::new())
    }

    /// Resolve the next style/script registration against the active
    /// theme's path. Cleared after one registration.
    pub fn use_theme_path(&mut self) -> &mut Self {
        self.path_mode = PathMode::CurrentTheme;
        self
    }

    /// Like [`use_theme_path`](Self::use_theme_path), but substitutes the
    /// named theme for the active one when the theme collaborator knows
    /// it; unknown themes fall back to the active theme's path.
    pub fn use_theme_path_of(&mut self, theme: impl Into<String>) -> &mut Self {
        self.path_mode = PathMode::Theme(theme.into());
        self
    }

    fn apply_path_mode(&mut self, source: String) -> String {
        match std::mem::replace(&mut self.path_mode, PathMode::Off) {
            PathMode::Off => source,
            PathMode::CurrentTheme => {
                format!("{}{}", self.resolver.config().theme_path, source)
            }
            PathMode::Theme(theme) => {
                let prefixed = format!("{}{}", self.resolver.config().theme_path, source);
                match &self.themes {
                    Some(themes) if themes.exists(&theme) => {
                        prefixed.replace(themes.active_theme(), &theme)
                    }
                    _ => prefixed,
                }
            }
        }
    }

    // -----------------------------------------------------------------------
    // Resolution & rendering
    // -----------------------------------------------------------------------

    /// Dependency-respecting emission order for a group. Recomputed from
    /// the current registry on every call.
    pub fn resolve_group(&self, group: AssetGroup) -> Result<Vec<String>, AssetError> {
        resolve::arrange(self.group(group))
    }

    /// Render every asset of a group in resolved order, one tag per line.
    pub fn render_group(&self, group: AssetGroup) -> Result<String, AssetError> {
        let order = self.resolve_group(group)?;
        let mut markup = String::new();
        for name in &order {
            markup.push_str(&self.render_asset(group, name));
        }
        Ok(markup)
    }

    /// All registered styles as `<link>` markup.
    pub fn styles(&self) -> Result<String, AssetError> {
        self.render_group(AssetGroup::Style)
    }

    /// All registered scripts as `<script>` markup.
    pub fn scripts(&self) -> Result<String, AssetError> {
        self.render_group(AssetGroup::Script)
    }

    /// Render a single asset. Inline entries (source containing markup)
    /// come back verbatim; everything else resolves to a full URL and is
    /// wrapped in the group's tag. Unknown names render empty.
    pub fn render_asset(&self, group: AssetGroup, name: &str) -> String {
        let Some(asset) = self.group(group).get(name) else {
            return String::new();
        };

        if asset.source.contains('<') {
            return asset.source.clone();
        }

        let url = self.resolver.resolve(&asset.source, None);
        render::render_tag(group, &url, &asset.attributes)
    }

    /// Resolved asset URLs for a group in emission order, without tag
    /// wrappers. Inline entries pass through as their markup.
    pub fn urls(&self, group: AssetGroup) -> Result<Vec<String>, AssetError> {
        let order = self.resolve_group(group)?;
        Ok(order
            .iter()
            .map(|name| {
                let asset = &self.group(group)[name];
                if asset.source.contains('<') {
                    asset.source.clone()
                } else {
                    self.resolver.resolve(&asset.source, None)
                }
            })
            .collect())
    }

    /// Absolute URL for an arbitrary path against the container's base.
    pub fn origin_url(&self, uri: &str, secure: Option<bool>) -> String {
        self.resolver.resolve(uri, secure)
    }

    /// Absolute URL for a theme-relative path.
    pub fn url(&self, uri: &str, secure: Option<bool>) -> String {
        self.resolver.resolve_themed(uri, secure)
    }
}

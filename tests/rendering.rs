//! Rendered markup: tag shapes, attribute handling, URL composition, and
//! the no-wrapper URL listing.

use assetkit::{
    AssetConfig, AssetContainer, AssetGroup, Attributes, RequestInfo, Scheme,
};
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn container_with_base(asset_url: &str) -> AssetContainer {
    AssetContainer::new(
        "header",
        AssetConfig {
            asset_url: Some(asset_url.to_string()),
            request: RequestInfo {
                scheme: Scheme::Https,
                root: "https://shop.example.com".to_string(),
            },
            theme_path: "themes/ripple/".to_string(),
        },
    )
}

// ---------------------------------------------------------------------------
// Style tags
// ---------------------------------------------------------------------------

#[test]
fn style_renders_link_with_stylesheet_defaults() {
    let mut c = container_with_base("https://x/");
    c.add_style("base", "css/app.css", &[], Attributes::new());

    let rendered = c.styles().unwrap();
    assert_eq!(
        rendered,
        "<link media=\"all\" type=\"text/css\" rel=\"stylesheet\" href=\"https://x/css/app.css\">\n"
    );
}

#[test]
fn style_media_default_is_overridable() {
    let mut c = container_with_base("https://x");
    c.add_style(
        "print",
        "css/print.css",
        &[],
        Attributes::new().set("media", "print"),
    );

    let rendered = c.styles().unwrap();
    assert!(rendered.contains("media=\"print\""));
    assert!(!rendered.contains("media=\"all\""));
}

// ---------------------------------------------------------------------------
// Script tags
// ---------------------------------------------------------------------------

#[test]
fn script_renders_with_attributes_and_src_last() {
    let mut c = container_with_base("https://x");
    c.add_script("app", "js/app.js", &[], Attributes::new().flag("defer"));

    let rendered = c.scripts().unwrap();
    assert_eq!(
        rendered,
        "<script defer=\"defer\" src=\"https://x/js/app.js\"></script>\n"
    );
}

#[test]
fn absolute_source_is_not_rebased() {
    let mut c = container_with_base("https://x");
    c.add_script("cdn", "https://cdn.example.com/lib.js", &[], Attributes::new());

    let rendered = c.scripts().unwrap();
    assert_eq!(
        rendered,
        "<script src=\"https://cdn.example.com/lib.js\"></script>\n"
    );
}

#[test]
fn group_output_concatenates_in_resolved_order() {
    let mut c = container_with_base("https://x");
    c.add_script("app", "js/app.js", &["jquery"], Attributes::new());
    c.add_script("jquery", "js/jquery.js", &[], Attributes::new());

    let rendered = c.scripts().unwrap();
    let jquery = rendered.find("js/jquery.js").unwrap();
    let app = rendered.find("js/app.js").unwrap();
    assert!(jquery < app);
    assert_eq!(rendered.matches("</script>").count(), 2);
    assert!(rendered.ends_with('\n'));
}

#[test]
fn empty_group_renders_empty_string() {
    let c = container_with_base("https://x");
    assert_eq!(c.styles().unwrap(), "");
    assert_eq!(c.scripts().unwrap(), "");
}

#[test]
fn unknown_asset_renders_empty() {
    let c = container_with_base("https://x");
    assert_eq!(c.render_asset(AssetGroup::Script, "missing"), "");
}

// ---------------------------------------------------------------------------
// URL listing
// ---------------------------------------------------------------------------

#[test]
fn urls_lists_resolved_sources_in_order() {
    let mut c = container_with_base("https://x");
    c.add_script("app", "js/app.js", &["jquery"], Attributes::new());
    c.add_script("jquery", "js/jquery.js", &[], Attributes::new());

    assert_eq!(
        c.urls(AssetGroup::Script).unwrap(),
        vec!["https://x/js/jquery.js", "https://x/js/app.js"]
    );
}

#[test]
fn urls_passes_inline_markup_through() {
    let mut c = container_with_base("https://x");
    c.write_script("boot", "app.start();", &[]);

    assert_eq!(
        c.urls(AssetGroup::Script).unwrap(),
        vec!["<script>app.start();</script>"]
    );
}

// ---------------------------------------------------------------------------
// Container URL helpers
// ---------------------------------------------------------------------------

#[test]
fn origin_url_composes_against_base() {
    let c = container_with_base("https://cdn.example.com/assets/index.php");
    assert_eq!(
        c.origin_url("js/app.js", None),
        "https://cdn.example.com/assets/js/app.js"
    );
}

#[test]
fn url_is_theme_relative() {
    let c = container_with_base("https://x");
    assert_eq!(
        c.url("img/logo.png", None),
        "https://x/themes/ripple/img/logo.png"
    );
    assert_eq!(
        c.url("https://cdn.example.com/logo.png", None),
        "https://cdn.example.com/logo.png"
    );
}

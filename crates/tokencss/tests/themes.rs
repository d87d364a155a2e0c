//! End-to-end tests over fixture token documents.
//!
//! The fixtures mirror a typical export: shared `tokens.json`, a
//! `global.json` nested under `global`, and per-theme documents.

use serde_json::json;
use tokencss::{
    flatten, generate, resolve, resolve_str, Namespaces, Renderer, ResolveWarning, Theme,
    TokenDocument, TokenSources,
};

fn sources() -> TokenSources {
    let tokens = TokenDocument::from_json_str(include_str!("fixtures/tokens.json")).unwrap();
    let globals = TokenDocument::from_json_str(include_str!("fixtures/global.json")).unwrap();
    TokenSources::from_documents(tokens, globals)
}

fn dark() -> Theme {
    let doc = TokenDocument::from_json_str(include_str!("fixtures/dark.json")).unwrap();
    Theme::from_document("dark", doc)
}

fn light() -> Theme {
    let doc = TokenDocument::from_yaml_str(include_str!("fixtures/light.yaml")).unwrap();
    Theme::from_document("light", doc)
}

#[test]
fn test_dark_theme_stylesheet() {
    let sources = sources();
    let theme = dark();
    let output = generate(&theme, &sources);
    assert!(output.warnings.is_empty(), "{:?}", output.warnings);

    let css = Renderer::new().unwrap().render(&theme, &output).unwrap();
    assert_eq!(
        css,
        [
            ":root {",
            "  /* Dark theme variables */",
            "  --surface-base: #101828;",
            "  --surface-raised: #101828;",
            "  --text-primary: #f9fafb;",
            "  --text-accent: #d6bbfb;",
            "  --card-padding: 4px 8px;",
            "  --card-border: 1px solid #6941c6;",
            "}",
        ]
        .join("\n")
    );
}

#[test]
fn test_light_theme_reports_broken_references() {
    let output = generate(&light(), &sources());
    let resolved = output.resolved();

    assert_eq!(resolved.get("surface.raised"), Some(&json!("#f9fafb")));
    assert_eq!(resolved.get("text.accent"), Some(&json!("#6941c6")));
    assert_eq!(resolved.get("broken.loop"), Some(&json!("{broken.loop}")));
    assert_eq!(resolved.get("broken.missing"), Some(&json!("{does.not.exist}")));

    let keys: Vec<&str> = output.warnings.iter().map(|w| w.key.as_str()).collect();
    assert_eq!(keys, vec!["broken.loop", "broken.missing"]);
    assert!(matches!(
        output.warnings[0].warning,
        ResolveWarning::CircularReference { .. }
    ));
    assert!(matches!(
        output.warnings[1].warning,
        ResolveWarning::UnresolvedReference { .. }
    ));
}

#[test]
fn test_globals_rendered_as_their_own_theme() {
    let sources = sources();
    let theme = Theme::new("global", sources.globals().clone()).with_comment("Global variables");
    let output = generate(&theme, &sources);

    assert_eq!(
        output.css_variables(),
        [
            "--global-spacing-sm: 4px;",
            "--global-spacing-md: 8px;",
            "--global-border-width: 1px;",
            "--global-border-default: 1px solid #6941c6;",
        ]
        .join("\n")
    );
}

#[test]
fn test_flatten_documented_example() {
    let flat = flatten(&json!({ "a": { "b": { "$value": "red" } } }));
    assert_eq!(flat.into_value(), json!({ "a.b": "red" }));
}

#[test]
fn test_resolve_documented_examples() {
    let empty = json!({});

    let tokens = json!({ "colors": { "brand": "blue" } });
    assert_eq!(
        resolve(&json!("{colors.brand}"), &Namespaces::new(&tokens, &empty)).value,
        json!("blue")
    );

    let globals = json!({ "global": { "spacing": { "sm": "4px" } } });
    assert_eq!(
        resolve_str("{spacing.sm}", &Namespaces::new(&empty, &globals)).as_str(),
        Some("4px")
    );

    let tokens = json!({ "a": "1px", "b": "2px" });
    assert_eq!(
        resolve_str("{a} {b}", &Namespaces::new(&tokens, &empty)).as_str(),
        Some("1px 2px")
    );

    let tokens = json!({ "a": "{a}" });
    let resolved = resolve_str("{a}", &Namespaces::new(&tokens, &empty));
    assert_eq!(resolved.as_str(), Some("{a}"));
    assert_eq!(resolved.warnings.len(), 1);
}

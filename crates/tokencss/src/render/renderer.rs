//! Stylesheet renderer.

use minijinja::{context, Environment};

use super::error::RenderError;
use super::filters::register_filters;
use crate::theme::{generate, Theme, ThemeOutput, TokenSources};

/// Name the stylesheet template is registered under.
///
/// It has no extension, so minijinja applies no auto-escaping.
const TEMPLATE_NAME: &str = "stylesheet";

/// The built-in stylesheet layout: one selector block, a comment line and
/// one declaration per line, indented by two spaces.
pub const DEFAULT_TEMPLATE: &str = "{{ selector }} {\n  /* {{ comment }} */\n\
{%- for decl in declarations %}\n  {{ decl.name }}: {{ decl.value }};\n{%- endfor %}\n}";

/// Renders generated themes into CSS text.
///
/// Templates see `theme` (the name), `selector`, `comment` and
/// `declarations`, a list of `{ key, name, value }` entries. The
/// `custom_property` filter turns a flat key into a property name.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use tokencss::{generate, Renderer, Theme, TokenSources};
///
/// let theme = Theme::new("dark", json!({ "color": { "bg": { "$value": "#000" } } }));
/// let output = generate(&theme, &TokenSources::default());
///
/// let css = Renderer::new().unwrap().render(&theme, &output).unwrap();
/// assert_eq!(css, ":root {\n  /* Dark theme variables */\n  --color-bg: #000;\n}");
/// ```
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Creates a renderer using [`DEFAULT_TEMPLATE`].
    pub fn new() -> Result<Self, RenderError> {
        Self::with_template(DEFAULT_TEMPLATE)
    }

    /// Creates a renderer with a custom stylesheet template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template has invalid syntax.
    pub fn with_template(source: impl Into<String>) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        register_filters(&mut env);
        env.add_template_owned(TEMPLATE_NAME, source.into())?;
        Ok(Self { env })
    }

    /// Renders a theme's generated declarations.
    pub fn render(&self, theme: &Theme, output: &ThemeOutput) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(TEMPLATE_NAME)?;
        let css = tmpl.render(context! {
            theme => theme.name(),
            selector => theme.selector(),
            comment => theme.comment(),
            declarations => &output.declarations,
        })?;
        Ok(css)
    }
}

/// Generates and renders a theme with the default template.
///
/// Warnings are dropped; call [`generate`] and [`Renderer::render`]
/// separately to inspect them.
pub fn render_stylesheet(theme: &Theme, sources: &TokenSources) -> Result<String, RenderError> {
    let output = generate(theme, sources);
    Renderer::new()?.render(theme, &output)
}

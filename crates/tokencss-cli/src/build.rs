//! Running a build: load documents, generate every theme, write stylesheets.

use std::path::{Path, PathBuf};

use tokencss::{generate, Renderer, Theme, ThemeOutput, TokenSources};
use tracing::{debug, info, info_span, warn};

use crate::config::{BuildConfig, ThemeConfig};
use crate::error::CliError;
use crate::loader::load_document;

/// One stylesheet written by a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTheme {
    pub name: String,
    pub path: PathBuf,
    pub declarations: usize,
    pub warnings: usize,
}

/// What a build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub themes: Vec<WrittenTheme>,
}

impl BuildReport {
    /// Total warnings across all themes.
    pub fn warning_count(&self) -> usize {
        self.themes.iter().map(|t| t.warnings).sum()
    }
}

/// A generated theme waiting to be written.
struct Pending {
    theme: Theme,
    output: ThemeOutput,
    path: PathBuf,
}

/// Runs a build with paths relative to `base`.
///
/// Every theme is generated before anything is written. In strict mode a
/// single warning aborts the build with [`CliError::Warnings`] and no file
/// is touched.
pub fn run_build(config: &BuildConfig, base: &Path) -> Result<BuildReport, CliError> {
    let _span = info_span!("build", base = %base.display()).entered();

    let tokens = load_document(&base.join(&config.tokens), config.strict)?;
    let globals = load_document(&base.join(&config.globals), config.strict)?;
    let sources = TokenSources::from_documents(tokens, globals);

    let renderer = match &config.template {
        Some(path) => {
            let path = base.join(path);
            let source = std::fs::read_to_string(&path)
                .map_err(|source| CliError::TemplateRead { path, source })?;
            Renderer::with_template(source)
        }
        None => Renderer::new(),
    }
    .map_err(CliError::Template)?;

    let out_dir = config
        .out_dir
        .as_ref()
        .map(|dir| base.join(dir))
        .unwrap_or_else(|| base.to_path_buf());

    let mut pending = Vec::with_capacity(config.themes.len());
    let mut warning_count = 0;
    for theme_config in &config.themes {
        let theme = load_theme(theme_config, &sources, base, config.strict)?;
        let output = generate(&theme, &sources);
        for warning in &output.warnings {
            warn!(theme = theme.name(), "{warning}");
        }
        warning_count += output.warnings.len();
        pending.push(Pending {
            theme,
            output,
            path: out_dir.join(theme_config.output_path()),
        });
    }

    if config.strict && warning_count > 0 {
        return Err(CliError::Warnings {
            count: warning_count,
        });
    }

    let mut report = BuildReport::default();
    for Pending {
        theme,
        output,
        path,
    } in pending
    {
        let css = renderer
            .render(&theme, &output)
            .map_err(|source| CliError::Render {
                theme: theme.name().to_string(),
                source,
            })?;
        write_stylesheet(&path, &css)?;
        info!(theme = theme.name(), path = %path.display(), "wrote stylesheet");
        report.themes.push(WrittenTheme {
            name: theme.name().to_string(),
            path,
            declarations: output.declarations.len(),
            warnings: output.warnings.len(),
        });
    }
    Ok(report)
}

fn load_theme(
    config: &ThemeConfig,
    sources: &TokenSources,
    base: &Path,
    strict: bool,
) -> Result<Theme, CliError> {
    let mut theme = match &config.input {
        Some(input) => {
            let document = load_document(&base.join(input), strict)?;
            Theme::from_document(config.name.clone(), document)
        }
        None => {
            debug!(theme = %config.name, "rendering the globals document");
            Theme::new(config.name.clone(), sources.globals().clone())
        }
    };
    if let Some(comment) = &config.comment {
        theme = theme.with_comment(comment.clone());
    }
    if let Some(selector) = &config.selector {
        theme = theme.with_selector(selector.clone());
    }
    Ok(theme)
}

fn write_stylesheet(path: &Path, css: &str) -> Result<(), CliError> {
    let to_error = |source: std::io::Error| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(to_error)?;
        }
    }
    std::fs::write(path, css).map_err(to_error)
}

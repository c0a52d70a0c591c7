//! svdoc — generate markdown reference pages from annotated SystemVerilog sources.
//!
//! Every source unit's first `/** ... */` block is parsed for `@brief`,
//! `@details`, `@note`, `@param`, `@input`, `@output`, `@inout`, `@code` and
//! `@example` tags. Two modes:
//!
//! - **tree mode** (default): `svdoc src -o docs_md` writes one page per unit
//!   into `docs_md/modules/` and a summary table into `docs_md/index.md`
//! - **stdout mode**: `svdoc --stdout src/fifo.sv` prints a single page

mod discover;
mod index;
mod labels;
mod model;
mod parser;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use index::IndexEntry;
use labels::Lang;
use parser::Dialect;

/// Directory under the output root holding per-unit pages.
const MODULES_DIR: &str = "modules";
const INDEX_FILE: &str = "index.md";

#[derive(Parser)]
#[command(
    name = "svdoc",
    about = "Generate markdown documentation from annotated SystemVerilog sources"
)]
struct Cli {
    /// Source root directory (or a single file)
    #[arg(default_value = "src")]
    root: PathBuf,

    /// Output directory for pages and the index
    #[arg(short = 'o', long, default_value = "docs_md")]
    output: PathBuf,

    /// Source file extension to scan (repeatable)
    #[arg(short = 'e', long = "ext", default_values_t = discover::DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect::<Vec<_>>())]
    extensions: Vec<String>,

    /// Declaration keyword naming a unit (repeatable), e.g. -k module -k interface
    #[arg(short = 'k', long = "keyword", default_values_t = parser::extract::DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect::<Vec<_>>())]
    keywords: Vec<String>,

    /// Output format: markdown (default), json
    #[arg(short = 'f', long, default_value = "markdown")]
    format: String,

    /// Language of generated headings; `sk` reproduces the existing Slovak pages
    #[arg(long, value_enum, default_value_t = Lang::En)]
    lang: Lang,

    /// Base URL for source links in the index (default: relative paths)
    #[arg(long)]
    source_url: Option<String>,

    /// Do not write the summary index
    #[arg(long)]
    no_index: bool,

    /// Render a single file to stdout instead of writing pages
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Pipeline configuration for [`generate`].
struct GenerateConfig {
    source_root: PathBuf,
    output_dir: PathBuf,
    extensions: Vec<String>,
    dialect: Dialect,
    format: String,
    lang: Lang,
    source_url: Option<String>,
    write_index: bool,
}

impl GenerateConfig {
    fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(GenerateConfig {
            source_root: cli.root.clone(),
            output_dir: cli.output.clone(),
            extensions: cli.extensions.clone(),
            dialect: Dialect::new(cli.keywords.as_slice())?,
            format: cli.format.clone(),
            lang: cli.lang,
            source_url: cli.source_url.clone(),
            write_index: !cli.no_index,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let config = GenerateConfig::from_cli(&cli)?;

    if cli.stdout {
        return stdout_mode(&config);
    }

    let written = generate(&config)?;
    log::info!("generated {} page(s) in {}", written, config.output_dir.display());
    Ok(())
}

/// stdout mode: parse one file and print its rendered page.
fn stdout_mode(config: &GenerateConfig) -> Result<()> {
    let path = &config.source_root;
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let renderer = render::create_renderer(&config.format, config.lang)?;
    let record = parser::parse_source(&content, &config.dialect);
    print!("{}", renderer.render(&record)?);
    Ok(())
}

/// Tree mode: one page per source unit plus the summary index.
///
/// Returns the number of pages written.
fn generate(config: &GenerateConfig) -> Result<usize> {
    let renderer = render::create_renderer(&config.format, config.lang)?;
    let ext = renderer.file_extension().to_string();

    let sources = discover::find_sources(&config.source_root, config.extensions.as_slice())?;
    log::info!(
        "found {} source file(s) under {}",
        sources.len(),
        config.source_root.display()
    );

    let modules_dir = config.output_dir.join(MODULES_DIR);
    fs::create_dir_all(&modules_dir)
        .with_context(|| format!("failed to create output directory: {}", modules_dir.display()))?;

    // Later sources with the same stem replace earlier ones
    let mut pages: HashMap<String, IndexEntry> = HashMap::new();

    for path in &sources {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let record = parser::parse_source(&content, &config.dialect);
        log::debug!(
            "{}: entity `{}`, {} param(s), {} port(s)",
            path.display(),
            record.entity_name,
            record.parameters.len(),
            record.inputs.len() + record.outputs.len() + record.inouts.len()
        );

        let name = derive_output_name(path);
        let out_path = modules_dir.join(format!("{}.{}", name, ext));
        fs::write(&out_path, renderer.render(&record)?)
            .with_context(|| format!("failed to write {}", out_path.display()))?;
        log::info!("generated {}", out_path.display());

        let entry = IndexEntry {
            name: name.clone(),
            page: format!("{}/{}.{}", MODULES_DIR, name, ext),
            summary: record.summary(),
            source_name: path
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| name.clone()),
            source_href: index::source_href(
                path,
                &config.source_root,
                &config.output_dir,
                config.source_url.as_deref(),
            ),
        };
        if let Some(previous) = pages.insert(name, entry) {
            log::warn!(
                "{} overwrites the page generated from {}",
                path.display(),
                previous.source_name
            );
        }
    }

    if config.write_index {
        let entries: Vec<IndexEntry> = pages.values().cloned().collect();
        let index_path = config.output_dir.join(INDEX_FILE);
        fs::write(&index_path, index::render_index(&entries, config.lang.labels()))
            .with_context(|| format!("failed to write {}", index_path.display()))?;
        log::info!("updated index: {}", index_path.display());
    }

    Ok(pages.len())
}

/// Derive the page name (without extension) from a source path.
/// "src/core/alu.sv" → "alu"
fn derive_output_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

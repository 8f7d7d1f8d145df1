//! Loom CLI
//!
//! Render, validate and inspect Loom page documents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use loom_core::{Breakpoint, Page};
use loom_render::{Diagnostic, PageRenderer};
use loom_tenant::{mount, shared, ApplyOutcome, TenantTokenProvider};
use loom_tokens::{TokenScope, TokenSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

use config::LoomConfig;

#[derive(Parser)]
#[command(name = "loom")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Loom page renderer", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file
    #[arg(short, long, global = true, default_value = "loom.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a page document to HTML
    Render {
        /// Page document (JSON)
        page: PathBuf,

        /// Breakpoint to render for (desktop, tablet, mobile)
        #[arg(short, long, conflicts_with = "width")]
        breakpoint: Option<Breakpoint>,

        /// Viewport width in pixels, mapped to a breakpoint
        #[arg(short, long)]
        width: Option<u32>,

        /// Tenant whose tokens are applied
        #[arg(short, long)]
        tenant: Option<String>,

        /// Output path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a page document for errors
    Check {
        /// Page document (JSON)
        page: PathBuf,

        /// Treat render diagnostics as errors
        #[arg(long)]
        strict: bool,
    },

    /// Print the token scope for a tenant as CSS
    Tokens {
        /// Tenant id (defaults only when omitted)
        tenant: Option<String>,
    },

    /// List registered block types
    Blocks,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = LoomConfig::load(&cli.config)?;

    match cli.command {
        Commands::Render {
            page,
            breakpoint,
            width,
            tenant,
            output,
        } => {
            let breakpoint = width
                .map(Breakpoint::from_width)
                .or(breakpoint)
                .unwrap_or(config.render.breakpoint);
            cmd_render(&config, &page, breakpoint, tenant.as_deref(), output.as_deref())
        }

        Commands::Check { page, strict } => cmd_check(&config, &page, strict),

        Commands::Tokens { tenant } => cmd_tokens(&config, tenant.as_deref()),

        Commands::Blocks => cmd_blocks(),
    }
}

fn load_page(path: &Path) -> Result<Page> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    Page::from_json(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Default tokens with `tenant`'s tokens mounted on top
fn tenant_scope(config: &LoomConfig, tenant: Option<&str>) -> Result<TokenScope> {
    let base = TokenScope::with_base(&TokenSet::defaults());
    let Some(tenant) = tenant else {
        return Ok(base);
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .context("Failed to start async runtime")?;

    let provider = shared(TenantTokenProvider::with_scope(base));
    let source = config.token_source();

    match runtime.block_on(mount(&provider, &source, tenant)) {
        ApplyOutcome::Applied(count) => info!("Applied {} tokens for tenant '{}'", count, tenant),
        ApplyOutcome::Empty => warn!("Tenant '{}' defines no tokens, using defaults", tenant),
        ApplyOutcome::Failed(_) | ApplyOutcome::Stale => {
            warn!("No tokens applied for tenant '{}', using defaults", tenant)
        }
    }

    let scope = runtime.block_on(provider.lock()).scope().clone();
    Ok(scope)
}

/// Log render diagnostics, once each at warn level
fn report_diagnostics(breakpoint: Breakpoint, diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        if diagnostic.already_warned() {
            debug!("[{}] {}", breakpoint, diagnostic);
        } else {
            warn!("[{}] {}", breakpoint, diagnostic);
        }
    }
}

fn cmd_render(
    config: &LoomConfig,
    page_path: &Path,
    breakpoint: Breakpoint,
    tenant: Option<&str>,
    output: Option<&Path>,
) -> Result<()> {
    let page = load_page(page_path)?;

    info!(
        "Rendering {} ({}) for {}",
        page.id,
        config.site.name,
        breakpoint
    );

    let rendered = PageRenderer::default().render_page(&page, breakpoint, &config.logos);
    report_diagnostics(breakpoint, &rendered.diagnostics);

    let mut html = String::new();
    if tenant.is_some() {
        html.push_str("<style>\n");
        html.push_str(&tenant_scope(config, tenant)?.to_css(":root"));
        html.push_str("\n</style>\n");
    }
    html.push_str(&rendered.to_html());
    html.push('\n');

    match output {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                "Wrote {} ({} of {} blocks visible)",
                path.display(),
                rendered.visible_block_count(),
                page.block_count()
            );
        }
        None => print!("{}", html),
    }

    Ok(())
}

fn cmd_check(config: &LoomConfig, page_path: &Path, strict: bool) -> Result<()> {
    let page = load_page(page_path)?;
    page.validate()
        .with_context(|| format!("Invalid page {}", page_path.display()))?;

    let renderer = PageRenderer::default();
    let mut problems = 0;
    for breakpoint in Breakpoint::ALL {
        let rendered = renderer.render_page(&page, breakpoint, &config.logos);
        report_diagnostics(breakpoint, &rendered.diagnostics);
        problems += rendered.diagnostics.len();
    }

    if strict && problems > 0 {
        anyhow::bail!("{} render problem(s) in {}", problems, page_path.display());
    }

    info!(
        "{}: {} sections, {} blocks, {} warning(s)",
        page_path.display(),
        page.sections.len(),
        page.block_count(),
        problems
    );

    Ok(())
}

fn cmd_tokens(config: &LoomConfig, tenant: Option<&str>) -> Result<()> {
    let scope = tenant_scope(config, tenant)?;
    println!("{}", scope.to_css(":root"));
    Ok(())
}

fn cmd_blocks() -> Result<()> {
    for block_type in PageRenderer::default().registry().types() {
        println!("{}", block_type);
    }
    Ok(())
}

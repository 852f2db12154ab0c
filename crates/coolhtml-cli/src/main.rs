use clap::{ArgAction, Parser, Subcommand};
use coolhtml::{CoolHtml, Document, Options, RenderContext, SiteConfig, Style, Target};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coolhtml")]
#[command(about = "CoolHTML: Bootstrap pages from small JSON site configurations")]
#[command(version)]
struct Cli {
    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a page from a site configuration
    Build {
        /// Input site .json file
        path: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Existing page to render into
        #[arg(long)]
        template: Option<String>,

        /// Id of the element sections are appended to (defaults to <body>)
        #[arg(long)]
        target: Option<String>,

        /// Do not add the Bootstrap stylesheet, script and icons
        #[arg(long)]
        no_assets: bool,

        /// Year for the default copyright notice
        #[arg(long)]
        year: Option<i32>,
    },

    /// Check a site configuration and print it with defaults applied
    Check {
        /// Input site .json file
        path: String,
    },

    /// Format inline markup
    Text {
        /// Text such as "*bold* and _italic_"
        source: String,
    },

    /// Compile a JSON style object to CSS
    Css {
        /// JSON object, or a JSON string passed through unchanged
        style: String,

        /// Selector the top-level declarations are scoped to
        #[arg(long, default_value = "")]
        prefix: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build {
            path,
            output,
            template,
            target,
            no_assets,
            year,
        } => cmd_build(&path, output.as_deref(), template.as_deref(), target, no_assets, year),
        Command::Check { path } => cmd_check(&path),
        Command::Text { source } => println!("{}", coolhtml::Content::from(source).render()),
        Command::Css { style, prefix } => cmd_css(&style, &prefix),
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn read_site(path: &str) -> SiteConfig {
    let source = read_source(path);
    match SiteConfig::parse(&source) {
        Ok(site) => site,
        Err(e) => {
            eprintln!("{path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_build(
    path: &str,
    output: Option<&Path>,
    template: Option<&str>,
    target: Option<String>,
    no_assets: bool,
    year: Option<i32>,
) {
    let site = read_site(path);
    let document = template
        .map(|t| Document::parse(&read_source(t)))
        .unwrap_or_default();

    let mut options = Options::default();
    if let Some(id) = target {
        options.target = Target::Id(id);
    }
    if no_assets {
        options.assets = None;
    }

    let mut ctx = RenderContext::new();
    if let Some(year) = year {
        ctx.set_year(year);
    }

    let mut cool = CoolHtml::with_document(document, options).with_context(ctx);
    tracing::debug!(assets = ?cool.assets(), "document ready");
    if let Err(e) = cool.site(&site) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    let html = cool.into_document().to_html();

    match output {
        Some(out) => {
            if let Err(e) = std::fs::write(out, &html) {
                eprintln!("Error writing {}: {e}", out.display());
                std::process::exit(1);
            }
            tracing::info!("Built: {}", out.display());
        }
        None => print!("{html}"),
    }
}

fn cmd_check(path: &str) {
    let site = read_site(path);
    let sections: Vec<_> = site.layout().iter().map(|s| s.kind()).collect();
    tracing::info!(sections = ?sections, "OK: {path}");

    match serde_json::to_string_pretty(&site) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_css(style: &str, prefix: &str) {
    let value = match serde_json::from_str(style) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Invalid style JSON: {e}");
            std::process::exit(1);
        }
    };
    println!("{}", Style::from_value(&value).compile(prefix));
}

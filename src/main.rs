//! CLI entry point for frisk

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use frisk::output::DEFAULT_IGNORE;
use frisk::{RenderConfig, ScanConfig, TreeBuilder, TreeRenderer, print_json};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "frisk")]
#[command(about = "Directory size comparison and overview")]
#[command(version)]
struct Args {
    /// Directory to frisk
    #[arg(short, long, default_value = "./")]
    path: PathBuf,

    /// Limit the printed depth (-1 means no limit)
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    depth: i64,

    /// Comma-separated file/directory names to leave out of the output
    #[arg(short, long, default_value = DEFAULT_IGNORE)]
    ignore: String,

    /// Print the tree in a more horizontally compact way
    #[arg(short, long)]
    compact: bool,

    /// Number of scan workers
    /// (0 = auto-detect, 1 = sequential, N = use N workers)
    #[arg(short = 'j', long = "jobs", default_value = "0")]
    jobs: usize,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let builder = TreeBuilder::new(ScanConfig::from_jobs(args.jobs));
    let tree = match builder.build(&args.path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("frisk: cannot access '{}': {}", e.path().display(), e);
            process::exit(1);
        }
    };

    let render_config = RenderConfig {
        max_depth: RenderConfig::depth_from_arg(args.depth),
        ignore: RenderConfig::parse_ignore_list(&args.ignore),
        compact: args.compact,
        use_color: !args.json && should_use_color(args.color),
    };

    let result = if args.json {
        print_json(&tree, &render_config)
    } else {
        TreeRenderer::new(render_config).print(&tree).map(|_| ())
    };

    if let Err(e) = result {
        eprintln!("frisk: error writing output: {}", e);
        process::exit(1);
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! keyscope CLI binary - compare the key paths of two JSON documents

use clap::Parser;
use keyscope_cli::{ColorChoice, RunOptions, ViewMode, run};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "keyscope")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// Base JSON file (relative names are looked up in the samples directory)
    #[arg(value_name = "BASE")]
    base: PathBuf,

    /// JSON file compared against the base
    #[arg(value_name = "COMPARE")]
    compare: PathBuf,

    /// Directory holding the input files (default: ./samples if present)
    #[arg(long, value_name = "DIR", env = "KEYSCOPE_SAMPLES_DIR")]
    samples_dir: Option<PathBuf>,

    /// Rename legacy root keys in the compare file and save a `_mapped` copy
    #[arg(long)]
    map_roots: bool,

    /// JSON object of old-to-new key names used by --map-roots
    #[arg(long, value_name = "FILE", requires = "map_roots")]
    map_file: Option<PathBuf>,

    /// List every differing path instead of grouping by root
    #[arg(long)]
    full_paths: bool,

    /// Show the grouped view followed by every path (overrides --full-paths)
    #[arg(long)]
    show_both: bool,

    /// Include object and array paths, not only leaves
    #[arg(long)]
    containers: bool,

    /// Print the differences as JSON
    #[arg(long)]
    json: bool,

    /// Colorized output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = RunOptions {
        base: args.base,
        compare: args.compare,
        samples_dir: args.samples_dir,
        map_roots: args.map_roots,
        map_file: args.map_file,
        view: ViewMode::from_flags(args.full_paths, args.show_both),
        containers: args.containers,
        json: args.json,
        color: args.color.enabled(),
    };

    let result = run(&options, &mut io::stdout().lock());
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

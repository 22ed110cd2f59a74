//! Command-line front end: filter candidate paths by mask.
//!
//! Paths are taken from the command line, or from stdin (one per line)
//! when none are given. Exits 0 when at least one path was selected,
//! 1 otherwise.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use arcmask::{BaseMode, MaskFilter, MatchConfig, MatchMode};

#[derive(Parser)]
#[command(name = "arcmask", version, about = "Filter paths by archive-style wildcard masks")]
struct Args {
    /// Inclusion mask, e.g. "*.txt" or "docs"
    mask: String,

    /// Candidate paths; read from stdin when omitted
    paths: Vec<String>,

    /// How the directory part of the mask is treated
    #[arg(long, value_enum, default_value = "names", env = "ARCMASK_MODE")]
    mode: CliMode,

    /// Compare byte-exactly regardless of platform case convention
    #[arg(long)]
    case_sensitive: bool,

    /// Use the host platform's case convention instead of always folding
    #[arg(long)]
    host_case: bool,

    /// Exclusion mask; repeatable, wins over the inclusion mask
    #[arg(short = 'x', long = "exclude")]
    exclude: Vec<String>,

    /// Read additional inclusion masks from a list file
    #[arg(long, value_name = "FILE")]
    masks_from: Option<PathBuf>,

    /// Read exclusion masks from a list file
    #[arg(long, value_name = "FILE")]
    exclude_from: Option<PathBuf>,

    /// Emit one JSON record per candidate instead of the selected paths
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum CliMode {
    Names,
    Exact,
    ExactPath,
    Subpath,
    SubpathOnly,
    WildSubpath,
}

impl From<CliMode> for BaseMode {
    fn from(mode: CliMode) -> Self {
        match mode {
            CliMode::Names => Self::Names,
            CliMode::Exact => Self::Exact,
            CliMode::ExactPath => Self::ExactPath,
            CliMode::Subpath => Self::Subpath,
            CliMode::SubpathOnly => Self::SubpathOnly,
            CliMode::WildSubpath => Self::WildSubpath,
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    path: &'a str,
    selected: bool,
}

fn build_filter(args: &Args) -> arcmask::Result<MaskFilter> {
    let mut mode = MatchMode::new(BaseMode::from(args.mode));
    if args.case_sensitive {
        mode = mode.case_sensitive();
    }
    let config = if args.host_case {
        MatchConfig::host()
    } else {
        MatchConfig::default()
    };

    let mut filter = MaskFilter::with_config(mode, config);
    filter.add_masks(&[args.mask.as_str()]);
    let exclude: Vec<&str> = args.exclude.iter().map(String::as_str).collect();
    filter.add_exclusions(&exclude);
    if let Some(path) = &args.masks_from {
        filter.load_from_file(path)?;
    }
    if let Some(path) = &args.exclude_from {
        filter.load_exclusions_from_file(path)?;
    }
    Ok(filter)
}

fn run(args: &Args) -> arcmask::Result<bool> {
    let filter = build_filter(args)?;

    let paths: Vec<String> = if args.paths.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<_>>>()?
    } else {
        args.paths.clone()
    };

    let mut any = false;
    for path in &paths {
        let selected = filter.is_selected(path);
        log::debug!("{path}: selected={selected}");
        any |= selected;
        if args.json {
            println!(
                "{}",
                serde_json::to_string(&Record {
                    path: path.as_str(),
                    selected,
                })
                .expect("serializable record")
            );
        } else if selected {
            println!("{path}");
        }
    }
    Ok(any)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("arcmask: {err}");
            ExitCode::from(2)
        }
    }
}

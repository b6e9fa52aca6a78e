//! Command-line interface for declscan.

use clap::Parser;
use std::path::PathBuf;

use crate::extract::{
    default_strategy_id, DeclarationExtractor, FileClassifier, HeuristicExtractor,
    DEFAULT_MAX_FUNCTIONS,
};
use crate::report;
use crate::walk::Walker;

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

/// Extract function and class signatures from a source tree.
///
/// declscan walks a directory recursively, extracts declaration-level
/// facts from every in-scope source file with the selected strategy, and
/// prints a single JSON report on stdout. Skipped directories and files
/// are reported on stderr and never abort the walk.
#[derive(Parser)]
#[command(name = "declscan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root directory to scan
    pub path: PathBuf,

    /// Extraction strategy: heuristic or ast
    #[arg(short, long, default_value = default_strategy_id())]
    pub strategy: String,

    /// Comma-separated file suffixes overriding the strategy's default
    /// set (e.g. ".cpp,.hpp")
    #[arg(short, long)]
    pub extensions: Option<String>,

    /// Maximum functions recorded per file under the heuristic strategy
    #[arg(long, default_value_t = DEFAULT_MAX_FUNCTIONS)]
    pub max_functions: usize,

    /// Parse files on a thread pool; report order is unchanged
    #[arg(long)]
    pub parallel: bool,
}

/// Build the extractor the arguments describe.
fn build_extractor(args: &Cli) -> Result<Box<dyn DeclarationExtractor>, i32> {
    let classifier = args
        .extensions
        .as_deref()
        .map(parse_suffix_set)
        .transpose()?;

    match args.strategy.as_str() {
        "heuristic" => {
            let mut extractor = HeuristicExtractor::new().max_functions(args.max_functions);
            if let Some(classifier) = classifier {
                extractor = extractor.with_classifier(classifier);
            }
            Ok(Box::new(extractor))
        }
        "ast" => {
            #[cfg(feature = "tree-sitter")]
            {
                let mut extractor = crate::extract::AstExtractor::new();
                if let Some(classifier) = classifier {
                    extractor = extractor.with_classifier(classifier);
                }
                Ok(Box::new(extractor))
            }
            #[cfg(not(feature = "tree-sitter"))]
            {
                eprintln!(
                    "Error: strategy 'ast' is unavailable in this build (compiled without the tree-sitter feature)"
                );
                Err(EXIT_ERROR)
            }
        }
        other => {
            eprintln!(
                "Error: invalid strategy {:?}, must be 'heuristic' or 'ast'",
                other
            );
            Err(EXIT_ERROR)
        }
    }
}

/// Parse a `--extensions` value into a classifier.
fn parse_suffix_set(raw: &str) -> Result<FileClassifier, i32> {
    let suffixes: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if suffixes.is_empty() {
        eprintln!("Error: --extensions must name at least one suffix");
        return Err(EXIT_ERROR);
    }

    Ok(FileClassifier::new(suffixes))
}

/// Run a scan: validate the root, walk, serialize.
pub fn run(args: &Cli) -> anyhow::Result<i32> {
    crate::init();

    let metadata = match std::fs::metadata(&args.path) {
        Ok(metadata) => metadata,
        Err(err) => {
            eprintln!("Error: cannot access path {:?}: {}", args.path, err);
            return Ok(EXIT_ERROR);
        }
    };
    if !metadata.is_dir() {
        eprintln!("Error: path {:?} is not a directory", args.path);
        return Ok(EXIT_ERROR);
    }

    let extractor = match build_extractor(args) {
        Ok(extractor) => extractor,
        Err(code) => return Ok(code),
    };

    let report = Walker::new(extractor.as_ref())
        .parallel(args.parallel)
        .walk(&args.path);

    report::write_json(&report)?;

    Ok(EXIT_SUCCESS)
}

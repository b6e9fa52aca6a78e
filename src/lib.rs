//! declscan - declaration extraction engine.
//!
//! declscan recovers declaration-level facts (function and class/method
//! signatures) from a tree of source files and aggregates them into one
//! ordered JSON report for downstream tools: documentation generators,
//! code-search indexes, static-analysis dashboards. The report is a
//! projection of the source text; nothing is resolved, expanded, or
//! validated.
//!
//! # Architecture
//!
//! - `extract`: the data model, file classification, and two
//!   interchangeable extraction strategies (a text heuristic and a
//!   tree-sitter AST traversal)
//! - `walk`: deterministic recursive tree walking and per-file dispatch
//! - `report`: JSON serialization of the aggregated report
//! - `cli`: command-line surface
//!
//! Per-file failures never abort a walk: unreadable directories and
//! files are skipped with a stderr diagnostic, and a file the AST
//! strategy cannot parse stays in the report with empty fact lists.

pub mod cli;
pub mod extract;
pub mod report;
pub mod walk;

#[cfg(feature = "tree-sitter")]
pub use extract::AstExtractor;
pub use extract::{
    get_extractor, register_extractors, ClassFact, DeclarationExtractor, FileClassifier,
    FileRecord, FunctionFact, HeuristicExtractor, Report,
};
pub use walk::{ScanError, Walker};

/// Initialize all subsystems.
///
/// Call this once at startup.
pub fn init() {
    register_extractors();
}

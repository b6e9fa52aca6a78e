//! Declaration extraction: data model, file classification, and the two
//! extraction strategies.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────────┐     ┌────────────────┐
//! │ Source Files │────▶│ DeclarationExtractor │────▶│ FileRecord     │
//! └──────────────┘     │ (heuristic | ast)    │     │ (functions,    │
//!                      └──────────────────────┘     │  classes)      │
//!                                                   └────────────────┘
//! ```
//!
//! The heuristic strategy is a line/token best-effort pass for C-style
//! sources; the AST strategy is a full tree-sitter traversal for
//! C++-style sources, available when the `tree-sitter` feature is
//! compiled in. Both satisfy the same `DeclarationExtractor` contract
//! and are registered once at startup.

#[cfg(feature = "tree-sitter")]
mod ast;
mod classify;
mod facts;
mod heuristic;
mod traits;

#[cfg(feature = "tree-sitter")]
pub use ast::{AstExtractor, DEFAULT_PARSE_TIMEOUT};
pub use classify::{FileClassifier, C_SUFFIXES, CPP_SUFFIXES};
pub use facts::{ClassFact, FileRecord, FunctionFact, Report};
pub use heuristic::{HeuristicExtractor, DEFAULT_MAX_FUNCTIONS};
pub use traits::DeclarationExtractor;

use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};

/// Static storage for the heuristic extractor.
static HEURISTIC_EXTRACTOR: OnceCell<HeuristicExtractor> = OnceCell::new();

/// Static storage for the AST extractor.
#[cfg(feature = "tree-sitter")]
static AST_EXTRACTOR: OnceCell<AstExtractor> = OnceCell::new();

/// Whether extractors have been registered.
static REGISTERED: AtomicBool = AtomicBool::new(false);

/// Register the default-configured extraction strategies.
///
/// Call this once at startup. Idempotent.
pub fn register_extractors() {
    if REGISTERED.swap(true, Ordering::SeqCst) {
        return;
    }

    HEURISTIC_EXTRACTOR.get_or_init(HeuristicExtractor::new);
    #[cfg(feature = "tree-sitter")]
    AST_EXTRACTOR.get_or_init(AstExtractor::new);
}

/// Get a default-configured extractor by strategy id.
///
/// Returns None for unknown ids and for strategies not compiled in.
pub fn get_extractor(strategy_id: &str) -> Option<&'static dyn DeclarationExtractor> {
    register_extractors();

    match strategy_id {
        "heuristic" => HEURISTIC_EXTRACTOR
            .get()
            .map(|e| e as &'static dyn DeclarationExtractor),
        #[cfg(feature = "tree-sitter")]
        "ast" => AST_EXTRACTOR
            .get()
            .map(|e| e as &'static dyn DeclarationExtractor),
        _ => None,
    }
}

/// Strategy used when the caller does not request one explicitly: the
/// AST strategy when its parser capability is compiled in, otherwise
/// the heuristic fallback.
pub fn default_strategy_id() -> &'static str {
    if cfg!(feature = "tree-sitter") {
        "ast"
    } else {
        "heuristic"
    }
}

/// All strategy ids available in this build.
pub fn registered_strategies() -> Vec<&'static str> {
    let mut ids = vec!["heuristic"];
    if cfg!(feature = "tree-sitter") {
        ids.push("ast");
    }
    ids
}

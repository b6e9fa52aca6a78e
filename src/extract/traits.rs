//! Core trait for declaration extraction strategies.

use std::path::Path;

use super::{FileClassifier, FileRecord};

/// A declaration extraction strategy.
///
/// Both strategies satisfy this one contract but stay independent
/// implementations: the text heuristic tolerates anything and miscounts,
/// the AST strategy parses for real and records unparseable files with
/// empty fact lists. Their internal algorithms are never merged.
///
/// # Thread Safety
///
/// `extract` takes `&self` and must be callable from multiple threads at
/// once; strategies create per-call parsers rather than sharing one.
pub trait DeclarationExtractor: Send + Sync {
    /// Short identifier used in diagnostics and strategy selection.
    fn strategy_id(&self) -> &'static str;

    /// The classifier deciding which files this strategy reads.
    fn classifier(&self) -> &FileClassifier;

    /// Extract declaration facts from one file's contents.
    ///
    /// Total by contract: every per-file failure mode is absorbed inside
    /// the strategy (with a stderr diagnostic where the taxonomy calls
    /// for one) and a record is still returned. Callers decide whether
    /// to keep it.
    fn extract(&self, path: &Path, source: &[u8]) -> FileRecord;
}

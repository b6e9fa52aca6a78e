//! Fact structures extracted from source files.
//!
//! These are projections of the source text, not a semantic model:
//! names, types, and parameter lists are preserved verbatim as extracted,
//! never reformatted or validated. Serde field order fixes the JSON key
//! order of the wire format.

use serde::{Deserialize, Serialize};

/// A single function or method declaration.
///
/// Both extraction strategies produce this shape; each populates the
/// subset of fields it can determine and leaves the rest at neutral
/// defaults (empty string / false) so the wire schema stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionFact {
    /// Spelled name; may be empty when the strategy cannot recover one.
    pub name: String,
    /// Raw textual return/result type.
    pub return_type: String,
    /// Verbatim parameter-list text (heuristic strategy only).
    pub parameters: String,
    pub is_template: bool,
    pub is_virtual: bool,
    pub is_const: bool,
}

/// A class or struct declaration with its methods.
///
/// Only the AST strategy produces these; the heuristic strategy leaves
/// every record's class list empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFact {
    pub name: String,
    pub is_template: bool,
    /// Base class names in declaration order, empty if none.
    pub base_classes: Vec<String>,
    /// Methods declared inside the class body, in source order.
    pub methods: Vec<FunctionFact>,
}

/// Everything extracted from one source file.
///
/// `path` is the path exactly as the walk yielded it, not canonicalized.
/// Duplicates (e.g. a declaration and its definition) are both recorded;
/// a fact's only identity is its position in the owning list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    /// File-scope functions, in extraction order.
    pub functions: Vec<FunctionFact>,
    /// Classes, in extraction order (AST strategy only).
    pub classes: Vec<ClassFact>,
}

impl FileRecord {
    /// Create an empty record for a file.
    pub fn empty(path: &str) -> Self {
        Self {
            path: path.to_string(),
            functions: Vec::new(),
            classes: Vec::new(),
        }
    }
}

/// The full walk result: one record per successfully read in-scope file,
/// in filesystem-walk discovery order.
///
/// Append is the only mutation; nothing is deduplicated or sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub files: Vec<FileRecord>,
}

impl Report {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Append a record in walk order.
    pub fn push(&mut self, record: FileRecord) {
        self.files.push(record);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

//! AST-backed extraction via the tree-sitter C++ grammar.
//!
//! Each file is parsed in isolation: no include paths, no compile flags.
//! Declarations that depend on unresolved macros or missing headers may
//! come out incomplete; that is accepted, not remediated. The visitor
//! descends into every node without pruning, so nested classes and
//! functions are always found, and the current class context is threaded
//! to it explicitly rather than through an untyped handle.

use std::path::Path;
use std::time::Duration;

use tree_sitter::{Language, Node, Parser, Tree};

use super::{ClassFact, DeclarationExtractor, FileClassifier, FileRecord, FunctionFact};
use crate::walk::ScanError;

/// Wall-clock budget for parsing a single file.
///
/// Bounds pathological input; a timed-out parse is treated exactly like
/// a grammar failure and never alters successful-case output.
pub const DEFAULT_PARSE_TIMEOUT: Duration = Duration::from_secs(10);

/// Full syntax-tree extraction for C++-style sources.
///
/// Unparseable files are still recorded, with empty fact lists and a
/// stderr diagnostic. `is_virtual` and `is_const` are carried in the
/// schema but stay false; see DESIGN.md.
pub struct AstExtractor {
    classifier: FileClassifier,
    language: Language,
    parse_timeout: Duration,
}

impl AstExtractor {
    pub fn new() -> Self {
        Self {
            classifier: FileClassifier::cpp_style(),
            language: tree_sitter_cpp::LANGUAGE.into(),
            parse_timeout: DEFAULT_PARSE_TIMEOUT,
        }
    }

    /// Replace the default `.cpp`/`.hpp`/`.cc`/`.hh` classifier.
    pub fn with_classifier(mut self, classifier: FileClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the per-file parse timeout.
    pub fn parse_timeout(mut self, timeout: Duration) -> Self {
        self.parse_timeout = timeout;
        self
    }

    fn create_parser(&self) -> anyhow::Result<Parser> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        parser.set_timeout_micros(self.parse_timeout.as_micros() as u64);
        Ok(parser)
    }

    fn parse_tree(&self, source: &[u8]) -> Option<Tree> {
        let mut parser = self.create_parser().ok()?;
        parser.parse(source, None)
    }

    /// Depth-first visit of every descendant node.
    ///
    /// `class_ctx` is the class whose body is currently being traversed,
    /// if any; callables found under it become its methods instead of
    /// file-scope functions.
    fn visit(
        &self,
        node: Node,
        source: &[u8],
        record: &mut FileRecord,
        mut class_ctx: Option<&mut ClassFact>,
    ) {
        match node.kind() {
            "function_definition" | "declaration" | "field_declaration" => {
                if let Some(fact) = Self::function_fact(node, source) {
                    match class_ctx.as_deref_mut() {
                        Some(class) => class.methods.push(fact),
                        None => record.functions.push(fact),
                    }
                }
            }
            "class_specifier" | "struct_specifier" => {
                if let (Some(name), Some(body)) = (
                    node.child_by_field_name("name"),
                    node.child_by_field_name("body"),
                ) {
                    let mut class = ClassFact {
                        name: node_text(name, source),
                        is_template: Self::in_template(node),
                        base_classes: Self::base_classes(node, source),
                        methods: Vec::new(),
                    };

                    // Reserve the outer class's slot so it precedes any
                    // class nested inside its body.
                    let slot = record.classes.len();
                    let mut cursor = body.walk();
                    for child in body.children(&mut cursor) {
                        self.visit(child, source, record, Some(&mut class));
                    }
                    record.classes.insert(slot, class);
                    return;
                }
            }
            _ => {}
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.visit(child, source, record, class_ctx.as_deref_mut());
        }
    }

    /// Build a fact from a node that declares or defines a callable.
    ///
    /// Returns None when the node's declarator chain carries no function
    /// declarator (plain variables, typedefs) or no recoverable name
    /// (function-pointer declarators).
    fn function_fact(node: Node, source: &[u8]) -> Option<FunctionFact> {
        let declarator = Self::function_declarator(node)?;
        let name = Self::declarator_name(declarator, source)?;
        let return_type = node
            .child_by_field_name("type")
            .map(|t| node_text(t, source))
            .unwrap_or_default();

        Some(FunctionFact {
            name,
            return_type,
            parameters: String::new(),
            is_template: Self::in_template(node),
            is_virtual: false,
            is_const: false,
        })
    }

    /// Descend the declarator chain to a function declarator, skipping
    /// pointer/reference wrappers (`int* f()`, `int& f()`).
    fn function_declarator(node: Node) -> Option<Node> {
        let mut declarator = node.child_by_field_name("declarator")?;
        loop {
            match declarator.kind() {
                "function_declarator" => return Some(declarator),
                "pointer_declarator" | "reference_declarator" => {
                    declarator = declarator.child_by_field_name("declarator")?;
                }
                _ => return None,
            }
        }
    }

    fn declarator_name(function_declarator: Node, source: &[u8]) -> Option<String> {
        let name = function_declarator.child_by_field_name("declarator")?;
        match name.kind() {
            "identifier" | "field_identifier" | "qualified_identifier" | "destructor_name"
            | "operator_name" | "template_function" => Some(node_text(name, source)),
            _ => None,
        }
    }

    /// Whether the declaration sits directly under a template declaration.
    fn in_template(node: Node) -> bool {
        node.parent()
            .is_some_and(|p| p.kind() == "template_declaration")
    }

    /// Base class names from the base-class clause, declaration order.
    fn base_classes(class_node: Node, source: &[u8]) -> Vec<String> {
        let mut bases = Vec::new();
        let mut cursor = class_node.walk();
        for child in class_node.children(&mut cursor) {
            if child.kind() != "base_class_clause" {
                continue;
            }
            let mut base_cursor = child.walk();
            for base in child.named_children(&mut base_cursor) {
                if base.kind() == "access_specifier" {
                    continue;
                }
                bases.push(node_text(base, source));
            }
        }
        bases
    }
}

fn node_text(node: Node, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or("").to_string()
}

impl Default for AstExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationExtractor for AstExtractor {
    fn strategy_id(&self) -> &'static str {
        "ast"
    }

    fn classifier(&self) -> &FileClassifier {
        &self.classifier
    }

    fn extract(&self, path: &Path, source: &[u8]) -> FileRecord {
        let mut record = FileRecord::empty(&path.to_string_lossy());

        let tree = match self.parse_tree(source) {
            Some(tree) => tree,
            None => {
                // The file stays in the report with empty fact lists.
                eprintln!(
                    "Warning: {}",
                    ScanError::ParseFailure {
                        path: record.path.clone(),
                    }
                );
                return record;
            }
        };

        self.visit(tree.root_node(), source, &mut record, None);
        record
    }
}

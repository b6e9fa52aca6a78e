//! Best-effort line/token extraction, used when no real parser is
//! available.
//!
//! The algorithm is intentionally naive and its imprecision is part of
//! the contract: any line containing a parenthesized expression after
//! `//`-comment truncation is treated as a function declaration, so
//! function calls and `if` conditions are misclassified on purpose.
//! Downstream consumers rely on this exact behavior; do not "fix" it
//! here.

use std::path::Path;

use super::{DeclarationExtractor, FileClassifier, FileRecord, FunctionFact};

/// Default cap on functions recorded per file.
///
/// A deliberate resource bound: once hit, further candidates in the
/// file are dropped silently.
pub const DEFAULT_MAX_FUNCTIONS: usize = 1000;

/// Line/token-based extraction for C-style sources.
///
/// Never fails and never emits classes. Qualifier booleans stay false;
/// the parameter list is recorded verbatim.
pub struct HeuristicExtractor {
    classifier: FileClassifier,
    max_functions: usize,
}

impl HeuristicExtractor {
    pub fn new() -> Self {
        Self {
            classifier: FileClassifier::c_style(),
            max_functions: DEFAULT_MAX_FUNCTIONS,
        }
    }

    /// Replace the default `.c`/`.h` classifier.
    pub fn with_classifier(mut self, classifier: FileClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the per-file function cap.
    pub fn max_functions(mut self, max_functions: usize) -> Self {
        self.max_functions = max_functions;
        self
    }

    /// Parse one candidate line into a fact.
    ///
    /// Tokenizing on whitespace and `(` yields the return type (first
    /// token) and the name (second token, possibly empty). The parameter
    /// text is the span between the first `(` and the last `)` on the
    /// line; nested parentheses are not balanced, so a line with an inner
    /// call mis-parses. That is accepted.
    fn parse_candidate(line: &str) -> FunctionFact {
        let mut tokens = line
            .split(|c: char| c.is_whitespace() || c == '(')
            .filter(|t| !t.is_empty());
        let return_type = tokens.next().unwrap_or("").to_string();
        let name = tokens.next().unwrap_or("").to_string();

        let parameters = match (line.find('('), line.rfind(')')) {
            (Some(open), Some(close)) if open < close => line[open + 1..close].to_string(),
            _ => String::new(),
        };

        FunctionFact {
            name,
            return_type,
            parameters,
            ..Default::default()
        }
    }
}

impl Default for HeuristicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationExtractor for HeuristicExtractor {
    fn strategy_id(&self) -> &'static str {
        "heuristic"
    }

    fn classifier(&self) -> &FileClassifier {
        &self.classifier
    }

    fn extract(&self, path: &Path, source: &[u8]) -> FileRecord {
        let text = String::from_utf8_lossy(source);
        let mut record = FileRecord::empty(&path.to_string_lossy());

        for raw_line in text.lines() {
            // Truncate at the first line-comment marker. Block comments
            // and string literals containing "//" are not recognized.
            let line = match raw_line.find("//") {
                Some(idx) => &raw_line[..idx],
                None => raw_line,
            };

            if !(line.contains('(') && line.contains(')')) {
                continue;
            }
            if record.functions.len() >= self.max_functions {
                break;
            }
            record.functions.push(Self::parse_candidate(line));
        }

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(source: &str) -> FileRecord {
        HeuristicExtractor::new().extract(Path::new("test.c"), source.as_bytes())
    }

    #[test]
    fn test_simple_declaration() {
        let record = extract("int add(int a, int b)\n");

        assert_eq!(record.functions.len(), 1);
        let fact = &record.functions[0];
        assert_eq!(fact.name, "add");
        assert_eq!(fact.return_type, "int");
        assert_eq!(fact.parameters, "int a, int b");
        assert!(!fact.is_template);
        assert!(!fact.is_virtual);
        assert!(!fact.is_const);
    }

    #[test]
    fn test_call_is_misclassified() {
        // A call site is recorded as a declaration; the tokenizer lands
        // on "x," as the name. Compatibility requires keeping this.
        let record = extract("foo(x, y);\n");

        assert_eq!(record.functions.len(), 1);
        let fact = &record.functions[0];
        assert_eq!(fact.name, "x,");
        assert_eq!(fact.return_type, "foo");
        assert_eq!(fact.parameters, "x, y");
    }

    #[test]
    fn test_comment_truncation() {
        let source = "\
// int hidden(int a)
int visible(void) // trailing comment with parens ()
no parens here
";
        let record = extract(source);

        assert_eq!(record.functions.len(), 1);
        assert_eq!(record.functions[0].name, "visible");
        assert_eq!(record.functions[0].parameters, "void");
    }

    #[test]
    fn test_line_without_both_parens_skipped() {
        let record = extract("int broken(int a\nint fine()\n");

        assert_eq!(record.functions.len(), 1);
        assert_eq!(record.functions[0].name, "fine");
        assert_eq!(record.functions[0].parameters, "");
    }

    #[test]
    fn test_empty_name_when_unparseable() {
        let record = extract("(x)\n");

        assert_eq!(record.functions.len(), 1);
        assert_eq!(record.functions[0].return_type, "x)");
        assert_eq!(record.functions[0].name, "");
        assert_eq!(record.functions[0].parameters, "x");
    }

    #[test]
    fn test_function_cap_silently_drops_excess() {
        let mut source = String::new();
        for i in 0..5 {
            source.push_str(&format!("int f{}(void)\n", i));
        }

        let extractor = HeuristicExtractor::new().max_functions(3);
        let record = extractor.extract(Path::new("test.c"), source.as_bytes());

        // First-seen order, exactly the cap's worth, no error signaled.
        assert_eq!(record.functions.len(), 3);
        assert_eq!(record.functions[0].name, "f0");
        assert_eq!(record.functions[2].name, "f2");
    }

    #[test]
    fn test_never_emits_classes() {
        let record = extract("struct Point {};\nint area(struct Point p)\n");
        assert!(record.classes.is_empty());
    }
}

use std::collections::BTreeSet;
use std::fmt;

/// The two diagnostic levels that make it into a report.
///
/// Every other level cargo emits (`note`, `help`, `failure-note`, ...) is
/// dropped by the parser before an entry is ever built.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Maps a raw `level` string to a severity. Matching is exact.
    ///
    /// # Example
    /// ```
    /// use cargo_ediag::Severity;
    ///
    /// assert_eq!(Severity::from_level("error"), Some(Severity::Error));
    /// assert_eq!(Severity::from_level("Warning"), None);
    /// assert_eq!(Severity::from_level("note"), None);
    /// ```
    pub fn from_level(level: &str) -> Option<Self> {
        match level {
            "error" => Some(Severity::Error),
            "warning" => Some(Severity::Warning),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted compiler diagnostic.
///
/// `file_name` and `line_start` are kept as text so that whatever the span
/// carried can be echoed back unchanged.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub severity: Severity,
    pub file_name: String,
    pub line_start: String,
    pub message: String,
}

impl DiagnosticEntry {
    /// Renders the entry as `level|file_name:line_start|message`.
    ///
    /// Nothing is escaped; a message containing `|` stays as-is.
    ///
    /// # Example
    /// ```
    /// use cargo_ediag::{DiagnosticEntry, Severity};
    ///
    /// let entry = DiagnosticEntry {
    ///     severity: Severity::Error,
    ///     file_name: "src/main.rs".to_string(),
    ///     line_start: "10".to_string(),
    ///     message: "mismatched types".to_string(),
    /// };
    /// assert_eq!(entry.formatted(), "error|src/main.rs:10|mismatched types");
    /// ```
    pub fn formatted(&self) -> String {
        format!(
            "{}|{}:{}|{}",
            self.severity, self.file_name, self.line_start, self.message
        )
    }
}

impl fmt::Display for DiagnosticEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Errors and warnings collected over a whole run.
///
/// Both sets hold formatted entries, so two diagnostics that render to the
/// same line are stored once. Iteration is in byte order of the rendered line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticSets {
    pub errors: BTreeSet<String>,
    pub warnings: BTreeSet<String>,
}

impl DiagnosticSets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes an entry into the set matching its severity.
    /// Returns `false` if the same line was already present.
    pub fn insert(&mut self, entry: &DiagnosticEntry) -> bool {
        let line = entry.formatted();
        match entry.severity {
            Severity::Error => self.errors.insert(line),
            Severity::Warning => self.warnings.insert(line),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

impl Extend<DiagnosticEntry> for DiagnosticSets {
    fn extend<T: IntoIterator<Item = DiagnosticEntry>>(&mut self, iter: T) {
        for entry in iter {
            self.insert(&entry);
        }
    }
}

impl FromIterator<DiagnosticEntry> for DiagnosticSets {
    fn from_iter<T: IntoIterator<Item = DiagnosticEntry>>(iter: T) -> Self {
        let mut sets = DiagnosticSets::new();
        sets.extend(iter);
        sets
    }
}

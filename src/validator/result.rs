//! Accumulated validation diagnostics
//!
//! Every finding carries a [`Severity`], a [`DiagnosticKind`] with a stable
//! code, a message and the rendered [`ValidatorContext`] where it was found.
//!
//! # Diagnostic Codes
//!
//! - `G101`: MissingReference - an identifier names an absent entity
//! - `G102`: MissingRequiredField - a required property is null or absent
//! - `G103`: MalformedMapping - a mapping entry has no target identifier
//! - `G104`: TypeShapeWarning - a value has an unexpected but usable shape
//! - `G105`: UnsupportedDefault - a recognized but undefined default was requested
//! - `G106`: InvalidValue - a property violates a domain constraint
//! - `G107`: CircularReference - the node hierarchy contains a cycle

use std::fmt;

use super::context::ValidatorContext;

/// Severity of a diagnostic
///
/// Only errors make a document unusable; warnings never block downstream use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// The document is not usable as-is
    Error,
    /// Suspicious but usable
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
            Severity::Warning => f.write_str("warning"),
        }
    }
}

/// Category of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// An identifier field names an entity absent from its collection
    MissingReference,
    /// A required identifier or scalar is absent
    MissingRequiredField,
    /// A mapping entry exists without a target identifier
    MalformedMapping,
    /// A value's shape does not match its declared type but can be coerced
    TypeShapeWarning,
    /// A recognized convention whose default is not defined
    UnsupportedDefault,
    /// A value is outside its permitted domain
    InvalidValue,
    /// The node hierarchy contains a cycle
    CircularReference,
}

impl DiagnosticKind {
    /// Stable diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingReference => "G101",
            DiagnosticKind::MissingRequiredField => "G102",
            DiagnosticKind::MalformedMapping => "G103",
            DiagnosticKind::TypeShapeWarning => "G104",
            DiagnosticKind::UnsupportedDefault => "G105",
            DiagnosticKind::InvalidValue => "G106",
            DiagnosticKind::CircularReference => "G107",
        }
    }
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Error or warning
    pub severity: Severity,
    /// Category
    pub kind: DiagnosticKind,
    /// Human-readable description
    pub message: String,
    /// Rendered path of the context the finding was reported in
    pub context: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.code(), self.severity)?;
        if !self.context.is_empty() {
            write!(f, " at {}", self.context)?;
        }
        write!(f, ": {}", self.message)
    }
}

/// The ordered list of findings from a validation
///
/// Entries are kept in the order they were reported. A result merged into
/// another is appended after the entries already present, so checks made by a
/// caller appear before the checks of the entities it references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidatorResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn add_error(
        &mut self,
        kind: DiagnosticKind,
        message: impl Into<String>,
        context: &ValidatorContext,
    ) {
        self.push(Severity::Error, kind, message.into(), context);
    }

    /// Record a warning
    pub fn add_warning(
        &mut self,
        kind: DiagnosticKind,
        message: impl Into<String>,
        context: &ValidatorContext,
    ) {
        self.push(Severity::Warning, kind, message.into(), context);
    }

    fn push(
        &mut self,
        severity: Severity,
        kind: DiagnosticKind,
        message: String,
        context: &ValidatorContext,
    ) {
        self.diagnostics.push(Diagnostic {
            severity,
            kind,
            message,
            context: context.render(),
        });
    }

    /// Append all entries of `other`
    pub fn merge(&mut self, other: ValidatorResult) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Whether at least one error was recorded
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Whether at least one warning was recorded
    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning)
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// All entries in report order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Error entries in report order
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    /// Warning entries in report order
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    /// Number of errors
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Number of warnings
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Entries of the given kind in report order
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.kind == kind)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    /// Render all entries, errors before warnings
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ValidatorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("No errors or warnings");
        }
        let mut sorted: Vec<&Diagnostic> = self.diagnostics.iter().collect();
        // Stable sort: report order is kept within a severity
        sorted.sort_by_key(|d| d.severity);
        write!(
            f,
            "{} error(s), {} warning(s)",
            self.error_count(),
            self.warning_count()
        )?;
        for diagnostic in sorted {
            write!(f, "\n  {}", diagnostic)?;
        }
        Ok(())
    }
}

impl Extend<Diagnostic> for ValidatorResult {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.diagnostics.extend(iter);
    }
}

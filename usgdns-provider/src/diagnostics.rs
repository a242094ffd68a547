//! Diagnostics surfaced to the host tool.

use thiserror::Error;

/// A single labeled problem reported back to the host tool.
///
/// `summary` is the short label the host shows in its overview, `detail` the
/// full explanation, usually ending with the underlying error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{summary}: {detail}")]
pub struct Diagnostic {
    /// Short human-readable label.
    pub summary: String,
    /// Full explanation of the problem.
    pub detail: String,
    /// Configuration attribute the problem is tied to, when there is one.
    pub attribute: Option<&'static str>,
}

impl Diagnostic {
    /// Creates a diagnostic not tied to a configuration attribute.
    pub fn new(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    /// Creates a diagnostic tied to a configuration attribute.
    pub fn for_attribute(
        attribute: &'static str,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            detail: detail.into(),
            attribute: Some(attribute),
        }
    }
}

/// Ordered collection of diagnostics.
///
/// Validation appends every problem it finds before reporting, so the user
/// sees all configuration errors in one pass instead of fixing them one at a
/// time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Appends a diagnostic not tied to an attribute.
    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.entries.push(Diagnostic::new(summary, detail));
    }

    /// Appends a diagnostic tied to a configuration attribute.
    pub fn add_attribute_error(
        &mut self,
        attribute: &'static str,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.entries
            .push(Diagnostic::for_attribute(attribute, summary, detail));
    }

    /// Whether any diagnostic has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Recorded diagnostics, in the order they were added.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Consumes the collection, yielding the recorded diagnostics.
    #[must_use]
    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            entries: vec![diagnostic],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_single_diagnostic() {
        let d = Diagnostic::new("Error creating record", "boom");
        assert_eq!(d.to_string(), "Error creating record: boom");
    }

    #[test]
    fn attribute_diagnostic_keeps_attribute() {
        let d = Diagnostic::for_attribute("url", "Missing URL", "set it");
        assert_eq!(d.attribute, Some("url"));
    }

    #[test]
    fn collection_preserves_order() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.add_attribute_error("url", "Missing URL", "set it");
        diagnostics.add_attribute_error("token", "Missing token", "set it");

        let entries = diagnostics.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].attribute, Some("url"));
        assert_eq!(entries[1].attribute, Some("token"));
    }

    #[test]
    fn empty_collection_has_no_errors() {
        assert!(!Diagnostics::default().has_errors());
    }

    #[test]
    fn display_joins_entries() {
        let mut diagnostics = Diagnostics::default();
        diagnostics.add_error("A", "a");
        diagnostics.add_error("B", "b");
        assert_eq!(diagnostics.to_string(), "A: a; B: b");
    }
}

//! Diagnostic - Structured reporting of configuration problems
//!
//! Validators and schema checks report problems as diagnostics rather than
//! errors: a diagnostic carries the path of the offending attribute, a short
//! summary, and a detail message, and is surfaced to the user by the caller
//! before any remote call is attempted.

use serde::{Deserialize, Serialize};

/// How severe a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Path to an attribute within a resource configuration
///
/// Built from named steps and list indexes, rendered dot-joined
/// (e.g., `instance_configuration.cpu` or `event_selectors[2]`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AttributePath {
    segments: Vec<PathSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum PathSegment {
    Attribute(String),
    Index(usize),
}

impl AttributePath {
    pub fn root(attribute: impl Into<String>) -> Self {
        Self {
            segments: vec![PathSegment::Attribute(attribute.into())],
        }
    }

    pub fn attribute(mut self, name: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Attribute(name.into()));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Index(index));
        self
    }
}

impl std::fmt::Display for AttributePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Attribute(name) => {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", name)?;
                }
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// A single configuration problem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub path: AttributePath,
    pub summary: String,
    pub detail: String,
}

impl Diagnostic {
    /// An error-severity diagnostic for an attribute
    pub fn attribute_error(
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Error,
            path,
            summary: summary.into(),
            detail: detail.into(),
        }
    }

    /// A warning-severity diagnostic for an attribute
    pub fn attribute_warning(
        path: AttributePath,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            path,
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}: {} ({})",
            self.severity, self.path, self.summary, self.detail
        )
    }
}

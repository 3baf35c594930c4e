//! Positional context for diagnostics
//!
//! A [`ValidatorContext`] is a breadcrumb trail such as
//! `techniques[t0].uniform u_color.parameters[color]`. Extending a context
//! allocates one new segment that points at its parent; the parent itself is
//! never modified, so contexts can be shared freely between checks and
//! threads.

use std::fmt;
use std::sync::Arc;

/// Separator between rendered path segments
pub const SEGMENT_SEPARATOR: &str = ".";

#[derive(Debug)]
struct Segment {
    parent: Option<Arc<Segment>>,
    label: String,
}

/// An immutable, chainable path into the document graph
#[derive(Debug, Clone, Default)]
pub struct ValidatorContext {
    head: Option<Arc<Segment>>,
}

impl ValidatorContext {
    /// The empty context at the document root
    pub fn root() -> Self {
        Self { head: None }
    }

    /// Create a new context that extends this one by `segment`
    ///
    /// # Example
    ///
    /// ```
    /// use gltf_validator::ValidatorContext;
    ///
    /// let technique = ValidatorContext::root().with("techniques[t0]");
    /// let uniform = technique.with("uniform u_color");
    /// assert_eq!(uniform.to_string(), "techniques[t0].uniform u_color");
    /// assert_eq!(technique.to_string(), "techniques[t0]");
    /// ```
    pub fn with(&self, segment: impl Into<String>) -> Self {
        Self {
            head: Some(Arc::new(Segment {
                parent: self.head.clone(),
                label: segment.into(),
            })),
        }
    }

    /// The context this one was extended from, or `None` at the root
    pub fn parent(&self) -> Option<Self> {
        self.head.as_ref().map(|segment| Self {
            head: segment.parent.clone(),
        })
    }

    /// Whether this is the document root
    pub fn is_root(&self) -> bool {
        self.head.is_none()
    }

    /// Number of segments in the path
    pub fn depth(&self) -> usize {
        self.iter_rev().count()
    }

    /// Segments from the root down to this context
    pub fn segments(&self) -> Vec<&str> {
        let mut segments: Vec<&str> = self.iter_rev().collect();
        segments.reverse();
        segments
    }

    /// The fully rendered path
    pub fn render(&self) -> String {
        self.segments().join(SEGMENT_SEPARATOR)
    }

    fn iter_rev(&self) -> impl Iterator<Item = &str> {
        std::iter::successors(self.head.as_deref(), |segment| segment.parent.as_deref())
            .map(|segment| segment.label.as_str())
    }
}

impl fmt::Display for ValidatorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl PartialEq for ValidatorContext {
    fn eq(&self, other: &Self) -> bool {
        self.iter_rev().eq(other.iter_rev())
    }
}

impl Eq for ValidatorContext {}

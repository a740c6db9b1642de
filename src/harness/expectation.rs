//! # Expectation Types
//!
//! The typed form of the annotations embedded in a clox test script. Each
//! category is an ordered sequence; position within a sequence is what the
//! verdict engine compares against, so order always follows source order.

/// A single annotation extracted from a test script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// `// expect: VALUE`
    ExpectedOutput(String),
    /// `// [line N] Error ...` or `// Error ...`; always carries a `[line N]` prefix.
    ExpectedParseError(String),
    /// `// expect runtime error: VALUE`
    ExpectedRuntimeError(String),
}

/// The three expectation sequences derived from one script.
///
/// Nothing here enforces that only one of the error sequences is populated.
/// A script declaring both gets two independent verdicts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpectationSet {
    pub output: Vec<String>,
    pub parse_errors: Vec<String>,
    pub runtime_errors: Vec<String>,
}

impl ExpectationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an annotation to the sequence for its category.
    pub fn push(&mut self, annotation: Annotation) {
        match annotation {
            Annotation::ExpectedOutput(text) => self.output.push(text),
            Annotation::ExpectedParseError(text) => self.parse_errors.push(text),
            Annotation::ExpectedRuntimeError(text) => self.runtime_errors.push(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty() && self.parse_errors.is_empty() && self.runtime_errors.is_empty()
    }

    /// Total number of annotations across all categories.
    pub fn len(&self) -> usize {
        self.output.len() + self.parse_errors.len() + self.runtime_errors.len()
    }
}

impl FromIterator<Annotation> for ExpectationSet {
    fn from_iter<I: IntoIterator<Item = Annotation>>(iter: I) -> Self {
        let mut set = ExpectationSet::new();
        for annotation in iter {
            set.push(annotation);
        }
        set
    }
}

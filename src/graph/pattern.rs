//! Triple patterns with wildcard positions.

use oxrdf::{NamedNode, Subject, Term, TripleRef};

/// A subject/predicate/object pattern; unset positions match any term.
#[derive(Debug, Clone, Default)]
pub struct TriplePattern {
    subject: Option<Subject>,
    predicate: Option<NamedNode>,
    object: Option<Term>,
}

impl TriplePattern {
    /// A pattern matching every triple.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constrain the subject position.
    pub fn with_subject(mut self, subject: impl Into<Subject>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Constrain the predicate position.
    pub fn with_predicate(mut self, predicate: impl Into<NamedNode>) -> Self {
        self.predicate = Some(predicate.into());
        self
    }

    /// Constrain the object position.
    pub fn with_object(mut self, object: impl Into<Term>) -> Self {
        self.object = Some(object.into());
        self
    }

    /// Whether the triple satisfies every bound position.
    pub fn matches(&self, triple: TripleRef<'_>) -> bool {
        self.subject
            .as_ref()
            .map_or(true, |s| s.as_ref() == triple.subject)
            && self
                .predicate
                .as_ref()
                .map_or(true, |p| p.as_ref() == triple.predicate)
            && self
                .object
                .as_ref()
                .map_or(true, |o| o.as_ref() == triple.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{Literal, NamedNode, Triple};

    fn triple() -> Triple {
        Triple::new(
            NamedNode::new_unchecked("http://example.org/s"),
            NamedNode::new_unchecked("http://example.org/p"),
            Literal::new_simple_literal("o"),
        )
    }

    #[test]
    fn empty_pattern_matches_everything() {
        assert!(TriplePattern::new().matches(triple().as_ref()));
    }

    #[test]
    fn bound_positions_must_match() {
        let pattern =
            TriplePattern::new().with_predicate(NamedNode::new_unchecked("http://example.org/p"));
        assert!(pattern.matches(triple().as_ref()));

        let other =
            TriplePattern::new().with_predicate(NamedNode::new_unchecked("http://example.org/q"));
        assert!(!other.matches(triple().as_ref()));
    }

    #[test]
    fn fully_bound_pattern_matches_one_triple() {
        let pattern = TriplePattern::new()
            .with_subject(NamedNode::new_unchecked("http://example.org/s"))
            .with_predicate(NamedNode::new_unchecked("http://example.org/p"))
            .with_object(Literal::new_simple_literal("o"));
        assert!(pattern.matches(triple().as_ref()));

        let mismatched = TriplePattern::new()
            .with_subject(NamedNode::new_unchecked("http://example.org/s"))
            .with_predicate(NamedNode::new_unchecked("http://example.org/p"))
            .with_object(Literal::new_simple_literal("other"));
        assert!(!mismatched.matches(triple().as_ref()));
    }
}

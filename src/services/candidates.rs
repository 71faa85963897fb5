//! Candidate list assembly.

use std::collections::HashSet;

use crate::error::AppError;
use crate::graph::GraphSource;
use crate::models::{Candidate, Category};
use crate::queries::templates_for;
use crate::state::SelectionStore;

/// Joins the category's display projection with the persisted selection
/// to produce the rows handed to the presentation layer.
pub struct CandidateListBuilder<'a> {
    source: Option<&'a GraphSource>,
    store: &'a SelectionStore,
}

impl<'a> CandidateListBuilder<'a> {
    /// `source` is `None` when the category has no input graph; the
    /// builder then yields an empty list instead of failing.
    pub fn new(source: Option<&'a GraphSource>, store: &'a SelectionStore) -> Self {
        Self { source, store }
    }

    /// Build the candidate list for `category`.
    ///
    /// Every display row becomes a candidate; none are filtered out.
    /// A row is preselected when its identifier appears in the persisted
    /// state (string equality on the identifier, never on display text,
    /// so rendering changes cannot disturb prior selections). Persisted
    /// identifiers that match no current row are silently ignored.
    pub fn build(&self, category: Category) -> Result<Vec<Candidate>, AppError> {
        let Some(source) = self.source else {
            return Ok(Vec::new());
        };

        let prior: HashSet<String> = self.store.read(category)?.into_iter().collect();
        let rows = templates_for(category).display(source);
        tracing::debug!(
            category = %category,
            candidates = rows.len(),
            preselected = rows.iter().filter(|r| prior.contains(&r.identifier)).count(),
            "candidate list built"
        );

        Ok(rows
            .into_iter()
            .map(|row| Candidate {
                preselected: prior.contains(&row.identifier),
                display_text: row.display_text,
                identifier: row.identifier,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{Graph, Literal, NamedNode, TripleRef};

    use crate::vocab::blueprint;

    fn labeled_source() -> GraphSource {
        let mut graph = Graph::new();
        for (iri, label) in [
            ("http://data.example.org/class/A", "Widget"),
            ("http://data.example.org/class/B", "Gadget"),
        ] {
            let subject = NamedNode::new_unchecked(iri);
            let label = Literal::new_simple_literal(label);
            graph.insert(TripleRef::new(&subject, blueprint::LABEL, &label));
        }
        GraphSource::from_graph(graph)
    }

    #[test]
    fn first_run_yields_all_rows_unselected() {
        let dir = tempfile::tempdir().unwrap();
        let store = SelectionStore::new(dir.path());
        let source = labeled_source();

        let candidates = CandidateListBuilder::new(Some(&source), &store)
            .build(Category::Classes)
            .unwrap();
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| !c.preselected));
    }

    #[test]
    fn persisted_identifiers_are_premarked() {
        let dir = tempfile::tempdir().unwrap();
        let store = SelectionStore::new(dir.path());
        store
            .write(Category::Classes, &["http://data.example.org/class/A".to_string()])
            .unwrap();
        let source = labeled_source();

        let candidates = CandidateListBuilder::new(Some(&source), &store)
            .build(Category::Classes)
            .unwrap();
        for candidate in candidates {
            assert_eq!(
                candidate.preselected,
                candidate.identifier == "http://data.example.org/class/A"
            );
        }
    }

    #[test]
    fn stale_identifiers_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = SelectionStore::new(dir.path());
        store
            .write(
                Category::Classes,
                &["http://data.example.org/class/Removed".to_string()],
            )
            .unwrap();
        let source = labeled_source();

        let candidates = CandidateListBuilder::new(Some(&source), &store)
            .build(Category::Classes)
            .unwrap();
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|c| !c.preselected));
    }

    #[test]
    fn missing_source_yields_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = SelectionStore::new(dir.path());
        let candidates = CandidateListBuilder::new(None, &store)
            .build(Category::Classes)
            .unwrap();
        assert!(candidates.is_empty());
    }
}

//! Display and reconstruction shapes for link records.

use oxrdf::{BlankNode, Graph, TripleRef};

use crate::graph::{GraphSource, TriplePattern};
use crate::vocab::blueprint;

use super::{
    object_as_subject, selected_set, term_identifier, CategoryTemplates, DisplayRow,
};

/// Link records are listed as `path label to` columns and selected by
/// the record's `path` value.
pub struct LinkTemplates;

impl CategoryTemplates for LinkTemplates {
    fn display(&self, source: &GraphSource) -> Vec<DisplayRow> {
        let graph = source.graph();
        let pattern = TriplePattern::new().with_predicate(blueprint::LINK.into_owned());

        let mut rows = Vec::new();
        for triple in source.match_pattern(&pattern) {
            let Some(record) = object_as_subject(&triple.object) else {
                continue;
            };
            let (Some(label), Some(path), Some(to)) = (
                graph.object_for_subject_predicate(record.as_ref(), blueprint::LABEL),
                graph.object_for_subject_predicate(record.as_ref(), blueprint::PATH),
                graph.object_for_subject_predicate(record.as_ref(), blueprint::TO),
            ) else {
                continue;
            };
            let path = term_identifier(path);
            let label = term_identifier(label);
            let to = term_identifier(to);
            rows.push(DisplayRow {
                display_text: format!("{path:<32}  {label:<24}  {to}"),
                identifier: path,
            });
        }
        rows
    }

    fn reconstruct(&self, source: &GraphSource, selected: &[String]) -> Graph {
        let selected = selected_set(selected);
        let graph = source.graph();
        let mut out = Graph::new();

        let pattern = TriplePattern::new().with_predicate(blueprint::LINK.into_owned());
        for triple in source.match_pattern(&pattern) {
            let Some(record) = object_as_subject(&triple.object) else {
                continue;
            };
            let (Some(label), Some(path), Some(to)) = (
                graph.object_for_subject_predicate(record.as_ref(), blueprint::LABEL),
                graph.object_for_subject_predicate(record.as_ref(), blueprint::PATH),
                graph.object_for_subject_predicate(record.as_ref(), blueprint::TO),
            ) else {
                continue;
            };
            if !selected.contains(term_identifier(path).as_str()) {
                continue;
            }
            // The record is re-emitted under a fresh owned node.
            let owned = BlankNode::default();
            out.insert(TripleRef::new(
                triple.subject.as_ref(),
                blueprint::LINK,
                &owned,
            ));
            out.insert(TripleRef::new(&owned, blueprint::LABEL, label));
            out.insert(TripleRef::new(&owned, blueprint::PATH, path));
            out.insert(TripleRef::new(&owned, blueprint::TO, to));
        }
        out
    }
}

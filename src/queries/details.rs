//! Display and reconstruction shapes for detail records and their groups.

use oxrdf::vocab::rdfs;
use oxrdf::{BlankNode, Graph, TripleRef};

use crate::graph::{GraphSource, TriplePattern};
use crate::vocab::blueprint;

use super::{
    object_as_subject, selected_set, subject_as_term, subject_identifier, term_identifier,
    CategoryTemplates, DisplayRow,
};

/// Detail records are listed as `path group label` columns and selected
/// by the record's `path` value. Records whose path is `rdfs:label` are
/// treated as the standard label field and always survive reconstruction.
pub struct DetailTemplates;

impl CategoryTemplates for DetailTemplates {
    fn display(&self, source: &GraphSource) -> Vec<DisplayRow> {
        let graph = source.graph();
        let pattern = TriplePattern::new().with_predicate(blueprint::DETAIL.into_owned());

        let mut rows = Vec::new();
        for triple in source.match_pattern(&pattern) {
            let Some(record) = object_as_subject(&triple.object) else {
                continue;
            };
            let (Some(label), Some(path)) = (
                graph.object_for_subject_predicate(record.as_ref(), blueprint::LABEL),
                graph.object_for_subject_predicate(record.as_ref(), blueprint::PATH),
            ) else {
                continue;
            };
            let path = term_identifier(path);
            let group = subject_identifier(triple.subject.as_ref());
            let label = term_identifier(label);
            rows.push(DisplayRow {
                display_text: format!("{path:<32}  {group:<40}  {label}"),
                identifier: path,
            });
        }
        rows
    }

    fn reconstruct(&self, source: &GraphSource, selected: &[String]) -> Graph {
        let selected = selected_set(selected);
        let graph = source.graph();
        let mut out = Graph::new();

        let pattern = TriplePattern::new().with_predicate(blueprint::DETAIL.into_owned());
        for triple in source.match_pattern(&pattern) {
            let group = triple.subject.as_ref();
            let Some(record) = object_as_subject(&triple.object) else {
                continue;
            };
            let (Some(detail_label), Some(detail_order), Some(detail_path)) = (
                graph.object_for_subject_predicate(record.as_ref(), blueprint::LABEL),
                graph.object_for_subject_predicate(record.as_ref(), blueprint::ORDER),
                graph.object_for_subject_predicate(record.as_ref(), blueprint::PATH),
            ) else {
                continue;
            };
            let path = term_identifier(detail_path);
            if !selected.contains(path.as_str()) && path != rdfs::LABEL.as_str() {
                continue;
            }
            // The group carries its own label and order alongside each
            // surviving record.
            let (Some(group_label), Some(group_order)) = (
                graph.object_for_subject_predicate(group, blueprint::LABEL),
                graph.object_for_subject_predicate(group, blueprint::ORDER),
            ) else {
                continue;
            };

            let owned = BlankNode::default();
            out.insert(TripleRef::new(group, blueprint::DETAIL, &owned));
            out.insert(TripleRef::new(&owned, blueprint::LABEL, detail_label));
            out.insert(TripleRef::new(&owned, blueprint::ORDER, detail_order));
            out.insert(TripleRef::new(&owned, blueprint::PATH, detail_path));
            out.insert(TripleRef::new(group, blueprint::LABEL, group_label));
            out.insert(TripleRef::new(group, blueprint::ORDER, group_order));

            // Optional join: class entities referencing this group, if any.
            for class in graph.subjects_for_predicate_object(blueprint::DETAIL_GROUP, subject_as_term(group))
            {
                out.insert(TripleRef::new(
                    class,
                    blueprint::DETAIL_GROUP,
                    subject_as_term(group),
                ));
            }
        }
        out
    }
}

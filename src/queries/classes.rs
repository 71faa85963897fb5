//! Display and reconstruction shapes for class entities.

use oxrdf::vocab::rdf;
use oxrdf::{Graph, TripleRef};

use crate::graph::{GraphSource, TriplePattern};
use crate::vocab::blueprint;

use super::{selected_set, subject_identifier, term_identifier, CategoryTemplates, DisplayRow};

/// Class entities are listed by label and selected by subject IRI.
pub struct ClassTemplates;

impl CategoryTemplates for ClassTemplates {
    fn display(&self, source: &GraphSource) -> Vec<DisplayRow> {
        let pattern = TriplePattern::new().with_predicate(blueprint::LABEL.into_owned());
        source
            .match_pattern(&pattern)
            .iter()
            .map(|triple| DisplayRow {
                display_text: term_identifier(triple.object.as_ref()),
                identifier: subject_identifier(triple.subject.as_ref()),
            })
            .collect()
    }

    fn reconstruct(&self, source: &GraphSource, selected: &[String]) -> Graph {
        let selected = selected_set(selected);
        let graph = source.graph();
        let mut out = Graph::new();

        let classes = TriplePattern::new()
            .with_predicate(rdf::TYPE.into_owned())
            .with_object(blueprint::CLASS.into_owned());
        for triple in source.match_pattern(&classes) {
            let subject = triple.subject.as_ref();
            if !selected.contains(subject_identifier(subject).as_str()) {
                continue;
            }
            // Join semantics: a bundle missing any attribute is dropped.
            let (Some(color), Some(icon), Some(label), Some(prio)) = (
                graph.object_for_subject_predicate(subject, blueprint::COLOR_INDEX),
                graph.object_for_subject_predicate(subject, blueprint::ICON),
                graph.object_for_subject_predicate(subject, blueprint::LABEL),
                graph.object_for_subject_predicate(subject, blueprint::SEARCH_PRIO),
            ) else {
                continue;
            };
            out.insert(TripleRef::new(subject, rdf::TYPE, blueprint::CLASS));
            out.insert(TripleRef::new(subject, blueprint::COLOR_INDEX, color));
            out.insert(TripleRef::new(subject, blueprint::ICON, icon));
            out.insert(TripleRef::new(subject, blueprint::LABEL, label));
            out.insert(TripleRef::new(subject, blueprint::SEARCH_PRIO, prio));
        }
        out
    }
}

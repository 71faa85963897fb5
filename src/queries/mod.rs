//! Query template registry: per-category display and reconstruction shapes.
//!
//! Each category implements the same capability pair:
//!
//! - a *display* projection that enumerates selectable rows with a
//!   human-readable rendering, and
//! - a *reconstruction* template that, given the selected identifiers,
//!   derives the minimal subgraph containing those entities and their
//!   owned structure.
//!
//! Category dispatch goes through [`templates_for`] so call sites never
//! branch on the category themselves.

mod classes;
mod details;
mod links;

use std::collections::HashSet;

use oxrdf::{Graph, Subject, SubjectRef, Term, TermRef};

pub use classes::ClassTemplates;
pub use details::DetailTemplates;
pub use links::LinkTemplates;

use crate::graph::GraphSource;
use crate::models::Category;

/// One selectable row projected by a display template.
///
/// Rows are not deduplicated: duplicate source triples yield duplicate
/// rows, mirroring the source graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub display_text: String,
    pub identifier: String,
}

/// Display/reconstruction capability pair for one category.
pub trait CategoryTemplates {
    /// Enumerate the category's selectable rows.
    fn display(&self, source: &GraphSource) -> Vec<DisplayRow>;

    /// Derive the subgraph for the selected identifiers. An empty
    /// selection yields an empty graph; identifiers that match nothing
    /// are ignored.
    fn reconstruct(&self, source: &GraphSource, selected: &[String]) -> Graph;
}

/// The strategy table keyed by category.
///
/// Identifier roles: `classes` selects on the subject IRI, `links` and
/// `details` on the link/detail record's `path` value. The same string
/// is used for preselection membership and reconstruction.
pub fn templates_for(category: Category) -> &'static dyn CategoryTemplates {
    match category {
        Category::Classes => &ClassTemplates,
        Category::Links => &LinkTemplates,
        Category::Details => &DetailTemplates,
    }
}

/// Identifier string of a term: IRI for named nodes, lexical value for
/// literals, serialized form otherwise.
fn term_identifier(term: TermRef<'_>) -> String {
    match term {
        TermRef::NamedNode(node) => node.as_str().to_string(),
        TermRef::Literal(literal) => literal.value().to_string(),
        other => other.to_string(),
    }
}

/// Identifier string of a subject: IRI for named nodes, serialized form
/// for blank nodes.
fn subject_identifier(subject: SubjectRef<'_>) -> String {
    match subject {
        SubjectRef::NamedNode(node) => node.as_str().to_string(),
        other => other.to_string(),
    }
}

/// Reuse a triple object as a subject for traversing owned records.
/// Literals cannot own structure and yield `None`.
fn object_as_subject(term: &Term) -> Option<Subject> {
    match term {
        Term::NamedNode(node) => Some(node.clone().into()),
        Term::BlankNode(node) => Some(node.clone().into()),
        _ => None,
    }
}

/// View a subject in object position, for reverse joins.
fn subject_as_term(subject: SubjectRef<'_>) -> TermRef<'_> {
    match subject {
        SubjectRef::NamedNode(node) => TermRef::NamedNode(node),
        SubjectRef::BlankNode(node) => TermRef::BlankNode(node),
    }
}

/// Membership set over the caller's selection slice.
fn selected_set(selected: &[String]) -> HashSet<&str> {
    selected.iter().map(String::as_str).collect()
}

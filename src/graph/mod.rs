//! Graph source adapter over an in-memory triple store.
//!
//! Each category session loads its own graph snapshot from the
//! category's Turtle file; nothing here mutates a loaded graph.
//! The adapter exposes three capabilities:
//!
//! - [`GraphSource::load`] - parse `_{category}.ttl` into memory
//! - [`GraphSource::match_pattern`] - triple pattern matching with wildcards
//! - [`GraphSource::reconstruct`] - derive a fresh subgraph from a
//!   category template and a set of selected identifiers

mod pattern;
mod source;

pub use pattern::TriplePattern;
pub use source::{write_graph, GraphSource};

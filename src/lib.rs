//! Triplepick - interactive subgraph curation for blueprint configuration graphs.
//!
//! Loads one category of a blueprint knowledge graph, presents its entities
//! as a checkable list with prior selections pre-checked, and on commit
//! writes the filtered subgraph plus the new selection state.

pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod queries;
pub mod services;
pub mod state;
pub mod tui;
pub mod vocab;

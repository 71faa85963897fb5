//! Commit pipeline: reconstruct, serialize, persist selection.

use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::graph::{write_graph, GraphSource};
use crate::models::Category;
use crate::queries::templates_for;
use crate::state::SelectionStore;

/// Result of a commit.
#[derive(Debug)]
pub struct CommitOutcome {
    /// Where the subgraph was written.
    pub output_path: PathBuf,
    /// Number of triples in the written subgraph.
    pub triples_written: usize,
    /// Set when the subgraph was written but the selection state could
    /// not be replaced. The subgraph on disk is kept; the stale state
    /// will resurface old selections on the next run.
    pub state_error: Option<AppError>,
}

/// Derives the selected subgraph and persists both it and the new
/// selection state. The two writes are independent side effects; there
/// is no cross-file transaction.
pub struct CommitPipeline<'a> {
    source: &'a GraphSource,
    store: &'a SelectionStore,
    dir: &'a Path,
}

impl<'a> CommitPipeline<'a> {
    pub fn new(source: &'a GraphSource, store: &'a SelectionStore, dir: &'a Path) -> Self {
        Self { source, store, dir }
    }

    /// Commit `selected` for `category`.
    ///
    /// Writes `{category}.ttl` (whole-file replacement) and then the
    /// category's state file with exactly `selected`, in the order
    /// received. An empty selection is valid and produces an empty
    /// subgraph. A state write failure after a successful subgraph
    /// write is returned on the outcome rather than as an error.
    pub fn commit(&self, category: Category, selected: &[String]) -> Result<CommitOutcome, AppError> {
        let subgraph = self
            .source
            .reconstruct(templates_for(category), selected);
        let output_path = self.dir.join(category.output_file());
        write_graph(&subgraph, &output_path)?;
        tracing::debug!(
            category = %category,
            path = %output_path.display(),
            triples = subgraph.len(),
            "subgraph written"
        );

        let state_error = self.store.write(category, selected).err();
        Ok(CommitOutcome {
            output_path,
            triples_written: subgraph.len(),
            state_error,
        })
    }
}

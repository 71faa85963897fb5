//! CLI surface for Triplepick.
//!
//! One session per invocation: load the category's graph, show the
//! selection list, commit on confirmation.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;

use crate::config::Config;
use crate::error::AppError;
use crate::graph::GraphSource;
use crate::models::Category;
use crate::services::{CandidateListBuilder, CommitPipeline};
use crate::state::SelectionStore;
use crate::tui;

/// Triplepick - blueprint configuration curator
#[derive(Parser)]
#[command(name = "triplepick")]
#[command(about = "Curate blueprint configuration subgraphs by interactive selection")]
#[command(version)]
pub struct App {
    /// Category to curate.
    #[arg(value_enum)]
    pub category: Category,

    /// Workspace directory holding the category graph and selection files.
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Print the candidate list and exit without opening the selection list.
    #[arg(long)]
    pub print: bool,

    /// Run in verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}

impl App {
    /// Run one curation session.
    pub fn run(self) -> color_eyre::Result<()> {
        let config = Config::load()?;
        let dir = config.workspace_dir(self.dir);
        tracing::info!(category = %self.category, dir = %dir.display(), "starting session");

        let source = match GraphSource::load(&dir, self.category) {
            Ok(source) => Some(source),
            Err(AppError::SourceNotFound { path }) => {
                tracing::warn!(
                    path = %path.display(),
                    "no input graph for category, candidate list is empty"
                );
                None
            }
            Err(err) => return Err(err.into()),
        };

        let store = SelectionStore::new(&dir);
        let candidates = CandidateListBuilder::new(source.as_ref(), &store).build(self.category)?;

        if self.print {
            for candidate in &candidates {
                let marker = if candidate.preselected { "x" } else { " " };
                println!("[{marker}] {}", candidate.display_text);
            }
            return Ok(());
        }

        let selected = tui::run(self.category, candidates)
            .map_err(|err| eyre!("selection list failed: {err}"))?;
        let Some(selected) = selected else {
            tracing::info!("selection aborted, nothing written");
            return Ok(());
        };

        let source = source.unwrap_or_else(GraphSource::empty);
        let pipeline = CommitPipeline::new(&source, &store, &dir);
        let outcome = pipeline.commit(self.category, &selected)?;
        tracing::info!(
            path = %outcome.output_path.display(),
            triples = outcome.triples_written,
            selected = selected.len(),
            "subgraph committed"
        );
        if let Some(err) = outcome.state_error {
            tracing::error!(
                error = %err,
                "selection state not replaced, prior selections will resurface next run"
            );
        }
        Ok(())
    }
}

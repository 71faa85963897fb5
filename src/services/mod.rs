//! Session services: candidate list assembly and the commit pipeline.

mod candidates;
mod commit;

pub use candidates::CandidateListBuilder;
pub use commit::{CommitOutcome, CommitPipeline};

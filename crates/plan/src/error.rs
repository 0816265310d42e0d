use thiserror::Error;

/// Failure taxonomy for plan reads and writes. Note reads never surface
/// here; they degrade to an empty result inside the store.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Range read of meal records failed. The caller aborts the current
    /// refresh; previously loaded state stays valid.
    #[error("failed to load meal data")]
    Fetch(#[source] sqlx::Error),

    /// A stored row no longer parses back into a record.
    #[error("stored plan record is malformed: {0}")]
    Malformed(String),

    /// The batch write failed and was rolled back; none of its records were
    /// applied.
    #[error("failed to commit plan batch")]
    Commit(#[source] sqlx::Error),

    /// Week copy found nothing to copy in the source week.
    #[error("no meals found in the source week")]
    NoData,
}

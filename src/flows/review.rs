// src/flows/review.rs

//! Review submission flow.
//!
//! Append one rating and one comment to a lecturer record in a single
//! replace-style update, then mark the local ledger and reload the full
//! list. An empty comment is a validation error, never a silent no-op.

use crate::error::{AppError, Result};
use crate::models::Lecturer;
use crate::services::DirectoryStore;
use crate::storage::ReviewLedger;

/// Upper bound of the rating scale.
pub const MAX_RATING: u8 = 10;

/// Result of a successful review submission.
#[derive(Debug)]
pub struct ReviewOutcome {
    /// The record as the store returned it after the update
    pub updated: Lecturer,

    /// Fresh full list, refetched after the update
    pub lecturers: Vec<Lecturer>,
}

/// Submit a review for one lecturer.
///
/// The ledger is written only after the remote update succeeds; any failure
/// before that leaves it untouched and the submission retryable.
pub async fn submit_review<S: DirectoryStore + ?Sized>(
    store: &S,
    ledger: &mut ReviewLedger,
    id: &str,
    rating: u8,
    comment: &str,
) -> Result<ReviewOutcome> {
    if rating > MAX_RATING {
        return Err(AppError::validation(format!(
            "rating must be between 0 and {MAX_RATING}"
        )));
    }
    let comment = comment.trim();
    if comment.is_empty() {
        return Err(AppError::validation("a comment is required"));
    }
    if ledger.contains(id) {
        return Err(AppError::AlreadyReviewed(id.to_string()));
    }

    let lecturers = store.list_lecturers().await?;
    let lecturer = lecturers
        .iter()
        .find(|l| l.id == id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    let updated = store
        .update_lecturer(id, &lecturer.with_review(rating, comment))
        .await?;

    ledger.mark(id).await?;

    // Full reload. No incremental patching.
    let lecturers = store.list_lecturers().await?;

    Ok(ReviewOutcome { updated, lecturers })
}

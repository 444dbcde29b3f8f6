// src/flows/add.rs

//! Add-lecturer flow.
//!
//! One-shot submission: validate the fields, resolve the image (a URL wins
//! over a file; a file is embedded as a `data:` URL before submission
//! proceeds), then create the record with a singleton rating history.

use std::path::PathBuf;

use crate::error::{AppError, Result};
use crate::flows::review::MAX_RATING;
use crate::models::{Lecturer, LecturerDraft};
use crate::services::DirectoryStore;
use crate::utils::image;

/// Neutral midpoint of the rating scale, used when no rating is given.
pub const DEFAULT_RATING: u8 = 5;

/// Input for a new lecturer entry.
#[derive(Debug, Clone, Default)]
pub struct NewLecturer {
    pub name: String,
    pub faculty: String,

    /// Image by link; takes precedence over `image_file`
    pub image_url: Option<String>,

    /// Image by local file, embedded as a `data:` URL
    pub image_file: Option<PathBuf>,

    /// Initial rating, 0-10
    pub rating: u8,

    /// Optional first comment
    pub comment: Option<String>,
}

/// Validate the input and build the record to submit.
///
/// Reading the image file is the only asynchronous step and completes before
/// anything is sent.
pub async fn build_draft(params: &NewLecturer) -> Result<LecturerDraft> {
    let name = params.name.trim();
    let faculty = params.faculty.trim();
    if name.is_empty() || faculty.is_empty() {
        return Err(AppError::validation("name and faculty are required"));
    }
    if params.rating > MAX_RATING {
        return Err(AppError::validation(format!(
            "rating must be between 0 and {MAX_RATING}"
        )));
    }

    let image = match params.image_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => match &params.image_file {
            Some(path) => image::file_to_data_url(path).await?,
            None => {
                return Err(AppError::validation(
                    "provide an image link or an image file",
                ));
            }
        },
    };

    let comment = params
        .comment
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from);

    Ok(LecturerDraft::new(
        name.to_string(),
        faculty.to_string(),
        image,
        params.rating,
        comment,
    ))
}

/// Create a new lecturer record. Validation failures never reach the network.
pub async fn add_lecturer<S: DirectoryStore + ?Sized>(
    store: &S,
    params: &NewLecturer,
) -> Result<Lecturer> {
    let draft = build_draft(params).await?;
    store.create_lecturer(&draft).await
}

// src/services/mod.rs

//! Remote store access.
//!
//! The store is an opaque CRUD service; `DirectoryStore` is the seam that
//! lets flows run against an in-memory store in tests.

mod directory;

pub use directory::DirectoryClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Lecturer, LecturerDraft, Message, MessageDraft};

/// The four operations the remote directory exposes.
#[async_trait]
pub trait DirectoryStore {
    /// Fetch every lecturer record.
    async fn list_lecturers(&self) -> Result<Vec<Lecturer>>;

    /// Create a new lecturer record; the store assigns the id.
    async fn create_lecturer(&self, draft: &LecturerDraft) -> Result<Lecturer>;

    /// Replace a lecturer record wholesale.
    async fn update_lecturer(&self, id: &str, lecturer: &Lecturer) -> Result<Lecturer>;

    /// Create a contact message.
    async fn create_message(&self, draft: &MessageDraft) -> Result<Message>;
}

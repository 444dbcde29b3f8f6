// src/models/mod.rs

//! Domain models for the directory client.

mod lecturer;
mod message;

// Re-export all public types
pub use lecturer::{Lecturer, LecturerDraft, format_average};
pub use message::{Message, MessageDraft};

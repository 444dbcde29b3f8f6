// src/flows/mod.rs

//! User-facing flows.
//!
//! Each flow validates first and only then touches the network; a validation
//! failure never issues a request.

pub mod add;
pub mod contact;
pub mod review;

/// In-memory store double shared by the flow tests.
#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::error::{AppError, Result};
    use crate::models::{Lecturer, LecturerDraft, Message, MessageDraft};
    use crate::services::DirectoryStore;

    #[derive(Default)]
    pub struct MemoryStore {
        pub lecturers: Mutex<Vec<Lecturer>>,
        pub messages: Mutex<Vec<Message>>,
        pub fail_updates: bool,
        pub requests: AtomicUsize,
    }

    impl MemoryStore {
        pub fn with_lecturers(lecturers: Vec<Lecturer>) -> Self {
            Self {
                lecturers: Mutex::new(lecturers),
                ..Self::default()
            }
        }

        pub fn request_count(&self) -> usize {
            self.requests.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DirectoryStore for MemoryStore {
        async fn list_lecturers(&self) -> Result<Vec<Lecturer>> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            Ok(self.lecturers.lock().unwrap().clone())
        }

        async fn create_lecturer(&self, draft: &LecturerDraft) -> Result<Lecturer> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            let mut lecturers = self.lecturers.lock().unwrap();
            let created = Lecturer {
                id: (lecturers.len() + 1).to_string(),
                name: draft.name.clone(),
                faculty: draft.faculty.clone(),
                image: draft.image.clone(),
                comments: draft.comments.clone(),
                rating: draft.rating.clone(),
                avg_score: draft.avg_score.clone(),
            };
            lecturers.push(created.clone());
            Ok(created)
        }

        async fn update_lecturer(&self, id: &str, lecturer: &Lecturer) -> Result<Lecturer> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            if self.fail_updates {
                return Err(AppError::api(500, "update lecturer"));
            }
            let mut lecturers = self.lecturers.lock().unwrap();
            let slot = lecturers
                .iter_mut()
                .find(|l| l.id == id)
                .ok_or_else(|| AppError::NotFound(id.to_string()))?;
            *slot = lecturer.clone();
            Ok(lecturer.clone())
        }

        async fn create_message(&self, draft: &MessageDraft) -> Result<Message> {
            self.requests.fetch_add(1, Ordering::SeqCst);
            let mut messages = self.messages.lock().unwrap();
            let created = Message {
                id: (messages.len() + 1).to_string(),
                email: draft.email.clone(),
                title: draft.title.clone(),
                message: draft.message.clone(),
            };
            messages.push(created.clone());
            Ok(created)
        }
    }
}

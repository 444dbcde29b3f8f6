//! Contact message structures.

use serde::{Deserialize, Serialize};

/// A contact message as submitted to the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageDraft {
    pub email: String,
    pub title: String,
    pub message: String,
}

/// A stored contact message. Write-only from this client; the id is only
/// echoed back on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub email: String,
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_wire_shape() {
        let draft = MessageDraft {
            email: "student@example.edu".to_string(),
            title: "Wrong faculty listed".to_string(),
            message: "Dr Ana moved to the Law faculty last term.".to_string(),
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["email"], "student@example.edu");
        assert_eq!(json["title"], "Wrong faculty listed");
        assert!(json.get("id").is_none());
    }
}

//! Lecturer record structures.

use serde::{Deserialize, Deserializer, Serialize};

/// A lecturer entry as stored by the remote directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lecturer {
    /// Store-assigned opaque identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Faculty the lecturer belongs to
    pub faculty: String,

    /// Image URL or inline `data:` URL
    pub image: String,

    /// Comment history, append-only
    #[serde(default)]
    pub comments: Vec<String>,

    /// Rating history, append-only, each value 0-10
    #[serde(default)]
    pub rating: Vec<u8>,

    /// Mean of `rating` formatted to one decimal place.
    ///
    /// Carried as text on the wire; early records may hold a bare number,
    /// so deserialization accepts either form.
    #[serde(rename = "avgScore", default, deserialize_with = "de_score_text")]
    pub avg_score: String,
}

impl Lecturer {
    /// Parse the stored average for numeric comparison.
    ///
    /// Unparsable scores yield NaN, which fails every `>=` threshold and so
    /// drops the record from any score-filtered view.
    pub fn average_value(&self) -> f64 {
        self.avg_score.trim().parse().unwrap_or(f64::NAN)
    }

    /// Copy of this record with one rating and one comment appended and the
    /// average recomputed.
    pub fn with_review(&self, rating: u8, comment: &str) -> Lecturer {
        let mut updated = self.clone();
        updated.rating.push(rating);
        updated.comments.push(comment.to_string());
        updated.avg_score = format_average(&updated.rating);
        updated
    }

    /// The most recent `limit` comments, newest first.
    pub fn recent_comments(&self, limit: usize) -> Vec<&str> {
        self.comments
            .iter()
            .rev()
            .take(limit)
            .map(String::as_str)
            .collect()
    }
}

/// A lecturer record as submitted to the store, before an id is assigned.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LecturerDraft {
    pub name: String,
    pub faculty: String,
    pub image: String,
    pub comments: Vec<String>,
    pub rating: Vec<u8>,
    #[serde(rename = "avgScore")]
    pub avg_score: String,
}

impl LecturerDraft {
    /// Build a draft with a singleton rating and an optional first comment.
    pub fn new(name: String, faculty: String, image: String, rating: u8, comment: Option<String>) -> Self {
        let ratings = vec![rating];
        Self {
            name,
            faculty,
            image,
            comments: comment.into_iter().collect(),
            avg_score: format_average(&ratings),
            rating: ratings,
        }
    }
}

/// Format the mean of a rating history to one decimal place.
///
/// An empty history formats as "0.0".
pub fn format_average(ratings: &[u8]) -> String {
    if ratings.is_empty() {
        return "0.0".to_string();
    }
    let sum: u32 = ratings.iter().map(|&r| u32::from(r)).sum();
    let mean = f64::from(sum) / ratings.len() as f64;
    format_score(mean)
}

/// Format a score to one decimal place.
///
/// Exact midpoints round away from zero, so a mean of 8.25 formats as "8.3".
/// `{:.1}` alone rounds ties to even and would print "8.2".
fn format_score(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// Accept `avgScore` as either a JSON string or a bare number.
fn de_score_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScoreText {
        Text(String),
        Number(f64),
    }

    Ok(match ScoreText::deserialize(deserializer)? {
        ScoreText::Text(s) => s,
        ScoreText::Number(n) => format_score(n),
    })
}

// src/render.rs

//! Text rendering of lecturer cards.
//!
//! Pure with respect to its inputs: a list snapshot plus the ledger produce
//! the full display, rebuilt from scratch on every render.

use crate::models::Lecturer;
use crate::storage::ReviewLedger;

/// How many comments a card shows; older ones are dropped.
const COMMENTS_PER_CARD: usize = 3;

/// Render the whole list as cards, one per record.
pub fn render_cards(lecturers: &[&Lecturer], ledger: &ReviewLedger) -> String {
    if lecturers.is_empty() {
        return "No lecturers found.\n".to_string();
    }

    lecturers
        .iter()
        .map(|l| render_card(l, ledger.contains(&l.id)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a single card with its review state.
pub fn render_card(lecturer: &Lecturer, already_reviewed: bool) -> String {
    let mut card = String::new();

    card.push_str(&format!(
        "[{}] {} ({})\n",
        lecturer.id, lecturer.name, lecturer.faculty
    ));
    card.push_str(&format!(
        "  score: {}/10 over {} rating(s)\n",
        lecturer.avg_score,
        lecturer.rating.len()
    ));
    card.push_str(&format!("  image: {}\n", truncate(&lecturer.image, 72)));

    let recent = lecturer.recent_comments(COMMENTS_PER_CARD);
    if recent.is_empty() {
        card.push_str("  no comments yet\n");
    } else {
        for comment in recent {
            card.push_str(&format!("  > {comment}\n"));
        }
    }

    if already_reviewed {
        card.push_str("  (already reviewed from this profile)\n");
    } else {
        card.push_str(&format!(
            "  review with: lectern review {} --rating <0-10> --comment \"...\"\n",
            lecturer.id
        ));
    }

    card
}

/// Shorten long values (inline data: URLs in particular) for display.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max).collect();
        format!("{head}…")
    }
}

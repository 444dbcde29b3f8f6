// src/filter.rs

//! Filter engine for the lecturer list.
//!
//! Pure functions over an in-memory list; safe to call on every input
//! change. Three criteria combine conjunctively: case-insensitive name
//! substring, faculty equality (or wildcard), minimum average score.

use crate::models::Lecturer;

/// Criteria for narrowing the lecturer list.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the name
    pub search: String,

    /// Required faculty; `None` is the wildcard matching every faculty
    pub faculty: Option<String>,

    /// Minimum average score, inclusive
    pub min_rating: f64,
}

impl FilterCriteria {
    /// Whether a single record satisfies every criterion.
    pub fn matches(&self, lecturer: &Lecturer) -> bool {
        let matches_name = lecturer
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let matches_faculty = self
            .faculty
            .as_ref()
            .is_none_or(|f| &lecturer.faculty == f);
        let matches_rating = lecturer.average_value() >= self.min_rating;

        matches_name && matches_faculty && matches_rating
    }
}

/// Compute the filtered view of the list. Deterministic, no side effects.
pub fn apply_filters<'a>(lecturers: &'a [Lecturer], criteria: &FilterCriteria) -> Vec<&'a Lecturer> {
    lecturers.iter().filter(|l| criteria.matches(l)).collect()
}

/// Distinct faculties present in the list, sorted.
pub fn faculties(lecturers: &[Lecturer]) -> Vec<String> {
    let mut names: Vec<String> = lecturers.iter().map(|l| l.faculty.clone()).collect();
    names.sort();
    names.dedup();
    names
}

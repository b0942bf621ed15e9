//! Fuzzy entity matching over the catalog snapshot.
//!
//! Speech-to-text output is noisy and rarely reproduces an exact course or
//! session title, so matching is tiered: exact equality first, then
//! substring containment in either direction, then word-level overlap.
//! Tier order favors precision before recall. Within a tier the first
//! match in catalog order (then session order) wins.
//!
//! All functions here are pure: no I/O, no mutation.

use crate::course::Course;

/// A matched session: the owning course and the session's zero-based
/// position. The route ordinal is `session_index + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionMatch<'a> {
    pub course: &'a Course,
    pub session_index: usize,
}

/// Finds the best-matching course for a free-text phrase.
///
/// Tier order, first match wins:
/// 1. case-insensitive exact title equality,
/// 2. case-insensitive containment in either direction,
/// 3. word-level overlap between the phrase and the title.
///
/// Returns `None` for a blank phrase or when no tier matches; the caller
/// is expected to redirect to the course list with an explanatory message.
pub fn find_course_by_name<'a>(catalog: &'a [Course], search_term: &str) -> Option<&'a Course> {
    let term = search_term.trim().to_lowercase();
    if term.is_empty() {
        return None;
    }

    if let Some(course) = catalog.iter().find(|c| c.title.to_lowercase() == term) {
        return Some(course);
    }

    if let Some(course) = catalog.iter().find(|c| {
        let title = c.title.to_lowercase();
        title.contains(&term) || term.contains(&title)
    }) {
        return Some(course);
    }

    catalog
        .iter()
        .find(|c| words_overlap(&term, &c.title.to_lowercase()))
}

/// Finds the best-matching session for a free-text phrase.
///
/// With `course_hint` set, only courses whose title contains the hint (or
/// vice versa, case-insensitively) are scanned. Sessions match on
/// case-insensitive containment in either direction or on word-level
/// overlap with their title. Scans courses in catalog order and sessions
/// in position order; the first hit wins.
pub fn find_session_by_title<'a>(
    catalog: &'a [Course],
    search_term: &str,
    course_hint: Option<&str>,
) -> Option<SessionMatch<'a>> {
    let term = search_term.trim().to_lowercase();
    if term.is_empty() {
        return None;
    }

    let hint = course_hint
        .map(|h| h.trim().to_lowercase())
        .filter(|h| !h.is_empty());

    for course in catalog {
        if let Some(ref hint) = hint {
            let title = course.title.to_lowercase();
            if !(title.contains(hint.as_str()) || hint.contains(&title)) {
                continue;
            }
        }

        for (session_index, session) in course.sessions.iter().enumerate() {
            let title = session.session_title.to_lowercase();
            if title.contains(&term) || term.contains(&title) || words_overlap(&term, &title) {
                return Some(SessionMatch {
                    course,
                    session_index,
                });
            }
        }
    }

    None
}

/// Word-level overlap: both inputs are split on whitespace and the pair
/// matches if any word from one side is a substring of any word from the
/// other. Inputs are expected to be lower-cased already.
fn words_overlap(a: &str, b: &str) -> bool {
    let a_words: Vec<&str> = a.split_whitespace().collect();
    let b_words: Vec<&str> = b.split_whitespace().collect();

    a_words
        .iter()
        .any(|aw| b_words.iter().any(|bw| aw.contains(bw) || bw.contains(aw)))
}

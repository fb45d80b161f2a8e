//! Candidate shortlisting over the two reference fields.
//!
//! Scores the mention against every contributor name and, independently,
//! every contributor employer, keeps the `top_k` best per field, then merges
//! the two lists by record index.

use std::collections::HashMap;

use crate::record::Candidate;
use crate::similarity::{token_set_ratio, truncate_score};

/// Shortlist candidate records for a normalized mention.
///
/// `names` and `employers` are parallel: index `i` in each is record `i`.
/// The result holds at most one [`Candidate`] per record, sorted by
/// descending [`Candidate::best_score`]. An empty corpus yields an empty list.
pub fn shortlist(
    normalized_mention: &str,
    names: &[String],
    employers: &[String],
    top_k: usize,
) -> Vec<Candidate> {
    debug_assert_eq!(names.len(), employers.len());

    let top_names = top_scoring(normalized_mention, names, top_k);
    let top_employers = top_scoring(normalized_mention, employers, top_k);

    // Merge by record index; slot order keeps first-seen order for stable ties.
    let mut slots: HashMap<usize, usize> = HashMap::new();
    let mut merged: Vec<Candidate> = Vec::with_capacity(top_names.len() + top_employers.len());

    for (idx, score) in top_names {
        match slots.get(&idx) {
            Some(&slot) => {
                let entry = &mut merged[slot];
                entry.name_score = entry.name_score.max(score);
            }
            None => {
                slots.insert(idx, merged.len());
                merged.push(new_candidate(idx, names, employers, score, 0));
            }
        }
    }

    for (idx, score) in top_employers {
        match slots.get(&idx) {
            Some(&slot) => {
                let entry = &mut merged[slot];
                entry.employer_score = entry.employer_score.max(score);
            }
            None => {
                slots.insert(idx, merged.len());
                merged.push(new_candidate(idx, names, employers, 0, score));
            }
        }
    }

    // `sort_by` is stable.
    merged.sort_by(|a, b| b.best_score().cmp(&a.best_score()));
    merged
}

fn new_candidate(
    index: usize,
    names: &[String],
    employers: &[String],
    name_score: u8,
    employer_score: u8,
) -> Candidate {
    Candidate {
        index,
        contributor_name: names.get(index).cloned().unwrap_or_default(),
        contributor_employer: employers.get(index).cloned().unwrap_or_default(),
        name_score,
        employer_score,
    }
}

/// Top `k` `(index, score)` pairs for one field.
///
/// Ranked on the unrounded ratio, ties in corpus order; scores are truncated
/// to integers only after the cut.
fn top_scoring(query: &str, choices: &[String], k: usize) -> Vec<(usize, u8)> {
    let mut scored: Vec<(usize, f64)> = choices
        .iter()
        .enumerate()
        .map(|(i, choice)| (i, token_set_ratio(query, choice)))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(k.min(choices.len()));
    scored
        .into_iter()
        .map(|(i, ratio)| (i, truncate_score(ratio)))
        .collect()
}

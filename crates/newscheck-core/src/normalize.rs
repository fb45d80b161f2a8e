//! Canonical form for organization names.
//!
//! Mentions pulled from news prose and the contributor name/employer fields of
//! campaign-finance records are all passed through [`normalize`] before any
//! similarity scoring, so comparisons are always like-for-like.
//!
//! # Rules
//!
//! 1. Lower-case the input.
//! 2. Drop corporate legal suffixes as whole words: `incorporated`, `inc`,
//!    `llc`, `l.l.c.`, `ltd`, `co`, `corp`, `corporation`, `plc`.
//!    "Coco" and "Costco" keep every letter.
//! 3. Replace every non-word, non-space character with a space.
//! 4. Collapse whitespace runs and trim.

use std::sync::LazyLock;

use regex::Regex;

static LEGAL_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    // `l.l.c.` ends in punctuation, so a trailing `\b` would never match it.
    Regex::new(r"\b(?:incorporated|inc|llc|ltd|co|corp|corporation|plc)\b|\bl\.l\.c\.")
        .expect("legal suffix pattern is valid")
});

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("punctuation pattern is valid"));

/// Normalise an organization name into its comparable token form.
///
/// ```
/// use newscheck_core::normalize;
///
/// assert_eq!(normalize("Acme, Inc."), "acme");
/// assert_eq!(normalize("  The  Coco-Cola   Bottling Co. "), "the coco cola bottling");
/// ```
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let without_suffix = LEGAL_SUFFIX.replace_all(&lower, "");
    let spaced = PUNCTUATION.replace_all(&without_suffix, " ");
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

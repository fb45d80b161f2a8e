//! Token-set similarity.
//!
//! Order-independent fuzzy ratio over whitespace tokens, scaled 0–100. Follows
//! the well-known `token_set_ratio` construction: split both strings into
//! token sets, compare the sorted intersection against intersection + each
//! side's leftovers, and keep the best Indel-normalized ratio. The Indel
//! distance itself comes from `rapidfuzz`.

use std::collections::BTreeSet;

use rapidfuzz::distance::indel;

/// Token-set ratio of `a` and `b` in `[0.0, 100.0]`.
///
/// - Either side empty (no tokens) scores 0.
/// - If one token set contains the other (and they share a token) the score is 100.
/// - Swapping token order on either side never changes the score.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersect: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    if !intersect.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    // BTreeSet iteration is already sorted.
    let diff_ab_joined = diff_ab.join(" ");
    let diff_ba_joined = diff_ba.join(" ");
    let ab_len = diff_ab_joined.chars().count();
    let ba_len = diff_ba_joined.chars().count();
    let sect_len = intersect.join(" ").chars().count();

    let sep = usize::from(sect_len != 0);
    let sect_ab_len = sect_len + sep + ab_len;
    let sect_ba_len = sect_len + sep + ba_len;

    let dist = indel::distance(diff_ab_joined.chars(), diff_ba_joined.chars());
    let result = norm_ratio(dist, sect_ab_len + sect_ba_len);

    if sect_len == 0 {
        return result;
    }

    // sect vs sect+diff differ only by the appended leftovers.
    let sect_ab_ratio = norm_ratio(sep + ab_len, sect_len + sect_ab_len);
    let sect_ba_ratio = norm_ratio(sep + ba_len, sect_len + sect_ba_len);

    result.max(sect_ab_ratio).max(sect_ba_ratio)
}

/// Integer score for a pair: the ratio truncated toward zero.
pub fn token_set_score(a: &str, b: &str) -> u8 {
    truncate_score(token_set_ratio(a, b))
}

/// Truncate a ratio to its integer score.
pub fn truncate_score(ratio: f64) -> u8 {
    // Guard against 99.99999 style rounding for exact ratios.
    (ratio + 1e-9).floor().clamp(0.0, 100.0) as u8
}

fn norm_ratio(dist: usize, len_sum: usize) -> f64 {
    if len_sum == 0 {
        return 100.0;
    }
    100.0 - 100.0 * dist as f64 / len_sum as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(token_set_score("acme widgets", "acme widgets"), 100);
    }

    #[test]
    fn order_independent() {
        let q = "acme fund";
        assert_eq!(
            token_set_ratio(q, "acme global fund"),
            token_set_ratio(q, "global fund acme")
        );
        assert_eq!(
            token_set_ratio("acme global fund", "global fund acme"),
            100.0
        );
        assert_eq!(
            token_set_ratio("american ireland fund", "the ireland funds"),
            token_set_ratio("the ireland funds", "american ireland fund")
        );
    }

    #[test]
    fn subset_scores_100() {
        assert_eq!(token_set_score("acme", "acme widgets holdings"), 100);
        assert_eq!(token_set_score("acme widgets holdings", "acme"), 100);
    }

    #[test]
    fn empty_side_scores_zero() {
        assert_eq!(token_set_score("", "acme"), 0);
        assert_eq!(token_set_score("acme", ""), 0);
        assert_eq!(token_set_score("   ", "  "), 0);
    }

    #[test]
    fn disjoint_tokens_use_plain_ratio() {
        // No shared tokens: plain Indel ratio of the sorted token strings.
        // "abcd" vs "abce": lcs 3, dist 2, len_sum 8 → 75.
        assert_eq!(token_set_score("abcd", "abce"), 75);
    }

    #[test]
    fn partial_overlap_known_value() {
        // intersect "american"(8), ab "ireland fund"(12), ba "cab"(3).
        // sect+ab = 21, sect+ba = 12.
        // sect vs sect+ba: dist 4 over 8 + 12 = 20 → 80.
        assert_eq!(
            token_set_score("american ireland fund", "american cab"),
            80
        );
    }

    #[test]
    fn unrelated_names_score_low() {
        assert!(token_set_score("acme widgets", "zenith pharmaceuticals") < 50);
    }

    #[test]
    fn score_bounded() {
        for (a, b) in [("a", "b"), ("x y z", "z y x"), ("alpha", "alphabet soup")] {
            let r = token_set_ratio(a, b);
            assert!((0.0..=100.0).contains(&r), "{a:?} vs {b:?} → {r}");
        }
    }

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(truncate_score(81.82), 81);
        assert_eq!(truncate_score(99.999_999_999_9), 100);
        assert_eq!(truncate_score(0.0), 0);
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        fn arb_tokens() -> impl Strategy<Value = Vec<String>> {
            prop::collection::vec("[a-z0-9]{1,8}", 0..6)
        }

        proptest! {
            #[test]
            fn token_order_is_irrelevant(query in arb_tokens(), choice in arb_tokens()) {
                let q = query.join(" ");
                let forward = choice.join(" ");
                let mut reversed = choice.clone();
                reversed.reverse();
                let backward = reversed.join(" ");
                prop_assert_eq!(token_set_ratio(&q, &forward), token_set_ratio(&q, &backward));
            }

            #[test]
            fn ratio_is_symmetric_and_bounded(a in arb_tokens(), b in arb_tokens()) {
                let (a, b) = (a.join(" "), b.join(" "));
                let ab = token_set_ratio(&a, &b);
                prop_assert_eq!(ab, token_set_ratio(&b, &a));
                prop_assert!((0.0..=100.0).contains(&ab));
            }
        }
    }
}

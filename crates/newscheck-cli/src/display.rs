//! Terminal output for the compare and shortlist commands.

use newscheck_core::{Band, CompareConfig, ReferenceCorpus, best_score, normalize};

use crate::compare::CompareResult;

const NAME_WIDTH: usize = 36;

// ── Compare ──

pub fn print_compare_result(result: &CompareResult) {
    let s = &result.run.summary;
    println!();
    println!("Comparison complete in {:.1}s", result.elapsed_secs);
    println!("  Mentions:        {}", s.mentions);
    println!("  Accepted:        {}", s.accepted);
    println!("  Needs review:    {}", s.review);
    println!("  No match (LLM):  {}", s.no_match);
    println!("  Rejected:        {}", s.rejected);
    println!("  Service calls:   {}", s.service_calls);
    println!();
    println!("Report: {}", result.report_path.display());
    if let Some(ledger) = &result.ledger_path {
        println!("Ledger: {}", ledger.display());
    }
}

// ── Shortlist ──

pub fn print_shortlist(name: &str, corpus: &ReferenceCorpus, config: &CompareConfig) {
    let normalized = normalize(name);
    let candidates = corpus.shortlist(&normalized, config.top_k);

    println!("Mention:    {name}");
    println!("Normalized: {normalized}");

    let Some(best) = best_score(&candidates) else {
        println!("No candidates ({} records).", corpus.len());
        return;
    };
    let band = Band::classify(best, &config.thresholds());
    println!(
        "Best score: {best} ({} band, low={} high={})",
        band.as_str(),
        config.low_threshold,
        config.high_threshold
    );
    println!();
    println!(
        "{:>3}  {:<w$}  {:<w$}  {:>4}  {:>4}",
        "#",
        "Contributor Name",
        "Contributor Employer",
        "name",
        "emp",
        w = NAME_WIDTH
    );
    for (i, cand) in candidates.iter().enumerate() {
        let record = &corpus.records()[cand.index];
        println!(
            "{:>3}  {:<w$}  {:<w$}  {:>4}  {:>4}",
            i + 1,
            truncate(&record.contributor_name, NAME_WIDTH),
            truncate(&record.contributor_employer, NAME_WIDTH),
            cand.name_score,
            cand.employer_score,
            w = NAME_WIDTH
        );
    }
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}

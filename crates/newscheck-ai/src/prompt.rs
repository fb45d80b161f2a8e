//! Adjudication prompt templates.

use std::fmt::Write;

use newscheck_core::{Candidate, ReferenceRecord, normalize};

// ── Prompt templates ──

pub const SYSTEM_PROMPT: &str = "\
You are a forensic document analyst. Work deterministically (temperature 0). \
Return JSON only: no markdown fences, no commentary.

Task: decide whether the company or organization named in news coverage is the SAME ENTITY \
as the source of a campaign contribution, matching either the contributor name or the \
contributor's employer.

Decisions:
- MATCH: the mention clearly refers to the same legal entity as one candidate's contributor \
name OR employer.
- NO_MATCH: the overlap is only generic words, or the entities differ.
- REVIEW: you are not sure.

Hard exclusions: NEVER match media organizations, government entities, political parties or \
political committees, or copyright holders.

Generic words are not evidence. Do not match on words such as 'American', 'International', \
'National', 'Global', 'Group', 'Fund', 'Holding', 'Company', 'LLC', 'Inc' or 'Corp' alone; \
require distinctive tokens in common.

Legal suffix differences, common abbreviations and known trade-name or parent/subsidiary \
relationships are acceptable only when the distinctive tokens align.

Counter-examples:
- 'American Ireland Fund' vs 'American Cab' => NO_MATCH (only 'American' is shared).
- 'American Ireland Fund' vs 'The Ireland Funds' => NO_MATCH (different organizations despite similar tokens).

Respond with exactly this JSON object:
{\"decision\": \"MATCH|NO_MATCH|REVIEW\", \"index\": <1-based candidate index, or 0 if none>, \"reason\": \"...\"}";

/// Build the per-mention part of the request: the mention and its numbered candidates.
///
/// Candidates are numbered from 1 in shortlist order; that number is what the
/// service returns as `index`.
pub fn build_user_prompt(
    mention_original: &str,
    mention_normalized: &str,
    candidates: &[Candidate],
    records: &[ReferenceRecord],
) -> String {
    let mut prompt = String::new();
    let _ = writeln!(prompt, "Company mention (original): {mention_original}");
    let _ = writeln!(prompt, "Company mention (normalized): {mention_normalized}");
    let _ = writeln!(prompt, "Candidates:");

    for (i, cand) in candidates.iter().enumerate() {
        let record = records.get(cand.index).cloned().unwrap_or_default();
        let _ = writeln!(
            prompt,
            "{n}. name='{name}' (norm='{name_norm}'), employer='{employer}' (norm='{employer_norm}'), \
             name_score={name_score}, employer_score={employer_score}",
            n = i + 1,
            name = record.contributor_name,
            name_norm = normalize(&record.contributor_name),
            employer = record.contributor_employer,
            employer_norm = normalize(&record.contributor_employer),
            name_score = cand.name_score,
            employer_score = cand.employer_score,
        );
    }

    prompt
}

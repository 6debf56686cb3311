//! Query classification and record ranking.
//!
//! Ranking is two-tier: a record containing the whole query as a literal
//! substring always outranks a record that only fuzzy-matches, because its
//! score starts at [`PHRASE_FLOOR`] while fuzzy scores are bounded below by
//! zero. Within each tier, lower is better: earlier phrase position, then
//! more matched tokens, then lower average edit distance.

use std::collections::HashSet;

use kural_corpus::Record;

use crate::distance::levenshtein;

/// Base score for a whole-query substring hit. Every phrase match scores
/// below every possible fuzzy score (fuzzy scores are ≥ 0).
const PHRASE_FLOOR: f64 = -100.0;

/// Per-character penalty on the phrase hit's position, so earlier
/// occurrences rank higher among phrase matches.
const PHRASE_POSITION_STEP: f64 = 0.01;

/// Weight of the unmatched-token ratio. Dominates any plausible average
/// edit distance for short tokens, so matching more of the query always
/// wins.
const UNMATCHED_WEIGHT: f64 = 10.0;

/// Ranks records against a free-text or numeric query.
///
/// - An empty (or whitespace-only) query returns no results; the caller
///   treats that as "no active search", not "match everything".
/// - A query that parses as a finite number is an exact lookup by record
///   number: one hit or none, never a fuzzy fallback. Fractional and
///   out-of-range values are still numeric queries — they simply miss.
/// - Anything else is scored per record and returned best-first. Ties keep
///   the input (document) order.
///
/// The input slice is the flattened corpus in document order; the result
/// borrows the same records.
pub fn rank<'a>(query: &str, records: &[&'a Record]) -> Vec<&'a Record> {
    let folded = query.trim().to_lowercase();
    if folded.is_empty() {
        return Vec::new();
    }

    // Finite-only: "inf" and "nan" spellings read as words, not numbers.
    if let Ok(number) = folded.parse::<f64>()
        && number.is_finite()
    {
        return records
            .iter()
            .find(|r| f64::from(r.number) == number)
            .map_or_else(Vec::new, |r| vec![*r]);
    }

    let query_tokens: Vec<&str> = folded.split_whitespace().collect();

    let mut scored: Vec<(f64, &Record)> = records
        .iter()
        .filter_map(|&record| {
            score_record(&folded, &query_tokens, &searchable_text(record))
                .map(|score| (score, record))
        })
        .collect();

    // Vec::sort_by is stable, so equal scores keep document order.
    scored.sort_by(|a, b| a.0.total_cmp(&b.0));
    scored.into_iter().map(|(_, record)| record).collect()
}

/// Builds the case-folded haystack for one record: couplet body, all
/// translation values, and all chapter-name values, joined by spaces.
fn searchable_text(record: &Record) -> String {
    let mut parts = vec![record.body.as_str()];
    parts.extend(record.translations.values());
    parts.extend(record.chapter_name.values());
    parts.join(" ").to_lowercase()
}

/// Scores one record against the folded query, or `None` when nothing
/// matched.
fn score_record(phrase: &str, query_tokens: &[&str], searchable: &str) -> Option<f64> {
    // Whole-query substring hit short-circuits the token scoring entirely.
    if let Some(byte_at) = searchable.find(phrase) {
        let char_at = searchable[..byte_at].chars().count();
        return Some(PHRASE_FLOOR + PHRASE_POSITION_STEP * char_at as f64);
    }

    // De-duplicating the text tokens is purely a speed measure: the
    // per-token minimum below is unchanged by duplicates.
    let text_tokens: HashSet<&str> = searchable.split_whitespace().collect();

    let mut matched = 0usize;
    let mut total_distance = 0usize;
    for &token in query_tokens {
        let best = best_distance(token, &text_tokens);
        if best <= tolerance(token) {
            matched += 1;
            total_distance += best;
        }
    }

    if matched == 0 {
        return None;
    }

    let unmatched_ratio = 1.0 - matched as f64 / query_tokens.len() as f64;
    let average_distance = total_distance as f64 / matched as f64;
    Some(unmatched_ratio * UNMATCHED_WEIGHT + average_distance)
}

/// Best distance from a query token to any text token: zero on a substring
/// hit (no distance computed), else the minimum Levenshtein distance.
fn best_distance(query_token: &str, text_tokens: &HashSet<&str>) -> usize {
    let mut best = usize::MAX;
    for &text_token in text_tokens {
        if text_token.contains(query_token) {
            return 0;
        }
        best = best.min(levenshtein(query_token, text_token));
    }
    best
}

/// Edit tolerance for a query token: about one edit per four characters,
/// never less than one.
fn tolerance(token: &str) -> usize {
    (token.chars().count() / 4).max(1)
}

//! Levenshtein edit distance over characters.

use std::mem;

/// Computes the Levenshtein distance between two strings.
///
/// Unit cost for insertion, deletion, and substitution, measured over
/// `char`s rather than bytes so Tamil and Devanagari text compare
/// correctly. Symmetric; zero for equal inputs; the distance from the empty
/// string is the other string's character count.
///
/// O(a·b) time, two rolling rows of O(b) space. Token lengths here are
/// short, so no banding is needed.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr: Vec<usize> = vec![0; b.len() + 1];

    for (i, &char_a) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &char_b) in b.iter().enumerate() {
            let cost = usize::from(char_a != char_b);
            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }
        mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

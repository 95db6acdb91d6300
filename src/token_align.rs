/*!
Token-level alignment, derived from a character-level alignment of the two
sides' concatenations.

Tokens are never compared directly. Each side's tokens are concatenated in
order, every token keeping its half-open character range in the
concatenation, and the character alignment is projected back onto those
ranges.
*/

use core::ops::Range;

use itertools::Itertools;

use crate::char_align::{align_keys, CharAlignment, KeySeq};
use crate::Alignment;

/// Half-open character ranges of each token within the concatenation of
/// `tokens`. An empty token gets a zero-length range at its positional
/// offset.
fn token_spans<S: AsRef<str>>(tokens: &[S]) -> Vec<Range<usize>> {
    let mut spans = Vec::with_capacity(tokens.len());
    let mut start = 0;
    for token in tokens {
        let end = start + token.as_ref().chars().count();
        spans.push(start..end);
        start = end;
    }
    spans
}

/// Inverse of [`token_spans`]: for every character of the concatenation, the
/// index of the token it belongs to. Zero-length spans contribute nothing.
fn char_to_token(spans: &[Range<usize>]) -> Vec<usize> {
    let total = spans.last().map_or(0, |span| span.end);
    let mut owner = vec![0; total];
    for (token, span) in spans.iter().enumerate() {
        for c in span.clone() {
            owner[c] = token;
        }
    }
    owner
}

/// Projects one direction of a character alignment onto token spans: each
/// token collects the tokens owning the characters its own characters map
/// to, ascending and deduplicated. A zero-length span has no characters and
/// therefore always projects to an empty list.
fn project(spans: &[Range<usize>], char_map: &[Vec<usize>], owner: &[usize]) -> Alignment {
    spans
        .iter()
        .map(|span| {
            char_map[span.clone()]
                .iter()
                .flatten()
                .map(|&c| owner[c])
                .sorted_unstable()
                .dedup()
                .collect()
        })
        .collect()
}

/// Full token-to-token alignment between two ordered token sequences.
pub(crate) fn align_tokens<S: AsRef<str>>(a: &[S], b: &[S]) -> (Alignment, Alignment) {
    let spans_a = token_spans(a);
    let spans_b = token_spans(b);
    let keys_a = KeySeq::new(a.iter().flat_map(|t| t.as_ref().chars()));
    let keys_b = KeySeq::new(b.iter().flat_map(|t| t.as_ref().chars()));
    let CharAlignment { a2b, b2a } = align_keys(&keys_a, &keys_b);
    let owner_a = char_to_token(&spans_a);
    let owner_b = char_to_token(&spans_b);
    (
        project(&spans_a, &a2b, &owner_b),
        project(&spans_b, &b2a, &owner_a),
    )
}

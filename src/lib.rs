/*!
# token-alignments

Aligns two independently produced tokenizations of textually overlapping
content, producing a bidirectional mapping between the units on each side.

This is useful whenever annotations (labels, offsets, spans) have to be
transferred between tokenizers that disagree on boundaries, for example
between a rule-based tokenizer and a subword tokenizer, or between raw text
and tokenized output. The two sides may drift locally in casing, accents and
decorations, or punctuation (`"ø"` vs `"o"`, a tab vs a space, `…` vs
`...`), and are still lined up character by character.

## Get Started

### Token-level alignment

```rust
use token_alignments::get_alignments;

let a = vec!["New", "York"];
let b = vec!["New York"];
// calculate the two alignments `a2b` and `b2a` at the same time
let (a2b, b2a) = get_alignments(&a, &b);

// `a2b[i]` holds the indices `j` of `b` such that `a[i]` corresponds to `b[j]`
assert_eq!(a2b, vec![vec![0], vec![0]]);
// `b2a` is the inverse of `a2b`
assert_eq!(b2a, vec![vec![0, 1]]);
```

Noisy inputs still align:

```rust
use token_alignments::get_alignments;

let (a2b, b2a) = get_alignments(&["fø", "o"], &["foo"]);
assert_eq!(a2b, vec![vec![0], vec![0]]);
assert_eq!(b2a, vec![vec![0, 1]]);
```

### Character-level alignment

```rust
use token_alignments::get_charmap;

let (c_a2b, c_b2a) = get_charmap("foo", "fo0");
assert_eq!(c_a2b, vec![vec![0], vec![1], vec![]]);
assert_eq!(c_b2a, vec![vec![0], vec![1], vec![]]);
```

## Method

Both entry points run the same engine:

1. Each character is folded to a comparison key (lowercased, compatibility
   decomposed, combining marks stripped). Keys decide equivalence only;
   reported indices always refer to the original characters.
2. The two character sequences are aligned in a single synchronized
   left-to-right pass. On a mismatch, a small bounded lookahead finds the
   nearest position where both sides agree again; skipped characters are left
   unmatched unless the skipped runs fold to the same text as a block.
3. For token-level alignment, each side's tokens are concatenated (every
   token keeping its character range), and the character alignment is
   projected back onto those ranges.

The bounded lookahead keeps the whole computation linear in the combined
input length: the engine assumes both sides segment the *same* underlying
text and never falls back to a quadratic edit-distance search.

Both functions are total over valid text input: any combination of
sequences, including empty ones and tokens with empty text, produces a
well-formed result. The engine keeps no state between calls, so it can be
called concurrently without synchronization.
*/

#![warn(
    clippy::cargo,
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_compatibility,
    rust_2018_idioms,
    rust_2021_compatibility,
    unused
)]

mod char_align;
mod fold;
mod token_align;

use char_align::{align_keys, CharAlignment, KeySeq};

/// One direction of an alignment: for each unit on one side, the ascending,
/// deduplicated indices of the corresponding units on the other side. A unit
/// with no counterpart has an empty list.
pub type Alignment = Vec<Vec<usize>>;

/// Returns the character mappings `c_a2b` (from `a` to `b`) and `c_b2a`
/// (from `b` to `a`).
///
/// Indices are code point indices, not byte offsets, so the output lengths
/// equal `a.chars().count()` and `b.chars().count()`. The mapping tolerates
/// local noise between the two strings:
///
/// ```rust
/// use token_alignments::get_charmap;
///
/// let (c_a2b, c_b2a) = get_charmap("bar", "bår");
/// assert_eq!(c_a2b, vec![vec![0], vec![1], vec![2]]);
/// assert_eq!(c_b2a, vec![vec![0], vec![1], vec![2]]);
/// ```
#[must_use]
pub fn get_charmap(a: &str, b: &str) -> (Alignment, Alignment) {
    let CharAlignment { a2b, b2a } = align_keys(&KeySeq::new(a.chars()), &KeySeq::new(b.chars()));
    (a2b, b2a)
}

/// Returns the token alignments `a2b` (from `a` to `b`) and `b2a` (from `b`
/// to `a`).
///
/// Two tokens correspond when they share at least one aligned character in
/// the concatenations of their sides. Output lengths equal `a.len()` and
/// `b.len()`; a token with empty text always maps to an empty list.
///
/// ```rust
/// use token_alignments::get_alignments;
///
/// let (a2b, b2a) = get_alignments(&["New York"], &["New", "York"]);
/// assert_eq!(a2b, vec![vec![0, 1]]);
/// assert_eq!(b2a, vec![vec![0], vec![0]]);
/// ```
#[must_use]
pub fn get_alignments<S: AsRef<str>>(a: &[S], b: &[S]) -> (Alignment, Alignment) {
    token_align::align_tokens(a, b)
}

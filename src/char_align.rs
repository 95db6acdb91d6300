/*!
Character-level alignment between two sequences of code points.

The aligner is a single left-to-right pass over both sequences with a small
bounded lookahead for resynchronization, rather than an edit-distance search.
Inputs are assumed to be two segmentations of the same underlying text with
only local drift (casing, decoration, punctuation substitution), which keeps
the pass amortized linear in the combined input length.
*/

use core::ops::Range;

use crate::fold::fold_key;

/// How far ahead of the current position, on each side, the scan searches for
/// a pair of matching characters after losing synchronization. The window is
/// a fixed constant so total work stays linear; it only needs to span short
/// runs of dropped decoration or substituted punctuation.
const RESYNC_WINDOW: usize = 4;

/// One side of a character-level comparison: the fold key of every code
/// point, in order. Indices into a `KeySeq` are code point indices, not byte
/// offsets.
#[derive(Debug)]
pub(crate) struct KeySeq {
    keys: Vec<String>,
}

impl KeySeq {
    /// Builds the key sequence for the given code points.
    pub(crate) fn new(chars: impl Iterator<Item = char>) -> Self {
        Self {
            keys: chars.map(fold_key).collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    fn key(&self, i: usize) -> &str {
        &self.keys[i]
    }

    /// Concatenated keys of a run of characters, used to compare unmatched
    /// runs as a block.
    fn block(&self, range: Range<usize>) -> String {
        self.keys[range].concat()
    }
}

/// Bidirectional character-index mapping produced by [`align_keys`].
///
/// `a2b[i]` lists the indices of `b` matched from `a`'s index `i`, ascending
/// and deduplicated; `b2a` is symmetric. The two maps are mutually consistent
/// and monotonic: matched ranges never cross.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CharAlignment {
    pub(crate) a2b: Vec<Vec<usize>>,
    pub(crate) b2a: Vec<Vec<usize>>,
}

/// Aligns two key sequences with a synchronized two-pointer scan.
///
/// While the keys at both pointers agree the pointers advance together. On a
/// mismatch, the nearest matching pair within [`RESYNC_WINDOW`] of both
/// pointers resynchronizes the scan; the skipped characters are either
/// mutually linked (when the two skipped runs fold to the same text as a
/// block) or left unmatched. If no resynchronization point exists the side
/// with more input left advances by one. Characters never matched keep empty
/// lists, so the output always has one entry per input character.
pub(crate) fn align_keys(a: &KeySeq, b: &KeySeq) -> CharAlignment {
    let n = a.len();
    let m = b.len();
    let mut alignment = CharAlignment {
        a2b: vec![Vec::new(); n],
        b2a: vec![Vec::new(); m],
    };

    let mut i = 0;
    let mut j = 0;
    while i < n && j < m {
        if a.key(i) == b.key(j) {
            alignment.a2b[i].push(j);
            alignment.b2a[j].push(i);
            i += 1;
            j += 1;
        } else if let Some((di, dj)) = resync(a, b, i, j) {
            link_block(a, b, i..i + di, j..j + dj, &mut alignment);
            i += di;
            j += dj;
        } else if n - i <= RESYNC_WINDOW && m - j <= RESYNC_WINDOW {
            // No match left anywhere; the remaining tails may still fold to
            // the same text as a block (e.g. a trailing ligature).
            link_block(a, b, i..n, j..m, &mut alignment);
            break;
        } else if n - i >= m - j {
            i += 1;
        } else {
            j += 1;
        }
    }

    alignment
}

/// Searches the bounded window ahead of `(i, j)` for the nearest pair of
/// positions with equal keys, minimizing the combined advance `di + dj`.
/// Ties prefer the smaller advance on side `a`, keeping the scan
/// deterministic. Returns the advances, not the matched positions; the main
/// loop re-encounters the matching pair on its next step.
fn resync(a: &KeySeq, b: &KeySeq, i: usize, j: usize) -> Option<(usize, usize)> {
    let max_a = RESYNC_WINDOW.min(a.len() - i - 1);
    let max_b = RESYNC_WINDOW.min(b.len() - j - 1);
    for cost in 1..=max_a + max_b {
        for di in 0..=cost.min(max_a) {
            let dj = cost - di;
            if dj <= max_b && a.key(i + di) == b.key(j + dj) {
                return Some((di, dj));
            }
        }
    }
    None
}

/// Mutually links two unmatched runs if they represent the same text under
/// folding, e.g. `…` skipped on one side against `...` skipped on the other.
///
/// The runs are peeled into minimal pairs of block-equal segments, and a
/// segment pair is linked only when one of its sides is a single character
/// (a ligature or expansion substitution). Linking anything wider would give
/// consecutive characters identical multi-element lists, i.e. crossing
/// alignments. Runs that differ as a block, or an empty run on either side,
/// leave every involved character unmatched.
fn link_block(
    a: &KeySeq,
    b: &KeySeq,
    run_a: Range<usize>,
    run_b: Range<usize>,
    alignment: &mut CharAlignment,
) {
    if run_a.is_empty() || run_b.is_empty() || a.block(run_a.clone()) != b.block(run_b.clone()) {
        return;
    }
    let mut i = run_a.start;
    let mut j = run_b.start;
    while i < run_a.end && j < run_b.end {
        let (di, dj) = equal_prefix(a, b, i, j);
        if di == 1 || dj == 1 {
            for x in i..i + di {
                alignment.a2b[x].extend(j..j + dj);
            }
            for y in j..j + dj {
                alignment.b2a[y].extend(i..i + di);
            }
        }
        i += di;
        j += dj;
    }
}

/// Shortest pair of nonempty prefixes of the runs starting at `(i, j)` whose
/// concatenated keys are equal. The caller guarantees the full runs are
/// block-equal, so both accumulations are prefixes of the same text: while
/// they differ the shorter one grows, and they agree at the latest once both
/// runs are consumed.
fn equal_prefix(a: &KeySeq, b: &KeySeq, i: usize, j: usize) -> (usize, usize) {
    let mut key_a = a.key(i).to_owned();
    let mut key_b = b.key(j).to_owned();
    let mut di = 1;
    let mut dj = 1;
    while key_a != key_b {
        if key_a.len() < key_b.len() {
            key_a.push_str(a.key(i + di));
            di += 1;
        } else {
            key_b.push_str(b.key(j + dj));
            dj += 1;
        }
    }
    (di, dj)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn align(a: &str, b: &str) -> CharAlignment {
        align_keys(&KeySeq::new(a.chars()), &KeySeq::new(b.chars()))
    }

    #[test]
    fn identical_sequences_map_to_themselves() {
        let alignment = align("abcあ", "abcあ");
        assert_eq!(alignment.a2b, vec![vec![0], vec![1], vec![2], vec![3]]);
        assert_eq!(alignment.b2a, vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn empty_side_yields_all_empty_lists() {
        let alignment = align("", "ab");
        assert!(alignment.a2b.is_empty());
        assert_eq!(alignment.b2a, vec![Vec::<usize>::new(), Vec::new()]);
    }

    #[test]
    fn both_empty() {
        let alignment = align("", "");
        assert!(alignment.a2b.is_empty());
        assert!(alignment.b2a.is_empty());
    }

    #[test]
    fn substituted_character_is_left_unmatched() {
        let alignment = align("foo", "fo0");
        assert_eq!(alignment.a2b, vec![vec![0], vec![1], vec![]]);
        assert_eq!(alignment.b2a, vec![vec![0], vec![1], vec![]]);
    }

    #[test]
    fn resynchronizes_over_inserted_whitespace() {
        let alignment = align("NewYork", "New York");
        assert_eq!(
            alignment.a2b,
            vec![vec![0], vec![1], vec![2], vec![4], vec![5], vec![6], vec![7]]
        );
        assert!(alignment.b2a[3].is_empty());
    }

    #[test]
    fn resynchronizes_over_substituted_separator() {
        let alignment = align("a\tb", "a b");
        assert_eq!(alignment.a2b, vec![vec![0], vec![], vec![2]]);
        assert_eq!(alignment.b2a, vec![vec![0], vec![], vec![2]]);
    }

    #[test]
    fn ligature_links_both_runs_mutually() {
        let alignment = align("a…b", "a...b");
        assert_eq!(alignment.a2b, vec![vec![0], vec![1, 2, 3], vec![4]]);
        assert_eq!(
            alignment.b2a,
            vec![vec![0], vec![1], vec![1], vec![1], vec![2]]
        );
    }

    #[test]
    fn adjacent_ligatures_link_segmentwise() {
        // 'ﬁ' folds to "fi" and 'ﬂ' to "fl". Each ligature must link only
        // its own expansion, never the neighbor's, so no entry repeats and
        // matched ranges never cross.
        let alignment = align("a\u{fb01}\u{fb02}z", "afiflz");
        assert_eq!(
            alignment.a2b,
            vec![vec![0], vec![1, 2], vec![3, 4], vec![5]]
        );
        assert_eq!(
            alignment.b2a,
            vec![vec![0], vec![1], vec![1], vec![2], vec![2], vec![3]]
        );
    }

    #[test]
    fn ambiguous_equal_block_stays_unmatched() {
        // 'ⅺ' folds to "xi" and 'ⅱ' to "ii": both runs fold to "xii" but
        // neither side can be split at a boundary the other side shares, so
        // no character pair can be linked without crossing.
        let alignment = align("aⅺib", "axⅱb");
        assert_eq!(alignment.a2b, vec![vec![0], vec![], vec![], vec![3]]);
        assert_eq!(alignment.b2a, vec![vec![0], vec![], vec![], vec![3]]);
    }

    #[test]
    fn trailing_ligature_links_as_block() {
        let alignment = align("a…", "a...");
        assert_eq!(alignment.a2b, vec![vec![0], vec![1, 2, 3]]);
        assert_eq!(alignment.b2a, vec![vec![0], vec![1], vec![1], vec![1]]);
    }

    #[test]
    fn mismatched_tails_stay_unmatched() {
        let alignment = align("ab", "axyz");
        assert_eq!(alignment.a2b[0], vec![0]);
        assert!(alignment.a2b[1].is_empty());
        assert!(alignment.b2a[1..].iter().all(Vec::is_empty));
    }

    #[test]
    fn distant_match_beyond_window_is_reached_by_skipping() {
        // Five junk characters exceed the window, so the longer side advances
        // one position at a time until the tails line up again.
        let alignment = align("!!!!!ab", "ab");
        assert_eq!(alignment.a2b[5], vec![0]);
        assert_eq!(alignment.a2b[6], vec![1]);
        assert_eq!(alignment.b2a, vec![vec![5], vec![6]]);
    }

    #[test]
    fn folded_characters_match_without_resync() {
        // Precomposed 'が' folds to 'か', matching the decomposed base kana;
        // the stray combining mark is skipped over by resynchronization.
        let alignment = align("がx", "か\u{3099}x");
        assert_eq!(alignment.a2b, vec![vec![0], vec![2]]);
        assert_eq!(alignment.b2a, vec![vec![0], vec![], vec![1]]);
    }
}

/*!
Character folding used for the equivalence test between the two sides of an
alignment.

Fold keys exist only to be compared for equality. All indices the crate
reports refer to the original, unfolded characters.
*/

use ahash::AHashMap;
use once_cell::sync::Lazy;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Stroked Latin letters that neither case folding nor Unicode decomposition
/// reduces to their base letter, but which tokenizers routinely substitute.
/// Deliberately small: anything broader becomes transliteration, and visually
/// similar characters with distinct folds (`0` vs `o`) must stay distinct.
static STROKED: Lazy<AHashMap<char, char>> = Lazy::new(|| {
    [('đ', 'd'), ('ħ', 'h'), ('ł', 'l'), ('ø', 'o'), ('ŧ', 't')]
        .into_iter()
        .collect()
});

/// Computes the comparison key for a single character.
///
/// Lowercases, applies compatibility decomposition, strips combining marks,
/// and folds stroked Latin letters. A key can be longer than one character
/// when the decomposition expands (`…` folds to `...`). If stripping leaves
/// nothing, the original character is its own key, so every character has a
/// nonempty key and the function never fails.
pub(crate) fn fold_key(c: char) -> String {
    let folded: String = c
        .to_lowercase()
        .nfkd()
        .filter(|d| !is_combining_mark(*d))
        .map(|d| STROKED.get(&d).copied().unwrap_or(d))
        .collect();
    if folded.is_empty() {
        c.to_string()
    } else {
        folded
    }
}

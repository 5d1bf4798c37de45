//! Candidate filtering
//!
//! Removes associations that would make a puzzle trivial, repetitive, or unsuitable.

use crate::core::{char_prefix, fold_variants};
use rustc_hash::FxHashSet;

/// Characters of the query word that mark a candidate as the same word stem
pub const STEM_PREFIX_LEN: usize = 3;

/// Words never placed in a puzzle (explicit content)
pub const MODERATION_BLOCKLIST: &[&str] = &[
    "член",
    "мастурбация",
    "минет",
    "порнография",
    "стриптиз",
    "анал",
    "куннилингус",
    "порно",
    "презерватив",
    "презервативы",
    "секс",
    "совокупление",
    "хуй",
    "шлюха",
    "эрекция",
    "эротика",
    "сосок",
    "оргия",
    "клитор",
    "девственность",
    "возбуждение",
    "влагалище",
    "дефлорация",
    "зачатие",
    "фетиш",
    "оргазм",
    "проституция",
];

/// Whether a word is on the moderation blocklist
#[inline]
#[must_use]
pub fn is_blocked(word: &str) -> bool {
    MODERATION_BLOCKLIST.contains(&word)
}

/// Filter association candidates for `query`
///
/// Drops candidates that contain the query's first three characters (inflected
/// forms and compounds of the same stem), blocklisted words, and anything in
/// `excluded`. `excluded` holds variant-folded words (see
/// [`fold_variants`](crate::core::fold_variants)), so `ёж` is dropped when `еж`
/// is excluded. The relative order of the survivors is preserved.
///
/// # Examples
/// ```
/// use olympiika::generator::filter_candidates;
/// use rustc_hash::FxHashSet;
///
/// let excluded: FxHashSet<String> = ["пляж".to_string()].into_iter().collect();
/// let kept = filter_candidates(&["волна", "морской", "пляж", "соль"], "море", &excluded);
/// assert_eq!(kept, ["волна", "соль"]);
/// ```
#[must_use]
pub fn filter_candidates<'a>(
    candidates: &[&'a str],
    query: &str,
    excluded: &FxHashSet<String>,
) -> Vec<&'a str> {
    let stem = char_prefix(query, STEM_PREFIX_LEN);

    candidates
        .iter()
        .copied()
        .filter(|candidate| stem.is_empty() || !candidate.contains(stem))
        .filter(|candidate| !is_blocked(candidate))
        .filter(|candidate| !excluded.contains(fold_variants(candidate).as_str()))
        .collect()
}

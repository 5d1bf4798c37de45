//! Word normalization
//!
//! Player input and dataset tokens are compared after the same normalization:
//! lowercase, trimmed, with a couple of letter-variant equivalences that only
//! apply when the puzzle itself uses the variant spelling.

/// Letter pairs treated as equivalent: `(variant, plain)`.
///
/// A player typing the plain letter matches a puzzle word spelled with the variant.
pub const LETTER_VARIANTS: [(char, char); 2] = [('ё', 'е'), ('ъ', 'ь')];

/// Keyboard-layout slips mapped before comparison: `(typed, intended)`.
const LAYOUT_SLIPS: [(char, char); 1] = [('і', 'ы')];

/// Normalize a raw token: lowercase, trim, and fix keyboard-layout slips
///
/// # Examples
/// ```
/// use olympiika::core::normalize;
///
/// assert_eq!(normalize("  Море "), "море");
/// assert_eq!(normalize("мір"), "мыр");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            LAYOUT_SLIPS
                .iter()
                .find(|(typed, _)| *typed == c)
                .map_or(c, |&(_, intended)| intended)
        })
        .collect()
}

/// Rewrite `input` to the puzzle's own spelling when it differs only by a letter variant
///
/// The rewrite is applied per variant pair, and only when the input contains the
/// plain letter and at least one puzzle word contains the variant letter. Words that
/// legitimately differ are left alone.
///
/// # Examples
/// ```
/// use olympiika::core::resolve_variants;
///
/// let words = ["ёлка", "лес"];
/// assert_eq!(resolve_variants("елка", words), "ёлка");
/// assert_eq!(resolve_variants("лес", words), "лес");
/// ```
pub fn resolve_variants<'a, I>(input: &str, words: I) -> String
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: Clone,
{
    let words = words.into_iter();
    let mut resolved = input.to_string();

    for (variant, plain) in LETTER_VARIANTS {
        if !resolved.contains(plain) || !words.clone().any(|w| w.contains(variant)) {
            continue;
        }
        if let Some(word) = words
            .clone()
            .find(|w| w.replace(variant, &plain.to_string()) == resolved)
        {
            resolved = word.to_string();
        }
    }

    resolved
}

/// Fold every letter variant to its plain letter
///
/// Two words with the same folded key are the same word to a player, so a
/// puzzle never holds both.
///
/// # Examples
/// ```
/// use olympiika::core::fold_variants;
///
/// assert_eq!(fold_variants("ёж"), fold_variants("еж"));
/// assert_eq!(fold_variants("подъезд"), "подьезд");
/// ```
#[must_use]
pub fn fold_variants(word: &str) -> String {
    word.chars()
        .map(|c| {
            LETTER_VARIANTS
                .iter()
                .find(|(variant, _)| *variant == c)
                .map_or(c, |&(_, plain)| plain)
        })
        .collect()
}

/// Check that a token carries a word at all
#[inline]
#[must_use]
pub fn is_blank(word: &str) -> bool {
    word.trim().is_empty()
}

/// First `n` characters of a word (Unicode scalar values, not bytes)
#[must_use]
pub fn char_prefix(word: &str, n: usize) -> &str {
    word.char_indices()
        .nth(n)
        .map_or(word, |(byte_idx, _)| &word[..byte_idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_and_trims() {
        assert_eq!(normalize("  ЛЕС\t"), "лес");
        assert_eq!(normalize("Kite"), "kite");
    }

    #[test]
    fn normalize_fixes_layout_slip() {
        assert_eq!(normalize("рiба"), "рiба"); // latin i is left alone
        assert_eq!(normalize("рібак"), "рыбак");
    }

    #[test]
    fn normalize_empty() {
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn resolve_yo_variant() {
        let words = ["мёд", "пчела"];
        assert_eq!(resolve_variants("мед", words), "мёд");
    }

    #[test]
    fn resolve_hard_sign_variant() {
        let words = ["подъезд", "дом"];
        assert_eq!(resolve_variants("подьезд", words), "подъезд");
    }

    #[test]
    fn resolve_skipped_without_variant_in_puzzle() {
        // No word in the puzzle uses ё, so "мед" stays as typed
        let words = ["медведь", "лес"];
        assert_eq!(resolve_variants("мед", words), "мед");
    }

    #[test]
    fn resolve_leaves_different_words_alone() {
        let words = ["ёж", "лес"];
        assert_eq!(resolve_variants("еда", words), "еда");
    }

    #[test]
    fn fold_maps_variants_to_plain_letters() {
        assert_eq!(fold_variants("ёлка"), "елка");
        assert_eq!(fold_variants("объём"), "обьем");
        assert_eq!(fold_variants("лес"), "лес");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank(" лес "));
    }

    #[test]
    fn char_prefix_counts_characters() {
        assert_eq!(char_prefix("пример", 3), "при");
        assert_eq!(char_prefix("ёж", 3), "ёж");
        assert_eq!(char_prefix("crane", 3), "cra");
        assert_eq!(char_prefix("", 3), "");
    }
}

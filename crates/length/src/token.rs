use serde::{Deserialize, Serialize};
use unicode_categories::UnicodeCategories;
use unicode_segmentation::UnicodeSegmentation;

/// A word with its UTF-8 byte offsets in the source text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Word {
    /// The word text content.
    pub text: String,
    /// Byte offset (inclusive) in the source text.
    pub start: usize,
    /// Byte offset (exclusive) in the source text.
    pub end: usize,
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Whether a character belongs to the word class: any Unicode letter or
/// number, or the underscore.
pub fn is_word_char(ch: char) -> bool {
    ch == '_' || ch.is_letter() || ch.is_number()
}

/// A grapheme cluster is word-class when its base character is. Combining
/// marks ride along with their base, so `"c\u{30C}"` is a word character just
/// like `"č"`.
fn is_word_grapheme(grapheme: &str) -> bool {
    grapheme.chars().next().is_some_and(is_word_char)
}

/// Splits text into maximal runs of word-class grapheme clusters.
///
/// Punctuation, quotes, symbols and whitespace separate words and are never
/// part of one. Deterministic and locale-free.
pub fn tokenize_words(text: &str) -> Vec<Word> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, grapheme) in text.grapheme_indices(true) {
        if is_word_grapheme(grapheme) {
            if start.is_none() {
                start = Some(idx);
            }
        } else if let Some(word_start) = start.take() {
            words.push(Word {
                text: text[word_start..idx].to_string(),
                start: word_start,
                end: idx,
            });
        }
    }

    if let Some(word_start) = start {
        words.push(Word {
            text: text[word_start..].to_string(),
            start: word_start,
            end: text.len(),
        });
    }

    words
}

/// Counts the words [`tokenize_words`] would produce, without allocating.
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;
    for grapheme in text.graphemes(true) {
        let word = is_word_grapheme(grapheme);
        if word && !in_word {
            count += 1;
        }
        in_word = word;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize_words(input).into_iter().map(|w| w.text).collect()
    }

    #[test]
    fn punctuation_and_quotes_separate_words() {
        assert_eq!(
            texts("\u{201E}Sparta\u{201C} vyhrála 2:1, (doma)!"),
            vec!["Sparta", "vyhrála", "2", "1", "doma"]
        );
    }

    #[test]
    fn czech_diacritics_stay_inside_words() {
        let input = "Žlutá karta přišla v 90. minutě";
        assert_eq!(
            texts(input),
            vec!["Žlutá", "karta", "přišla", "v", "90", "minutě"]
        );
        assert_eq!(count_words(input), 6);
    }

    #[test]
    fn decomposed_marks_count_like_composed() {
        let composed = "\u{10D}\u{e1}st z\u{e1}pasu";
        let decomposed = "c\u{30C}a\u{301}st za\u{301}pasu";
        assert_eq!(count_words(composed), 2);
        assert_eq!(count_words(decomposed), 2);
        assert_eq!(texts(decomposed)[0], "c\u{30C}a\u{301}st");
    }

    #[test]
    fn underscore_and_digits_are_word_characters() {
        assert_eq!(texts("penalty_scored 11m"), vec!["penalty_scored", "11m"]);
    }

    #[test]
    fn apostrophes_and_hyphens_split() {
        assert_eq!(texts("don't U-21"), vec!["don", "t", "U", "21"]);
    }

    #[test]
    fn offsets_point_into_source() {
        let input = "  ahoj, světe ";
        let words = tokenize_words(input);
        assert_eq!(words.len(), 2);
        for word in &words {
            assert_eq!(&input[word.start..word.end], word.text);
        }
        assert_eq!(words[1].end, input.len() - 1);
    }

    #[test]
    fn non_latin_scripts_count() {
        assert_eq!(count_words("Футбол — это игра"), 3);
        assert_eq!(count_words("كرة القدم"), 2);
    }

    #[test]
    fn separators_only_yield_nothing() {
        assert_eq!(count_words(" ... -- !! "), 0);
        assert!(tokenize_words("").is_empty());
    }

    #[test]
    fn count_matches_tokenize() {
        let input = "Slavia: 3 střely, Sparta_B 12 (!) \u{1F600} konec";
        assert_eq!(count_words(input), tokenize_words(input).len());
    }
}

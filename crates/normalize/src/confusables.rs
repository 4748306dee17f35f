//! OCR confusable corrections applied only inside numeric-context tokens.
//!
//! Published as a flat table rather than a hash map: it is short, read
//! top-to-bottom by a human auditing a version bump, and a linear scan over
//! a handful of entries costs nothing next to the regex work done elsewhere
//! in the pipeline.

/// `(confusable, replacement)` pairs applied when a token is otherwise all
/// digits once the substitution is undone, e.g. `"1O5"` -> `"105"` but a
/// token like `"HEBBAL"` is left untouched because it never becomes numeric.
pub const CONFUSABLE_PAIRS: &[(char, char)] = &[
    ('O', '0'),
    ('o', '0'),
    ('l', '1'),
    ('I', '1'),
    ('S', '5'),
    ('B', '8'),
];

/// Returns `true` if, after swapping confusables for their digit form, every
/// remaining character in `token` is an ASCII digit.
fn looks_numeric_after_fix(token: &str) -> bool {
    if token.is_empty() {
        return false;
    }
    let has_real_digit = token.chars().any(|c| c.is_ascii_digit());
    has_real_digit
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || CONFUSABLE_PAIRS.iter().any(|(from, _)| *from == c))
}

/// Applies confusable corrections to whitespace-delimited tokens that are
/// numeric once fixed, leaving alphabetic tokens untouched.
pub fn fix_confusables(text: &str) -> String {
    text.split_inclusive(char::is_whitespace)
        .map(|chunk| {
            let (word, trailing) = split_trailing_whitespace(chunk);
            if looks_numeric_after_fix(word) {
                let fixed: String = word
                    .chars()
                    .map(|c| {
                        CONFUSABLE_PAIRS
                            .iter()
                            .find(|(from, _)| *from == c)
                            .map(|(_, to)| *to)
                            .unwrap_or(c)
                    })
                    .collect();
                format!("{fixed}{trailing}")
            } else {
                chunk.to_string()
            }
        })
        .collect()
}

fn split_trailing_whitespace(chunk: &str) -> (&str, &str) {
    let split_at = chunk
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map(|(i, _)| i)
        .unwrap_or(chunk.len());
    chunk.split_at(split_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixes_numeric_confusables_only() {
        assert_eq!(fix_confusables("1O5"), "105");
        assert_eq!(fix_confusables("HEBBAL"), "HEBBAL");
        assert_eq!(fix_confusables("45/2A SBI"), "45/2A SBI");
    }

    #[test]
    fn preserves_surrounding_whitespace() {
        assert_eq!(fix_confusables(" 1O5 \n"), " 105 \n");
    }
}

/// Collapses runs of whitespace (including newlines) into single ASCII
/// spaces and trims the result.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_space = true; // drop leading whitespace
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
            }
            last_was_space = true;
        } else {
            out.push(ch);
            last_was_space = false;
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_trims() {
        assert_eq!(collapse_whitespace("  a\n\n b   c  "), "a b c");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(collapse_whitespace("   \n\t  "), "");
    }
}

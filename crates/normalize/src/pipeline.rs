use unicode_normalization::UnicodeNormalization;

use crate::boilerplate::strip_boilerplate;
use crate::confusables::fix_confusables;
use crate::config::NormalizeConfig;
use crate::error::NormalizeError;
use crate::whitespace::collapse_whitespace;

/// Cleans raw OCR text into a deterministic, byte-stable form.
///
/// Fixed pipeline order, matching the contract in the external interfaces:
/// NFC normalize -> strip control characters -> drop boilerplate lines ->
/// fix numeric confusables -> collapse whitespace -> truncate.
///
/// Identical input and configuration always produce identical output,
/// across processes and machines.
pub fn normalize(text: &str, config: &NormalizeConfig) -> Result<String, NormalizeError> {
    if config.version == 0 {
        return Err(NormalizeError::InvalidConfig(
            "version must be >= 1".to_string(),
        ));
    }

    let nfc: String = text.nfc().collect();
    let no_control: String = nfc
        .chars()
        .filter(|c| *c == '\n' || !c.is_control())
        .collect();

    let de_boilerplated = if config.strip_boilerplate {
        strip_boilerplate(&no_control)
    } else {
        no_control
    };

    let confusables_fixed = if config.fix_confusables {
        fix_confusables(&de_boilerplated)
    } else {
        de_boilerplated
    };

    let collapsed = collapse_whitespace(&confusables_fixed);

    if collapsed.is_empty() {
        return Err(NormalizeError::EmptyInput);
    }

    let truncated = if collapsed.len() > config.max_bytes {
        truncate_at_char_boundary(&collapsed, config.max_bytes)
    } else {
        collapsed
    };

    Ok(truncated)
}

fn truncate_at_char_boundary(s: &str, max_bytes: usize) -> String {
    let mut end = max_bytes.min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_and_cleans() {
        let cfg = NormalizeConfig::default();
        let out = normalize("  GOVERNMENT OF KARNATAKA\nOwner:  Ravi   Kumar \n", &cfg).unwrap();
        assert_eq!(out, "Owner: Ravi Kumar");
    }

    #[test]
    fn rejects_zero_version() {
        let cfg = NormalizeConfig {
            version: 0,
            ..NormalizeConfig::default()
        };
        assert_eq!(
            normalize("hello", &cfg),
            Err(NormalizeError::InvalidConfig("version must be >= 1".into()))
        );
    }

    #[test]
    fn empty_after_cleaning_is_rejected() {
        let cfg = NormalizeConfig::default();
        assert_eq!(normalize("   \n\t  ", &cfg), Err(NormalizeError::EmptyInput));
    }

    #[test]
    fn deterministic_across_calls() {
        let cfg = NormalizeConfig::default();
        let a = normalize("1O5 Acres Caf\u{00E9}", &cfg).unwrap();
        let b = normalize("1O5 Acres Cafe\u{0301}", &cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn truncates_to_max_bytes() {
        let cfg = NormalizeConfig {
            max_bytes: 5,
            ..NormalizeConfig::default()
        };
        let out = normalize("abcdefgh", &cfg).unwrap();
        assert_eq!(out, "abcde");
    }
}

//! Gecko key → translation key conversion.
//!
//! The property generator and the runtime lookup both go through
//! [`snake_case`]; a key produced one way and looked up another would
//! silently fall back to the untranslated gecko key.

use regex::Regex;
use std::sync::LazyLock;

/// Translation namespace of the popup labels.
pub const DEFAULT_PREFIX: &str = "sailfish_components_webview_popups-la";

static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9]+)([A-Z])").expect("word boundary pattern is valid"));

/// Convert a camelCase name to snake_case.
///
/// An underscore goes between every run of lowercase letters or digits and
/// the uppercase letter that follows it, then everything is lowercased.
/// Runs of capitals are not split: `HTMLParser` becomes `htmlparser`.
pub fn snake_case(name: &str) -> String {
    WORD_BOUNDARY
        .replace_all(name, "${1}_${2}")
        .to_lowercase()
}

/// Build the translation key for a gecko `identifier` under `prefix`.
///
/// An empty identifier yields an empty key, without the prefix.
pub fn convert_key(identifier: &str, prefix: &str) -> String {
    let snake = snake_case(identifier);
    if snake.is_empty() {
        return String::new();
    }
    format!("{prefix}-{snake}")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Golden table shared with the generated translation sources.
    const GOLDEN: &[(&str, &str)] = &[
        ("someFieldName", "some_field_name"),
        ("popupWarningTitle", "popup_warning_title"),
        ("xY", "x_y"),
        ("aBC", "a_bc"),
        ("aBcD", "a_bc_d"),
        ("abCdEf", "ab_cd_ef"),
        ("SomeThing", "some_thing"),
        ("HTMLParser", "htmlparser"),
        ("getHTTPResponse", "get_httpresponse"),
        ("field2Name", "field2_name"),
        ("a1B2c", "a1_b2c"),
        ("popup3", "popup3"),
        ("already_snake", "already_snake"),
        ("with-dash", "with-dash"),
        ("ALLCAPS", "allcaps"),
        ("", ""),
    ];

    #[test]
    fn test_snake_case_golden_table() {
        for (input, expected) in GOLDEN {
            assert_eq!(snake_case(input), *expected, "snake_case({input:?})");
        }
    }

    #[test]
    fn test_convert_key_default_prefix() {
        assert_eq!(
            convert_key("someFieldName", DEFAULT_PREFIX),
            "sailfish_components_webview_popups-la-some_field_name"
        );
    }

    #[test]
    fn test_convert_key_custom_prefix() {
        assert_eq!(
            convert_key("closeButton", "sailfish_components_webview_popups-he"),
            "sailfish_components_webview_popups-he-close_button"
        );
    }

    #[test]
    fn test_convert_key_empty_identifier() {
        assert_eq!(convert_key("", DEFAULT_PREFIX), "");
        assert_eq!(convert_key("", "anything"), "");
    }

    #[test]
    fn test_snake_case_is_idempotent_and_deterministic() {
        for (input, _) in GOLDEN {
            let once = snake_case(input);
            assert_eq!(snake_case(&once), once, "idempotence for {input:?}");
            assert_eq!(snake_case(input), once, "determinism for {input:?}");
        }
    }

    #[test]
    fn test_digits_are_ascii_only() {
        assert_eq!(snake_case("x1Y"), "x1_y");
        assert_eq!(snake_case("x\u{0661}Y"), "x\u{0661}y");
    }
}

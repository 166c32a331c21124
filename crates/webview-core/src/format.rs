//! Positional placeholder substitution for localized text.
//!
//! Placeholders are `%1` through `%99`. Arguments bind to placeholders by
//! rank: the lowest-numbered placeholder present receives the first argument,
//! the next lowest the second, and so on. Every occurrence of a bound
//! placeholder is replaced, and inserted text is never rescanned.

use tracing::debug;

/// Parse a placeholder at byte offset `i`, which must hold `%`.
///
/// Returns the placeholder number and its length in bytes.
fn placeholder_at(bytes: &[u8], i: usize) -> Option<(u8, usize)> {
    let first = *bytes.get(i + 1)?;
    if !first.is_ascii_digit() {
        return None;
    }
    let mut number = first - b'0';
    let mut len = 2;
    if let Some(second) = bytes.get(i + 2).filter(|b| b.is_ascii_digit()) {
        number = number * 10 + (second - b'0');
        len = 3;
    }
    (number > 0).then_some((number, len))
}

/// Distinct placeholder numbers in `template`, ascending.
fn placeholder_numbers(template: &str) -> Vec<u8> {
    let bytes = template.as_bytes();
    let mut numbers = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some((number, len)) = placeholder_at(bytes, i) {
                if !numbers.contains(&number) {
                    numbers.push(number);
                }
                i += len;
                continue;
            }
        }
        i += 1;
    }
    numbers.sort_unstable();
    numbers
}

/// Substitute `args` into the placeholders of `template`.
///
/// Counts are not validated: surplus arguments are dropped and placeholders
/// without an argument are left verbatim.
pub fn substitute<S: AsRef<str>>(template: &str, args: &[S]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    let numbers = placeholder_numbers(template);
    if numbers.len() != args.len() {
        debug!(
            placeholders = numbers.len(),
            args = args.len(),
            "placeholder count does not match argument count"
        );
    }

    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut copied = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some((number, len)) = placeholder_at(bytes, i) {
                let arg = numbers
                    .binary_search(&number)
                    .ok()
                    .and_then(|rank| args.get(rank));
                if let Some(arg) = arg {
                    out.push_str(&template[copied..i]);
                    out.push_str(arg.as_ref());
                    copied = i + len;
                }
                i += len;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&template[copied..]);
    out
}

/// Substitute a single value into the lowest-numbered placeholder.
pub fn arg(template: &str, value: &str) -> String {
    substitute(template, &[value])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_in_order() {
        assert_eq!(substitute("Hello, %1!", &["Alice"]), "Hello, Alice!");
        assert_eq!(
            substitute("%1 wants to open %2", &["example.com", "a popup"]),
            "example.com wants to open a popup"
        );
    }

    #[test]
    fn test_substitute_binds_by_rank_not_position() {
        assert_eq!(substitute("%2 before %1", &["a", "b"]), "b before a");
        assert_eq!(substitute("%3 and %7", &["x", "y"]), "x and y");
    }

    #[test]
    fn test_repeated_placeholder_replaced_everywhere() {
        assert_eq!(substitute("%1 and %1", &["it"]), "it and it");
    }

    #[test]
    fn test_count_mismatch_is_tolerated() {
        assert_eq!(substitute("only %1", &["one", "two"]), "only one");
        assert_eq!(substitute("%1 then %2", &["one"]), "one then %2");
        assert_eq!(substitute("no placeholders", &["unused"]), "no placeholders");
    }

    #[test]
    fn test_inserted_text_not_rescanned() {
        assert_eq!(substitute("%1 %2", &["%2", "x"]), "%2 x");
    }

    #[test]
    fn test_two_digit_and_literal_percent() {
        assert_eq!(substitute("%10|%1", &["first", "second"]), "second|first");
        assert_eq!(substitute("100% done, %0 and %", &["x"]), "100% done, %0 and %");
    }

    #[test]
    fn test_arg_with_multibyte_text() {
        assert_eq!(arg("%1\u{2026}", "ääkköset"), "ääkköset\u{2026}");
        assert_eq!(arg("«%1»", "ok"), "«ok»");
    }

    #[test]
    fn test_no_args_returns_template() {
        let none: [&str; 0] = [];
        assert_eq!(substitute("keep %1", &none), "keep %1");
    }
}

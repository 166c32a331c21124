//! # webview-popups
//!
//! Turns gecko keys into localized popup strings. Covers key conversion,
//! text bundle resolution, truncation, and the property-file generator that
//! produces the translation sources those keys are looked up in.

pub mod bundle;
pub mod key;
pub mod properties;
pub mod trim;

pub use bundle::{resolve_text_bundle, TextBundle};
pub use key::{convert_key, snake_case, DEFAULT_PREFIX};
pub use trim::{trim_input, DEFAULT_MAX_LENGTH, TRUNCATE_KEY};

#[cfg(test)]
mod tests {
    use super::*;
    use webview_core::config::PopupsConfig;

    #[test]
    fn test_config_defaults_match_popup_constants() {
        let popups = PopupsConfig::default();
        assert_eq!(popups.prefix, DEFAULT_PREFIX);
        assert_eq!(popups.max_length, DEFAULT_MAX_LENGTH);
    }
}

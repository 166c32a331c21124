use webview_core::format;
use webview_core::traits::Catalog;

/// Default truncation bound, in characters.
pub const DEFAULT_MAX_LENGTH: usize = 150;

/// Translation key of the truncation template; `%1` is the kept prefix.
pub const TRUNCATE_KEY: &str = "sailfish_components_webview_popups-st-truncate";

/// Template used when the catalog has no truncation translation.
pub const TRUNCATE_TEMPLATE: &str = "%1\u{2026}";

/// Trim `text` to `max_length` characters, marking the cut with a localized ellipsis.
///
/// Text at or below the bound comes back unchanged. The marker is added on
/// top of the bound. A bound of zero keeps an empty prefix, so any non-empty
/// text becomes the bare marker.
pub fn trim_input<C>(catalog: &C, text: &str, max_length: usize) -> String
where
    C: Catalog + ?Sized,
{
    let Some((cut, _)) = text.char_indices().nth(max_length) else {
        return text.to_string();
    };

    let template = catalog
        .translation(TRUNCATE_KEY)
        .unwrap_or_else(|| TRUNCATE_TEMPLATE.to_string());
    format::arg(&template, &text[..cut])
}

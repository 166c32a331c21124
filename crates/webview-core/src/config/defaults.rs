pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

pub(crate) fn default_prefix() -> String {
    "sailfish_components_webview_popups-la".to_string()
}

pub(crate) fn default_max_length() -> usize {
    150
}

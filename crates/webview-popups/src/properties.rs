//! Translation sources generated from gecko `.properties` files.
//!
//! Each `name = text` line becomes one translation whose key comes from
//! [`snake_case`], so generated ids always match what
//! [`resolve_text_bundle`](crate::bundle::resolve_text_bundle) looks up.
//! Output is either an lupdate stub file or a flat TOML catalog.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, info};
use webview_core::error::StringsError;

use crate::key::{convert_key, snake_case};

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<name>[\w-]+)\s*=\s*(?P<text>.*)").expect("entry pattern is valid")
});

static GECKO_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%(?:([0-9]+)\$)?S").expect("placeholder pattern is valid")
});

const CPP_HEADER: &str = "/* Generated dummy file, do not edit */";
const CPP_FOOTER: &str = "/* End of translations */";

/// One translatable entry of a property file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Where the property file came from, ideally a permalink.
    pub source: String,
    /// 1-based line number in the property file.
    pub lineno: usize,
    /// Gecko key as written in the file.
    pub original_key: String,
    /// snake_case form of the gecko key, made into a C++ identifier.
    pub key: String,
    /// Text with gecko placeholders converted and access keys removed.
    pub text: String,
}

impl Translation {
    /// Translation id under `prefix`, as looked up at runtime.
    pub fn id(&self, prefix: &str) -> String {
        convert_key(&self.original_key, prefix)
    }

    /// lupdate stub for this entry.
    pub fn render_cpp(&self, prefix: &str) -> String {
        format!(
            "\n//: This is a transformed translation key, the original translation key\n\
             //: ({original}) is from {source} at line {lineno}\n\
             //% \"{text}\"\n\
             const auto {key} = qtTrId(\"{id}\");",
            original = self.original_key,
            source = self.source,
            lineno = self.lineno,
            text = self.text,
            key = self.key,
            id = self.id(prefix),
        )
    }
}

/// Turn a snake_case key into a valid C++ identifier.
///
/// Anything outside `[A-Za-z0-9_]` becomes `_`, and a leading digit gets a
/// `_` in front.
pub fn cpp_identifier(key: &str) -> String {
    let mut ident: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

/// Replace gecko placeholders with positional ones and drop access key markers.
///
/// `%S` becomes `%1` and `%N$S` becomes `%N`.
pub fn convert_text(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = GECKO_PLACEHOLDER
            .replace_all(&current, |caps: &Captures<'_>| match caps.get(1) {
                Some(n) => format!("%{}", n.as_str()),
                None => "%1".to_string(),
            })
            .into_owned();
        if next == current {
            break;
        }
        current = next;
    }
    current.replace('&', "")
}

/// Parse one property line. Comments and other non-entries yield `None`.
pub fn parse_line(line: &str, lineno: usize, source: &str) -> Option<Translation> {
    let caps = ENTRY.captures(line)?;
    let name = &caps["name"];
    Some(Translation {
        source: source.to_string(),
        lineno,
        original_key: name.to_string(),
        key: cpp_identifier(&snake_case(name)),
        text: convert_text(&caps["text"]),
    })
}

/// Parse the contents of a property file.
pub fn parse_properties(content: &str, source: &str) -> Vec<Translation> {
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| parse_line(line, i + 1, source))
        .collect()
}

/// Read and parse a property file.
pub fn read_properties(path: impl AsRef<Path>, source: &str) -> Result<Vec<Translation>, StringsError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            StringsError::Properties(format!("Invalid character in file: {}", path.display()))
        } else {
            StringsError::Io(e)
        }
    })?;
    let translations = parse_properties(&content, source);
    info!(
        "parsed {} translations from {}",
        translations.len(),
        path.display()
    );
    Ok(translations)
}

/// Render the lupdate stub file for `translations`.
pub fn render_cpp(translations: &[Translation], prefix: &str) -> String {
    let mut out = String::from(CPP_HEADER);
    out.push('\n');
    for translation in translations {
        out.push_str(&translation.render_cpp(prefix));
        out.push('\n');
    }
    out.push_str(CPP_FOOTER);
    out.push('\n');
    out
}

/// Render `translations` as a flat TOML catalog keyed by translation id.
///
/// Later entries win when a key is repeated.
pub fn render_catalog(translations: &[Translation], prefix: &str) -> Result<String, StringsError> {
    let mut entries = BTreeMap::new();
    for translation in translations {
        if let Some(previous) = entries.insert(translation.id(prefix), translation.text.clone()) {
            debug!(
                key = %translation.original_key,
                line = translation.lineno,
                previous = %previous,
                "duplicate property overrides earlier entry"
            );
        }
    }
    toml::to_string(&entries)
        .map_err(|e| StringsError::Properties(format!("failed to render catalog: {e}")))
}

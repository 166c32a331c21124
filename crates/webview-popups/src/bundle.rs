//! Text bundles: a gecko key, optionally with positional arguments.

use serde::Deserialize;
use tracing::debug;
use webview_core::format;
use webview_core::traits::Catalog;

use crate::key::convert_key;

/// A gecko key, optionally paired with values for its `%1`, `%2`, … placeholders.
///
/// Deserializes from either a JSON string (bare key) or a JSON array whose
/// first element is the key and whose remaining elements are the arguments.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawBundle")]
pub enum TextBundle {
    /// Bare gecko key.
    Key(String),
    /// Gecko key plus ordered substitution values.
    WithArgs { key: String, args: Vec<String> },
}

impl TextBundle {
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    /// Pair `key` with arguments; anything `ToString` is accepted.
    pub fn with_args<I, T>(key: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self::WithArgs {
            key: key.into(),
            args: args.into_iter().map(|a| a.to_string()).collect(),
        }
    }

    /// The gecko key this bundle resolves.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Key(key) | Self::WithArgs { key, .. } => key,
        }
    }

    /// Substitution values, empty for a bare key.
    pub fn args(&self) -> &[String] {
        match self {
            Self::Key(_) => &[],
            Self::WithArgs { args, .. } => args,
        }
    }
}

impl From<&str> for TextBundle {
    fn from(key: &str) -> Self {
        Self::Key(key.to_string())
    }
}

impl From<String> for TextBundle {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBundle {
    Key(String),
    Sequence(Vec<serde_json::Value>),
}

impl TryFrom<RawBundle> for TextBundle {
    type Error = String;

    fn try_from(raw: RawBundle) -> Result<Self, Self::Error> {
        let values = match raw {
            RawBundle::Key(key) => return Ok(Self::Key(key)),
            RawBundle::Sequence(values) => values,
        };

        let mut values = values.into_iter();
        let key = match values.next() {
            Some(serde_json::Value::String(key)) => key,
            Some(other) => return Err(format!("bundle key must be a string, got {other}")),
            None => return Err("bundle must not be empty".to_string()),
        };
        let args = values
            .map(|value| match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .collect();
        Ok(Self::WithArgs { key, args })
    }
}

/// Resolve a text bundle to the string shown to the user.
///
/// The gecko key is converted under `prefix` and looked up in `catalog`.
/// Without a translation the gecko key itself is used, since gecko often
/// hands over strings that are already translated. Arguments are then
/// substituted in order.
pub fn resolve_text_bundle<C>(catalog: &C, bundle: impl Into<TextBundle>, prefix: &str) -> String
where
    C: Catalog + ?Sized,
{
    let bundle = bundle.into();
    let id = convert_key(bundle.identifier(), prefix);
    let text = match catalog.translation(&id) {
        Some(text) => text,
        None => {
            debug!(key = bundle.identifier(), id = %id, "no translation, using gecko key");
            bundle.identifier().to_string()
        }
    };

    match &bundle {
        TextBundle::Key(_) => text,
        TextBundle::WithArgs { args, .. } => format::substitute(&text, args),
    }
}

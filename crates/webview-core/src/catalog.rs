//! Catalog implementations: identity, in-memory map, and layered chain.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::error::StringsError;
use crate::traits::Catalog;

/// Catalog with no translations installed; echoes every key.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityCatalog;

impl Catalog for IdentityCatalog {
    fn lookup(&self, key: &str) -> String {
        key.to_string()
    }
}

/// Catalog backed by a flat `key → text` map.
#[derive(Debug, Clone, Default)]
pub struct MapCatalog {
    entries: HashMap<String, String>,
}

impl MapCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat TOML table of `"key" = "text"` pairs.
    pub fn from_toml_str(content: &str) -> Result<Self, StringsError> {
        let entries: HashMap<String, String> = toml::from_str(content)
            .map_err(|e| StringsError::Catalog(format!("failed to parse catalog: {e}")))?;
        Ok(Self { entries })
    }

    /// Parse a flat JSON object of `"key": "text"` pairs.
    pub fn from_json_str(content: &str) -> Result<Self, StringsError> {
        let entries: HashMap<String, String> = serde_json::from_str(content)?;
        Ok(Self { entries })
    }

    /// Load a catalog file. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StringsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            StringsError::Catalog(format!("failed to read {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        info!(
            "loaded {} translations from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Add or replace a translation.
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Catalog for MapCatalog {
    fn lookup(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(text) => text.clone(),
            None => key.to_string(),
        }
    }
}

/// Ordered stack of catalogs, most specific first.
///
/// The first catalog with a non-echo answer wins; when none has one the key
/// is echoed. A locale catalog layered over engineering English is the usual
/// arrangement.
#[derive(Default)]
pub struct CatalogChain {
    layers: Vec<Box<dyn Catalog>>,
}

impl CatalogChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a lower-priority layer.
    pub fn push(&mut self, catalog: impl Catalog + 'static) {
        self.layers.push(Box::new(catalog));
    }

    /// Load every path in order as a `MapCatalog` layer.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self, StringsError> {
        let mut chain = Self::new();
        for path in paths {
            chain.push(MapCatalog::load(path)?);
        }
        Ok(chain)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl std::fmt::Debug for CatalogChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogChain")
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl Catalog for CatalogChain {
    fn lookup(&self, key: &str) -> String {
        for (depth, layer) in self.layers.iter().enumerate() {
            if let Some(text) = layer.translation(key) {
                debug!(key, depth, "translation found");
                return text;
            }
        }
        key.to_string()
    }
}

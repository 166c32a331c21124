/// Translation catalog — the lookup service behind every localized string.
///
/// Implementations follow the identity-echo convention: `lookup` returns the
/// `key` argument unchanged when no translation is installed. Any other
/// answer is localized text, possibly containing `%1`, `%2`, … placeholders.
pub trait Catalog: Send + Sync {
    /// Look up `key`, echoing it back when there is no translation.
    fn lookup(&self, key: &str) -> String;

    /// Look up `key`, mapping the echo sentinel to `None`.
    ///
    /// A translation that happens to equal its own key is indistinguishable
    /// from a missing one and is reported as `None` too.
    fn translation(&self, key: &str) -> Option<String> {
        let answer = self.lookup(key);
        if answer == key {
            None
        } else {
            Some(answer)
        }
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn lookup(&self, key: &str) -> String {
        (**self).lookup(key)
    }
}

impl<C: Catalog + ?Sized> Catalog for Box<C> {
    fn lookup(&self, key: &str) -> String {
        (**self).lookup(key)
    }
}

//! Translation catalog and validation context.
//!
//! Filters identify their kind with a slug; the driver resolves slugs into
//! human labels through an injected catalog rather than a process-wide
//! registry. Keys follow the `<scope>.types.<slug>` layout so callers can
//! merge the catalog into an existing message store.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Default scope prepended to translation keys.
pub const DEFAULT_SCOPE: &str = "vestibule";

/// A thread-safe catalog of translation strings.
///
/// Lookups take a read lock and registrations a write lock, so a catalog
/// can be shared between concurrent validation passes while staying
/// read-only for the duration of each pass.
///
/// # Example
///
/// ```rust
/// use vestibule::Translations;
///
/// let translations = Translations::new();
/// assert_eq!(translations.type_key("integer"), "vestibule.types.integer");
/// assert_eq!(translations.type_label("integer"), "integer");
///
/// translations.register_type("integer", "whole number");
/// assert_eq!(translations.type_label("integer"), "whole number");
/// ```
pub struct Translations {
    scope: String,
    entries: RwLock<HashMap<String, String>>,
}

impl Translations {
    /// Creates a catalog under the default scope, seeded with English
    /// labels for the built-in filter slugs.
    pub fn new() -> Self {
        Self::with_scope(DEFAULT_SCOPE)
    }

    /// Creates a seeded catalog under a caller-owned scope.
    pub fn with_scope(scope: impl Into<String>) -> Self {
        let catalog = Self {
            scope: scope.into(),
            entries: RwLock::new(HashMap::new()),
        };
        for slug in ["array", "boolean", "decimal", "float", "hash", "integer", "string"] {
            catalog.register_type(slug, slug);
        }
        catalog
    }

    /// The scope under which type keys are constructed.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Registers (or replaces) an arbitrary key.
    pub fn register(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().insert(key.into(), value.into());
    }

    /// Registers the human label for a filter slug under this catalog's
    /// scope.
    pub fn register_type(&self, slug: &str, label: impl Into<String>) {
        let key = self.type_key(slug);
        self.register(key, label);
    }

    /// The lookup key for a filter slug: `<scope>.types.<slug>`.
    pub fn type_key(&self, slug: &str) -> String {
        format!("{}.types.{}", self.scope, slug)
    }

    /// Looks up an arbitrary key.
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    /// Resolves the human label for a filter slug.
    ///
    /// A slug with no catalog entry falls back to the slug itself, which is
    /// always a renderable string.
    pub fn type_label(&self, slug: &str) -> String {
        self.get(&self.type_key(slug)).unwrap_or_else(|| slug.to_string())
    }
}

impl Default for Translations {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-pass context carried through filter processing.
///
/// The context owns the translation catalog behind an `Arc`, so cloning a
/// context (or sharing one between passes) is cheap and never copies the
/// catalog.
#[derive(Clone, Default)]
pub struct Context {
    translations: Arc<Translations>,
}

impl Context {
    /// Creates a context with the default seeded catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context using a caller-supplied catalog.
    pub fn with_translations(translations: Arc<Translations>) -> Self {
        Self { translations }
    }

    /// The translation catalog for this pass.
    pub fn translations(&self) -> &Translations {
        &self.translations
    }
}

//! Instance-scoped resolution with configurable element overrides.

use rustc_hash::FxHashMap;

use super::{DocumentResolver, SymbolResolver};

/// Resolves ids for one component instance.
///
/// Overrides are checked first; everything else falls through to the shared
/// document. The document is borrowed, never modified, so several instances
/// of one component can resolve concurrently with different overrides.
#[derive(Clone, Debug)]
pub struct InstanceResolver<'a> {
    document: &'a DocumentResolver,
    overrides: FxHashMap<String, String>,
}

impl<'a> InstanceResolver<'a> {
    pub fn new(document: &'a DocumentResolver) -> Self {
        InstanceResolver {
            document,
            overrides: FxHashMap::default(),
        }
    }

    #[must_use]
    pub fn with_override(mut self, id: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_override(id, value);
        self
    }

    pub fn set_override(&mut self, id: impl Into<String>, value: impl Into<String>) {
        self.overrides.insert(id.into(), value.into());
    }

    pub fn clear_override(&mut self, id: &str) -> Option<String> {
        self.overrides.remove(id)
    }

    /// The override for `id`. Blank overrides do not count.
    pub fn override_for(&self, id: &str) -> Option<&str> {
        self.overrides
            .get(id)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}

impl SymbolResolver for InstanceResolver<'_> {
    fn is_symbol(&self, id: &str) -> bool {
        self.override_for(id).is_some() || self.document.is_symbol(id)
    }

    fn value_for_id(&self, id: &str) -> String {
        match self.override_for(id) {
            Some(value) => value.to_owned(),
            None => self.document.value_for_id(id),
        }
    }

    fn name_for_id(&self, id: &str) -> String {
        self.document.name_for_id(id)
    }
}

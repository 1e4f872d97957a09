//! Component-wide parameter table.

use std::fmt;

use rustc_hash::FxHashMap;

use super::SymbolResolver;

/// A named parameter as the document layer hands it over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    /// Unique id referenced from expressions.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Value expression, unevaluated.
    pub value: String,
}

impl Parameter {
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Parameter {
            id: id.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Where in a component a parameter was declared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScopeKind {
    #[default]
    Component,
    View,
    ComponentInstantiation,
    BusInterface,
    AddressSpace,
    MemoryMap,
    Register,
    RemapState,
}

impl ScopeKind {
    pub const ALL: [ScopeKind; 8] = [
        ScopeKind::Component,
        ScopeKind::View,
        ScopeKind::ComponentInstantiation,
        ScopeKind::BusInterface,
        ScopeKind::AddressSpace,
        ScopeKind::MemoryMap,
        ScopeKind::Register,
        ScopeKind::RemapState,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScopeKind::Component => "component",
            ScopeKind::View => "view",
            ScopeKind::ComponentInstantiation => "componentInstantiation",
            ScopeKind::BusInterface => "busInterface",
            ScopeKind::AddressSpace => "addressSpace",
            ScopeKind::MemoryMap => "memoryMap",
            ScopeKind::Register => "register",
            ScopeKind::RemapState => "remapState",
        }
    }

    /// Inverse of [`as_str`](Self::as_str).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters declared by one element of a component.
#[derive(Clone, Debug, Default)]
pub struct ParameterScope {
    pub kind: ScopeKind,
    pub parameters: Vec<Parameter>,
}

impl ParameterScope {
    pub fn new(kind: ScopeKind, parameters: Vec<Parameter>) -> Self {
        ParameterScope { kind, parameters }
    }
}

#[derive(Clone, Debug)]
struct Binding {
    parameter: Parameter,
    scope: ScopeKind,
}

/// Resolves ids against every parameter declared in one component.
///
/// Ids are unique per document. When two scopes declare the same id the
/// first declaration is kept.
#[derive(Clone, Debug, Default)]
pub struct DocumentResolver {
    bindings: FxHashMap<String, Binding>,
    order: Vec<String>,
}

impl DocumentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scopes(scopes: impl IntoIterator<Item = ParameterScope>) -> Self {
        let mut resolver = Self::new();
        for scope in scopes {
            resolver.add_scope(scope);
        }
        resolver
    }

    pub fn add_scope(&mut self, scope: ParameterScope) {
        for parameter in scope.parameters {
            self.insert(scope.kind, parameter);
        }
    }

    /// Add one parameter. Returns `false` if it was ignored: an empty id, or
    /// an id that is already bound.
    pub fn insert(&mut self, scope: ScopeKind, parameter: Parameter) -> bool {
        if parameter.id.is_empty() {
            tracing::debug!(name = %parameter.name, %scope, "ignoring parameter without id");
            return false;
        }
        if let Some(existing) = self.bindings.get(&parameter.id) {
            tracing::warn!(
                id = %parameter.id,
                kept = %existing.scope,
                ignored = %scope,
                "duplicate parameter id"
            );
            return false;
        }
        self.order.push(parameter.id.clone());
        self.bindings
            .insert(parameter.id.clone(), Binding { parameter, scope });
        true
    }

    pub fn parameter(&self, id: &str) -> Option<&Parameter> {
        self.bindings.get(id).map(|binding| &binding.parameter)
    }

    pub fn scope_of(&self, id: &str) -> Option<ScopeKind> {
        self.bindings.get(id).map(|binding| binding.scope)
    }

    /// Parameter ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl SymbolResolver for DocumentResolver {
    fn is_symbol(&self, id: &str) -> bool {
        self.bindings.contains_key(id)
    }

    fn value_for_id(&self, id: &str) -> String {
        self.parameter(id)
            .map_or_else(|| id.to_owned(), |parameter| parameter.value.clone())
    }

    /// The parameter name, or the id for unnamed and unknown parameters.
    fn name_for_id(&self, id: &str) -> String {
        match self.parameter(id) {
            Some(parameter) if !parameter.name.is_empty() => parameter.name.clone(),
            _ => id.to_owned(),
        }
    }
}

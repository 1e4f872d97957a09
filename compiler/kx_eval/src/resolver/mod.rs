//! Symbol resolution.
//!
//! The evaluator never owns symbol tables. It asks a [`SymbolResolver`]
//! whether an identifier is a symbol and, if so, which expression text the
//! symbol is bound to. That text is evaluated recursively.
//!
//! # Resolution tiers
//!
//! 1. [`NullResolver`]: knows no symbols.
//! 2. [`DocumentResolver`]: parameters declared anywhere in one component.
//! 3. [`InstanceResolver`]: per-instance overrides (configurable element
//!    values) checked before a borrowed [`DocumentResolver`].
//!
//! [`Resolver`] is the closed set of the three, for callers that pick a
//! tier at runtime.

mod document;
mod instance;

pub use document::{DocumentResolver, Parameter, ParameterScope, ScopeKind};
pub use instance::InstanceResolver;

use kx_lexer::literal_base;

/// Lookup capability used by the evaluator and the expression formatter.
pub trait SymbolResolver {
    /// Whether `id` is bound in any tier this resolver consults.
    fn is_symbol(&self, id: &str) -> bool;

    /// Expression text bound to `id`, or `id` itself when unbound.
    fn value_for_id(&self, id: &str) -> String;

    /// Human-readable name for `id`.
    fn name_for_id(&self, id: &str) -> String {
        id.to_owned()
    }

    /// Radix the symbol's bound value is written in: 2, 8, 10 or 16, or 0
    /// when the value is not a single literal.
    fn base_for_symbol(&self, id: &str) -> u32 {
        literal_base(&self.value_for_id(id))
    }
}

impl<R: SymbolResolver + ?Sized> SymbolResolver for &R {
    fn is_symbol(&self, id: &str) -> bool {
        (**self).is_symbol(id)
    }

    fn value_for_id(&self, id: &str) -> String {
        (**self).value_for_id(id)
    }

    fn name_for_id(&self, id: &str) -> String {
        (**self).name_for_id(id)
    }

    fn base_for_symbol(&self, id: &str) -> u32 {
        (**self).base_for_symbol(id)
    }
}

/// Resolver with no symbols.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullResolver;

impl SymbolResolver for NullResolver {
    fn is_symbol(&self, _id: &str) -> bool {
        false
    }

    fn value_for_id(&self, id: &str) -> String {
        id.to_owned()
    }
}

/// One of the resolution tiers, chosen at runtime.
#[derive(Clone, Debug)]
pub enum Resolver<'a> {
    Null(NullResolver),
    Document(&'a DocumentResolver),
    Instance(InstanceResolver<'a>),
}

impl SymbolResolver for Resolver<'_> {
    fn is_symbol(&self, id: &str) -> bool {
        match self {
            Resolver::Null(r) => r.is_symbol(id),
            Resolver::Document(r) => r.is_symbol(id),
            Resolver::Instance(r) => r.is_symbol(id),
        }
    }

    fn value_for_id(&self, id: &str) -> String {
        match self {
            Resolver::Null(r) => r.value_for_id(id),
            Resolver::Document(r) => r.value_for_id(id),
            Resolver::Instance(r) => r.value_for_id(id),
        }
    }

    fn name_for_id(&self, id: &str) -> String {
        match self {
            Resolver::Null(r) => r.name_for_id(id),
            Resolver::Document(r) => r.name_for_id(id),
            Resolver::Instance(r) => r.name_for_id(id),
        }
    }
}

impl From<NullResolver> for Resolver<'_> {
    fn from(resolver: NullResolver) -> Self {
        Resolver::Null(resolver)
    }
}

impl<'a> From<&'a DocumentResolver> for Resolver<'a> {
    fn from(resolver: &'a DocumentResolver) -> Self {
        Resolver::Document(resolver)
    }
}

impl<'a> From<InstanceResolver<'a>> for Resolver<'a> {
    fn from(resolver: InstanceResolver<'a>) -> Self {
        Resolver::Instance(resolver)
    }
}

use std::iter;

use typed_generational_arena::{SmallSlab, SmallSlabIndex};

pub type ScopeIndex = SmallSlabIndex<ScopeBody>;
pub type Scopes = SmallSlab<ScopeBody>;

/// Separator used between scope names when none is given.
pub const DEFAULT_SCOPE_SEPARATOR: &str = "::";

/// Name given to the root scope. It never appears in a scope path.
pub const ROOT_SCOPE_NAME: &str = "$root";

/// The declaration scopes a struct type can be declared under.
///
/// Implemented by whatever owns the hierarchical model of declared components.
/// Struct types only ever hold a [`ScopeIndex`] into it, never the scope itself.
pub trait DeclScope {
    fn scope_name(&self, scope: ScopeIndex) -> &str;

    fn parent_scope(&self, scope: ScopeIndex) -> Option<ScopeIndex>;

    fn is_root_scope(&self, scope: ScopeIndex) -> bool;

    /// The declaration namespace of `scope` itself, excluding the root.
    ///
    /// A scope declared directly under the root has an empty path.
    fn scope_path(&self, scope: ScopeIndex, separator: &str) -> String {
        join_scope_path(self, self.parent_scope(scope), separator)
    }
}

/// Builds the path naming everything from the root (exclusive) down to `parent` (inclusive).
pub(crate) fn join_scope_path<S: DeclScope + ?Sized>(
    scopes: &S,
    parent: Option<ScopeIndex>,
    separator: &str,
) -> String {
    let Some(parent) = parent else {
        return String::new();
    };

    if scopes.is_root_scope(parent) {
        return String::new();
    }

    let parent_path = scopes.scope_path(parent, separator);
    let name = scopes.scope_name(parent);

    if parent_path.is_empty() {
        name.to_string()
    } else {
        format!("{parent_path}{separator}{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    Root,
    Component,
}

#[derive(Debug, Clone)]
pub struct ScopeBody {
    /// The name of the scope.
    pub name: String,
    pub kind: ScopeKind,
    /// The enclosing scope, `None` only for the root.
    pub parent: Option<ScopeIndex>,
}

/// A tree of nested declaration scopes with a single root.
#[derive(Debug, Clone)]
pub struct ScopeTree {
    scopes: Scopes,
    root: ScopeIndex,
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTree {
    pub fn new() -> Self {
        let mut scopes = Scopes::new();
        let root = scopes.insert(ScopeBody {
            name: ROOT_SCOPE_NAME.to_string(),
            kind: ScopeKind::Root,
            parent: None,
        });

        Self { scopes, root }
    }

    pub fn root(&self) -> ScopeIndex {
        self.root
    }

    /// Adds a component scope nested directly in `parent`.
    pub fn add_scope(&mut self, parent: ScopeIndex, name: impl Into<String>) -> ScopeIndex {
        self.scopes.insert(ScopeBody {
            name: name.into(),
            kind: ScopeKind::Component,
            parent: Some(parent),
        })
    }

    pub fn get(&self, scope: ScopeIndex) -> Option<&ScopeBody> {
        self.scopes.get(scope)
    }

    /// Iterates from `scope` outwards, ending with the root.
    pub fn ancestors(&self, scope: ScopeIndex) -> impl Iterator<Item = ScopeIndex> + '_ {
        iter::successors(Some(scope), |x| self.parent_scope(*x))
    }
}

impl DeclScope for ScopeTree {
    fn scope_name(&self, scope: ScopeIndex) -> &str {
        &self.scopes[scope].name
    }

    fn parent_scope(&self, scope: ScopeIndex) -> Option<ScopeIndex> {
        self.scopes[scope].parent
    }

    fn is_root_scope(&self, scope: ScopeIndex) -> bool {
        self.scopes[scope].kind == ScopeKind::Root
    }
}

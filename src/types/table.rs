use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::{debug, instrument};

use super::{PropertyType, StructError, StructRef, StructType};
use crate::scope::{DeclScope, ScopeIndex};

/// Holds every struct type declared in a compile unit.
#[derive(Debug)]
pub struct StructTable {
    root: StructRef,
    /// The struct types declared directly in each scope.
    declared: HashMap<ScopeIndex, HashMap<String, StructRef>>,
    /// All declared types, in declaration order.
    order: Vec<StructRef>,
}

impl Default for StructTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StructTable {
    pub fn new() -> Self {
        Self {
            root: StructType::root(),
            declared: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// The abstract struct type declarations without an explicit base derive from.
    pub fn root(&self) -> &StructRef {
        &self.root
    }

    /// Declares a new struct type in `scope`.
    #[instrument(level = "debug", skip_all, fields(name = %name))]
    pub fn declare(
        &mut self,
        scope: ScopeIndex,
        name: &str,
        base: Option<&StructRef>,
        members: IndexMap<String, PropertyType>,
        is_abstract: bool,
    ) -> Result<StructRef, StructError> {
        let in_scope = self.declared.entry(scope).or_default();
        if in_scope.contains_key(name) {
            return Err(StructError::DuplicateDeclaration {
                name: name.to_string(),
            });
        }

        let base = base.unwrap_or(&self.root);
        let ty = base.derive(name, members, is_abstract)?;
        ty.set_parent_scope(scope)?;

        in_scope.insert(name.to_string(), ty.clone());
        self.order.push(ty.clone());
        debug!("declared struct {:?} derived from {:?}", name, base.name());

        Ok(ty)
    }

    /// Resolves `name` as seen from `from`, searching outwards through the enclosing scopes.
    pub fn lookup(
        &self,
        scopes: &impl DeclScope,
        from: ScopeIndex,
        name: &str,
    ) -> Option<&StructRef> {
        let mut current = Some(from);
        while let Some(scope) = current {
            if let Some(ty) = self.declared.get(&scope).and_then(|x| x.get(name)) {
                return Some(ty);
            }
            current = scopes.parent_scope(scope);
        }
        None
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &StructRef> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

use std::sync::{Arc, OnceLock};

use educe::Educe;
use indexmap::IndexMap;
use tracing::{debug, instrument};

use super::{PropertyType, PropertyValue, StructError, StructValue};
use crate::{
    config::NamingConfig,
    scope::{DEFAULT_SCOPE_SEPARATOR, DeclScope, ScopeIndex, join_scope_path},
};

pub type StructRef = Arc<StructType>;

/// Name of the abstract struct type every user struct derives from.
pub const ROOT_STRUCT_NAME: &str = "struct";

/// A user-defined struct type.
///
/// Struct types are built by deriving from an existing one (ultimately from [`StructType::root`]),
/// and are shared as [`StructRef`]s once built. The only state that can change afterwards is the
/// parent scope, which is set at most once.
#[derive(Educe)]
#[educe(Debug)]
pub struct StructType {
    name: String,
    /// All members, inherited ones first, in declaration order.
    members: IndexMap<String, PropertyType>,
    is_abstract: bool,
    #[educe(Debug(ignore))]
    base: Option<StructRef>,
    parent_scope: OnceLock<ScopeIndex>,
}

impl StructType {
    /// Creates the abstract root struct type, with no members.
    pub fn root() -> StructRef {
        Arc::new(Self {
            name: ROOT_STRUCT_NAME.to_string(),
            members: IndexMap::new(),
            is_abstract: true,
            base: None,
            parent_scope: OnceLock::new(),
        })
    }

    /// Defines a new struct type derived from this one.
    ///
    /// The new type has every member of this type followed by `members`. None of `members` may
    /// already be a member of this type, inherited or not.
    #[instrument(level = "debug", skip_all, fields(base = %self.name, name = %name))]
    pub fn derive(
        self: &Arc<Self>,
        name: &str,
        members: IndexMap<String, PropertyType>,
        is_abstract: bool,
    ) -> Result<StructRef, StructError> {
        let colliding: Vec<String> = members
            .keys()
            .filter(|x| self.members.contains_key(*x))
            .cloned()
            .collect();

        if !colliding.is_empty() {
            return Err(StructError::MemberCollision {
                name: name.to_string(),
                base: self.name.clone(),
                colliding,
            });
        }

        let mut all_members = self.members.clone();
        all_members.extend(members);

        debug!("derived struct with {} members", all_members.len());

        Ok(Arc::new(Self {
            name: name.to_string(),
            members: all_members,
            is_abstract,
            base: Some(self.clone()),
            parent_scope: OnceLock::new(),
        }))
    }

    /// Creates an instance of this struct type.
    ///
    /// `values` must name every member exactly once, in any order.
    #[instrument(level = "debug", skip_all, fields(name = %self.name))]
    pub fn construct(
        self: &Arc<Self>,
        mut values: IndexMap<String, PropertyValue>,
    ) -> Result<StructValue, StructError> {
        if self.is_abstract {
            return Err(StructError::AbstractInstantiation {
                name: self.name.clone(),
            });
        }

        let missing: Vec<String> = self
            .members
            .keys()
            .filter(|x| !values.contains_key(*x))
            .cloned()
            .collect();
        let extra: Vec<String> = values
            .keys()
            .filter(|x| !self.members.contains_key(*x))
            .cloned()
            .collect();

        if !missing.is_empty() || !extra.is_empty() {
            return Err(StructError::MemberMismatch {
                name: self.name.clone(),
                missing,
                extra,
            });
        }

        let mut ordered = IndexMap::with_capacity(self.members.len());
        for member in self.members.keys() {
            if let Some(value) = values.swap_remove(member) {
                ordered.insert(member.clone(), value);
            }
        }

        Ok(StructValue::new(self.clone(), ordered))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    /// The struct type this one was derived from, `None` for the root.
    pub fn base(&self) -> Option<&StructRef> {
        self.base.as_ref()
    }

    /// Whether `ancestor` is this type or one of the types it was derived from.
    pub fn derives_from(&self, ancestor: &StructType) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if std::ptr::eq(ty, ancestor) {
                return true;
            }
            current = ty.base.as_deref();
        }
        false
    }

    pub fn members(&self) -> &IndexMap<String, PropertyType> {
        &self.members
    }

    pub fn member_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn member_type(&self, member: &str) -> Option<&PropertyType> {
        self.members.get(member)
    }

    pub fn contains_member(&self, member: &str) -> bool {
        self.members.contains_key(member)
    }

    /// Associates this type with the scope it was declared in.
    ///
    /// Setting the scope it already has is a no-op.
    pub fn set_parent_scope(&self, scope: ScopeIndex) -> Result<(), StructError> {
        match self.parent_scope.set(scope) {
            Ok(()) => {
                debug!(name = %self.name, "set parent scope");
                Ok(())
            }
            Err(scope) if self.parent_scope.get() == Some(&scope) => Ok(()),
            Err(_) => Err(StructError::ParentScopeAlreadySet {
                name: self.name.clone(),
            }),
        }
    }

    pub fn parent_scope(&self) -> Option<ScopeIndex> {
        self.parent_scope.get().copied()
    }

    /// The declaration namespace of this type, joined with `::`.
    pub fn scope_path(&self, scopes: &impl DeclScope) -> String {
        self.scope_path_with_separator(scopes, DEFAULT_SCOPE_SEPARATOR)
    }

    /// The declaration namespace of this type.
    ///
    /// Empty when the type has no parent scope or was declared in the root scope.
    pub fn scope_path_with_separator(&self, scopes: &impl DeclScope, separator: &str) -> String {
        join_scope_path(scopes, self.parent_scope(), separator)
    }

    /// The scope path followed by the type name.
    pub fn qualified_name(&self, scopes: &impl DeclScope, naming: &NamingConfig) -> String {
        let path = self.scope_path_with_separator(scopes, &naming.scope_separator);
        if path.is_empty() {
            self.name.clone()
        } else {
            format!("{path}{}{}", naming.scope_separator, self.name)
        }
    }
}

use std::{fmt, sync::Arc};

use indexmap::IndexMap;
use itertools::Itertools;

use super::{StructError, StructRef};

/// A realized property value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Boolean(bool),
    Integer(u64),
    String(String),
    Struct(StructValue),
    Array(Vec<PropertyValue>),
}

impl PropertyValue {
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructValue> {
        match self {
            Self::Struct(x) => Some(x),
            _ => None,
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<StructValue> for PropertyValue {
    fn from(value: StructValue) -> Self {
        Self::Struct(value)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(value: Vec<PropertyValue>) -> Self {
        Self::Array(value)
    }
}

/// An immutable instance of a concrete struct type.
///
/// Only [`StructType::construct`](super::StructType::construct) creates these, so the stored
/// values always cover exactly the members of `ty`, in declaration order.
#[derive(Clone)]
pub struct StructValue {
    ty: StructRef,
    values: IndexMap<String, PropertyValue>,
}

impl StructValue {
    pub(super) fn new(ty: StructRef, values: IndexMap<String, PropertyValue>) -> Self {
        Self { ty, values }
    }

    /// Reads a member value.
    pub fn get(&self, member: &str) -> Result<&PropertyValue, StructError> {
        self.values
            .get(member)
            .ok_or_else(|| StructError::UnknownMember {
                name: self.ty.name().to_string(),
                member: member.to_string(),
            })
    }

    /// The struct type this value was constructed from.
    pub fn ty(&self) -> &StructRef {
        &self.ty
    }

    pub fn descriptor(&self) -> &StructRef {
        self.ty()
    }

    pub fn member_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.ty.member_names()
    }

    /// Member names paired with their values, in declaration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &PropertyValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl PartialEq for StructValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.ty, &other.ty) && self.values == other.values
    }
}

// Values are left out, a struct may nest arbitrarily deep.
impl fmt::Display for StructValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<struct '{}' ({})>",
            self.ty.name(),
            self.member_names().join(", ")
        )
    }
}

impl fmt::Debug for StructValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

use std::{fmt, sync::Arc};

pub mod errors;
pub mod structs;
pub mod table;
pub mod values;

pub use errors::StructError;
pub use structs::{ROOT_STRUCT_NAME, StructRef, StructType};
pub use table::StructTable;
pub use values::{PropertyValue, StructValue};

/// The type of a struct member, as seen by the struct subsystem.
///
/// Struct descriptors compare by identity, two separately declared struct types are never equal
/// even when their members are.
#[derive(Clone, Debug)]
pub enum PropertyType {
    Boolean,
    Bit,
    Longint,
    String,
    Struct(StructRef),
    Array(Box<PropertyType>),
}

impl PropertyType {
    pub fn is_user_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    pub fn as_user_struct(&self) -> Option<&StructRef> {
        match self {
            Self::Struct(ty) => Some(ty),
            _ => None,
        }
    }
}

impl PartialEq for PropertyType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Struct(a), Self::Struct(b)) => Arc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => a == b,
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}

impl Eq for PropertyType {}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::Boolean => write!(f, "boolean"),
            PropertyType::Bit => write!(f, "bit"),
            PropertyType::Longint => write!(f, "longint unsigned"),
            PropertyType::String => write!(f, "string"),
            PropertyType::Struct(ty) => write!(f, "{}", ty.name()),
            PropertyType::Array(of) => write!(f, "{of}[]"),
        }
    }
}

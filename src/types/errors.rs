use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructError {
    #[error("cannot create an instance of abstract struct type {name:?}")]
    AbstractInstantiation { name: String },
    #[error("struct {name:?} redeclares members inherited from {base:?}: {}", colliding.join(", "))]
    MemberCollision {
        name: String,
        base: String,
        colliding: Vec<String>,
    },
    /// Missing and extraneous members are the same kind of error, both lists are kept for reporting.
    #[error("values cannot be mapped onto the members of struct {name:?}")]
    MemberMismatch {
        name: String,
        missing: Vec<String>,
        extra: Vec<String>,
    },
    #[error("struct {name:?} has no member {member:?}")]
    UnknownMember { name: String, member: String },
    #[error("parent scope of struct {name:?} is already set")]
    ParentScopeAlreadySet { name: String },
    #[error("struct {name:?} is already declared in this scope")]
    DuplicateDeclaration { name: String },
}

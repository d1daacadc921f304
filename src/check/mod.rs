use crate::types::StructError;
use ariadne::{ColorGenerator, Label, Report, ReportKind};
use std::ops::Range;

#[derive(Debug, Clone)]
pub struct FileSpan {
    pub span: Range<usize>,
    pub path: String,
}

impl FileSpan {
    pub fn new(path: String, span: Range<usize>) -> Self {
        Self { path, span }
    }
}

impl ariadne::Span for FileSpan {
    type SourceId = String;

    fn source(&self) -> &Self::SourceId {
        &self.path
    }

    fn start(&self) -> usize {
        self.span.start
    }

    fn end(&self) -> usize {
        self.span.end
    }
}

/// The stable code a struct error is reported under.
pub fn error_code(error: &StructError) -> &'static str {
    match error {
        StructError::AbstractInstantiation { .. } => "AbstractInstantiation",
        StructError::MemberCollision { .. } => "MemberCollision",
        StructError::MemberMismatch { .. } => "MemberMismatch",
        StructError::UnknownMember { .. } => "UnknownMember",
        StructError::ParentScopeAlreadySet { .. } => "ParentScopeAlreadySet",
        StructError::DuplicateDeclaration { .. } => "DuplicateDeclaration",
    }
}

/// Creates a report from a struct error, pointing at `filespan`.
///
/// Struct errors carry no source locations, the caller knows which declaration or literal failed.
pub fn struct_error_to_report(error: &StructError, filespan: FileSpan) -> Report<'static, FileSpan> {
    let mut colors = ColorGenerator::new();
    colors.next();

    let label = match error {
        StructError::AbstractInstantiation { name } => {
            format!("Struct {name:?} is abstract and can only be derived from.")
        }
        StructError::MemberCollision { base, colliding, .. } => format!(
            "Members {colliding:?} are already declared by {base:?} or one of its bases."
        ),
        StructError::MemberMismatch { missing, extra, .. } => {
            let mut parts = Vec::new();
            if !missing.is_empty() {
                parts.push(format!("missing {missing:?}"));
            }
            if !extra.is_empty() {
                parts.push(format!("unexpected {extra:?}"));
            }
            format!("Struct literal members don't match: {}.", parts.join(", "))
        }
        StructError::UnknownMember { name, member } => {
            format!("Struct {name:?} has no member {member:?}.")
        }
        StructError::ParentScopeAlreadySet { name } => {
            format!("Struct {name:?} was already declared in another scope.")
        }
        StructError::DuplicateDeclaration { name } => {
            format!("Struct {name:?} is already declared in this scope.")
        }
    };

    Report::build(ReportKind::Error, filespan.clone())
        .with_code(error_code(error))
        .with_label(
            Label::new(filespan)
                .with_message(label)
                .with_color(colors.next()),
        )
        .with_message(error.to_string())
        .finish()
}

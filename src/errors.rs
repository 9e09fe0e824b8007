use thiserror::Error;

/// Failures raised by the widget object model.
///
/// Every variant names the operation that rejected the call
/// (`"Sublist.setSublistValue"`, `"Assistant.addStep"`, ...) so callers can
/// surface the same diagnostics the hosted API would.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("{operation}: Missing a required argument: {argument}")]
    MissingArgument {
        operation: &'static str,
        argument: &'static str,
    },
    #[error("You have entered an invalid type argument: {value}{}", suggestion_hint(.suggestion))]
    InvalidEnumValue {
        kind: &'static str,
        value: String,
        suggestion: Option<&'static str>,
    },
    #[error("{operation}: Index out of bounds (line {line}, line count {line_count})")]
    IndexOutOfBounds {
        operation: &'static str,
        line: i64,
        line_count: usize,
    },
    #[error("{property} cannot be set because {conflicting} is already set")]
    PropertyConflict {
        property: &'static str,
        conflicting: &'static str,
    },
    #[error("{operation}: a {kind} with id `{id}` already exists")]
    DuplicateId {
        operation: &'static str,
        kind: &'static str,
        id: String,
    },
    #[error("{operation}: no {kind} with id `{id}`")]
    UnknownReference {
        operation: &'static str,
        kind: &'static str,
        id: String,
    },
}

impl WidgetError {
    pub(crate) fn missing(operation: &'static str, argument: &'static str) -> Self {
        WidgetError::MissingArgument {
            operation,
            argument,
        }
    }

    pub(crate) fn duplicate(operation: &'static str, kind: &'static str, id: &str) -> Self {
        WidgetError::DuplicateId {
            operation,
            kind,
            id: id.to_string(),
        }
    }

    pub(crate) fn unknown(operation: &'static str, kind: &'static str, id: &str) -> Self {
        WidgetError::UnknownReference {
            operation,
            kind,
            id: id.to_string(),
        }
    }
}

fn suggestion_hint(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(token) => format!(" (did you mean `{}`?)", token),
        None => String::new(),
    }
}

pub type WidgetResult<T> = Result<T, WidgetError>;

/// Unwraps a required option or reports it as missing.
pub(crate) fn required<T>(
    value: Option<T>,
    operation: &'static str,
    argument: &'static str,
) -> WidgetResult<T> {
    value.ok_or_else(|| WidgetError::missing(operation, argument))
}

use crate::field::Field;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Field {field} does not accept a {expected} value")]
    InputKind {
        field: Field,
        expected: &'static str,
    },

    #[error("Conflict: {0}")]
    Conflict(String),
}

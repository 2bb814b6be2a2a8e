use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("paginated payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("paginated payload must be a JSON object")]
    NotAnObject,

    #[error("paginated payload has no `{0}` field")]
    MissingField(&'static str),

    #[error("invalid pagination meta: {0}")]
    InvalidMeta(&'static str),
}

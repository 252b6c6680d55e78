//! Location handling: fragment codec, link builders and the hash router.

pub mod codec;
pub mod links;
pub mod router;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unrecognized view {0:?}")]
    UnrecognizedView(String),
    #[error("view {view:?} requires {field}")]
    MissingField { view: String, field: &'static str },
    #[error("{field} must be a non-negative integer, got {value:?}")]
    InvalidIndex { field: &'static str, value: String },
}

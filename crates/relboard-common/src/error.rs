//! Error types and error codes for Relboard
//!
//! This module defines:
//! - `RelboardError`: Application-specific error enum
//! - `ErrorCode`: Structured error codes for API responses

use serde::{Deserialize, Serialize};

use crate::ENTITY_RELEASE;

/// Application-specific error types
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RelboardError {
    /// Another release of the same territory is already in production.
    #[error("{0}")]
    ProductionReleaseExists(String),

    /// A production release was dated after the promotion instant.
    #[error("{0}")]
    ProductionIsFuture(String),

    #[error("A new {0} cannot already have an ID")]
    IdExists(&'static str),

    #[error("Invalid id for {0}")]
    IdNull(&'static str),

    #[error("{0} {1} not found")]
    NotFound(&'static str, i64),

    #[error("login '{0}' already in use")]
    LoginExists(String),

    #[error("caused: {0}")]
    IllegalArgument(String),

    #[error("invalid search query: {0}")]
    InvalidQuery(String),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl RelboardError {
    /// HTTP status this error is reported with.
    pub fn status(&self) -> u16 {
        match self {
            RelboardError::ProductionReleaseExists(_)
            | RelboardError::ProductionIsFuture(_)
            | RelboardError::IdExists(_)
            | RelboardError::IdNull(_)
            | RelboardError::LoginExists(_)
            | RelboardError::IllegalArgument(_)
            | RelboardError::InvalidQuery(_) => 400,
            RelboardError::NotFound(_, _) => 404,
            RelboardError::DatabaseError(_) | RelboardError::InternalError(_) => 500,
        }
    }

    pub fn error_code(&self) -> ErrorCode<'static> {
        match self {
            RelboardError::ProductionReleaseExists(_) => CURRENT_EXISTS,
            RelboardError::ProductionIsFuture(_) => PROD_RELEASE_BAD,
            RelboardError::IdExists(_) => ID_EXISTS,
            RelboardError::IdNull(_) => ID_NULL,
            RelboardError::NotFound(_, _) => RESOURCE_NOT_FOUND,
            RelboardError::LoginExists(_) => LOGIN_EXISTS,
            RelboardError::IllegalArgument(_) => PARAMETER_VALIDATE_ERROR,
            RelboardError::InvalidQuery(_) => SEARCH_QUERY_ERROR,
            RelboardError::DatabaseError(_) => DATA_ACCESS_ERROR,
            RelboardError::InternalError(_) => SERVER_ERROR,
        }
    }

    /// Entity the error refers to, when there is one.
    pub fn entity_name(&self) -> Option<&'static str> {
        match self {
            RelboardError::ProductionReleaseExists(_) | RelboardError::ProductionIsFuture(_) => {
                Some(ENTITY_RELEASE)
            }
            RelboardError::IdExists(entity)
            | RelboardError::IdNull(entity)
            | RelboardError::NotFound(entity, _) => Some(entity),
            RelboardError::LoginExists(_) => Some(crate::ENTITY_USER),
            _ => None,
        }
    }
}

/// Error code structure for API responses
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCode<'a> {
    pub code: i32,
    pub key: &'a str,
    pub message: &'a str,
}

pub const DATA_ACCESS_ERROR: ErrorCode<'static> = ErrorCode {
    code: 10002,
    key: "dataAccess",
    message: "data access error",
};

pub const PARAMETER_VALIDATE_ERROR: ErrorCode<'static> = ErrorCode {
    code: 20002,
    key: "validation",
    message: "parameter validate error",
};

pub const RESOURCE_NOT_FOUND: ErrorCode<'static> = ErrorCode {
    code: 20004,
    key: "notfound",
    message: "resource not found",
};

pub const ID_EXISTS: ErrorCode<'static> = ErrorCode {
    code: 20101,
    key: "idexists",
    message: "a new entity cannot already have an id",
};

pub const ID_NULL: ErrorCode<'static> = ErrorCode {
    code: 20102,
    key: "idnull",
    message: "invalid id",
};

pub const LOGIN_EXISTS: ErrorCode<'static> = ErrorCode {
    code: 20103,
    key: "userexists",
    message: "login already in use",
};

pub const SEARCH_QUERY_ERROR: ErrorCode<'static> = ErrorCode {
    code: 20104,
    key: "badquery",
    message: "search query could not be parsed",
};

// Release promotion rejections
pub const CURRENT_EXISTS: ErrorCode<'static> = ErrorCode {
    code: 30001,
    key: "currentExists",
    message: "A release for this territory is already in production",
};

pub const PROD_RELEASE_BAD: ErrorCode<'static> = ErrorCode {
    code: 30002,
    key: "prodReleaseBad",
    message: "A release can not be in production at a date later than now",
};

pub const SERVER_ERROR: ErrorCode<'static> = ErrorCode {
    code: 30000,
    key: "internal",
    message: "server error",
};

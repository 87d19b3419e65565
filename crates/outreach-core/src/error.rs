//! Error type shared by every crate in the workspace.
//!
//! Lower layers classify failures into an [`ErrorKind`]; only the HTTP
//! layer decides which status code a kind maps to.

use std::fmt;

use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    /// Missing, malformed or expired credentials.
    Authentication,
    /// Authenticated, but the role lacks the permission.
    Authorization,
    Validation,
    /// Uniqueness violations, such as paying a disclosure twice.
    Conflict,
    /// Storage failure that is not otherwise classified.
    Database,
    Configuration,
    Internal,
}

impl ErrorKind {
    /// Upper snake case name used in logs and `Display`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Authentication => "AUTHENTICATION",
            Self::Authorization => "AUTHORIZATION",
            Self::Validation => "VALIDATION",
            Self::Conflict => "CONFLICT",
            Self::Database => "DATABASE",
            Self::Configuration => "CONFIGURATION",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified error with a caller-facing message and an optional cause.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    pub kind: ErrorKind,
    pub message: String,
    #[source]
    pub source: Option<BoxedSource>,
}

macro_rules! kind_constructors {
    ($($name:ident => $kind:ident),* $(,)?) => {
        $(
            #[doc = concat!("An error of kind [`ErrorKind::", stringify!($kind), "`].")]
            pub fn $name(message: impl Into<String>) -> Self {
                Self::new(ErrorKind::$kind, message)
            }
        )*
    };
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Like [`AppError::new`], keeping `source` for logs.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: Some(Box::new(source)),
            ..Self::new(kind, message)
        }
    }

    kind_constructors! {
        not_found => NotFound,
        authentication => Authentication,
        authorization => Authorization,
        validation => Validation,
        conflict => Conflict,
        database => Database,
        configuration => Configuration,
        internal => Internal,
    }

    pub fn is_conflict(&self) -> bool {
        self.kind == ErrorKind::Conflict
    }
}

#[cfg(feature = "sqlx")]
impl AppError {
    /// Classify a sqlx error, prefixing the message with `context`.
    ///
    /// Unique violations become `Conflict` and `RowNotFound` becomes
    /// `NotFound`. Anything else is `Database`.
    pub fn from_sqlx(context: impl Into<String>, err: sqlx::Error) -> Self {
        let context = context.into();

        let violated = err
            .as_database_error()
            .filter(|db| db.is_unique_violation())
            .map(|db| db.constraint().unwrap_or("unique").to_owned());
        if let Some(constraint) = violated {
            let message = format!("{context}: duplicate value violates '{constraint}'");
            return Self::with_source(ErrorKind::Conflict, message, err);
        }

        let kind = match err {
            sqlx::Error::RowNotFound => ErrorKind::NotFound,
            _ => ErrorKind::Database,
        };
        Self::with_source(kind, context, err)
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::from_sqlx("Storage operation failed", err)
    }
}

/// Cloning drops the source, which is not `Clone`.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self::new(self.kind, self.message.clone())
    }
}

// crates/shared-kernel/src/error.rs
use thiserror::Error;

use crate::value_objects::Resource;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FeedJoinError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FeedJoinError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, FeedJoinError>;

/// Domain-layer specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Record at position {index} has no string title")]
    MissingTitle { index: usize },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Which side of a join failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinFailureKind {
    ParentFetchFailed,
    ChildFetchFailed,
}

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Display keeps the `Failed to fetch <parents> with <children>: <cause>` form.
    #[error("Failed to fetch {parents} with {children}: {source}")]
    JoinFailed {
        kind: JoinFailureKind,
        parents: Resource,
        children: Resource,
        #[source]
        source: InfrastructureError,
    },
}

impl ApplicationError {
    pub fn kind(&self) -> JoinFailureKind {
        match self {
            Self::JoinFailed { kind, .. } => *kind,
        }
    }
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Something went wrong when fetching {resource}: HTTP {status}")]
    HttpStatus { resource: Resource, status: u16 },

    #[error("Failed to reach the {resource} endpoint: {source}")]
    Transport {
        resource: Resource,
        #[source]
        source: BoxError,
    },

    #[error("Malformed {resource} response: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: BoxError,
    },

    #[error("Invalid endpoint URL '{url}': {details}")]
    InvalidEndpoint { url: String, details: String },

    #[error("HTTP client setup failed: {details}")]
    ClientSetup { details: String },

    #[error("Failed to serialize {format} output: {details}")]
    SerializationError { format: String, details: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl InfrastructureError {
    /// The collection whose fetch produced this error, if any.
    pub fn resource(&self) -> Option<Resource> {
        match self {
            Self::HttpStatus { resource, .. } | Self::Transport { resource, .. } | Self::Decode { resource, .. } => {
                Some(*resource)
            }
            Self::InvalidEndpoint { .. }
            | Self::ClientSetup { .. }
            | Self::SerializationError { .. }
            | Self::OutputError { .. } => None,
        }
    }
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for FeedJoinError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FeedJoinError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FeedJoinError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FeedJoinError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FeedJoinError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}

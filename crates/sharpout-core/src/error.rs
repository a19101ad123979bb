//! Error types for printing syntax trees and loading configuration

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sharpout operations
#[derive(Debug, Error)]
pub enum SharpoutError {
    /// A node's children do not match the shape its kind requires
    #[error("Malformed {kind} at {path}: {message}")]
    MalformedTree {
        kind: String,
        path: String,
        message: String,
    },

    /// The printer entered a node that is not a child of the current container
    #[error("Structure violation at {path}: {found} is not a child of {expected_parent}")]
    StructureViolation {
        expected_parent: String,
        found: String,
        path: String,
    },

    /// start_node/end_node calls did not nest like the tree
    #[error("Unbalanced node markers: {message}")]
    UnbalancedNodes { message: String },

    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Tree or configuration (de)serialization errors
    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    /// The text destination rejected a write
    #[error("Output error: {message}")]
    OutputError { message: String },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedTree,
    Structure,
    Config,
    Io,
    Serialization,
    Output,
}

impl SharpoutError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SharpoutError::MalformedTree { .. } => ErrorKind::MalformedTree,
            SharpoutError::StructureViolation { .. } => ErrorKind::Structure,
            SharpoutError::UnbalancedNodes { .. } => ErrorKind::Structure,
            SharpoutError::ConfigError { .. } => ErrorKind::Config,
            SharpoutError::IoError { .. } => ErrorKind::Io,
            SharpoutError::SerializationError { .. } => ErrorKind::Serialization,
            SharpoutError::OutputError { .. } => ErrorKind::Output,
        }
    }

    /// Check if processing of other inputs may continue after this error.
    ///
    /// Defects in a tree or in the printer's traversal never are: any text
    /// produced so far is discarded.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.kind(), ErrorKind::Io | ErrorKind::Serialization)
    }

    /// Create a malformed-tree error
    pub fn malformed(
        kind: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedTree {
            kind: kind.into(),
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization_error(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for SharpoutError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SharpoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display_includes_path() {
        let err = SharpoutError::malformed(
            "SwitchSection",
            "SyntaxTree > TypeDeclaration > Method > Block > Switch > SwitchSection",
            "a switch section needs at least one case label",
        );
        let text = err.to_string();
        assert!(text.starts_with("Malformed SwitchSection at SyntaxTree > TypeDeclaration"));
        assert!(text.ends_with("needs at least one case label"));
        assert_eq!(err.kind(), ErrorKind::MalformedTree);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_io_errors_are_recoverable() {
        let err = SharpoutError::io_error(
            "missing.ast.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.is_recoverable());
    }
}

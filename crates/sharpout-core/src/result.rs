//! Result type alias for sharpout operations

use crate::error::SharpoutError;

/// Standard Result type for sharpout operations
pub type Result<T> = std::result::Result<T, SharpoutError>;

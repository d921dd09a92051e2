// ⚠️ Error Types - one enum per failure family
// Validation and export errors are recoverable and reported by the shell.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// VALIDATION
// ============================================================================

/// Raised when a member/patient is constructed with a categorical value
/// outside its enumerated set. No entity is produced.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Membership level must be 1 (Basic), 2 (Premium), or 3 (VIP)")]
    InvalidMembershipLevel { given: i32 },

    #[error("Ward type must be General, ICU, or VIP")]
    InvalidWardType { given: String },
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidMembershipLevel { .. } => "membership_level",
            ValidationError::InvalidWardType { .. } => "ward_type",
        }
    }
}

// ============================================================================
// INPUT
// ============================================================================

/// A console token that should have been a number but wasn't
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("expected a number, got '{token}'")]
pub struct InputFormatError {
    pub token: String,
}

// ============================================================================
// EXPORT
// ============================================================================

#[derive(Debug, Error)]
pub enum ExportError {
    /// Target file could not be created/truncated; nothing was written
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line failed mid-export; the `written` lines before it stay in the
    /// file
    #[error("write to {} failed after {written} record(s): {source}", .path.display())]
    Write {
        path: PathBuf,
        written: usize,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ExportError::Open { path, .. } | ExportError::Write { path, .. } => path,
        }
    }
}

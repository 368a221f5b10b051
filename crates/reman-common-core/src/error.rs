//! Error types for reman.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::name::NameError;

/// Broad grouping of error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Filesystem access failed or found something unexpected.
    FileSystem,
    /// User-supplied input was rejected.
    Validation,
}

/// Stable numeric error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(u16);

impl ErrorCode {
    pub const FILE_NOT_FOUND: Self = Self(1001);
    pub const FILE_READ_ERROR: Self = Self(1002);
    pub const FILE_WRITE_ERROR: Self = Self(1003);
    pub const ALREADY_EXISTS: Self = Self(1004);
    pub const PERMISSION_DENIED: Self = Self(1005);
    pub const INVALID_NAME: Self = Self(2001);

    /// Numeric value of the code.
    pub fn as_u16(self) -> u16 {
        self.0
    }

    /// Category the code belongs to.
    pub fn category(self) -> ErrorCategory {
        match self.0 {
            1000..=1999 => ErrorCategory::FileSystem,
            _ => ErrorCategory::Validation,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{:04}", self.0)
    }
}

/// The main error type for store operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem error with the offending path.
    #[error("{message}")]
    FileSystem {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<io::Error>,
    },

    /// A name failed validation.
    #[error(transparent)]
    Validation(#[from] NameError),
}

impl Error {
    /// Path does not exist.
    pub fn not_found(path: impl AsRef<Path>, source: Option<io::Error>) -> Self {
        let path = path.as_ref();
        Self::FileSystem {
            code: ErrorCode::FILE_NOT_FOUND,
            message: format!("path not found: {}", path.display()),
            path: Some(path.to_path_buf()),
            source,
        }
    }

    /// Path is already taken and must not be overwritten.
    pub fn already_exists(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::FileSystem {
            code: ErrorCode::ALREADY_EXISTS,
            message: format!("already exists: {}", path.display()),
            path: Some(path.to_path_buf()),
            source: None,
        }
    }

    /// Insufficient permissions for the operation.
    pub fn permission_denied(message: impl Into<String>, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::FileSystem {
            code: ErrorCode::PERMISSION_DENIED,
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
            source: Some(source),
        }
    }

    /// Classify an I/O error raised while reading `path`.
    pub fn read(message: impl Into<String>, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::from_io(ErrorCode::FILE_READ_ERROR, message, path, source)
    }

    /// Classify an I/O error raised while writing `path`.
    pub fn write(message: impl Into<String>, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::from_io(ErrorCode::FILE_WRITE_ERROR, message, path, source)
    }

    fn from_io(
        fallback: ErrorCode,
        message: impl Into<String>,
        path: impl AsRef<Path>,
        source: io::Error,
    ) -> Self {
        let code = match source.kind() {
            io::ErrorKind::NotFound => ErrorCode::FILE_NOT_FOUND,
            io::ErrorKind::AlreadyExists => ErrorCode::ALREADY_EXISTS,
            io::ErrorKind::PermissionDenied => ErrorCode::PERMISSION_DENIED,
            _ => fallback,
        };
        Self::FileSystem {
            code,
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
            source: Some(source),
        }
    }

    /// Error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::FileSystem { code, .. } => *code,
            Self::Validation(_) => ErrorCode::INVALID_NAME,
        }
    }

    /// Category of this error.
    pub fn category(&self) -> ErrorCategory {
        self.code().category()
    }

    /// Path involved in the failure, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileSystem { path, .. } => path.as_deref(),
            Self::Validation(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == ErrorCode::FILE_NOT_FOUND
    }

    pub fn is_already_exists(&self) -> bool {
        self.code() == ErrorCode::ALREADY_EXISTS
    }
}

/// Result type alias using reman's Error.
pub type Result<T> = std::result::Result<T, Error>;

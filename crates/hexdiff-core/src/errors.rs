use std::io;
use thiserror::Error;

/// Result type alias using HexdiffError
pub type Result<T> = std::result::Result<T, HexdiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and log correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Bad or missing arguments, unknown flag, malformed number
    Usage,
    /// A file could not be opened
    Open,
    /// A starting offset could not be honored
    Seek,
    /// A stream failed mid-read (distinct from a short read at end-of-input)
    Read,
    /// The rendered output could not be written
    Write,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Usage => "ERR_USAGE",
            ExErrorKind::Open => "ERR_OPEN",
            ExErrorKind::Seek => "ERR_SEEK",
            ExErrorKind::Read => "ERR_READ",
            ExErrorKind::Write => "ERR_WRITE",
        }
    }
}

/// Canonical structured error type
///
/// Flattened view of a [`HexdiffError`] carrying classification fields for
/// logging and rich context for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    offset: Option<u64>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            offset: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add byte offset context
    pub fn with_offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn offset(&self) -> Option<u64> {
        self.offset
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(offset) = self.offset {
            write!(f, " (offset: 0x{:x})", offset)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failures that terminate a comparison run
///
/// Short reads and interrupts are not errors: they end the loop through
/// [`crate::driver::StopReason`].
#[derive(Error, Debug)]
pub enum HexdiffError {
    /// Bad or missing command-line arguments
    #[error("{reason}")]
    Usage { reason: String },

    /// File could not be opened
    #[error("open: {path}: {source}")]
    Open { path: String, source: io::Error },

    /// Starting offset could not be honored
    #[error("seek to 0x{offset:x} in {path}: {source}")]
    Seek {
        path: String,
        offset: u64,
        source: io::Error,
    },

    /// Stream failed mid-read
    #[error("read: {path}: {source}")]
    Read { path: String, source: io::Error },

    /// Rendered output could not be written
    #[error("write: {source}")]
    Write { source: io::Error },
}

impl HexdiffError {
    /// Create a usage error
    pub fn usage(reason: impl Into<String>) -> Self {
        HexdiffError::Usage {
            reason: reason.into(),
        }
    }

    /// True when the output side closed early (e.g. piped into `head`)
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            HexdiffError::Write { source } if source.kind() == io::ErrorKind::BrokenPipe
        )
    }
}

impl From<&HexdiffError> for ExError {
    fn from(err: &HexdiffError) -> Self {
        match err {
            HexdiffError::Usage { reason } => ExError::new(ExErrorKind::Usage)
                .with_op("parse_args")
                .with_message(reason.clone()),

            HexdiffError::Open { path, source } => ExError::new(ExErrorKind::Open)
                .with_op("open_at")
                .with_path(path.clone())
                .with_message(source.to_string()),

            HexdiffError::Seek {
                path,
                offset,
                source,
            } => ExError::new(ExErrorKind::Seek)
                .with_op("open_at")
                .with_path(path.clone())
                .with_offset(*offset)
                .with_message(source.to_string()),

            HexdiffError::Read { path, source } => ExError::new(ExErrorKind::Read)
                .with_op("next_chunk")
                .with_path(path.clone())
                .with_message(source.to_string()),

            HexdiffError::Write { source } => ExError::new(ExErrorKind::Write)
                .with_op("render")
                .with_message(source.to_string()),
        }
    }
}

impl From<HexdiffError> for ExError {
    fn from(err: HexdiffError) -> Self {
        ExError::from(&err)
    }
}

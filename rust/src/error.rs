//! Error handling and result types for RedBlackTree operations.
//!
//! Lookups that miss are not errors: `get`, `remove` and the floor/ceiling
//! queries report absence through `Option`/`bool`. The types here back the
//! checked entry points (`get_item`, `try_insert`, `try_remove`), cursor
//! accessors that refuse to panic, and invariant validation.

/// Error type for red-black tree operations.
#[derive(Debug, Clone, PartialEq)]
pub enum RedBlackTreeError {
    /// Key not found in the tree.
    KeyNotFound,
    /// Invalid arena capacity requested at construction.
    InvalidCapacity(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
    /// Arena operation failed.
    ArenaError(String),
    /// Tree corruption detected by validation.
    CorruptedTree(String),
    /// Operation not permitted in the current state (e.g. an unpositioned cursor).
    InvalidState(String),
}

impl RedBlackTreeError {
    /// Create an InvalidCapacity error with context
    pub fn invalid_capacity(capacity: usize, max_allowed: usize) -> Self {
        Self::InvalidCapacity(format!(
            "Capacity {} is invalid (maximum allowed: {})",
            capacity, max_allowed
        ))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Create an ArenaError with context
    pub fn arena_error(operation: &str, details: &str) -> Self {
        Self::ArenaError(format!("{} failed: {}", operation, details))
    }

    /// Create a CorruptedTree error with context
    pub fn corrupted_tree(component: &str, details: &str) -> Self {
        Self::CorruptedTree(format!("{} corruption: {}", component, details))
    }

    /// Create an InvalidState error with context
    pub fn invalid_state(operation: &str, state: &str) -> Self {
        Self::InvalidState(format!("Cannot {} in state: {}", operation, state))
    }

    /// Check if this error is a capacity error
    pub fn is_capacity_error(&self) -> bool {
        matches!(self, Self::InvalidCapacity(_))
    }

    /// Check if this error reports a broken tree invariant
    pub fn is_integrity_error(&self) -> bool {
        matches!(self, Self::DataIntegrityError(_) | Self::CorruptedTree(_))
    }
}

impl std::fmt::Display for RedBlackTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RedBlackTreeError::KeyNotFound => write!(f, "Key not found in tree"),
            RedBlackTreeError::InvalidCapacity(msg) => write!(f, "Invalid capacity: {}", msg),
            RedBlackTreeError::DataIntegrityError(msg) => {
                write!(f, "Data integrity error: {}", msg)
            }
            RedBlackTreeError::ArenaError(msg) => write!(f, "Arena error: {}", msg),
            RedBlackTreeError::CorruptedTree(msg) => write!(f, "Corrupted tree: {}", msg),
            RedBlackTreeError::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for RedBlackTreeError {}

/// Result type for tree operations that may fail
pub type TreeResult<T> = Result<T, RedBlackTreeError>;

/// Result type for key lookup operations
pub type KeyResult<T> = Result<T, RedBlackTreeError>;

/// Result type for tree modification operations
pub type ModifyResult<T> = Result<T, RedBlackTreeError>;

/// Result type for tree construction
pub type InitResult<T> = Result<T, RedBlackTreeError>;

/// Result extension trait for attaching operation context to errors
pub trait TreeResultExt<T> {
    /// Convert to a TreeResult with additional context
    fn with_context(self, context: &str) -> TreeResult<T>;

    /// Convert to a TreeResult with operation context
    fn with_operation(self, operation: &str) -> TreeResult<T>;
}

impl<T> TreeResultExt<T> for Result<T, RedBlackTreeError> {
    fn with_context(self, context: &str) -> TreeResult<T> {
        self.map_err(|e| match e {
            RedBlackTreeError::KeyNotFound => RedBlackTreeError::KeyNotFound,
            RedBlackTreeError::InvalidCapacity(msg) => {
                RedBlackTreeError::InvalidCapacity(format!("{}: {}", context, msg))
            }
            RedBlackTreeError::DataIntegrityError(msg) => {
                RedBlackTreeError::data_integrity(context, &msg)
            }
            RedBlackTreeError::ArenaError(msg) => RedBlackTreeError::arena_error(context, &msg),
            RedBlackTreeError::CorruptedTree(msg) => {
                RedBlackTreeError::corrupted_tree(context, &msg)
            }
            RedBlackTreeError::InvalidState(msg) => {
                RedBlackTreeError::invalid_state(context, &msg)
            }
        })
    }

    fn with_operation(self, operation: &str) -> TreeResult<T> {
        self.with_context(&format!("Operation '{}'", operation))
    }
}

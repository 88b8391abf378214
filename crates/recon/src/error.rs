use std::fmt;

/// Which input table a precondition failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Reconciliation preconditions, surfaced as typed errors rather than the
/// silent no-op the caller would otherwise have to guard for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconError {
    /// No join key was selected.
    EmptyJoinKey,
    /// A side has no data rows to reconcile.
    EmptyTable(Side),
    /// The join key is not a header of one side.
    MissingJoinKey { side: Side, key: String },
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyJoinKey => write!(f, "join key is empty"),
            Self::EmptyTable(side) => write!(f, "table {side} has no records"),
            Self::MissingJoinKey { side, key } => {
                write!(f, "table {side}: join key '{key}' is not a header")
            }
        }
    }
}

impl std::error::Error for ReconError {}

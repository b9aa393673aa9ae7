//! Two-player console checkers (draughts)

/// Checkers game representation
pub mod checkers;

use thiserror::Error;

/// Library-level error type.
/// The calculator clamps an out-of-range `current_page` instead of failing,
/// so the only rejected inputs are the sizing arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// A sizing argument (`total_entries`, `entries_per_page`, or
    /// `pages_per_set`) was zero. All three feed divisions or subtractions
    /// that have no meaningful result at zero.
    #[error("Invalid argument: {name} must be at least 1, got {value}")]
    InvalidArgument { name: &'static str, value: u64 },
}

//! Errors surfaced by hull construction.

use thiserror::Error;

/// The only failure mode: too few points to span an edge.
///
/// Checked once, before any sorting or geometry. Degenerate geometry
/// (collinear, duplicate, near-coincident points) never errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HullError {
    #[error("invalid input: need at least 2 points, got {count}")]
    InvalidInput { count: usize },
}

impl HullError {
    pub(crate) fn check_count(count: usize) -> Result<(), Self> {
        if count <= 1 {
            return Err(Self::InvalidInput { count });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_check_boundaries() {
        assert_eq!(
            HullError::check_count(0),
            Err(HullError::InvalidInput { count: 0 })
        );
        assert_eq!(
            HullError::check_count(1),
            Err(HullError::InvalidInput { count: 1 })
        );
        assert!(HullError::check_count(2).is_ok());
    }

    #[test]
    fn display_mentions_count() {
        let msg = HullError::InvalidInput { count: 1 }.to_string();
        assert!(msg.contains("got 1"), "{msg}");
    }
}

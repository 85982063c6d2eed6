use thiserror::Error;

/// Errors raised when the rolling window contract is violated.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum RollingError {
    /// The window holds no bytes, so nothing can be ejected.
    #[error("rolling checksum requires a non-empty window")]
    EmptyWindow,
    /// More bytes were supplied than the window can hold.
    #[error("rolling checksum window holds {capacity} bytes but {len} were supplied")]
    WindowOverflow {
        /// Number of bytes supplied by the caller.
        len: usize,
        /// Fixed capacity of the window.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_sizes() {
        let err = RollingError::WindowOverflow {
            len: 20,
            capacity: 16,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("16"));
        assert!(rendered.contains("20"));
    }

    #[test]
    fn empty_window_display() {
        assert_eq!(
            RollingError::EmptyWindow.to_string(),
            "rolling checksum requires a non-empty window"
        );
    }
}

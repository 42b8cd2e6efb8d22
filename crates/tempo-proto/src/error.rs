//! Line protocol errors.

use tempo_core::PositionError;

/// Errors that can occur while reading or answering a request.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The position line is not a valid FEN.
    #[error("invalid position: {source}")]
    InvalidFen {
        /// The rejection from the rules engine.
        #[from]
        source: PositionError,
    },

    /// The time line is not a non-negative number of seconds.
    #[error("invalid remaining time: {value:?}")]
    InvalidTime {
        /// The text that failed to parse.
        value: String,
    },

    /// An I/O error occurred while reading input or writing an answer.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use tempo_core::Position;

    use super::ProtocolError;

    #[test]
    fn invalid_fen_wraps_position_error() {
        let err: ProtocolError = Position::from_fen("nonsense").unwrap_err().into();
        assert!(matches!(err, ProtocolError::InvalidFen { .. }));
        assert!(err.to_string().starts_with("invalid position: invalid FEN \"nonsense\""));
    }

    #[test]
    fn invalid_time_display() {
        let err = ProtocolError::InvalidTime {
            value: "soon".to_string(),
        };
        assert_eq!(err.to_string(), "invalid remaining time: \"soon\"");
    }
}

//! Error types for position setup and move parsing.

/// Errors from constructing a [`Position`](crate::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The FEN string was rejected by the rules engine.
    #[error("invalid FEN \"{fen}\": {reason}")]
    InvalidFen {
        /// The offending FEN string.
        fen: String,
        /// Rules-engine diagnostic.
        reason: String,
    },
}

/// Errors from turning coordinate notation into a legal [`Move`](crate::Move).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveParseError {
    /// Not 4 or 5 characters of coordinate notation.
    #[error("malformed move \"{text}\"")]
    Malformed {
        /// The text that failed to parse.
        text: String,
    },
    /// Well-formed but not legal in the current position.
    #[error("illegal move \"{text}\"")]
    Illegal {
        /// The rejected move text.
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{MoveParseError, PositionError};

    #[test]
    fn position_error_display() {
        let err = PositionError::InvalidFen {
            fen: "bogus".to_string(),
            reason: "wrong field count".to_string(),
        };
        assert_eq!(format!("{err}"), "invalid FEN \"bogus\": wrong field count");
    }

    #[test]
    fn move_error_display() {
        let err = MoveParseError::Illegal {
            text: "e2e5".to_string(),
        };
        assert_eq!(format!("{err}"), "illegal move \"e2e5\"");
    }
}

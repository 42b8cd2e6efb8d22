//! Request parsing.
//!
//! A request is two lines: a position in FEN, then the remaining overage
//! time in seconds (fractions allowed).

use std::time::Duration;

use tempo_core::Position;

use crate::error::ProtocolError;

/// One move request.
#[derive(Debug, Clone)]
pub struct Request {
    /// Position to move from.
    pub position: Position,
    /// Overage time left on the clock.
    pub remaining: Duration,
}

/// Parse the two lines of a request.
pub fn parse_request(fen_line: &str, time_line: &str) -> Result<Request, ProtocolError> {
    let position = Position::from_fen(fen_line.trim())?;
    let remaining = parse_remaining(time_line)?;
    Ok(Request {
        position,
        remaining,
    })
}

/// Parse a remaining-time line in seconds.
///
/// A negative clock counts as no time left.
pub fn parse_remaining(line: &str) -> Result<Duration, ProtocolError> {
    let text = line.trim();
    let invalid = || ProtocolError::InvalidTime {
        value: text.to_string(),
    };
    let seconds: f64 = text.parse().map_err(|_| invalid())?;
    if seconds.is_nan() {
        return Err(invalid());
    }
    Duration::try_from_secs_f64(seconds.max(0.0)).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{parse_remaining, parse_request};
    use crate::error::ProtocolError;

    #[test]
    fn parse_whole_and_fractional_seconds() {
        assert_eq!(parse_remaining("12").unwrap(), Duration::from_secs(12));
        assert_eq!(parse_remaining(" 1.5\n").unwrap(), Duration::from_millis(1_500));
        assert_eq!(parse_remaining("0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn negative_time_is_zero() {
        assert_eq!(parse_remaining("-3.2").unwrap(), Duration::ZERO);
    }

    #[test]
    fn garbage_time_is_rejected() {
        for text in ["", "soon", "NaN", "inf", "1e400"] {
            assert!(
                matches!(parse_remaining(text), Err(ProtocolError::InvalidTime { .. })),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_full_request() {
        let request = parse_request(
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1\n",
            "4.25",
        )
        .unwrap();
        assert_eq!(request.remaining, Duration::from_millis(4_250));
        assert_eq!(request.position.side_to_move(), tempo_core::Color::Black);
    }

    #[test]
    fn bad_fen_is_reported_first() {
        assert!(matches!(
            parse_request("not a fen", "soon"),
            Err(ProtocolError::InvalidFen { .. })
        ));
    }
}

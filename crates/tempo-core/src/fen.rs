//! FEN helpers.

use crate::error::PositionError;

/// FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Return the color-mirrored FEN of `fen`.
///
/// Ranks are flipped top to bottom and every piece changes color, so the
/// result is the same game seen from the other side: side to move, castling
/// rights and the en-passant square are mirrored along with the pieces.
/// Move counters are kept as they are.
pub fn mirror_fen(fen: &str) -> Result<String, PositionError> {
    let invalid = |reason: &str| PositionError::InvalidFen {
        fen: fen.to_string(),
        reason: reason.to_string(),
    };

    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(invalid("expected at least 4 fields"));
    }

    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("expected 8 ranks"));
    }
    let placement = ranks
        .iter()
        .rev()
        .map(|rank| rank.chars().map(swap_case).collect::<String>())
        .collect::<Vec<_>>()
        .join("/");

    let side = match fields[1] {
        "w" => "b",
        "b" => "w",
        _ => return Err(invalid("side to move must be w or b")),
    };

    let castling = if fields[2] == "-" {
        "-".to_string()
    } else {
        let swapped: Vec<char> = fields[2].chars().map(swap_case).collect();
        let white = swapped.iter().filter(|c| c.is_ascii_uppercase());
        let black = swapped.iter().filter(|c| c.is_ascii_lowercase());
        white.chain(black).collect()
    };

    let en_passant = if fields[3] == "-" {
        "-".to_string()
    } else {
        let mut chars = fields[3].chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some('3'), None) => format!("{file}6"),
            (Some(file), Some('6'), None) => format!("{file}3"),
            _ => return Err(invalid("bad en-passant square")),
        }
    };

    let mut mirrored = format!("{placement} {side} {castling} {en_passant}");
    for counter in &fields[4..] {
        mirrored.push(' ');
        mirrored.push_str(counter);
    }
    Ok(mirrored)
}

fn swap_case(c: char) -> char {
    if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else {
        c.to_ascii_uppercase()
    }
}

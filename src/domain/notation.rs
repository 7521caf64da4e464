//! Move notation helpers.

use crate::domain::Side;

/// Replace SAN piece letters with figurines of the moving side.
pub fn san_to_fan(san: &str, mover: Side) -> String {
    san.chars()
        .map(|c| match (c, mover) {
            ('K', Side::White) => '\u{2654}',
            ('Q', Side::White) => '\u{2655}',
            ('R', Side::White) => '\u{2656}',
            ('B', Side::White) => '\u{2657}',
            ('N', Side::White) => '\u{2658}',
            ('K', Side::Black) => '\u{265A}',
            ('Q', Side::Black) => '\u{265B}',
            ('R', Side::Black) => '\u{265C}',
            ('B', Side::Black) => '\u{265D}',
            ('N', Side::Black) => '\u{265E}',
            (other, _) => other,
        })
        .collect()
}

/// Full-move number from the last FEN field, 1 when missing or unparsable.
pub fn fullmove_number(fen: &str) -> u32 {
    fen.split_whitespace()
        .last()
        .and_then(|field| field.parse().ok())
        .unwrap_or(1)
}

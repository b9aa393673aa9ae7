use thiserror::Error;

use crate::checkers::board::{BOARD_SIZE, SquareIdx, in_bounds};

/// Errors parsing a square from its text form
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("Position must be a file letter followed by a rank digit")]
    Length,
    #[error("Position out of bounds")]
    OutOfBounds,
}

/// Parse a square from its text form: a file letter (`a`-`h`, case
/// insensitive) followed by a rank digit (`1`-`8`), e.g. `b6`
pub fn parse_square(text: &str) -> Result<SquareIdx, ParseSquareError> {
    let mut chars = text.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ParseSquareError::Length);
    };

    // Work in signed arithmetic so that stray characters land out of bounds
    // instead of wrapping
    let col = file.to_ascii_lowercase() as isize - 'a' as isize;
    let row = BOARD_SIZE as isize - (rank as isize - '0' as isize);
    if !(0..BOARD_SIZE as isize).contains(&row) || !(0..BOARD_SIZE as isize).contains(&col) {
        return Err(ParseSquareError::OutOfBounds);
    }

    Ok([row as usize, col as usize])
}

/// Text form of a square, the inverse of [`parse_square`]
pub fn format_square([row, col]: SquareIdx) -> String {
    debug_assert!(in_bounds([row, col]), "Index out of bounds: [{row}, {col}]");
    format!(
        "{file}{rank}",
        file = (b'a' + col as u8) as char,
        rank = BOARD_SIZE - row
    )
}

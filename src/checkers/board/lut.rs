use crate::checkers::board::SquareIdx;

/// Dark squares of the three top rows, where Black's pieces start
#[rustfmt::skip]
pub const BLACK_STARTING_POSITIONS: [SquareIdx; 12] = [
    [0, 1], [0, 3], [0, 5], [0, 7],
    [1, 0], [1, 2], [1, 4], [1, 6],
    [2, 1], [2, 3], [2, 5], [2, 7],
];

/// Dark squares of the three bottom rows, where White's pieces start
#[rustfmt::skip]
pub const WHITE_STARTING_POSITIONS: [SquareIdx; 12] = [
    [5, 0], [5, 2], [5, 4], [5, 6],
    [6, 1], [6, 3], [6, 5], [6, 7],
    [7, 0], [7, 2], [7, 4], [7, 6],
];

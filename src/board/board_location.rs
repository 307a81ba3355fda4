use crate::chess_errors::EngineError;

/// A board coordinate as `(row, col)`, each in `0..=7`.
///
/// Row 0 is Black's home rank and row 7 is White's, matching the way the
/// host application renders the board (Black at the top).
pub type BoardLocation = (i8, i8);

/// Moves a board location by a row and column offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<BoardLocation, EngineError>` - The new location if it stays on
///   the board, otherwise `EngineError::OutOfBounds`.
pub fn offset_location(
    x: &BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Result<BoardLocation, EngineError> {
    let y: BoardLocation = (x.0 + d_row, x.1 + d_col);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(EngineError::OutOfBounds((*x, d_row, d_col)))
    } else {
        Ok(y)
    }
}

/// Validates a caller-supplied coordinate pair before it reaches any board
/// indexing.
///
/// # Returns
///
/// * `Ok(BoardLocation)` when both components are in `0..=7`.
/// * `Err(EngineError::InvalidSquare)` otherwise.
pub fn require_on_board(x: (i8, i8)) -> Result<BoardLocation, EngineError> {
    if (x.0 < 0) | (x.0 > 7) | (x.1 < 0) | (x.1 > 7) {
        Err(EngineError::InvalidSquare(x))
    } else {
        Ok(x)
    }
}

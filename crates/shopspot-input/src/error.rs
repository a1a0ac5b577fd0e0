use crate::limits::Bounds;

/// Errors that stop the case stream. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Input ended where a case header was expected.
    #[error("line {line}: unexpected end of input, case list must end with a line of 4 zeros")]
    MissingTerminator { line: usize },

    /// The header line is not exactly four integers.
    #[error(
        "line {line}: case header must contain 4 integers: city width, city height, shop count and query count"
    )]
    MalformedHeader { line: usize },

    #[error("line {line}: city grid dimensions {width}x{height} are not within allowed range {bounds}")]
    GridSizeOutOfRange {
        line: usize,
        width: i64,
        height: i64,
        bounds: Bounds,
    },

    #[error("line {line}: shop count {count} is not within allowed range {bounds}")]
    ShopCountOutOfRange { line: usize, count: i64, bounds: Bounds },

    #[error("line {line}: query count {count} is not within allowed range {bounds}")]
    QueryCountOutOfRange { line: usize, count: i64, bounds: Bounds },

    /// Input ended inside the shop list.
    #[error("line {line}: unexpected end of input, shop list should have {expected} lines with shop coordinates")]
    MissingShops { line: usize, expected: usize },

    #[error("line {line}: each line in shop list must contain 2 integers, the shop coordinates")]
    MalformedShop { line: usize },

    /// Shop coordinates are 1-based as written in the input.
    #[error("line {line}: shop coordinates ({x}, {y}) are outside of the {width}x{height} city")]
    ShopOutOfBounds {
        line: usize,
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// Input ended inside the query list.
    #[error("line {line}: unexpected end of input, query list should have {expected} lines with maximum walk distances")]
    MissingQueries { line: usize, expected: usize },

    #[error("line {line}: each line in query list must contain 1 integer, the maximum walk distance")]
    MalformedQuery { line: usize },

    #[error("line {line}: walk distance {distance} is not within allowed range {bounds}")]
    WalkDistanceOutOfRange {
        line: usize,
        distance: i64,
        bounds: Bounds,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// The line the error was detected on, if it relates to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            InputError::MissingTerminator { line }
            | InputError::MalformedHeader { line }
            | InputError::GridSizeOutOfRange { line, .. }
            | InputError::ShopCountOutOfRange { line, .. }
            | InputError::QueryCountOutOfRange { line, .. }
            | InputError::MissingShops { line, .. }
            | InputError::MalformedShop { line }
            | InputError::ShopOutOfBounds { line, .. }
            | InputError::MissingQueries { line, .. }
            | InputError::MalformedQuery { line }
            | InputError::WalkDistanceOutOfRange { line, .. } => Some(*line),
            InputError::Io(_) => None,
        }
    }
}

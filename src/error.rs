/// Errors reported by grids, engines and sessions.
///
/// A `set_cell` that finds the cell already in the requested state is not an
/// error; it is reported through [`crate::Edit::changed`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    InvalidDimension { rows: usize, columns: usize },

    #[error("cell ({row}, {column}) is outside the {rows}x{columns} interior")]
    OutOfBounds {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    #[error("state code {code} is not valid for {variant}")]
    InvalidState { code: u8, variant: &'static str },

    #[error("unknown automaton {name:?}, expected \"life\" or \"wireworld\"")]
    UnknownVariant { name: String },

    #[error("{operation} is not supported by {variant}")]
    Unsupported {
        operation: &'static str,
        variant: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ShapeError {
    #[error("invalid axis {axis} for tensor shape with {ndims} dimensions")]
    AxisOutOfRange { axis: usize, ndims: usize },
    #[error("invalid tensor shape slice argument [{start}, {end}) for tensor shape with {ndims} dimensions")]
    InvalidRange {
        start: usize,
        end: usize,
        ndims: usize,
    },
    #[error("requested {count} dimensions from a source holding only {len}")]
    InsufficientDims { count: usize, len: usize },
    #[error("known extent {extent} does not fit in a signed 64-bit dimension")]
    ExtentTooLarge { extent: u64 },
}

use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Normalizing a (near-)zero vector has no meaningful result.
    #[error("cannot normalize a near-zero vector")]
    DegenerateVector,

    #[error("pixel ({row}, {col}) is outside the {width}x{height} image")]
    InvalidCoordinate {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}

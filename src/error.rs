use thiserror::Error;

/// Errors raised while building geometry inputs
#[derive(Debug, Error, PartialEq)]
pub enum GeomError {
    #[error("scale factor must be a positive finite number, got {0}")]
    InvalidScale(f64),

    #[error("invalid coordinate {0:?}, expected \"x,y\"")]
    InvalidCoordinate(String),

    #[error("a regular polygon needs at least 3 sides, got {0}")]
    TooFewSides(usize),

    #[error("a star needs at least 4 outline points, got {0}")]
    TooFewStarPoints(usize),

    #[error("a star needs an even number of outline points, got {0}")]
    OddStarPoints(usize),

    #[error("unknown shape {0:?}, expected star, box, square, circle or polygon:<sides>")]
    UnknownShape(String),

    #[error("star inner fraction must be in (0, 1], got {0}")]
    InvalidInnerFraction(f64),
}

pub type Result<T> = std::result::Result<T, GeomError>;

/// Secret sharing errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("denominator zero")]
    DenominatorZero,
    #[error("duplicate x-coordinate {0}")]
    DuplicateXCoordinate(u64),
    #[error("empty numeral")]
    EmptyNumeral,
    #[error("inconsistent polynomial")]
    InconsistentPolynomial,
    #[error("invalid base {0}")]
    InvalidBase(String),
    #[error("invalid digit '{digit}' for base {base}")]
    InvalidDigit { digit: char, base: u32 },
    #[error("invalid share id {0}")]
    InvalidShareId(String),
    #[error("invalid threshold")]
    InvalidThreshold,
    #[error("not enough shares: required {required}, got {available}")]
    NotEnoughShares { required: usize, available: usize },
}

/// Secret sharing result.
pub type Result<T> = std::result::Result<T, Error>;

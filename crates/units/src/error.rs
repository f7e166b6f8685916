use thiserror::Error;

pub type Result<T> = std::result::Result<T, UnitsError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum UnitsError {
    #[error("Could not interpret input: {0}")]
    InvalidFormat(String),

    #[error("Values less than 0 are not valid: {0}")]
    NegativeValue(f64),

    #[error("No displayable unit for non-positive magnitude {0}")]
    UnresolvableUnit(f64),
}

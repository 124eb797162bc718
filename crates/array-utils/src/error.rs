#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Expects a sequence, found {found}")]
    InvalidArgument { found: &'static str },

    #[error("Element #{index} cannot be converted to a number: {value}")]
    InvalidElement { index: usize, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

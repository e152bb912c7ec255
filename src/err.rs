use std::fmt;

#[derive(Debug)]
pub enum CustomError {
    WrongArg,
    InvalidFormat,
    MissingParam(String),
}

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CustomError::WrongArg => write!(f, "Wrong arguments"),
            CustomError::InvalidFormat => write!(f, "Invalid format"),
            CustomError::MissingParam(name) => write!(f, "Missing parameter : {}", name),
        }
    }
}

impl std::error::Error for CustomError {}

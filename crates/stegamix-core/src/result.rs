use crate::error::StegamixError;

pub type Result<T> = std::result::Result<T, StegamixError>;

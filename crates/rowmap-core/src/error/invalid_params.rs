use super::Error;

#[derive(Debug)]
pub(super) struct InvalidParams {
    message: Box<str>,
}

impl std::error::Error for InvalidParams {}

impl core::fmt::Display for InvalidParams {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid parameters: {}", self.message)
    }
}

impl Error {
    /// Creates an error for a parameter object that cannot be turned into
    /// named parameters.
    pub fn invalid_params(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidParams(InvalidParams {
            message: message.into().into(),
        }))
    }

    pub fn is_invalid_params(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidParams(_))
    }
}

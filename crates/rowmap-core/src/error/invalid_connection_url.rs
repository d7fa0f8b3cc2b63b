use super::Error;

/// Error when a connection URL cannot select a dialect: it does not parse,
/// or its scheme names a database rowmap cannot render for.
#[derive(Debug)]
pub(super) struct InvalidConnectionUrl {
    reason: Reason,
}

#[derive(Debug)]
enum Reason {
    Malformed(Box<str>),
    UnsupportedScheme(Box<str>),
}

impl std::error::Error for InvalidConnectionUrl {}

impl core::fmt::Display for InvalidConnectionUrl {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.reason {
            Reason::Malformed(message) => write!(f, "invalid connection URL: {message}"),
            Reason::UnsupportedScheme(scheme) => {
                write!(f, "invalid connection URL: unsupported scheme `{scheme}`")
            }
        }
    }
}

impl Error {
    pub fn invalid_connection_url(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl {
            reason: Reason::Malformed(message.into().into()),
        }))
    }

    /// The URL parsed, but its scheme maps to no [`Dialect`](crate::Dialect).
    pub fn unsupported_scheme(scheme: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidConnectionUrl(InvalidConnectionUrl {
            reason: Reason::UnsupportedScheme(scheme.into().into()),
        }))
    }

    pub fn is_invalid_connection_url(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidConnectionUrl(_))
    }
}

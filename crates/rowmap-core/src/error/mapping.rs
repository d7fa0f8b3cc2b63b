use super::Error;

/// Error when a type has no usable column mapping for the requested
/// statement.
///
/// This occurs when:
/// - The type maps no columns at all
/// - A key-based statement is rendered for a type without key columns
/// - An update is rendered for a type whose columns are all keys or read-only
#[derive(Debug)]
pub(super) struct MappingError {
    type_name: Box<str>,
    message: Box<str>,
}

impl std::error::Error for MappingError {}

impl core::fmt::Display for MappingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type `{}` has no usable mapping: {}",
            self.type_name, self.message
        )
    }
}

impl Error {
    /// Creates a mapping error for the named type.
    pub fn mapping(type_name: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Mapping(MappingError {
            type_name: type_name.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a mapping error.
    pub fn is_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Mapping(_))
    }
}

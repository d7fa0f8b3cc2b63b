use uuid::Uuid;

/// A single column or parameter value exchanged with the execution engine.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer. Narrower integer fields widen into this.
    I64(i64),

    /// Unsigned 64-bit integer, for `u64` values above `i64::MAX`.
    U64(u64),

    /// 64-bit floating point number
    F64(f64),

    /// String value
    String(String),

    /// Binary value
    Bytes(Vec<u8>),

    /// UUID value
    Uuid(Uuid),
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I64(v) => Some(v),
            _ => None,
        }
    }

    /// Name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::U64(_) => "U64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Uuid(_) => "Uuid",
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<u64> for Value {
    fn from(src: u64) -> Self {
        match i64::try_from(src) {
            Ok(v) => Self::I64(v),
            Err(_) => Self::U64(src),
        }
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = crate::Error;

    fn try_from(src: serde_json::Value) -> crate::Result<Self> {
        use serde_json::Value as Json;

        match src {
            Json::Null => Ok(Self::Null),
            Json::Bool(v) => Ok(Self::Bool(v)),
            Json::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(Self::I64(v))
                } else if let Some(v) = n.as_u64() {
                    Ok(Self::U64(v))
                } else {
                    n.as_f64().map(Self::F64).ok_or_else(|| {
                        crate::Error::invalid_params(format!("number {n} is out of range"))
                    })
                }
            }
            Json::String(v) => Ok(Self::String(v)),
            Json::Array(_) | Json::Object(_) => Err(crate::Error::invalid_params(
                "nested arrays and objects cannot be bound as parameters",
            )),
        }
    }
}

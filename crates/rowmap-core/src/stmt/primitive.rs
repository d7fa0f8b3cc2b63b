use super::Value;
use crate::{Error, Result};

use uuid::Uuid;

/// A field type that maps to a single column.
pub trait Primitive: Sized {
    /// Load the field from the column value returned by the engine.
    fn load(value: Value) -> Result<Self>;

    /// Convert the field into a parameter value.
    fn to_value(&self) -> Value;
}

macro_rules! impl_primitive_int {
    ( $($t:ty),+ ) => {
        $(
            impl Primitive for $t {
                fn load(value: Value) -> Result<Self> {
                    match value {
                        Value::I64(v) => <$t>::try_from(v)
                            .map_err(|_| Error::type_conversion(value, stringify!($t))),
                        Value::U64(v) => <$t>::try_from(v)
                            .map_err(|_| Error::type_conversion(value, stringify!($t))),
                        value => Err(Error::type_conversion(value, stringify!($t))),
                    }
                }

                fn to_value(&self) -> Value {
                    Value::I64(i64::from(*self))
                }
            }
        )+
    };
}

impl_primitive_int!(i8, i16, i32, i64, u8, u16, u32);

impl Primitive for u64 {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::I64(v) => u64::try_from(v).map_err(|_| Error::type_conversion(value, "u64")),
            Value::U64(v) => Ok(v),
            value => Err(Error::type_conversion(value, "u64")),
        }
    }

    /// Binds as `I64` when the value fits, `U64` otherwise.
    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl Primitive for bool {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            // Engines without a boolean type report 0 / 1
            Value::I64(0) => Ok(false),
            Value::I64(1) => Ok(true),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Primitive for f64 {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I64(v) => Ok(v as f64),
            Value::U64(v) => Ok(v as f64),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }

    fn to_value(&self) -> Value {
        Value::F64(*self)
    }
}

impl Primitive for f32 {
    fn load(value: Value) -> Result<Self> {
        f64::load(value).map(|v| v as f32)
    }

    fn to_value(&self) -> Value {
        Value::F64(f64::from(*self))
    }
}

impl Primitive for String {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Primitive for Vec<u8> {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl Primitive for Uuid {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(ref v) => {
                Uuid::parse_str(v).map_err(|_| Error::type_conversion(value.clone(), "Uuid"))
            }
            Value::Bytes(ref v) => {
                Uuid::from_slice(v).map_err(|_| Error::type_conversion(value.clone(), "Uuid"))
            }
            value => Err(Error::type_conversion(value, "Uuid")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }
}

impl<T: Primitive> Primitive for Option<T> {
    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::load(value).map(Some),
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }
}

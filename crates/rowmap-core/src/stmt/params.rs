use super::Value;
use crate::{Error, Result};

use indexmap::IndexMap;

/// Named parameters handed to the execution engine alongside a statement.
///
/// Names are stored without the dialect placeholder prefix (`n`, not `@n`)
/// and keep insertion order. rowmap never inspects or rewrites them.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Params {
    values: IndexMap<String, Value>,
}

impl Params {
    pub fn new() -> Params {
        Params::default()
    }

    /// Build parameters from any serializable struct or map, the way an
    /// anonymous parameter object is used:
    ///
    /// ```
    /// # use rowmap_core::stmt::{Params, Value};
    /// #[derive(serde::Serialize)]
    /// struct ByName<'a> {
    ///     n: &'a str,
    /// }
    ///
    /// let params = Params::from_serialize(&ByName { n: "Alice" }).unwrap();
    /// assert_eq!(params.get("n"), Some(&Value::from("Alice")));
    /// ```
    pub fn from_serialize<T: serde::Serialize + ?Sized>(src: &T) -> Result<Params> {
        match serde_json::to_value(src)? {
            serde_json::Value::Object(fields) => fields
                .into_iter()
                .map(|(name, value)| Ok((name, Value::try_from(value)?)))
                .collect(),
            serde_json::Value::Null => Ok(Params::new()),
            other => Err(Error::invalid_params(format!(
                "expected a struct or map, got `{other}`"
            ))),
        }
    }

    /// Add a parameter, replacing any earlier value bound to the same name.
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Params {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Params {
    fn from(src: [(K, V); N]) -> Self {
        src.into_iter().collect()
    }
}

use super::Value;

/// One row (or one split segment of a row) as returned by the execution
/// engine.
///
/// Columns keep the order the engine produced them in. Lookups ignore ASCII
/// case and return the first matching column, so a joined row with several
/// `Id` columns must be split by the engine before it is loaded.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    pub fn new() -> Row {
        Row::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Row {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.position(name).map(|i| &self.columns[i].1)
    }

    /// Remove a column's value, yielding `Null` when the row has no such
    /// column.
    pub fn take(&mut self, name: &str) -> Value {
        match self.position(name) {
            Some(i) => std::mem::take(&mut self.columns[i].1),
            None => Value::Null,
        }
    }

    /// Like [`Row::take`], trying each name in turn.
    pub fn take_any(&mut self, names: &[&str]) -> Value {
        names
            .iter()
            .find_map(|name| self.position(name))
            .map(|i| std::mem::take(&mut self.columns[i].1))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn into_columns(self) -> Vec<(String, Value)> {
        self.columns
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|(column, _)| column.eq_ignore_ascii_case(name))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            columns: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

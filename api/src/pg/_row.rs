use super::{Node, Path, PropertyValue, Relationship};
use std::collections::BTreeMap;

/// A value in a query [result row](ResultRow).
#[derive(Clone, Debug)]
pub enum ResultValue<'g> {
    /// A node of the queried graph
    Node(&'g Node),
    /// A relationship of the queried graph
    Relationship(&'g Relationship),
    /// A path in the queried graph
    Path(Path<'g>),
    /// An ordered collection of values
    List(Vec<ResultValue<'g>>),
    /// A map of values
    Map(BTreeMap<String, ResultValue<'g>>),
    /// A scalar value
    Scalar(PropertyValue),
    /// The absence of a value
    Null,
}

impl<'g> From<&'g Node> for ResultValue<'g> {
    fn from(other: &'g Node) -> Self {
        ResultValue::Node(other)
    }
}

impl<'g> From<&'g Relationship> for ResultValue<'g> {
    fn from(other: &'g Relationship) -> Self {
        ResultValue::Relationship(other)
    }
}

impl<'g> From<Path<'g>> for ResultValue<'g> {
    fn from(other: Path<'g>) -> Self {
        ResultValue::Path(other)
    }
}

impl<'g> From<PropertyValue> for ResultValue<'g> {
    fn from(other: PropertyValue) -> Self {
        ResultValue::Scalar(other)
    }
}

impl<'g, T: Into<ResultValue<'g>>> From<Vec<T>> for ResultValue<'g> {
    fn from(other: Vec<T>) -> Self {
        ResultValue::List(other.into_iter().map(Into::into).collect())
    }
}

/// One row of a query result:
/// an ordered mapping from column names to [values](ResultValue).
#[derive(Clone, Debug, Default)]
pub struct ResultRow<'g> {
    columns: Vec<(String, ResultValue<'g>)>,
}

impl<'g> ResultRow<'g> {
    /// Build an empty row.
    pub fn new() -> Self {
        ResultRow { columns: vec![] }
    }

    /// Add a column to this row.
    ///
    /// If a column with the same name already exists, its value is replaced.
    pub fn with<C, V>(mut self, column: C, value: V) -> Self
    where
        C: Into<String>,
        V: Into<ResultValue<'g>>,
    {
        self.insert(column, value);
        self
    }

    /// Add a column to this row.
    ///
    /// If a column with the same name already exists, its value is replaced.
    pub fn insert<C, V>(&mut self, column: C, value: V)
    where
        C: Into<String>,
        V: Into<ResultValue<'g>>,
    {
        let column = column.into();
        let value = value.into();
        match self.columns.iter_mut().find(|(c, _)| *c == column) {
            Some((_, v)) => *v = value,
            None => self.columns.push((column, value)),
        }
    }

    /// The value of `column`, if any.
    pub fn get(&self, column: &str) -> Option<&ResultValue<'g>> {
        self.columns
            .iter()
            .find_map(|(c, v)| (c == column).then_some(v))
    }

    /// Iterate over the column names of this row, in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|(c, _)| c.as_str())
    }

    /// Iterate over the values of this row, in column order.
    pub fn values(&self) -> impl Iterator<Item = &ResultValue<'g>> + '_ {
        self.columns.iter().map(|(_, v)| v)
    }

    /// The number of columns in this row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether this row has no column.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn columns_keep_order() {
        let n = Node::new(1);
        let r = Relationship::new(2, "KNOWS", 1, 1);
        let row = ResultRow::new()
            .with("n", &n)
            .with("r", &r)
            .with("count", PropertyValue::Long(3));
        assert_eq!(row.columns().collect::<Vec<_>>(), vec!["n", "r", "count"]);
        assert!(matches!(row.get("r"), Some(ResultValue::Relationship(_))));
        assert!(row.get("missing").is_none());
    }

    #[test]
    fn insert_replaces_existing_column() {
        let n = Node::new(1);
        let mut row = ResultRow::new().with("x", &n);
        row.insert("x", ResultValue::Null);
        assert_eq!(row.len(), 1);
        assert!(matches!(row.get("x"), Some(ResultValue::Null)));
    }

    #[test]
    fn list_from_vec() {
        let a = Node::new(1);
        let b = Node::new(2);
        let v = ResultValue::from(vec![&a, &b]);
        match v {
            ResultValue::List(items) => assert_eq!(items.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
    }
}

//! Splitting result rows into the graph entities they contain.
use pgrdf_api::pg::{Node, Path, Relationship, ResultRow, ResultValue};

/// The graph entities found in one [`ResultRow`], in column order.
#[derive(Clone, Debug, Default)]
pub struct Worklists<'r, 'g> {
    /// Nodes, directly in a column or in a list
    pub nodes: Vec<&'g Node>,
    /// Relationships, directly in a column or in a list
    pub relationships: Vec<&'g Relationship>,
    /// Paths, directly in a column or in a list
    pub paths: Vec<&'r Path<'g>>,
}

impl<'r, 'g> Worklists<'r, 'g> {
    /// Whether no entity was found.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.relationships.is_empty() && self.paths.is_empty()
    }

    fn push(&mut self, value: &'r ResultValue<'g>) -> bool {
        match value {
            ResultValue::Node(n) => self.nodes.push(*n),
            ResultValue::Relationship(r) => self.relationships.push(*r),
            ResultValue::Path(p) => self.paths.push(p),
            ResultValue::List(_) | ResultValue::Map(_) | ResultValue::Scalar(_) | ResultValue::Null => {
                return false
            }
        }
        true
    }
}

/// Split `row` into nodes, relationships and paths.
///
/// Lists are expanded one level only:
/// their nodes, relationships and paths are kept,
/// any other element (nested list, map, scalar) is dropped.
/// Maps, scalars and nulls can not be turned into statements, and are ignored.
pub fn classify<'r, 'g>(row: &'r ResultRow<'g>) -> Worklists<'r, 'g> {
    let mut worklists = Worklists::default();
    for value in row.values() {
        if let ResultValue::List(items) = value {
            for item in items {
                if !worklists.push(item) {
                    log::trace!("dropping nested {} in list", kind(item));
                }
            }
        } else {
            worklists.push(value);
        }
    }
    worklists
}

fn kind(value: &ResultValue) -> &'static str {
    match value {
        ResultValue::Node(_) => "node",
        ResultValue::Relationship(_) => "relationship",
        ResultValue::Path(_) => "path",
        ResultValue::List(_) => "list",
        ResultValue::Map(_) => "map",
        ResultValue::Scalar(_) => "scalar",
        ResultValue::Null => "null",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pgrdf_api::pg::PropertyValue;
    use std::collections::BTreeMap;

    #[test]
    fn direct_values() {
        let a = Node::new(1);
        let b = Node::new(2);
        let r = Relationship::new(3, "KNOWS", 1, 2);
        let p = Path::new(&a).then(&r, &b);
        let row = ResultRow::new()
            .with("a", &a)
            .with("r", &r)
            .with("p", p)
            .with("name", PropertyValue::from("Keanu"));
        let w = classify(&row);
        assert_eq!(w.nodes.iter().map(|n| n.id()).collect::<Vec<_>>(), vec![1]);
        assert_eq!(w.relationships.len(), 1);
        assert_eq!(w.paths.len(), 1);
        assert_eq!(w.paths[0].len(), 1);
    }

    #[test]
    fn list_is_expanded() {
        let a = Node::new(1);
        let r = Relationship::new(3, "KNOWS", 1, 1);
        let row = ResultRow::new().with(
            "xs",
            ResultValue::List(vec![
                ResultValue::Node(&a),
                ResultValue::Relationship(&r),
                ResultValue::Scalar(42.into()),
                ResultValue::Null,
            ]),
        );
        let w = classify(&row);
        assert_eq!(w.nodes.len(), 1);
        assert_eq!(w.relationships.len(), 1);
        assert!(w.paths.is_empty());
    }

    #[test]
    fn nested_lists_are_not_expanded() {
        let a = Node::new(1);
        let b = Node::new(2);
        let row = ResultRow::new().with("xss", vec![vec![&a], vec![&b]]);
        assert!(classify(&row).is_empty());
    }

    #[test]
    fn maps_and_scalars_are_ignored() {
        let a = Node::new(1);
        let mut map = BTreeMap::new();
        map.insert("n".to_string(), ResultValue::Node(&a));
        let row = ResultRow::new()
            .with("m", ResultValue::Map(map))
            .with("x", PropertyValue::from(1.5))
            .with("nothing", ResultValue::Null);
        assert!(classify(&row).is_empty());
    }
}

use super::{Node, Relationship};

/// A traversal result: a start node followed by (relationship, node) hops.
#[derive(Clone, Debug)]
pub struct Path<'g> {
    start: &'g Node,
    hops: Vec<(&'g Relationship, &'g Node)>,
}

/// An element of a [`Path`].
#[derive(Clone, Copy, Debug)]
pub enum PathElement<'g> {
    /// A node of the path
    Node(&'g Node),
    /// A relationship of the path
    Relationship(&'g Relationship),
}

impl<'g> Path<'g> {
    /// Build a zero-length path.
    pub fn new(start: &'g Node) -> Self {
        Path {
            start,
            hops: vec![],
        }
    }

    /// Extend this path by one hop.
    ///
    /// NB: it is not checked that `rel` actually connects the current end node to `node`.
    pub fn then(mut self, rel: &'g Relationship, node: &'g Node) -> Self {
        self.hops.push((rel, node));
        self
    }

    /// The first node of this path.
    pub fn start_node(&self) -> &'g Node {
        self.start
    }

    /// The last node of this path.
    pub fn end_node(&self) -> &'g Node {
        self.hops.last().map(|(_, n)| *n).unwrap_or(self.start)
    }

    /// The number of relationships in this path.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Whether this path has no relationship.
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Iterate over the elements of this path,
    /// alternating nodes and relationships, starting and ending with a node.
    pub fn elements(&self) -> PathElements<'_, 'g> {
        PathElements {
            path: self,
            pos: 0,
        }
    }
}

/// Iterator over the elements of a [`Path`], see [`Path::elements`].
#[derive(Clone, Debug)]
pub struct PathElements<'p, 'g> {
    path: &'p Path<'g>,
    pos: usize,
}

impl<'p, 'g> Iterator for PathElements<'p, 'g> {
    type Item = PathElement<'g>;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.pos;
        let item = if pos == 0 {
            Some(PathElement::Node(self.path.start))
        } else {
            let (rel, node) = self.path.hops.get((pos - 1) / 2)?;
            if pos % 2 == 1 {
                Some(PathElement::Relationship(*rel))
            } else {
                Some(PathElement::Node(*node))
            }
        };
        self.pos += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = 1 + 2 * self.path.hops.len();
        let rem = total.saturating_sub(self.pos);
        (rem, Some(rem))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn elements_alternate() {
        let a = Node::new(1);
        let b = Node::new(2);
        let c = Node::new(3);
        let ab = Relationship::new(10, "KNOWS", 1, 2);
        let bc = Relationship::new(11, "KNOWS", 2, 3);
        let path = Path::new(&a).then(&ab, &b).then(&bc, &c);
        assert_eq!(path.len(), 2);
        assert_eq!(path.end_node().id(), 3);
        let ids: Vec<_> = path
            .elements()
            .map(|e| match e {
                PathElement::Node(n) => format!("n{}", n.id()),
                PathElement::Relationship(r) => format!("r{}", r.id()),
            })
            .collect();
        assert_eq!(ids, vec!["n1", "r10", "n2", "r11", "n3"]);
        assert_eq!(path.elements().size_hint(), (5, Some(5)));
    }

    #[test]
    fn zero_length_path() {
        let a = Node::new(1);
        let path = Path::new(&a);
        assert!(path.is_empty());
        assert_eq!(path.elements().count(), 1);
        assert_eq!(path.end_node().id(), 1);
    }
}

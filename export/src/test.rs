use crate::lpg::LpgPolicy;
use crate::*;
use pgrdf_api::ns::{rdf, xsd};
use pgrdf_api::pg::*;
use pgrdf_api::statement::Statement;
use pgrdf_api::term::SimpleTerm;
use pgrdf_inmem::{MemGraph, MemGraphError};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use thiserror::Error;

type TestResult = Result<(), Box<dyn std::error::Error>>;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn movies() -> Result<MemGraph, MemGraphError> {
    let mut g = MemGraph::new();
    g.insert_node(
        Node::new(1)
            .with_label("Person")
            .with_property("name", "Keanu Reeves@en")
            .with_property("born", 1964),
    )?;
    g.insert_node(
        Node::new(2)
            .with_label("Person")
            .with_property("name", "Carrie-Anne Moss")
            .with_property("born", 1967),
    )?;
    g.insert_node(
        Node::new(3)
            .with_label("Movie")
            .with_property("title", "The Matrix")
            .with_property("rating", "5^^http://example.org/stars"),
    )?;
    g.insert_node(
        Node::new(4)
            .with_label("Person")
            .with_property("name", "Gene Hackman")
            .with_property("born", 1930),
    )?;
    g.insert_node(
        Node::new(5)
            .with_label("Person")
            .with_property("name", "Someone else")
            .with_property("born", "1930"),
    )?;
    g.insert_node(Node::new(6).with_label("_GraphConfig"))?;
    g.insert_relationship(
        Relationship::new(10, "ACTED_IN", 1, 3).with_property("roles", vec!["Neo"]),
    )?;
    g.insert_relationship(
        Relationship::new(11, "ACTED_IN", 2, 3).with_property("roles", vec!["Trinity"]),
    )?;
    g.insert_relationship(Relationship::new(12, "KNOWS", 1, 2))?;
    Ok(g)
}

fn node(g: &MemGraph, id: EntityId) -> &Node {
    g.node(id).unwrap()
}

fn rel(g: &MemGraph, id: EntityId) -> &Relationship {
    g.relationship(id).unwrap()
}

fn individual(id: EntityId) -> SimpleTerm {
    LpgPolicy::default().individual(id)
}

/// Statements whose subject is `id` and predicate is `rdf:type`
fn count_types(statements: &[Statement], id: EntityId) -> usize {
    statements
        .iter()
        .filter(|st| st.s() == &individual(id) && rdf::type_ == *st.p())
        .count()
}

fn collect<'g, I>(policy: impl ExportPolicy, config: &ExportConfig, rows: I) -> Result<Vec<Statement>, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = ResultRow<'g>>,
{
    let statements = project_rows(policy, config, rows)?.collect::<Result<Vec<_>, _>>()?;
    Ok(statements)
}

#[derive(Debug, Error)]
#[error("test failure on {0}")]
struct TestError(EntityId);

/// Wraps [`LpgPolicy`], skipping and failing on chosen nodes,
/// and recording the skip decisions it is asked for.
#[derive(Default)]
struct TestPolicy {
    inner: LpgPolicy,
    skip: BTreeSet<EntityId>,
    fail_on: Option<EntityId>,
    skip_calls: RefCell<Vec<EntityId>>,
}

impl TestPolicy {
    fn skipping(ids: &[EntityId]) -> Self {
        TestPolicy {
            skip: ids.iter().copied().collect(),
            ..Default::default()
        }
    }

    fn failing_on(id: EntityId) -> Self {
        TestPolicy {
            fail_on: Some(id),
            ..Default::default()
        }
    }

    fn skip_calls(&self, id: EntityId) -> usize {
        self.skip_calls.borrow().iter().filter(|i| **i == id).count()
    }
}

impl ExportPolicy for TestPolicy {
    type Error = TestError;

    fn skip_node(&self, node: &Node, vocabulary: &mut VocabularyMap) -> Result<bool, TestError> {
        self.skip_calls.borrow_mut().push(node.id());
        if self.skip.contains(&node.id()) {
            return Ok(true);
        }
        self.inner
            .skip_node(node, vocabulary)
            .map_err(|_| TestError(node.id()))
    }

    fn skip_relationship(&self, rel: &Relationship, vocabulary: &mut VocabularyMap) -> Result<bool, TestError> {
        self.inner
            .skip_relationship(rel, vocabulary)
            .map_err(|_| TestError(rel.id()))
    }

    fn serialize_node(
        &self,
        node: &Node,
        vocabulary: &mut VocabularyMap,
        encoder: &ValueEncoder,
        property_filter: Option<&str>,
    ) -> Result<Vec<Statement>, TestError> {
        if self.fail_on == Some(node.id()) {
            return Err(TestError(node.id()));
        }
        self.inner
            .serialize_node(node, vocabulary, encoder, property_filter)
            .map_err(|_| TestError(node.id()))
    }

    fn serialize_relationship(&self, rel: &Relationship, vocabulary: &mut VocabularyMap) -> Result<Statement, TestError> {
        self.inner
            .serialize_relationship(rel, vocabulary)
            .map_err(|_| TestError(rel.id()))
    }
}

#[test]
fn node_serialized_once() -> TestResult {
    init_logger();
    let g = movies()?;
    let path = g.path(1, &[10])?;
    let rows = vec![
        ResultRow::new().with("a", node(&g, 1)),
        ResultRow::new().with("p", path),
        ResultRow::new().with("xs", vec![node(&g, 1), node(&g, 1)]),
        ResultRow::new().with("a", node(&g, 1)).with("b", node(&g, 1)),
    ];
    let statements = collect(LpgPolicy::default(), &ExportConfig::new(), rows)?;
    assert_eq!(count_types(&statements, 1), 1);
    assert_eq!(count_types(&statements, 3), 1);
    // type, name, born, and the ACTED_IN relationship of the path
    let about_keanu = statements.iter().filter(|st| st.s() == &individual(1)).count();
    assert_eq!(about_keanu, 4);
    Ok(())
}

#[test]
fn relationships_are_not_deduplicated_across_rows() -> TestResult {
    let g = movies()?;
    let rows = vec![
        ResultRow::new().with("r", rel(&g, 12)),
        ResultRow::new().with("r", rel(&g, 12)),
    ];
    let statements = collect(LpgPolicy::default(), &ExportConfig::new(), rows)?;
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0], statements[1]);
    Ok(())
}

#[test]
fn statements_are_deduplicated_within_a_row() -> TestResult {
    let g = movies()?;
    let path = g.path(1, &[12])?;
    let rows = vec![ResultRow::new().with("r", rel(&g, 12)).with("p", path)];
    let statements = collect(LpgPolicy::default(), &ExportConfig::new(), rows)?;
    let knows = statements
        .iter()
        .filter(|st| st.s() == &individual(1) && st.o() == &individual(2))
        .count();
    assert_eq!(knows, 1);
    Ok(())
}

#[test]
fn skipped_node_is_reconsidered_and_never_exported() -> TestResult {
    let g = movies()?;
    let rows = vec![
        ResultRow::new().with("a", node(&g, 1)).with("b", node(&g, 2)),
        ResultRow::new().with("a", node(&g, 1)).with("b", node(&g, 2)),
        ResultRow::new().with("p", g.path(1, &[12])?),
    ];
    let policy = TestPolicy::skipping(&[1]);
    let mut projection = project_rows(&policy, &ExportConfig::new(), rows)?;
    let statements = projection.by_ref().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(count_types(&statements, 1), 0);
    assert_eq!(count_types(&statements, 2), 1);
    // the skipped node is asked about at each occurrence,
    // the exported one only until it is serialized
    assert_eq!(policy.skip_calls(1), 3);
    assert_eq!(policy.skip_calls(2), 1);
    assert!(!projection.state().serialized.contains(1));
    assert!(projection.state().serialized.contains(2));
    assert_eq!(projection.row_count(), 3);
    Ok(())
}

#[test]
fn configuration_nodes_are_excluded() -> TestResult {
    let g = movies()?;
    let rows = vec![ResultRow::new().with("n", node(&g, 6))];
    let statements = collect(LpgPolicy::default(), &ExportConfig::new(), rows)?;
    assert!(statements.is_empty());
    Ok(())
}

#[test]
fn nested_lists_produce_nothing() -> TestResult {
    let g = movies()?;
    let rows = vec![
        ResultRow::new().with("xss", vec![vec![node(&g, 1)], vec![node(&g, 2)]]),
        ResultRow::new().with("x", PropertyValue::from(42)),
    ];
    let statements = collect(LpgPolicy::default(), &ExportConfig::new(), rows)?;
    assert!(statements.is_empty());
    Ok(())
}

#[test]
fn list_of_node_and_relationship() -> TestResult {
    let g = movies()?;
    let rows = vec![ResultRow::new().with(
        "xs",
        ResultValue::List(vec![node(&g, 2).into(), rel(&g, 11).into()]),
    )];
    let statements = collect(LpgPolicy::default(), &ExportConfig::new(), rows)?;
    assert_eq!(count_types(&statements, 2), 1);
    assert!(statements
        .iter()
        .any(|st| st.s() == &individual(2) && st.o() == &individual(3)));
    Ok(())
}

#[test]
fn nodes_before_relationships_within_a_row() -> TestResult {
    let g = movies()?;
    let rows = vec![ResultRow::new()
        .with("r", rel(&g, 12))
        .with("a", node(&g, 1))];
    let statements = collect(LpgPolicy::default(), &ExportConfig::new(), rows)?;
    let last = statements.last().unwrap();
    assert_eq!(last.o(), &individual(2));
    assert_eq!(count_types(&statements, 1), 1);
    Ok(())
}

#[test_case::test_case(false, 1 ; "plain")]
#[test_case::test_case(true, 2 ; "reified")]
fn relationship_properties(reify: bool, expected: usize) -> TestResult {
    let suzy = Relationship::new(20, "ACTED_IN", 1, 3).with_property("roles", vec!["Suzy"]);
    let rows = vec![ResultRow::new().with("r", &suzy)];
    let config = ExportConfig::new().with_reify_relationship_properties(reify);
    let statements = collect(LpgPolicy::default(), &config, rows)?;
    assert_eq!(statements.len(), expected);
    let base = &statements[0];
    assert_eq!(base.s(), &individual(1));
    if reify {
        let roles = &statements[1];
        assert_eq!(roles.s(), &base.to_quoted_triple());
        assert_eq!(roles.o(), &SimpleTerm::from("Suzy"));
    }
    Ok(())
}

#[test]
fn literal_conventions() -> TestResult {
    let g = movies()?;
    let rows = vec![ResultRow::new().with("a", node(&g, 1)).with("m", node(&g, 3))];
    let statements = collect(LpgPolicy::default(), &ExportConfig::new(), rows)?;
    let objects: Vec<String> = statements.iter().map(|st| st.o().to_string()).collect();
    assert!(objects.contains(&"\"Keanu Reeves\"@en".to_string()));
    assert!(objects.contains(&"\"5\"^^<http://example.org/stars>".to_string()));
    assert!(objects.contains(&"\"The Matrix\"".to_string()));
    assert!(statements.iter().any(|st| st.o() == &("1964" * xsd::int)));
    Ok(())
}

#[test]
fn early_termination() -> TestResult {
    let g = movies()?;
    let pulled = Cell::new(0);
    let rows = (0..).map(|_| {
        pulled.set(pulled.get() + 1);
        ResultRow::new().with("r", rel(&g, 12))
    });
    let statements: Vec<_> = project_rows(LpgPolicy::default(), &ExportConfig::new(), rows)?
        .take(3)
        .collect::<Result<_, _>>()?;
    assert_eq!(statements.len(), 3);
    assert_eq!(pulled.get(), 3);
    Ok(())
}

#[test]
fn early_termination_within_a_row() -> TestResult {
    let g = movies()?;
    let pulled = Cell::new(0);
    let rows = (0..).map(|_| {
        pulled.set(pulled.get() + 1);
        ResultRow::new().with("a", node(&g, 1))
    });
    let first = project_rows(LpgPolicy::default(), &ExportConfig::new(), rows)?.next();
    assert!(matches!(first, Some(Ok(_))));
    assert_eq!(pulled.get(), 1);
    Ok(())
}

#[test]
fn policy_error_fails_only_its_row() -> TestResult {
    let g = movies()?;
    let rows = vec![
        ResultRow::new().with("a", node(&g, 1)),
        ResultRow::new().with("a", node(&g, 3)).with("b", node(&g, 2)),
        ResultRow::new().with("b", node(&g, 2)),
    ];
    let policy = TestPolicy::failing_on(3);
    let results: Vec<_> = project_rows(&policy, &ExportConfig::new(), rows)?.collect();
    let errors: Vec<_> = results.iter().filter_map(|r| r.as_ref().err()).collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_policy_error());
    assert_eq!(errors[0].to_string(), "Export policy failed: test failure on 3");
    let statements: Vec<_> = results.into_iter().filter_map(Result::ok).collect();
    assert_eq!(count_types(&statements, 1), 1);
    // node 2 was not exported with the failing row, but with the next one
    assert_eq!(count_types(&statements, 2), 1);
    Ok(())
}

#[test]
fn failed_row_unmarks_its_nodes() -> TestResult {
    let g = movies()?;
    let rows = vec![
        ResultRow::new().with("b", node(&g, 2)).with("a", node(&g, 3)),
        ResultRow::new().with("b", node(&g, 2)),
    ];
    let policy = TestPolicy::failing_on(3);
    let mut projection = project_rows(&policy, &ExportConfig::new(), rows)?;
    let first = projection.next();
    assert!(matches!(first, Some(Err(_))));
    assert!(!projection.state().serialized.contains(2));
    assert!(!projection.state().serialized.contains(3));
    let statements = projection.collect::<Result<Vec<_>, _>>()?;
    // node 2 was serialized in the failed row, then again in the next one
    assert_eq!(count_types(&statements, 2), 1);
    Ok(())
}

#[test]
fn failing_node_is_retried() -> TestResult {
    let g = movies()?;
    let rows = vec![
        ResultRow::new().with("a", node(&g, 3)),
        ResultRow::new().with("a", node(&g, 3)),
    ];
    let policy = TestPolicy::failing_on(3);
    let results: Vec<_> = project_rows(&policy, &ExportConfig::new(), rows)?.collect();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(Result::is_err));
    Ok(())
}

#[test]
fn source_error_fails_only_its_row() -> TestResult {
    let g = movies()?;
    let rows = vec![
        Ok(ResultRow::new().with("a", node(&g, 1))),
        Err(TestError(42)),
        Ok(ResultRow::new().with("b", node(&g, 2))),
    ];
    let results: Vec<_> = project(LpgPolicy::default(), &ExportConfig::new(), rows)?.collect();
    let errors: Vec<_> = results.iter().filter_map(|r| r.as_ref().err()).collect();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].is_source_error());
    let statements: Vec<_> = results.into_iter().filter_map(Result::ok).collect();
    assert_eq!(count_types(&statements, 1), 1);
    assert_eq!(count_types(&statements, 2), 1);
    Ok(())
}

#[test]
fn invalid_configuration() {
    let config = ExportConfig::new().with_language_tag_pattern("(");
    let rows: Vec<ResultRow> = vec![];
    assert!(project_rows(LpgPolicy::default(), &config, rows).is_err());
}

#[test]
fn search_coerces_integer() -> TestResult {
    init_logger();
    let g = movies()?;
    let statements = export_by_search(
        &g,
        LpgPolicy::default(),
        &ExportConfig::new(),
        "Person",
        "born",
        "1930",
        Some("INTEGER"),
        false,
    )?;
    assert_eq!(count_types(&statements, 4), 1);
    assert_eq!(count_types(&statements, 5), 0);

    let statements = export_by_search(
        &g,
        LpgPolicy::default(),
        &ExportConfig::new(),
        "Person",
        "born",
        "1930",
        None,
        false,
    )?;
    assert_eq!(count_types(&statements, 4), 0);
    assert_eq!(count_types(&statements, 5), 1);
    Ok(())
}

#[test]
fn search_coerces_float() -> TestResult {
    let mut g = MemGraph::new();
    g.insert_node(Node::new(1).with_label("Movie").with_property("rating", 3.14_f32))?;
    g.insert_node(Node::new(2).with_label("Movie").with_property("rating", 2.5_f64))?;
    let search = |value| {
        export_by_search(
            &g,
            LpgPolicy::default(),
            &ExportConfig::new(),
            "Movie",
            "rating",
            value,
            Some("FLOAT"),
            false,
        )
    };
    let statements = search("3.14")?;
    assert_eq!(count_types(&statements, 1), 1);
    assert_eq!(count_types(&statements, 2), 0);
    let statements = search("2.5")?;
    assert_eq!(count_types(&statements, 1), 0);
    assert_eq!(count_types(&statements, 2), 1);
    Ok(())
}

#[test]
fn search_malformed_value() -> TestResult {
    let g = movies()?;
    let res = export_by_search(
        &g,
        LpgPolicy::default(),
        &ExportConfig::new(),
        "Person",
        "born",
        "nineteen",
        Some("INTEGER"),
        false,
    );
    assert!(matches!(res, Err(SearchError::Value(ValueError::Coercion { .. }))));
    Ok(())
}

#[test]
fn search_with_context() -> TestResult {
    let g = movies()?;
    let config = ExportConfig::new().with_reify_relationship_properties(true);
    let statements = NodeSearch::new("Person", "born", "1964")
        .with_value_type(ValueType::from_tag(Some("INTEGER")))
        .with_context(true)
        .run(&g, LpgPolicy::default(), &config)?;
    // outgoing ACTED_IN (with its role) and KNOWS
    let mut by_subject: BTreeMap<String, usize> = BTreeMap::new();
    for st in &statements {
        *by_subject.entry(st.s().to_string()).or_default() += 1;
    }
    assert_eq!(by_subject.get(&individual(1).to_string()), Some(&(3 + 2)));
    assert_eq!(by_subject.len(), 2);
    // the neighbours themselves are not described
    assert_eq!(count_types(&statements, 2), 0);
    assert_eq!(count_types(&statements, 3), 0);
    Ok(())
}

#[test]
fn search_ignores_skip_predicates() -> TestResult {
    let g = movies()?;
    let policy = TestPolicy::skipping(&[1]);
    let statements = NodeSearch::new("Person", "born", "1964")
        .with_value_type(ValueType::Integer)
        .run(&g, &policy, &ExportConfig::new())?;
    assert_eq!(count_types(&statements, 1), 1);
    assert_eq!(policy.skip_calls(1), 0);
    Ok(())
}

#[test]
fn implicit_ontology() -> TestResult {
    let g = movies()?;
    let statements = LpgPolicy::default().implicit_ontology(&g)?;
    let nt: BTreeSet<String> = statements.iter().map(Statement::to_string).collect();
    assert!(nt.contains("<neo4j://graph.schema#Person> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#Class> ."));
    assert!(nt.contains("<neo4j://graph.schema#KNOWS> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2002/07/owl#ObjectProperty> ."));
    assert!(nt.contains("<neo4j://graph.schema#born> <http://www.w3.org/2000/01/rdf-schema#label> \"born\" ."));
    assert!(!nt.iter().any(|st| st.contains("_GraphConfig")));
    // Movie, Person; ACTED_IN, KNOWS; born, name, rating, roles, title
    assert_eq!(statements.len(), 2 * (2 + 2 + 5));
    Ok(())
}

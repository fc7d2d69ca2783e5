//! The projection pipeline, turning a stream of result rows into a stream of statements.
use crate::classifier::classify;
use crate::config::{ConfigError, ExportConfig};
use crate::encoder::ValueEncoder;
use crate::error::*;
use crate::policy::ExportPolicy;
use crate::state::ExportState;
use pgrdf_api::pg::{EntityId, Node, PathElement, Relationship, ResultRow};
use pgrdf_api::statement::Statement;
use std::collections::HashSet;
use std::convert::Infallible;
use std::error::Error;

/// A lazy stream of statements projected from a stream of [result rows](ResultRow).
///
/// Rows are pulled one at a time, only when the statements of the previous row
/// have all been consumed; dropping a `Projection` early leaves the remaining rows unread.
///
/// Within one projection, every node is serialized at most once,
/// no matter how many times it appears (in the same row or in different rows).
/// Relationships, on the other hand, are serialized each time they appear.
///
/// Rows are processed as follows:
/// 1. the row is [classified](crate::classifier::classify);
/// 2. its nodes not yet serialized and not skipped by the policy are serialized;
/// 3. its relationships not skipped by the policy are serialized,
///    together with their properties if [reified](ExportConfig::reify_relationship_properties);
/// 4. the elements of its paths are processed as in 2 and 3.
///
/// A node is marked as serialized *before* the policy serializes it,
/// and only once the policy has decided not to skip it:
/// a skipped node is therefore reconsidered each time it appears.
///
/// When a row fails (because the row source or the policy fails),
/// exactly one error is yielded for it, its partial statements are discarded,
/// and the projection resumes with the next row.
/// The nodes marked by a failed row are unmarked,
/// so they are serialized on their next occurrence.
pub struct Projection<I, P> {
    rows: I,
    policy: P,
    encoder: ValueEncoder,
    reify: bool,
    state: ExportState,
    pending: std::vec::IntoIter<Statement>,
    row_count: usize,
}

impl<I, P: ExportPolicy> Projection<I, P> {
    /// Build a projection of `rows` using `policy` and `config`.
    pub fn new(policy: P, config: &ExportConfig, rows: I) -> Result<Self, ConfigError> {
        Ok(Projection {
            rows,
            policy,
            encoder: config.encoder()?,
            reify: config.reify_relationship_properties(),
            state: ExportState::new(),
            pending: vec![].into_iter(),
            row_count: 0,
        })
    }

    /// The state of this projection so far.
    pub fn state(&self) -> &ExportState {
        &self.state
    }

    /// The number of rows pulled so far.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    fn project_row(&mut self, row: &ResultRow, out: &mut RowStatements) -> Result<(), P::Error> {
        let worklists = classify(row);
        for node in &worklists.nodes {
            self.visit_node(node, out)?;
        }
        for rel in &worklists.relationships {
            self.visit_relationship(rel, out)?;
        }
        for path in &worklists.paths {
            for element in path.elements() {
                match element {
                    PathElement::Node(node) => self.visit_node(node, out)?,
                    PathElement::Relationship(rel) => self.visit_relationship(rel, out)?,
                }
            }
        }
        log::debug!(
            "row {}: {} node(s), {} relationship(s), {} path(s) -> {} statement(s)",
            self.row_count,
            worklists.nodes.len(),
            worklists.relationships.len(),
            worklists.paths.len(),
            out.len(),
        );
        Ok(())
    }

    fn visit_node(&mut self, node: &Node, out: &mut RowStatements) -> Result<(), P::Error> {
        if self.state.serialized.contains(node.id()) {
            return Ok(());
        }
        if self.policy.skip_node(node, &mut self.state.vocabulary)? {
            log::trace!("skipping node {}", node.id());
            return Ok(());
        }
        self.state.serialized.insert(node.id());
        out.mark(node.id());
        let statements =
            self.policy
                .serialize_node(node, &mut self.state.vocabulary, &self.encoder, None)?;
        out.extend(statements);
        Ok(())
    }

    fn visit_relationship(&mut self, rel: &Relationship, out: &mut RowStatements) -> Result<(), P::Error> {
        if self.policy.skip_relationship(rel, &mut self.state.vocabulary)? {
            log::trace!("skipping relationship {}", rel.id());
            return Ok(());
        }
        serialize_relationship(
            &self.policy,
            &self.encoder,
            self.reify,
            &mut self.state,
            rel,
            out,
        )
    }
}

/// Serialize `rel` and, if `reify` is set, its properties.
pub(crate) fn serialize_relationship<P: ExportPolicy>(
    policy: &P,
    encoder: &ValueEncoder,
    reify: bool,
    state: &mut ExportState,
    rel: &Relationship,
    out: &mut RowStatements,
) -> Result<(), P::Error> {
    let base = policy.serialize_relationship(rel, &mut state.vocabulary)?;
    out.push(base.clone());
    if reify {
        for (key, value) in rel.properties() {
            out.extend(policy.serialize_relationship_property(&base, key, value, encoder)?);
        }
    }
    Ok(())
}

impl<'g, I, E, P> Iterator for Projection<I, P>
where
    I: Iterator<Item = Result<ResultRow<'g>, E>>,
    E: Error,
    P: ExportPolicy,
{
    type Item = ProjectionResult<Statement, E, P::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(st) = self.pending.next() {
                return Some(Ok(st));
            }
            let row = match self.rows.next()? {
                Ok(row) => row,
                Err(err) => return Some(Err(SourceError(err))),
            };
            self.row_count += 1;
            let mut out = RowStatements::default();
            match self.project_row(&row, &mut out) {
                Ok(()) => self.pending = out.into_vec().into_iter(),
                Err(err) => {
                    for id in out.marked() {
                        self.state.serialized.remove(*id);
                    }
                    log::debug!("row {} failed: {}", self.row_count, err);
                    return Some(Err(PolicyError(err)));
                }
            }
        }
    }
}

/// The statements of one row, without duplicates, in insertion order,
/// and the nodes the row marked as serialized.
#[derive(Debug, Default)]
pub(crate) struct RowStatements {
    statements: Vec<Statement>,
    seen: HashSet<Statement>,
    marked: Vec<EntityId>,
}

impl RowStatements {
    pub(crate) fn push(&mut self, st: Statement) {
        if !self.seen.contains(&st) {
            self.seen.insert(st.clone());
            self.statements.push(st);
        }
    }

    pub(crate) fn extend<T: IntoIterator<Item = Statement>>(&mut self, statements: T) {
        for st in statements {
            self.push(st);
        }
    }

    pub(crate) fn mark(&mut self, id: EntityId) {
        self.marked.push(id);
    }

    pub(crate) fn marked(&self) -> &[EntityId] {
        &self.marked
    }

    pub(crate) fn len(&self) -> usize {
        self.statements.len()
    }

    pub(crate) fn into_vec(self) -> Vec<Statement> {
        self.statements
    }
}

/// Row source of [`project_rows`].
pub type InfallibleRows<'g, I> =
    std::iter::Map<I, fn(ResultRow<'g>) -> Result<ResultRow<'g>, Infallible>>;

/// Project a fallible stream of rows into a stream of statements.
///
/// See [`Projection`] for details.
pub fn project<'g, I, E, P>(
    policy: P,
    config: &ExportConfig,
    rows: I,
) -> Result<Projection<I::IntoIter, P>, ConfigError>
where
    I: IntoIterator<Item = Result<ResultRow<'g>, E>>,
    E: Error,
    P: ExportPolicy,
{
    Projection::new(policy, config, rows.into_iter())
}

/// Project an infallible stream of rows into a stream of statements.
///
/// See [`Projection`] for details.
pub fn project_rows<'g, I, P>(
    policy: P,
    config: &ExportConfig,
    rows: I,
) -> Result<Projection<InfallibleRows<'g, I::IntoIter>, P>, ConfigError>
where
    I: IntoIterator<Item = ResultRow<'g>>,
    P: ExportPolicy,
{
    let ok: fn(ResultRow<'g>) -> Result<ResultRow<'g>, Infallible> = Ok;
    Projection::new(policy, config, rows.into_iter().map(ok))
}

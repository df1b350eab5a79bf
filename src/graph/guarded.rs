use crate::graph::*;
use crate::policy::*;
use crate::{GraphError, Result};
use tracing::debug;

/// An adjacency-list graph guarded by an [InvariantPolicy].
///
/// Directedness and weightedness are fixed at construction. Vertex and edge
/// counts are derived from the store.
///
/// Additions go through the policy and either commit completely or leave the
/// graph untouched. Deletions report absence through their `bool` result.
///
/// * `V`: vertex type.
/// * `P`: the policy, [Unrestricted] unless a variant says otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V, P = Unrestricted> {
    store: AdjacencyStore<V>,
    weighted: bool,
    policy: P,
}

impl<V: Vertex> Default for Graph<V, Unrestricted> {
    fn default() -> Self {
        Self::with_flags(false, false)
    }
}

impl<V: Vertex> Graph<V, Unrestricted> {
    /// A general-purpose graph with the given directedness and weightedness.
    /// The named kinds in [crate::variants] each have their own `new`.
    pub fn with_flags(directed: bool, weighted: bool) -> Self {
        Self::with_policy(directed, weighted, Unrestricted)
    }
}

impl<V, P> Graph<V, P>
where
    V: Vertex,
    P: InvariantPolicy<V>,
{
    pub fn with_policy(directed: bool, weighted: bool, policy: P) -> Self {
        Self {
            store: AdjacencyStore::new(directed),
            weighted,
            policy,
        }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    pub fn store(&self) -> &AdjacencyStore<V> {
        &self.store
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.store.iter_vertices()
    }

    pub fn num_vertices(&self) -> usize {
        self.store.vertex_size()
    }

    pub fn num_edges(&self) -> usize {
        self.store.edge_size()
    }

    pub fn caption(&self) -> Caption {
        self.policy.caption(&self.store, self.weighted)
    }

    /// Adds a vertex unless it is already present.
    ///
    /// Returns `Ok(false)` for a vertex that already exists. The policy may
    /// refuse the vertex or attach edges to it, e.g. complete graphs connect
    /// it to every existing vertex.
    pub fn add_vertex(&mut self, v: V) -> Result<bool> {
        if self.store.contains_vertex(&v) {
            return Ok(false);
        }
        let companions = self
            .policy
            .validate_vertex_addition(&self.store, &v)
            .map_err(|violation| {
                debug!(vertex = ?v, ?violation, "vertex rejected");
                violation.on_vertex(&v)
            })?;
        debug!(vertex = ?v, companions = companions.len(), "vertex added");
        self.store.insert_vertex(v);
        for e in companions {
            self.store.insert_edge(e);
        }
        Ok(true)
    }

    /// Adds an edge of [DEFAULT_WEIGHT].
    pub fn add_edge(&mut self, source: V, sink: V) -> Result<()> {
        self.add_weighted_edge(source, sink, DEFAULT_WEIGHT)
    }

    /// Adds an edge, creating missing endpoints.
    ///
    /// Parallel edges and self-loops are kept as given unless the policy
    /// refuses them. Missing endpoints are created as plain vertices without
    /// consulting [InvariantPolicy::validate_vertex_addition], so on a
    /// complete graph they get no companion edges.
    pub fn add_weighted_edge(&mut self, source: V, sink: V, weight: Weight) -> Result<()> {
        let edge = Edge::new(source, sink, weight);
        if let Err(violation) = self.policy.admit_edge(&self.store, &edge) {
            return Err(self.reject(violation, &edge));
        }
        if P::VALIDATES_SCRATCH {
            let mut scratch = self.store.clone();
            scratch.insert_edge(edge.clone());
            if let Err(violation) = self.policy.validate_before_commit(&scratch, &edge) {
                return Err(self.reject(violation, &edge));
            }
            self.store = scratch;
        } else {
            self.store.insert_edge(edge.clone());
        }
        debug!(source = ?edge.source, sink = ?edge.sink, weight = edge.weight, "edge added");
        Ok(())
    }

    fn reject(&self, violation: Violation, edge: &Edge<V>) -> GraphError {
        debug!(source = ?edge.source, sink = ?edge.sink, ?violation, "edge rejected");
        violation.on_edge(edge)
    }

    /// Removes a vertex and every edge touching it. `false` if it was absent.
    pub fn delete_vertex(&mut self, v: &V) -> bool {
        let res = self.store.remove_vertex(v);
        if res {
            debug!(vertex = ?v, "vertex deleted");
        }
        res
    }

    /// Removes the first `source -> sink` edge (both entries when undirected).
    /// `false` if either endpoint or the edge is absent.
    pub fn delete_edge(&mut self, source: &V, sink: &V) -> bool {
        let res = self.store.remove_edge(source, sink);
        if res {
            debug!(?source, ?sink, "edge deleted");
        }
        res
    }

    fn check_compatible<Q>(&self, other: &Graph<V, Q>) -> Result<()> {
        if self.store.is_directed() != other.store.is_directed() {
            return Err(GraphError::incompatible(
                "cannot join directed and undirected graphs",
            ));
        }
        if self.weighted != other.weighted {
            return Err(GraphError::incompatible(
                "cannot join weighted and unweighted graphs",
            ));
        }
        Ok(())
    }

    /// Merges the vertices and edges of `other` into this graph.
    ///
    /// An edge of `other` is skipped when this graph already has an edge with
    /// the same source and sink. Undirected edges are taken from the entry
    /// whose source is not greater than its sink, so each is merged once.
    /// Every addition passes through this graph's policy; if any is refused
    /// the whole join is abandoned and the graph is left as it was.
    pub fn join<Q>(&mut self, other: &Graph<V, Q>) -> Result<()>
    where
        Q: InvariantPolicy<V>,
    {
        self.check_compatible(other)?;
        let mut staged = self.clone();
        for v in other.store.iter_vertices() {
            staged.add_vertex(v.clone())?;
        }
        let directed = self.store.is_directed();
        for e in other.store.iter_edges() {
            if staged.store.contains_edge(&e.source, &e.sink) {
                continue;
            }
            if directed || e.source <= e.sink {
                staged.add_weighted_edge(e.source, e.sink, e.weight)?;
            }
        }
        debug!(
            vertices = staged.num_vertices(),
            edges = staged.num_edges(),
            "graphs joined"
        );
        *self = staged;
        Ok(())
    }

    /// Returns a new graph holding both graphs, see [Graph::join].
    pub fn union<Q>(&self, other: &Graph<V, Q>) -> Result<Self>
    where
        Q: InvariantPolicy<V>,
    {
        let mut res = self.clone();
        res.join(other)?;
        Ok(res)
    }
}

impl<'a, V, P, Q> std::ops::Add<&'a Graph<V, Q>> for &'a Graph<V, P>
where
    V: Vertex,
    P: InvariantPolicy<V>,
    Q: InvariantPolicy<V>,
{
    type Output = Result<Graph<V, P>>;

    fn add(self, other: &'a Graph<V, Q>) -> Self::Output {
        self.union(other)
    }
}

impl<V, P> QueryableGraph for Graph<V, P>
where
    V: Vertex,
    P: InvariantPolicy<V>,
{
    type Vertex = V;

    fn is_directed(&self) -> bool {
        self.store.is_directed()
    }

    fn vertex_size(&self) -> usize {
        self.store.vertex_size()
    }

    fn iter_vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        self.store.iter_vertices()
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.store.contains_vertex(v)
    }

    fn edge_size(&self) -> usize {
        self.store.edge_size()
    }

    fn adjacent(&self, v: &V) -> &[Adjacent<V>] {
        self.store.adjacent(v)
    }
}

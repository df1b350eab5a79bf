use crate::graph::*;
use ahash::RandomState;
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::trace;

/// Cycle detection and cycle-length metrics.
///
/// In undirected graphs a self-loop is a cycle of length 1 and two parallel
/// edges form a cycle of length 2. Walking back along the very edge a vertex
/// was reached by does not count.
pub trait Cycles
where
    Self: QueryableGraph + Sized,
{
    /// Whether any cycle exists: a back edge to a vertex still on the search
    /// path for directed graphs, any non-tree edge for undirected ones.
    fn has_cycle(&self) -> bool {
        if self.is_directed() {
            has_directed_cycle(self)
        } else {
            has_undirected_cycle(self)
        }
    }

    /// Length of the shortest cycle, `None` for acyclic graphs.
    ///
    /// Runs a breadth-first search from every vertex. In an undirected graph
    /// a non-tree edge between `u` and `w` closes a cycle of length at most
    /// `level(u) + level(w) + 1`, and the minimum over all roots is exact. In
    /// a directed graph an edge `u -> root` closes a cycle of length
    /// `level(u) + 1`.
    fn girth(&self) -> Option<usize> {
        let mut res: Option<usize> = None;
        for root in self.iter_vertices() {
            let found = if self.is_directed() {
                shortest_directed_cycle_through(self, root)
            } else {
                shortest_undirected_cycle_from(self, root)
            };
            res = match (res, found) {
                (Some(a), Some(b)) => Some(a.min(b)),
                (a, b) => a.or(b),
            };
        }
        res
    }

    /// Length of the longest cycle found by searching simple paths that
    /// leave and return to each vertex in turn.
    ///
    /// Only cycles through at least three vertices count, so self-loops and
    /// two-vertex cycles are ignored. The search is exponential in the worst
    /// case; keep graphs small. `None` when no qualifying cycle exists.
    fn circumference(&self) -> Option<usize> {
        let limit = self.vertex_size();
        let mut best = 0;
        for start in self.iter_vertices() {
            best = best.max(longest_cycle_through(self, start));
            if best == limit {
                break;
            }
        }
        if best == 0 {
            None
        } else {
            Some(best)
        }
    }
}

impl<G: QueryableGraph> Cycles for G {}

fn has_directed_cycle<G: QueryableGraph>(graph: &G) -> bool {
    let mut done: HashSet<&G::Vertex, RandomState> = HashSet::default();
    let mut on_path: HashSet<&G::Vertex, RandomState> = HashSet::default();
    for start in graph.iter_vertices() {
        if done.contains(start) {
            continue;
        }
        let mut stack = vec![(start, 0usize)];
        on_path.insert(start);
        while let Some((cur, next)) = stack.last_mut() {
            let cur = *cur;
            let adjacent = graph.adjacent(cur);
            if *next >= adjacent.len() {
                on_path.remove(cur);
                done.insert(cur);
                stack.pop();
                continue;
            }
            let nb = &adjacent[*next].vertex;
            *next += 1;
            if on_path.contains(nb) {
                trace!(from = ?cur, to = ?nb, "back edge");
                return true;
            }
            if !done.contains(nb) {
                on_path.insert(nb);
                stack.push((nb, 0));
            }
        }
    }
    false
}

fn has_undirected_cycle<G: QueryableGraph>(graph: &G) -> bool {
    let mut visited: HashSet<&G::Vertex, RandomState> = HashSet::default();
    for start in graph.iter_vertices() {
        if !visited.insert(start) {
            continue;
        }
        // (vertex, parent, index of the next neighbor, tree edge skipped)
        let mut stack: Vec<(&G::Vertex, Option<&G::Vertex>, usize, bool)> =
            vec![(start, None, 0, false)];
        while let Some((cur, parent, next, skipped)) = stack.last_mut() {
            let cur = *cur;
            let adjacent = graph.adjacent(cur);
            if *next >= adjacent.len() {
                stack.pop();
                continue;
            }
            let nb = &adjacent[*next].vertex;
            *next += 1;
            if !*skipped && *parent == Some(nb) {
                *skipped = true;
                continue;
            }
            if !visited.insert(nb) {
                trace!(from = ?cur, to = ?nb, "non-tree edge");
                return true;
            }
            stack.push((nb, Some(cur), 0, false));
        }
    }
    false
}

fn shortest_undirected_cycle_from<G: QueryableGraph>(
    graph: &G,
    root: &G::Vertex,
) -> Option<usize> {
    let mut level: HashMap<&G::Vertex, usize, RandomState> = HashMap::default();
    let mut queue = VecDeque::new();
    let mut res: Option<usize> = None;
    level.insert(root, 0);
    queue.push_back((root, None));
    while let Some((cur, parent)) = queue.pop_front() {
        let d = level[cur];
        if let Some(best) = res {
            // cycles closed from level d have length at least 2d
            if 2 * d >= best {
                break;
            }
        }
        let mut skipped = false;
        for a in graph.adjacent(cur).iter() {
            let nb = &a.vertex;
            if !skipped && parent == Some(nb) {
                skipped = true;
                continue;
            }
            match level.get(nb) {
                None => {
                    level.insert(nb, d + 1);
                    queue.push_back((nb, Some(cur)));
                }
                Some(&dn) => {
                    let len = d + dn + 1;
                    res = Some(res.map_or(len, |best: usize| best.min(len)));
                }
            }
        }
    }
    res
}

fn shortest_directed_cycle_through<G: QueryableGraph>(
    graph: &G,
    root: &G::Vertex,
) -> Option<usize> {
    let mut level: HashMap<&G::Vertex, usize, RandomState> = HashMap::default();
    let mut queue = VecDeque::new();
    level.insert(root, 0);
    queue.push_back(root);
    while let Some(cur) = queue.pop_front() {
        let d = level[cur];
        for a in graph.adjacent(cur).iter() {
            if a.vertex == *root {
                return Some(d + 1);
            }
            if !level.contains_key(&a.vertex) {
                level.insert(&a.vertex, d + 1);
                queue.push_back(&a.vertex);
            }
        }
    }
    None
}

fn longest_cycle_through<G: QueryableGraph>(graph: &G, start: &G::Vertex) -> usize {
    let mut best = 0;
    let mut on_path: HashSet<&G::Vertex, RandomState> = HashSet::default();
    on_path.insert(start);
    // (vertex, hops from start, distinct neighbors, index of the next one)
    let mut stack = vec![(start, 0usize, distinct_neighbors(graph, start), 0usize)];
    while let Some((cur, dist, neighbors, next)) = stack.last_mut() {
        if *next >= neighbors.len() {
            on_path.remove(*cur);
            stack.pop();
            continue;
        }
        let nb = neighbors[*next];
        let dist = *dist;
        *next += 1;
        if nb == start && dist > 1 {
            best = best.max(dist + 1);
        } else if !on_path.contains(nb) {
            on_path.insert(nb);
            stack.push((nb, dist + 1, distinct_neighbors(graph, nb), 0));
        }
    }
    best
}

fn distinct_neighbors<'a, G: QueryableGraph>(
    graph: &'a G,
    v: &G::Vertex,
) -> Vec<&'a G::Vertex> {
    let mut seen: HashSet<&G::Vertex, RandomState> = HashSet::default();
    graph
        .adjacent(v)
        .iter()
        .map(|a| &a.vertex)
        .filter(|nb| seen.insert(*nb))
        .collect()
}

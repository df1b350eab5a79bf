use super::*;
use crate::algorithm::{Cycles, Distances};
use crate::graph::*;

/// Accepts every mutation. The general-purpose graph: its caption follows
/// whatever directedness and weightedness it was built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unrestricted;

impl<V: Vertex> InvariantPolicy<V> for Unrestricted {
    fn caption(&self, store: &AdjacencyStore<V>, weighted: bool) -> Caption {
        if weighted {
            Caption::titled("Weighted Graph")
        } else if store.is_directed() {
            Caption::titled("Directed Graph")
        } else {
            Caption::titled("Undirected Graph")
        }
    }
}

/// Undirected graphs. Accepts every mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Undirected;

impl<V: Vertex> InvariantPolicy<V> for Undirected {
    fn caption(&self, _store: &AdjacencyStore<V>, _weighted: bool) -> Caption {
        Caption::titled("Undirected Graph")
    }
}

/// Directed graphs. Accepts every mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directed;

impl<V: Vertex> InvariantPolicy<V> for Directed {
    fn caption(&self, _store: &AdjacencyStore<V>, _weighted: bool) -> Caption {
        Caption::titled("Directed Graph")
    }
}

/// Weighted graphs, directed or not. Accepts every mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Weighted;

impl<V: Vertex> InvariantPolicy<V> for Weighted {
    fn caption(&self, _store: &AdjacencyStore<V>, _weighted: bool) -> Caption {
        Caption::titled("Weighted Graph")
    }
}

/// Accepts every mutation and reports whether the graph has a cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleReporting;

impl<V: Vertex> InvariantPolicy<V> for CycleReporting {
    fn caption(&self, store: &AdjacencyStore<V>, _weighted: bool) -> Caption {
        Caption::titled("Cyclic Graph").with_status("Has Cycle", store.has_cycle())
    }
}

/// Graphs meant to be connected. Accepts every mutation and reports
/// whether the graph currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpectConnected;

impl<V: Vertex> InvariantPolicy<V> for ExpectConnected {
    fn caption(&self, store: &AdjacencyStore<V>, _weighted: bool) -> Caption {
        Caption::titled("Connected Graph").with_status("Connected", store.is_connected())
    }
}

/// Graphs meant to have several components. Same reporting as
/// [ExpectConnected] under a different title.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpectDisconnected;

impl<V: Vertex> InvariantPolicy<V> for ExpectDisconnected {
    fn caption(&self, store: &AdjacencyStore<V>, _weighted: bool) -> Caption {
        Caption::titled("Disconnected Graph").with_status("Connected", store.is_connected())
    }
}

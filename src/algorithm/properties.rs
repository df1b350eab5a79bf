//! A one-shot summary of graph metrics.
use super::{Cycles, Distances};
use crate::graph::*;
use crate::palette::*;

/// Metrics of a graph at one point in time.
///
/// `None` keeps the meaning it has in the individual metrics: radius and
/// diameter are undefined for disconnected graphs, girth and circumference
/// for graphs without a (qualifying) cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphProperties {
    pub vertices: usize,
    pub edges: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub radius: Option<usize>,
    pub diameter: Option<usize>,
    pub girth: Option<usize>,
    pub circumference: Option<usize>,
    pub connected: bool,
}

pub trait Properties
where
    Self: QueryableGraph + Sized,
{
    /**
     * Computes every metric. As expensive as [Cycles::circumference], which
     * dominates.
     */
    fn properties(&self) -> GraphProperties {
        GraphProperties {
            vertices: self.vertex_size(),
            edges: self.edge_size(),
            min_degree: self.min_degree(),
            max_degree: self.max_degree(),
            radius: self.radius(),
            diameter: self.diameter(),
            girth: self.girth(),
            circumference: self.circumference(),
            connected: self.is_connected(),
        }
    }
}

impl<G: QueryableGraph> Properties for G {}

impl GraphProperties {
    /**
     * Writes the report to `out`:
     *
     * ```plain
     * === Graph Properties ===
     * Number of Vertices: 3
     * Number of Edges: 2
     * Minimum Degree (Min vertex connections): 1
     * Maximum Degree (Max vertex connections): 2
     * Graph Radius (Min eccentricity): 1
     * Graph Diameter (Max shortest path): 2
     * Girth (Shortest cycle): No cycle (Acyclic)
     * Circumference (Longest cycle): No cycle (Acyclic)
     * Connected: Yes
     * ========================
     * ```
     *
     * Lines on degrees and metrics are left out for an empty graph.
     */
    pub fn dump<W, C>(&self, out: &mut W, palette: &C) -> std::io::Result<()>
    where
        W: std::io::Write,
        C: Palette,
    {
        let label = |text: &str| palette.paint(text, StyleHint::Header, true);
        let value = |text: String, hint: StyleHint| palette.paint(&text, hint, false);
        let metric = |m: Option<usize>, missing: &str| match m {
            Some(x) => value(x.to_string(), StyleHint::Weight),
            None => value(missing.to_owned(), StyleHint::Status),
        };

        writeln!(out, "{}", label("=== Graph Properties ==="))?;
        writeln!(
            out,
            "{}{}",
            label("Number of Vertices: "),
            value(self.vertices.to_string(), StyleHint::Vertex)
        )?;
        writeln!(
            out,
            "{}{}",
            label("Number of Edges: "),
            value(self.edges.to_string(), StyleHint::Vertex)
        )?;
        if self.vertices > 0 {
            writeln!(
                out,
                "{}{}",
                label("Minimum Degree (Min vertex connections): "),
                value(self.min_degree.to_string(), StyleHint::Weight)
            )?;
            writeln!(
                out,
                "{}{}",
                label("Maximum Degree (Max vertex connections): "),
                value(self.max_degree.to_string(), StyleHint::Weight)
            )?;
            writeln!(
                out,
                "{}{}",
                label("Graph Radius (Min eccentricity): "),
                metric(self.radius, "Undefined (disconnected)")
            )?;
            writeln!(
                out,
                "{}{}",
                label("Graph Diameter (Max shortest path): "),
                metric(self.diameter, "Undefined (disconnected)")
            )?;
            writeln!(
                out,
                "{}{}",
                label("Girth (Shortest cycle): "),
                metric(self.girth, "No cycle (Acyclic)")
            )?;
            writeln!(
                out,
                "{}{}",
                label("Circumference (Longest cycle): "),
                metric(self.circumference, "No cycle (Acyclic)")
            )?;
        }
        let connected = if self.connected { "Yes" } else { "No" };
        writeln!(
            out,
            "{}{}",
            label("Connected: "),
            value(connected.to_owned(), StyleHint::Status)
        )?;
        writeln!(out, "{}", label("========================"))?;
        Ok(())
    }
}

impl std::fmt::Display for GraphProperties {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = vec![];
        self.dump(&mut buf, &Plain).map_err(|_| std::fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

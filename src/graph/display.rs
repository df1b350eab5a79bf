use crate::graph::*;
use crate::palette::*;
use crate::policy::{Caption, InvariantPolicy};
use std::fmt::Display;

/// Renders an adjacency list, one vertex per line.
///
/// ```plain
/// Weighted Graph:
/// Graph (Adjacency List & weighted graph):
/// -----------------------
///   A --- (10)---> B, (15)---> D
///   B --- (10)---> A
///   D --- (15)---> A
///   E --> ∅
/// ```
///
/// Directed graphs use `-->` as the edge marker, undirected ones `---`.
pub struct AdjacencyDisplay<'a, G, C> {
    graph: &'a G,
    weighted: bool,
    caption: Option<Caption>,
    palette: &'a C,
}

impl<'a, G, C> AdjacencyDisplay<'a, G, C>
where
    G: QueryableGraph,
    G::Vertex: Display,
    C: Palette,
{
    pub fn new(graph: &'a G, weighted: bool, palette: &'a C) -> Self {
        Self {
            graph,
            weighted,
            caption: None,
            palette,
        }
    }

    pub fn caption(mut self, caption: Caption) -> Self {
        self.caption = Some(caption);
        self
    }

    fn fmt_caption(&self, f: &mut std::fmt::Formatter<'_>, caption: &Caption) -> std::fmt::Result {
        let p = self.palette;
        write!(f, "{}", p.paint(&caption.title, StyleHint::Header, true))?;
        if let Some((label, holds)) = caption.status {
            write!(f, "{}", p.paint(&format!(" ({}: ", label), StyleHint::Header, true))?;
            let answer = if holds { "Yes" } else { "No" };
            write!(f, "{}", p.paint(answer, StyleHint::Status, false))?;
            write!(f, "{}", p.paint(")", StyleHint::Header, true))?;
        }
        writeln!(f, "{}", p.paint(":", StyleHint::Header, true))
    }

    /// Lists the vertices on one line, for kinds that never hold edges.
    fn fmt_vertex_list(
        &self,
        f: &mut std::fmt::Formatter<'_>,
        caption: &Caption,
        label: &str,
    ) -> std::fmt::Result {
        let p = self.palette;
        writeln!(f, "{}", p.paint(&caption.title, StyleHint::Header, true))?;
        if self.graph.vertex_size() == 0 {
            return Ok(());
        }
        write!(f, "{}", p.paint(&format!("{}: ", label), StyleHint::Header, true))?;
        for (i, v) in self.graph.iter_vertices().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", p.paint(&v.to_string(), StyleHint::Vertex, false))?;
        }
        writeln!(f)
    }

    fn fmt_heading(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut heading = String::from("Graph (Adjacency List");
        if self.graph.is_directed() {
            heading.push_str(" for directed");
        }
        if self.weighted {
            heading.push_str(" & weighted");
        }
        heading.push_str(" graph):");
        writeln!(f, "{}", self.palette.paint(&heading, StyleHint::Header, true))?;
        writeln!(
            f,
            "{}",
            self.palette
                .paint("-----------------------", StyleHint::Header, false)
        )
    }

    fn fmt_vertex(&self, f: &mut std::fmt::Formatter<'_>, v: &G::Vertex) -> std::fmt::Result {
        let p = self.palette;
        let marker = if self.graph.is_directed() { "-->" } else { "---" };
        write!(f, "  {}", p.paint(&v.to_string(), StyleHint::Vertex, false))?;
        let adjacent = self.graph.adjacent(v);
        if adjacent.is_empty() {
            write!(f, " {} ", p.paint("-->", StyleHint::EdgeMarker, false))?;
            return writeln!(f, "{}", p.paint("∅", StyleHint::Status, false));
        }
        write!(f, " {}", p.paint(marker, StyleHint::EdgeMarker, false))?;
        for (i, a) in adjacent.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            if self.weighted {
                write!(
                    f,
                    " {}{}",
                    p.paint(&format!("({})", a.weight), StyleHint::Weight, false),
                    p.paint("--->", StyleHint::EdgeMarker, false)
                )?;
            }
            write!(
                f,
                " {}",
                p.paint(&a.vertex.to_string(), StyleHint::Vertex, false)
            )?;
        }
        writeln!(f)
    }
}

impl<'a, G, C> std::fmt::Display for AdjacencyDisplay<'a, G, C>
where
    G: QueryableGraph,
    G::Vertex: Display,
    C: Palette,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(caption) = &self.caption {
            if let Some(label) = caption.vertex_label {
                return self.fmt_vertex_list(f, caption, label);
            }
            self.fmt_caption(f, caption)?;
        }
        if self.graph.vertex_size() == 0 {
            return writeln!(
                f,
                "  {}",
                self.palette.paint("Empty Graph", StyleHint::Header, true)
            );
        }
        self.fmt_heading(f)?;
        for v in self.graph.iter_vertices() {
            self.fmt_vertex(f, v)?;
        }
        Ok(())
    }
}

impl<V, P> Graph<V, P>
where
    V: Vertex + Display,
    P: InvariantPolicy<V>,
{
    /// The captioned adjacency list, styled by `palette`.
    pub fn display_with<'a, C: Palette>(&'a self, palette: &'a C) -> AdjacencyDisplay<'a, Self, C> {
        AdjacencyDisplay::new(self, self.is_weighted(), palette).caption(self.caption())
    }

    /// Writes the captioned adjacency list to `out`.
    pub fn render<W, C>(&self, out: &mut W, palette: &C) -> std::io::Result<()>
    where
        W: std::io::Write,
        C: Palette,
    {
        write!(out, "{}", self.display_with(palette))
    }
}

impl<V, P> std::fmt::Display for Graph<V, P>
where
    V: Vertex + Display,
    P: InvariantPolicy<V>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_with(&Plain))
    }
}

use super::{BfsTree, DfsTree};
use crate::graph::Vertex;
use crate::palette::*;
use std::fmt::Display;

/// A traversal result seen as a rooted tree.
pub trait RootedTree {
    type Vertex: Vertex + Display;

    fn tree_root(&self) -> &Self::Vertex;
    /// Children in ascending order.
    fn tree_children(&self, v: &Self::Vertex) -> Vec<&Self::Vertex>;
    /// Annotation printed after a vertex, e.g. `(L2)`.
    fn annotation(&self, v: &Self::Vertex) -> String;
}

impl<V: Vertex + Display> RootedTree for BfsTree<V> {
    type Vertex = V;

    fn tree_root(&self) -> &V {
        &self.root
    }

    fn tree_children(&self, v: &V) -> Vec<&V> {
        self.children(v)
    }

    fn annotation(&self, v: &V) -> String {
        format!("(L{})", self.level.get(v).copied().unwrap_or(0))
    }
}

impl<V: Vertex + Display> RootedTree for DfsTree<V> {
    type Vertex = V;

    fn tree_root(&self) -> &V {
        &self.root
    }

    fn tree_children(&self, v: &V) -> Vec<&V> {
        self.children(v)
    }

    fn annotation(&self, v: &V) -> String {
        format!("(depth {})", self.depth.get(v).copied().unwrap_or(0))
    }
}

/// Draws a traversal tree with box-drawing connectors:
///
/// ```plain
/// [1] (L0)
/// ├── [2] (L1)
/// │   └── [4] (L2)
/// └── [3] (L1)
/// ```
pub struct TreeDisplay<'a, T, C> {
    tree: &'a T,
    palette: &'a C,
}

impl<'a, T: RootedTree, C: Palette> TreeDisplay<'a, T, C> {
    pub fn new(tree: &'a T, palette: &'a C) -> Self {
        Self { tree, palette }
    }
}

impl<'a, T: RootedTree, C: Palette> std::fmt::Display for TreeDisplay<'a, T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = self.palette;
        // (vertex, prefix of its line, connector)
        let mut stack = vec![(self.tree.tree_root(), String::new(), None)];
        while let Some((v, prefix, connector)) = stack.pop() {
            let child_prefix = match connector {
                None => {
                    write!(f, "{}", prefix)?;
                    prefix
                }
                Some(last) => {
                    let (glyph, extend) = if last {
                        ("└── ", "    ")
                    } else {
                        ("├── ", "│   ")
                    };
                    write!(f, "{}{}", prefix, p.paint(glyph, StyleHint::EdgeMarker, false))?;
                    format!("{}{}", prefix, extend)
                }
            };
            writeln!(
                f,
                "{} {}",
                p.paint(&format!("[{}]", v), StyleHint::Vertex, true),
                p.paint(&self.tree.annotation(v), StyleHint::Status, false)
            )?;
            let children = self.tree.tree_children(v);
            let n = children.len();
            for (i, c) in children.into_iter().enumerate().rev() {
                stack.push((c, child_prefix.clone(), Some(i + 1 == n)));
            }
        }
        Ok(())
    }
}

impl<V: Vertex + Display> BfsTree<V> {
    pub fn display_with<'a, C: Palette>(&'a self, palette: &'a C) -> TreeDisplay<'a, Self, C> {
        TreeDisplay::new(self, palette)
    }
}

impl<V: Vertex + Display> DfsTree<V> {
    pub fn display_with<'a, C: Palette>(&'a self, palette: &'a C) -> TreeDisplay<'a, Self, C> {
        TreeDisplay::new(self, palette)
    }
}

impl<V: Vertex + Display> std::fmt::Display for BfsTree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_with(&Plain))
    }
}

impl<V: Vertex + Display> std::fmt::Display for DfsTree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_with(&Plain))
    }
}

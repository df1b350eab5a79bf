//! Styling hooks for rendering graphs and traversal trees.
//!
//! Renderers never emit escape codes themselves. They hand every token to a
//! [Palette] together with a [StyleHint], so switching between [Plain] and
//! [Ansi] changes nothing but the decoration.

/// What a piece of rendered text stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleHint {
    Vertex,
    EdgeMarker,
    Weight,
    Status,
    Header,
}

pub trait Palette {
    fn paint(&self, text: &str, hint: StyleHint, bold: bool) -> String;
}

/// Passes text through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Palette for Plain {
    fn paint(&self, text: &str, _hint: StyleHint, _bold: bool) -> String {
        text.to_owned()
    }
}

/// ANSI terminal colors.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ansi;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

impl Ansi {
    fn color(hint: StyleHint) -> &'static str {
        match hint {
            StyleHint::Vertex => "\x1b[94m",
            StyleHint::EdgeMarker => "\x1b[92m",
            StyleHint::Weight => "\x1b[36m",
            StyleHint::Status => "\x1b[93m",
            StyleHint::Header => "\x1b[97m",
        }
    }
}

impl Palette for Ansi {
    fn paint(&self, text: &str, hint: StyleHint, bold: bool) -> String {
        let bold = if bold { BOLD } else { "" };
        format!("{}{}{}{}", Self::color(hint), bold, text, RESET)
    }
}

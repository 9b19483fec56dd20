//! Text rendering of a grid with a path drawn over it.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use hopgrid_core::{Point, Terrain, TerrainGrid};

/// Characters used when drawing a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub start: char,
    pub goal: char,
    pub path: char,
    /// Placed between two cells of a row.
    pub separator: &'static str,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            start: 'S',
            goal: 'G',
            path: '*',
            separator: " ",
        }
    }
}

/// What a single rendered cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Start,
    Goal,
    OnPath,
    Raw(Terrain),
}

impl Mark {
    fn glyph(self, style: &RenderStyle) -> char {
        match self {
            Self::Start => style.start,
            Self::Goal => style.goal,
            Self::OnPath => style.path,
            Self::Raw(t) => t.as_char(),
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Start => Color::Green,
            Self::Goal => Color::Red,
            Self::OnPath => Color::Yellow,
            Self::Raw(Terrain::Blocked) => Color::DarkGrey,
            Self::Raw(Terrain::ShortWall) => Color::Magenta,
            Self::Raw(Terrain::Open) => Color::Reset,
        }
    }
}

/// Classifies cells against a path: first point is the start, last point
/// the goal, everything in between is on the path.
struct Marker<'a> {
    path: &'a [Point],
    interior: HashSet<Point>,
}

impl<'a> Marker<'a> {
    fn new(path: &'a [Point]) -> Self {
        let interior = match path.len() {
            0..=2 => HashSet::new(),
            n => path[1..n - 1].iter().copied().collect(),
        };
        Self { path, interior }
    }

    fn mark(&self, p: Point, t: Terrain) -> Mark {
        if self.path.first() == Some(&p) {
            Mark::Start
        } else if self.path.last() == Some(&p) {
            Mark::Goal
        } else if self.interior.contains(&p) {
            Mark::OnPath
        } else {
            Mark::Raw(t)
        }
    }
}

/// Render `grid` with `path` drawn over it, one line per row.
///
/// An empty path renders the raw terrain codes.
pub fn render(grid: &TerrainGrid, path: &[Point], style: &RenderStyle) -> String {
    let marker = Marker::new(path);
    let mut out = String::with_capacity(grid.bounds().len() * (1 + style.separator.len()));
    for (p, t) in grid.iter() {
        if p.col > 0 {
            out.push_str(style.separator);
        }
        out.push(marker.mark(p, t).glyph(style));
        if p.col == grid.cols() - 1 {
            out.push('\n');
        }
    }
    out
}

/// Like [`render`], but colored with terminal escape sequences.
pub fn write_colored<W: Write>(
    w: &mut W,
    grid: &TerrainGrid,
    path: &[Point],
    style: &RenderStyle,
) -> io::Result<()> {
    let marker = Marker::new(path);
    for (p, t) in grid.iter() {
        if p.col > 0 {
            queue!(w, Print(style.separator))?;
        }
        let mark = marker.mark(p, t);
        queue!(
            w,
            SetForegroundColor(mark.color()),
            Print(mark.glyph(style)),
            ResetColor
        )?;
        if p.col == grid.cols() - 1 {
            queue!(w, Print('\n'))?;
        }
    }
    w.flush()
}

/// Format a path as `[(r, c), (r, c), ...]`.
pub fn format_path(path: &[Point]) -> String {
    let mut out = String::from("[");
    for (i, p) in path.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{p}");
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_grid;

    fn p(row: i32, col: i32) -> Point {
        Point::new(row, col)
    }

    #[test]
    fn marks_start_goal_and_path() {
        let g = parse_grid("000\n010\n002").unwrap();
        let path = [p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)];
        let out = render(&g, &path, &RenderStyle::default());
        assert_eq!(out, "S * *\n0 1 *\n0 0 G\n");
    }

    #[test]
    fn empty_path_renders_raw_grid() {
        let g = parse_grid("012\n210").unwrap();
        assert_eq!(render(&g, &[], &RenderStyle::default()), "0 1 2\n2 1 0\n");
    }

    #[test]
    fn single_point_path_is_start() {
        let g = parse_grid("00").unwrap();
        assert_eq!(render(&g, &[p(0, 1)], &RenderStyle::default()), "0 S\n");
    }

    #[test]
    fn custom_style() {
        let g = parse_grid("00\n00").unwrap();
        let style = RenderStyle {
            start: 'A',
            goal: 'B',
            path: '.',
            separator: "",
        };
        let out = render(&g, &[p(0, 0), p(1, 0), p(1, 1)], &style);
        assert_eq!(out, "A0\n.B\n");
    }

    #[test]
    fn colored_output_keeps_glyphs() {
        let g = parse_grid("02\n00").unwrap();
        let mut buf = Vec::new();
        write_colored(&mut buf, &g, &[p(0, 0), p(1, 0), p(1, 1)], &RenderStyle::default())
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('\x1b'));
        for glyph in ['S', '2', '*', 'G'] {
            assert!(text.contains(glyph));
        }
        assert_eq!(text.matches('\n').count(), 2);
    }

    #[test]
    fn path_formatting() {
        assert_eq!(format_path(&[]), "[]");
        assert_eq!(format_path(&[p(0, 2), p(1, 2)]), "[(0, 2), (1, 2)]");
    }
}

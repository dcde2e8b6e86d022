//! SVG path data building, serialization and parsing.
//!
//! Outlines are written with a restricted command subset:
//!
//! - `M` - Move to
//! - `L` - Line to
//! - `Q` - Quadratic Bézier curve
//! - `A` - Circular arc (`rx == ry`, no axis rotation)
//! - `Z` - Close path
//!
//! All commands are absolute. Every number is written with a fixed count of
//! decimals ([`DEFAULT_PRECISION`] unless asked otherwise), so coordinates
//! that happen to equal an input scalar look the same as computed ones.
//!
//! # Example
//!
//! ```
//! use flapcut::io::PathBuilder;
//! use flapcut::Point2;
//!
//! let path = PathBuilder::new()
//!     .move_to(Point2::new(0.0, 0.0))
//!     .line_to(Point2::new(100.0, 0.0))
//!     .line_to(Point2::new(100.0, 60.0))
//!     .close()
//!     .build();
//!
//! assert_eq!(path.to_closed_svg(), "M 0.0000 0.0000 L 100.0000 0.0000 L 100.0000 60.0000 Z");
//! assert_eq!(path.to_open_svg(), "M 0.0000 0.0000 L 100.0000 0.0000 L 100.0000 60.0000");
//! ```

use crate::fillet::{ArcFlags, RoundedCorner};
use crate::primitives::Point2;
use num_traits::Float;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of decimals used by [`Path::to_closed_svg`] and [`Path::to_open_svg`].
pub const DEFAULT_PRECISION: usize = 4;

/// Error type for path data parsing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathParseError {
    /// Unexpected character encountered.
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
    /// Expected a number but found something else.
    #[error("expected number at position {0}")]
    ExpectedNumber(usize),
    /// Invalid number format.
    #[error("invalid number '{0}' at position {1}")]
    InvalidNumber(String, usize),
    /// Command outside the supported subset.
    #[error("unsupported command '{0}' at position {1}")]
    UnsupportedCommand(char, usize),
    /// Arc with unequal radii, a rotation, or a flag other than 0/1.
    #[error("invalid arc parameters at position {0}")]
    InvalidArcParams(usize),
}

/// One drawing command of an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment<F> {
    /// Start a new contour at the point.
    MoveTo(Point2<F>),
    /// Straight line to the point.
    LineTo(Point2<F>),
    /// Quadratic Bézier curve.
    QuadraticTo { control: Point2<F>, end: Point2<F> },
    /// Circular arc of the given radius.
    ArcTo {
        radius: F,
        flags: ArcFlags,
        end: Point2<F>,
    },
    /// Close the current contour.
    Close,
}

impl<F: Float + fmt::Display> PathSegment<F> {
    fn write_svg(&self, out: &mut String, precision: usize) {
        let num = |v: F| format_number(v, precision);
        match *self {
            PathSegment::MoveTo(p) => {
                out.push_str(&format!("M {} {}", num(p.x), num(p.y)));
            }
            PathSegment::LineTo(p) => {
                out.push_str(&format!("L {} {}", num(p.x), num(p.y)));
            }
            PathSegment::QuadraticTo { control, end } => {
                out.push_str(&format!(
                    "Q {} {} {} {}",
                    num(control.x),
                    num(control.y),
                    num(end.x),
                    num(end.y)
                ));
            }
            PathSegment::ArcTo { radius, flags, end } => {
                let r = num(radius);
                out.push_str(&format!(
                    "A {} {} 0 {} {} {} {}",
                    r,
                    r,
                    u8::from(flags.large_arc),
                    u8::from(flags.sweep),
                    num(end.x),
                    num(end.y)
                ));
            }
            PathSegment::Close => out.push('Z'),
        }
    }
}

/// An ordered list of path segments, possibly holding several contours.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<F> {
    segments: Vec<PathSegment<F>>,
}

impl<F> Default for Path<F> {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
        }
    }
}

impl<F: Float> Path<F> {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a path from segments in drawing order.
    pub fn from_segments(segments: Vec<PathSegment<F>>) -> Self {
        Self { segments }
    }

    /// The segments in drawing order.
    pub fn segments(&self) -> &[PathSegment<F>] {
        &self.segments
    }

    /// Returns true if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Number of contours (one per move-to).
    pub fn contour_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, PathSegment::MoveTo(_)))
            .count()
    }

    /// Appends the contours of `other` after this path's contours.
    pub fn append(&mut self, other: Path<F>) {
        self.segments.extend(other.segments);
    }

    /// Every end point, control point included, in drawing order.
    pub fn points(&self) -> Vec<Point2<F>> {
        let mut points = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => points.push(p),
                PathSegment::QuadraticTo { control, end } => {
                    points.push(control);
                    points.push(end);
                }
                PathSegment::ArcTo { end, .. } => points.push(end),
                PathSegment::Close => {}
            }
        }
        points
    }
}

impl<F: Float + fmt::Display> Path<F> {
    /// Serializes the path ending with an explicit close command.
    ///
    /// A `Z` is appended unless the last segment already is a close.
    pub fn to_closed_svg(&self) -> String {
        self.to_svg(DEFAULT_PRECISION, true)
    }

    /// Serializes the path without its trailing close command.
    ///
    /// The result equals [`Path::to_closed_svg`] with the final `" Z"`
    /// removed; close commands between contours are kept.
    pub fn to_open_svg(&self) -> String {
        self.to_svg(DEFAULT_PRECISION, false)
    }

    /// Serializes the path with `precision` decimals per number.
    pub fn to_svg(&self, precision: usize, closed: bool) -> String {
        let body = match self.segments.last() {
            Some(PathSegment::Close) => &self.segments[..self.segments.len() - 1],
            Some(_) => &self.segments[..],
            None => return String::new(),
        };

        let mut result = String::new();
        for (i, segment) in body.iter().enumerate() {
            if i > 0 {
                result.push(' ');
            }
            segment.write_svg(&mut result, precision);
        }

        if closed {
            if !result.is_empty() {
                result.push(' ');
            }
            result.push('Z');
        }

        result
    }
}

impl<F: Float + fmt::Display> fmt::Display for Path<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_closed_svg())
    }
}

/// Accumulates path segments in call order.
///
/// A move-to starts a new contour; several contours build one compound path.
#[derive(Debug, Clone)]
pub struct PathBuilder<F> {
    segments: Vec<PathSegment<F>>,
}

impl<F: Float> Default for PathBuilder<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> PathBuilder<F> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Starts a new contour at `to`.
    pub fn move_to(mut self, to: Point2<F>) -> Self {
        self.segments.push(PathSegment::MoveTo(to));
        self
    }

    /// Draws a straight line to `to`.
    pub fn line_to(mut self, to: Point2<F>) -> Self {
        self.segments.push(PathSegment::LineTo(to));
        self
    }

    /// Draws a quadratic curve through `control` to `to`.
    pub fn quad_to(mut self, control: Point2<F>, to: Point2<F>) -> Self {
        self.segments.push(PathSegment::QuadraticTo { control, end: to });
        self
    }

    /// Draws a circular arc of `radius` to `to`.
    pub fn arc_to(mut self, radius: F, flags: ArcFlags, to: Point2<F>) -> Self {
        self.segments.push(PathSegment::ArcTo {
            radius,
            flags,
            end: to,
        });
        self
    }

    /// Draws into a rounded corner: a line to the first tangent point, then
    /// the fillet arc to the second one.
    ///
    /// A collapsed fillet only draws the line, which then ends on the corner.
    pub fn rounded_corner(self, corner: &RoundedCorner<F>) -> Self {
        let fillet = &corner.fillet;
        let builder = self.line_to(fillet.tangent1);
        if fillet.is_collapsed() {
            builder
        } else {
            builder.arc_to(fillet.radius, corner.flags, fillet.tangent2)
        }
    }

    /// Adds a closed polygon contour through `points`.
    pub fn polygon(self, points: &[Point2<F>]) -> Self {
        let Some((first, rest)) = points.split_first() else {
            return self;
        };
        rest.iter()
            .fold(self.move_to(*first), |b, p| b.line_to(*p))
            .close()
    }

    /// Closes the current contour.
    pub fn close(mut self) -> Self {
        self.segments.push(PathSegment::Close);
        self
    }

    /// Finishes the path.
    pub fn build(self) -> Path<F> {
        Path {
            segments: self.segments,
        }
    }
}

/// Parses path data written with the `M`, `L`, `Q`, `A`, `Z` subset.
///
/// Commas and whitespace separate numbers. Repeated coordinate groups after
/// a command repeat it (after `M` they are lines).
///
/// # Example
///
/// ```
/// use flapcut::io::parse_path;
///
/// let path = parse_path::<f64>("M 0 0 L 10 0 A 2 2 0 0 1 12 2 Z").unwrap();
/// assert_eq!(path.len(), 4);
/// ```
pub fn parse_path<F: Float + FromStr>(s: &str) -> Result<Path<F>, PathParseError> {
    PathParser::new(s).parse()
}

/// Formats a number with `precision` decimals, rendering negative zero
/// (including values that round to zero) without a sign.
pub fn format_number<F: Float + fmt::Display>(value: F, precision: usize) -> String {
    let text = format!("{:.*}", precision, value);
    match text.strip_prefix('-') {
        Some(unsigned) if unsigned.chars().all(|c| c == '0' || c == '.') => unsigned.to_string(),
        _ => text,
    }
}

// ============================================================================
// Internal implementation
// ============================================================================

/// Path data parser.
struct PathParser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> PathParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
        }
    }

    fn parse<F: Float + FromStr>(&mut self) -> Result<Path<F>, PathParseError> {
        let mut segments = Vec::new();

        while let Some(&(pos, c)) = self.chars.peek() {
            if c.is_whitespace() || c == ',' {
                self.chars.next();
                continue;
            }

            if c.is_alphabetic() {
                self.parse_command(&mut segments)?;
            } else {
                return Err(PathParseError::UnexpectedChar(c, pos));
            }
        }

        Ok(Path::from_segments(segments))
    }

    fn parse_command<F: Float + FromStr>(
        &mut self,
        segments: &mut Vec<PathSegment<F>>,
    ) -> Result<(), PathParseError> {
        let Some((pos, cmd_char)) = self.chars.next() else {
            return Ok(());
        };

        match cmd_char {
            'M' => {
                let p = self.parse_point()?;
                segments.push(PathSegment::MoveTo(p));
                // Subsequent pairs are implicit LineTo
                while self.has_number() {
                    let p = self.parse_point()?;
                    segments.push(PathSegment::LineTo(p));
                }
            }
            'L' => loop {
                let p = self.parse_point()?;
                segments.push(PathSegment::LineTo(p));
                if !self.has_number() {
                    break;
                }
            },
            'Q' => loop {
                let control = self.parse_point()?;
                let end = self.parse_point()?;
                segments.push(PathSegment::QuadraticTo { control, end });
                if !self.has_number() {
                    break;
                }
            },
            'A' => loop {
                let segment = self.parse_arc(pos)?;
                segments.push(segment);
                if !self.has_number() {
                    break;
                }
            },
            'Z' | 'z' => segments.push(PathSegment::Close),
            _ => return Err(PathParseError::UnsupportedCommand(cmd_char, pos)),
        }

        Ok(())
    }

    fn parse_arc<F: Float + FromStr>(&mut self, pos: usize) -> Result<PathSegment<F>, PathParseError> {
        let rx: F = self.parse_number()?;
        let ry: F = self.parse_number()?;
        let rotation: F = self.parse_number()?;
        let large_arc = self.parse_flag(pos)?;
        let sweep = self.parse_flag(pos)?;
        let end = self.parse_point()?;

        if rx != ry || rotation != F::zero() {
            return Err(PathParseError::InvalidArcParams(pos));
        }

        Ok(PathSegment::ArcTo {
            radius: rx,
            flags: ArcFlags::new(large_arc, sweep),
            end,
        })
    }

    fn skip_whitespace_and_commas(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() || c == ',' {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn has_number(&mut self) -> bool {
        self.skip_whitespace_and_commas();
        matches!(
            self.chars.peek(),
            Some(&(_, c)) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.'
        )
    }

    fn parse_point<F: Float + FromStr>(&mut self) -> Result<Point2<F>, PathParseError> {
        let x = self.parse_number()?;
        let y = self.parse_number()?;
        Ok(Point2::new(x, y))
    }

    fn parse_flag(&mut self, pos: usize) -> Result<bool, PathParseError> {
        self.skip_whitespace_and_commas();
        match self.chars.next() {
            Some((_, '0')) => Ok(false),
            Some((_, '1')) => Ok(true),
            _ => Err(PathParseError::InvalidArcParams(pos)),
        }
    }

    fn parse_number<F: Float + FromStr>(&mut self) -> Result<F, PathParseError> {
        self.skip_whitespace_and_commas();

        let start = match self.chars.peek() {
            Some(&(pos, _)) => pos,
            None => return Err(PathParseError::ExpectedNumber(self.input.len())),
        };

        let mut end = start;
        let mut seen_dot = false;
        let mut seen_exp = false;
        let mut prev: Option<char> = None;

        while let Some(&(pos, c)) = self.chars.peek() {
            let accept = match c {
                '0'..='9' => true,
                '-' | '+' => pos == start || matches!(prev, Some('e') | Some('E')),
                '.' if !seen_dot && !seen_exp => {
                    seen_dot = true;
                    true
                }
                'e' | 'E' if !seen_exp && pos != start => {
                    seen_exp = true;
                    true
                }
                _ => false,
            };
            if !accept {
                break;
            }
            prev = Some(c);
            end = pos + c.len_utf8();
            self.chars.next();
        }

        if end == start {
            return Err(PathParseError::ExpectedNumber(start));
        }

        let text = &self.input[start..end];
        text.parse::<F>()
            .map_err(|_| PathParseError::InvalidNumber(text.to_string(), start))
    }
}

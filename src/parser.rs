//! Reading maze maps.
//!
//! A maze map is a drawing of the maze in ASCII. The characters '+', '-' and '|' are corners,
//! horizontal walls and vertical walls; spaces are open passage and a single 'S' marks the start
//! square. A maze `W` squares wide and `H` squares tall is drawn with `2H + 1` lines of `2W + 1`
//! characters:
//!
//! ```text
//! +-+-+-+-+-+
//! |     |   |
//! + +-+ + +-+
//! |S  |     |
//! +-+-+-+-+-+
//! ```
//!
//! Even lines (counting from 0 at the top) are wall lines with a '+' on every even column and a
//! '-' or ' ' between the corners. Odd lines are passage lines with a '|' or ' ' on every even
//! column and a square's interior on every odd column. The top line of the file is the north side
//! of the maze, while maze coordinates start at (0, 0) in the bottom left.

use std::fs;
use std::path::Path;
use std::str::{self, FromStr};

use log::debug;

use crate::coordinates::{Direction, Point};
use crate::errors::*;
use crate::maze::Maze;
use crate::units::{ColumnIndex, Height, LineIndex, Width};
use crate::walls::WallSet;

const CORNER: u8 = b'+';
const HORIZONTAL_WALL: u8 = b'-';
const VERTICAL_WALL: u8 = b'|';
const OPEN: u8 = b' ';
const START: u8 = b'S';

/// Read and parse the maze map file at `path`.
pub fn read_maze_file<P: AsRef<Path>>(path: P) -> Result<Maze> {

    let path = path.as_ref();
    let bytes = fs::read(path)
        .chain_err(|| ErrorKind::FileError(path.display().to_string()))?;

    let text = str::from_utf8(&bytes).map_err(|utf8_error| {
        let valid = &bytes[..utf8_error.valid_up_to()];
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        Error::from(ErrorKind::FormatError(line, String::from("text is not valid UTF-8")))
    })?;

    debug!("read {} bytes of maze map from {}", bytes.len(), path.display());
    parse_maze(text)
}

/// Parse the text of a maze map.
pub fn parse_maze(text: &str) -> Result<Maze> {

    let map = MapLines::new(text)?;
    map.check_glyphs()?;
    let start = map.find_start()?;

    let (Width(w), Height(h)) = (map.width, map.height);
    let mut walls = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            walls.push(map.square_walls(x, y));
        }
    }

    debug!("parsed {}x{} maze with start at {}", w, h, start);
    Ok(Maze::from_walls(map.width, map.height, walls, start))
}

impl FromStr for Maze {
    type Err = Error;

    fn from_str(text: &str) -> Result<Maze> {
        parse_maze(text)
    }
}

fn format_error(line: LineIndex, reason: String) -> Error {
    ErrorKind::FormatError(line.0 + 1, reason).into()
}

/// The lines of a maze map with a consistent rectangular shape.
#[derive(Debug)]
struct MapLines<'a> {
    lines: Vec<&'a [u8]>,
    width: Width,
    height: Height,
}

impl<'a> MapLines<'a> {

    fn new(text: &'a str) -> Result<MapLines<'a>> {

        let mut lines = text.lines().collect::<Vec<&str>>();
        while lines.last().map_or(false, |line| line.is_empty()) {
            lines.pop();
        }

        let lines_count = lines.len();
        if lines_count < 3 || lines_count % 2 == 0 {
            let last_line = LineIndex(lines_count.saturating_sub(1));
            return Err(format_error(last_line,
                                    format!("expected an odd number of lines, at least 3, found {}",
                                            lines_count)));
        }

        let mut byte_lines = Vec::with_capacity(lines_count);
        let expected_length = lines[0].chars().count();
        for (index, line) in lines.into_iter().enumerate() {

            if let Some(glyph) = line.chars().find(|c| !c.is_ascii()) {
                return Err(format_error(LineIndex(index),
                                        format!("unexpected non ASCII character '{}'", glyph)));
            }
            if line.len() != expected_length {
                return Err(format_error(LineIndex(index),
                                        format!("expected {} characters, found {}",
                                                expected_length,
                                                line.len())));
            }
            byte_lines.push(line.as_bytes());
        }

        if expected_length < 3 || expected_length % 2 == 0 {
            return Err(format_error(LineIndex(0),
                                    format!("expected an odd line length, at least 3, found {}",
                                            expected_length)));
        }

        Ok(MapLines {
            lines: byte_lines,
            width: Width((expected_length - 1) / 2),
            height: Height((lines_count - 1) / 2),
        })
    }

    #[inline]
    fn glyph(&self, line: LineIndex, column: ColumnIndex) -> u8 {
        self.lines[line.0][column.0]
    }

    #[inline]
    fn last_line(&self) -> LineIndex {
        LineIndex(self.lines.len() - 1)
    }

    /// Every glyph must be allowed at its position and the outer border must be unbroken.
    fn check_glyphs(&self) -> Result<()> {

        let LineIndex(last_line) = self.last_line();
        for (line_index, line) in self.lines.iter().enumerate() {

            let last_column = line.len() - 1;
            let is_wall_line = line_index % 2 == 0;
            let is_outer_line = line_index == 0 || line_index == last_line;

            for (column_index, &glyph) in line.iter().enumerate() {

                let is_even_column = column_index % 2 == 0;
                let is_outer_column = column_index == 0 || column_index == last_column;

                let expected: &[u8] = match (is_wall_line, is_even_column) {
                    (true, true) => &[CORNER],
                    (true, false) if is_outer_line => &[HORIZONTAL_WALL],
                    (true, false) => &[HORIZONTAL_WALL, OPEN],
                    (false, true) if is_outer_column => &[VERTICAL_WALL],
                    (false, true) => &[VERTICAL_WALL, OPEN],
                    (false, false) => &[OPEN, START],
                };

                if !expected.contains(&glyph) {
                    let expectation = expected.iter()
                        .map(|&b| format!("'{}'", b as char))
                        .collect::<Vec<_>>()
                        .join(" or ");
                    return Err(format_error(LineIndex(line_index),
                                            format!("unexpected '{}' at column {}, expected {}",
                                                    glyph as char,
                                                    column_index + 1,
                                                    expectation)));
                }
            }
        }

        Ok(())
    }

    /// The single square marked with an 'S'.
    fn find_start(&self) -> Result<Point> {

        let mut start: Option<(LineIndex, ColumnIndex)> = None;

        for line_index in (1..self.lines.len()).step_by(2) {
            let line = self.lines[line_index];
            for column_index in (1..line.len()).step_by(2) {

                if line[column_index] != START {
                    continue;
                }
                if let Some((LineIndex(first_line), ColumnIndex(first_column))) = start {
                    return Err(format_error(LineIndex(line_index),
                                            format!("second start square 'S' at column {}, \
                                                     the first is at line {} column {}",
                                                    column_index + 1,
                                                    first_line + 1,
                                                    first_column + 1)));
                }
                start = Some((LineIndex(line_index), ColumnIndex(column_index)));
            }
        }

        let (line, column) = start.ok_or_else(|| {
            format_error(self.last_line(), String::from("no start square 'S' found"))
        })?;
        Ok(self.square_at(line, column))
    }

    /// The maze coordinate of the square whose interior is at `line` and `column`.
    fn square_at(&self, line: LineIndex, column: ColumnIndex) -> Point {
        let Height(h) = self.height;
        let x = (column.0 - 1) / 2;
        let y = h - 1 - line.0 / 2;
        Point::new(x as i32, y as i32)
    }

    /// Line of the file holding the interior of maze row `y`.
    #[inline]
    fn passage_line(&self, y: usize) -> LineIndex {
        let Height(h) = self.height;
        LineIndex(2 * (h - 1 - y) + 1)
    }

    /// Each wall glyph is shared by the two squares either side of it, so both squares read their
    /// side of the wall from the same position.
    fn square_walls(&self, x: usize, y: usize) -> WallSet {

        let passage = self.passage_line(y);
        let north = LineIndex(passage.0 - 1);
        let south = LineIndex(passage.0 + 1);
        let (west_column, interior_column, east_column) =
            (ColumnIndex(2 * x), ColumnIndex(2 * x + 1), ColumnIndex(2 * x + 2));

        WallSet::empty()
            .with(Direction::North, self.glyph(north, interior_column) == HORIZONTAL_WALL)
            .with(Direction::East, self.glyph(passage, east_column) == VERTICAL_WALL)
            .with(Direction::South, self.glyph(south, interior_column) == HORIZONTAL_WALL)
            .with(Direction::West, self.glyph(passage, west_column) == VERTICAL_WALL)
    }
}

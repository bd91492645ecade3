//! **mazelib** reads ASCII maze maps into a grid of walled squares and answers the questions a
//! maze traversal asks of it: where to start, where the walls are and which squares it has
//! already marked.

pub mod coordinates;
pub mod errors;
pub mod marks;
pub mod maze;
pub mod maze_iterators;
pub mod pacing;
pub mod parser;
pub mod session;
pub mod units;
pub mod walls;
mod maze_displays;

//! Crate errors.
//!
//! `error_chain!` creates the Error, ErrorKind, ResultExt, and Result types. Result is a typedef of
//! std `Result` with the error type our own `Error`; `ResultExt` adds the `chain_err` method used to
//! attach a maze error kind to a lower level failure such as an io error.

use crate::coordinates::Point;
use error_chain::*;

error_chain! {

    errors {
        FileError(path: String) {
            description("maze file could not be read")
            display("maze file could not be read: '{}'", path)
        }
        FormatError(line: usize, reason: String) {
            description("malformed maze map")
            display("malformed maze map at line {}: {}", line, reason)
        }
        OutOfRange(point: Point) {
            description("point is outside the maze")
            display("point ({}, {}) is outside the maze", point.x, point.y)
        }
        UnloadedState {
            description("no maze loaded")
            display("no maze has been loaded")
        }
        InvalidPauseTime(seconds: f64) {
            description("invalid pause time")
            display("pause time must be a finite number of seconds >= 0, got {}", seconds)
        }
    }
}

#![feature(test)]
extern crate test;

use mazelib::parser::parse_maze;
use test::Bencher;

/// A maze map `w` squares wide and `h` tall with every inner wall present.
fn closed_map(w: usize, h: usize) -> String {
    let wall_line = format!("{}+\n", "+-".repeat(w));
    let passage_line = format!("{}|\n", "| ".repeat(w));
    let mut map = wall_line.clone();
    for row in 0..h {
        if row == h - 1 {
            map.push_str(&passage_line.replacen("| ", "|S", 1));
        } else {
            map.push_str(&passage_line);
        }
        map.push_str(&wall_line);
    }
    map
}

#[bench]
fn bench_parse_maze_11(b: &mut Bencher) {
    let map = closed_map(11, 11);
    b.iter(|| parse_maze(&map).unwrap());
}

#[bench]
fn bench_parse_maze_128(b: &mut Bencher) {
    let map = closed_map(128, 128);
    b.iter(|| parse_maze(&map).unwrap());
}

#[bench]
fn bench_parse_maze_500(b: &mut Bencher) {
    let map = closed_map(500, 500);
    b.iter(|| parse_maze(&map).unwrap());
}

#[bench]
fn bench_write_maze_128(b: &mut Bencher) {
    let maze = parse_maze(&closed_map(128, 128)).unwrap();
    b.iter(|| maze.to_string());
}

use log::info;
use sightline_core::{Board, Square};

// Ruy Lopez
const OPENING: [(&str, &str); 5] = [
    ("e2", "e4"),
    ("e7", "e5"),
    ("g1", "f3"),
    ("b8", "c6"),
    ("f1", "b5"),
];

fn main() {
    env_logger::init();

    let mut board = Board::starting_position();
    for (origin, target) in OPENING {
        let origin = Square::from_algebraic(origin).expect("opening squares are well-formed");
        let target = Square::from_algebraic(target).expect("opening squares are well-formed");
        if let Err(err) = board.move_piece(origin, target) {
            eprintln!("skipping {} -> {}: {}", origin, target, err);
        }
    }
    info!("opening played, {} half-moves", OPENING.len());

    println!("{}", board);
}

// Simple command-line application to inspect moves on the board
//
// Type `x,y` to list the moves of the piece on that square, or `x,y x,y` to move it.
// Set `RUST_LOG=raychess=trace` to see the library events.

use raychess::{board::PrettyStyle, Board, Coord, MoveError};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn parse_line(s: &str) -> Result<Vec<Coord>, raychess::types::CoordParseError> {
    s.split_whitespace().map(str::parse::<Coord>).collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut stdin = io::stdin().lock();
    let mut board = Board::initial();

    loop {
        println!("{}", board.pretty(PrettyStyle::Utf8));
        print!("> ");
        io::stdout().flush().unwrap();
        let mut s = String::new();
        if stdin.read_line(&mut s).unwrap() == 0 {
            break;
        }

        let coords = match parse_line(&s) {
            Ok(coords) => coords,
            Err(e) => {
                println!("Bad square: {}", e);
                continue;
            }
        };

        match coords[..] {
            [] => break,
            [src] => {
                let square = board.get(src);
                match square.resource_key() {
                    Some(key) => println!("{} on {}", key, src),
                    None => println!("{} is empty", src),
                }
                let moves: Vec<_> = board
                    .valid_moves_from(src)
                    .iter()
                    .map(|c| c.to_string())
                    .collect();
                println!("Moves: {}", moves.join(" "));
            }
            [src, dst] => match board.make_move(src, dst) {
                Ok(captured) => {
                    if let Some(key) = captured.resource_key() {
                        println!("Captured {}", key);
                    }
                }
                Err(e @ (MoveError::EmptySource(_) | MoveError::NotAllowed { .. })) => {
                    println!("Bad move: {}", e)
                }
                Err(e) => println!("Error: {}", e),
            },
            _ => println!("Expected one or two squares"),
        }
        println!();
    }
}

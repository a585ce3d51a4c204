use std::io::{stdin, BufRead};

use clap::arg;
use clap::command;
use clap::Command;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

use squire::game::fen::{from_fen, INITIAL_POSITION};
use squire::game::{ChessField, Game};
use squire::perft::perft_divide;

fn main() {
    let matches = command!()
        .propagate_version(true)
        .subcommand(Command::new("play").about("Play a game on the terminal"))
        .subcommand(
            Command::new("perft")
                .about("Run Perft test")
                .arg(
                    arg!(
                    -f --fen <FEN> "Board position"
                            )
                    .default_value(INITIAL_POSITION),
                )
                .arg(
                    arg!(
                    -x --depth <d> "depth"
                            )
                    .default_value("3")
                    .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(
                    -m --moves <moves> "List of moves"
                            )
                    .num_args(1..)
                    .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("moves")
                .about("List the legal moves of the piece on a square")
                .arg(
                    arg!(
                    -f --fen <FEN> "Board position"
                            )
                    .default_value(INITIAL_POSITION),
                )
                .arg(arg!(<SQUARE> "Square of the piece, like e2")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("play", _)) => {
            play();
        }
        Some(("perft", arg_matches)) => {
            let fen = arg_matches.get_one::<String>("fen").unwrap();
            let depth = arg_matches.get_one::<usize>("depth").unwrap();
            let moves = arg_matches
                .get_many::<String>("moves")
                .unwrap_or_default()
                .filter(|&v| !v.is_empty())
                .collect::<Vec<_>>();
            run_perft(fen, moves, (*depth) as u8);
        }
        Some(("moves", arg_matches)) => {
            let fen = arg_matches.get_one::<String>("fen").unwrap();
            let square = arg_matches.get_one::<String>("SQUARE").unwrap();
            list_moves(fen, square);
        }
        None => {
            play();
        }
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

fn play() {
    let mut game = Game::new();
    println!("{}", game.render_to_string());
    println!("{} to move. Enter moves like e2e4, or quit.", game.active_color());

    let stdin = stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };

        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }

        match parse_move(&line) {
            Some((from, to)) => match game.attempt_move(from, to) {
                Ok(_) => {
                    println!("{}", game.render_to_string());
                    if game.is_in_check(game.active_color()) {
                        println!("Check!");
                    }
                    println!("{} to move.", game.active_color());
                }
                Err(e) => println!("Illegal move: {}", e),
            },
            None => println!("Could not read '{}'. Enter moves like e2e4.", line),
        }
    }
}

fn parse_move(input: &str) -> Option<(ChessField, ChessField)> {
    if input.len() != 4 || !input.is_ascii() {
        return None;
    }
    Some((ChessField::parse(&input[0..2])?, ChessField::parse(&input[2..4])?))
}

#[derive(Tabled)]
struct PerftRow {
    mv: String,
    nodes: u64,
}

fn run_perft(fen: &str, moves: Vec<&String>, depth: u8) {
    println!("Perft test for {} moves {:?} with depth {}", fen, moves, depth);
    let mut game = from_fen(fen).expect("Invalid FEN string");
    for m in moves {
        let (from, to) = parse_move(m).unwrap_or_else(|| panic!("Invalid move: {}", m));
        if let Err(e) = game.attempt_move(from, to) {
            panic!("Invalid move {}: {}", m, e);
        }
    }

    let rows: Vec<PerftRow> = perft_divide(&game, depth)
        .into_iter()
        .map(|(mv, nodes)| PerftRow { mv, nodes })
        .collect();
    let num_nodes: u64 = rows.iter().map(|row| row.nodes).sum();

    println!("{}", Table::new(rows).with(Style::modern()));
    println!("\nNodes searched: {}", num_nodes);
}

fn list_moves(fen: &str, square: &str) {
    let game = from_fen(fen).expect("Invalid FEN string");
    let field = match ChessField::parse(square) {
        Some(field) => field,
        None => {
            println!("Invalid square: {}", square);
            return;
        }
    };

    let mut destinations: Vec<String> = game
        .legal_moves_from(field)
        .iter()
        .map(|mv| mv.to.as_algebraic())
        .collect();
    destinations.sort();

    if destinations.is_empty() {
        println!("No legal moves from {}", field);
    } else {
        println!("{}: {}", field, destinations.join(" "));
    }
}

use clap::Parser;
use rand::Rng as _;
use sapper_core::{Board, CellView, GameConfig, MinefieldGenerator, Pos, RandomMinefieldGenerator};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board width and height
    #[arg(long, default_value_t = 9)]
    size: u8,

    /// How many mines to bury
    #[arg(long, default_value_t = 10)]
    mines: u16,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = GameConfig::new((args.size, args.size), args.mines)?;
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("seed: {}", seed);

    let mut board = Board::new(RandomMinefieldGenerator::new(seed).generate(config));
    println!(
        "{}x{} board with {} mines. Enter `row col` to reveal a cell.",
        args.size, args.size, args.mines
    );

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print_board(&board, false);
        print!("Reveal (row col): ");
        io::stdout().flush()?;

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            // EOF, e.g. piped input ran out
            return Ok(());
        }
        let Some(pos) = parse_move(&line) else {
            println!("Please enter two numbers, e.g. `3 4`.");
            continue;
        };

        if board.reveal(pos).is_loss() {
            print_board(&board, true);
            println!("Game over! You hit a mine.");
            return Ok(());
        }
        if board.check_win() {
            print_board(&board, true);
            println!("Congratulations! You win.");
            return Ok(());
        }
    }
}

/// Parses a move as two whitespace-separated integers `row col`.
fn parse_move(line: &str) -> Option<Pos> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn print_board(board: &Board, disclose_mines: bool) {
    let view = board.view(disclose_mines);
    let (rows, cols) = board.size();

    print!("   ");
    for col in 0..cols {
        print!("{col} ");
    }
    println!();
    for row in 0..rows {
        print!("{row}  ");
        for col in 0..cols {
            let glyph = match view[[row as usize, col as usize]] {
                CellView::Covered => '#',
                CellView::Flagged => 'F',
                CellView::Mine => '*',
                CellView::Revealed(count) => (b'0' + count) as char,
            };
            print!("{glyph} ");
        }
        println!();
    }
}

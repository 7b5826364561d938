use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use wordhunt_solver::{generate_board, word_score, Board, Dictionary};

#[derive(Parser)]
#[command(name = "wordhunt-solve")]
#[command(about = "Find all words on a 4x4 word hunt board")]
struct Args {
    /// Wordlist with whitespace separated words
    #[arg(short, long, default_value = "wordlists/words.txt")]
    wordfile: String,

    /// Board as 16 letters, e.g. "stra enit oter sare"
    board: Option<String>,

    /// Generate the board from this seed instead
    #[arg(short, long)]
    seed: Option<u64>,

    /// Show at most this many words
    #[arg(short = 'n', long, default_value_t = 20)]
    top: usize,
}

fn run() -> Result<()> {
    let args = Args::parse();
    let t0 = Instant::now();
    let dictionary = Dictionary::from_file(&args.wordfile)?;
    println!("Create dictionary took {:?}: {}", t0.elapsed(), dictionary.trie());

    let board: Board = match (&args.board, args.seed) {
        (Some(board), _) => board.parse()?,
        (None, Some(seed)) => generate_board(seed).parse()?,
        (None, None) => generate_board(0).parse()?,
    };
    println!("{}\n", board);

    let t0 = Instant::now();
    let solution = dictionary.solve(&board);
    println!(
        "Found {} words, total score {} in {:?}",
        solution.len(),
        solution.total_score,
        t0.elapsed()
    );
    for word in solution.words.iter().take(args.top) {
        println!("{:-16} {:5}", word.to_uppercase(), word_score(word.len()));
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}

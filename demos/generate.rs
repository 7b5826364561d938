use anyhow::Result;
use std::env;
use std::time::Instant;
use wordhunt_solver::Dictionary;

const WORDFILE: &str = "wordlists/words.txt";

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(123);
    let min_score: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(5000);

    let dictionary = Dictionary::from_file(WORDFILE)?.with_max_attempts(10_000);
    let t0 = Instant::now();
    let (board, solution) = dictionary.generate_playable(seed, min_score)?;
    println!("Generate board took {:?}", t0.elapsed());
    println!("{}\n", board);
    println!("{} words, total score {}", solution.len(), solution.total_score);
    for (word, path) in dictionary.solve_paths(&board).into_iter().take(10) {
        println!("{:-16} {:?}", word, path);
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}

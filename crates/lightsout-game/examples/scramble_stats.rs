//! Example collecting minimum-press statistics over scrambled boards.
//!
//! Scrambles a board repeatedly and prints a histogram of the minimum
//! number of presses needed to solve each scramble. On boards with a
//! nontrivial null space (4x4, 5x5, 9x9) this shows how far below the
//! naive press-parity weight the quiet patterns pull the optimum.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example scramble_stats
//! ```
//!
//! Pick the board size and sample count:
//!
//! ```sh
//! cargo run --example scramble_stats -- --size 9 --samples 1000
//! ```
//!
//! Set `RUST_LOG=debug` to watch the scramble and minimization steps.

use std::process;

use clap::Parser;
use lightsout_core::BoardSize;
use lightsout_game::{GameMode, PuzzleState};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board side length.
    #[arg(long, value_name = "N", default_value_t = 5)]
    size: u8,

    /// Number of scrambles to sample.
    #[arg(long, value_name = "COUNT", default_value_t = 200)]
    samples: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let size = match BoardSize::new(args.size) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    if args.samples == 0 {
        eprintln!("--samples must be at least 1.");
        process::exit(1);
    }

    let mut game = PuzzleState::new(size, GameMode::Standard);
    let mut histogram = vec![0_usize; size.cell_count() + 1];
    for _ in 0..args.samples {
        if let Err(err) = game.scramble() {
            eprintln!("{err}");
            process::exit(1);
        }
        let min = game
            .min_press_count()
            .expect("standard mode always knows the minimum");
        histogram[min] += 1;
    }

    println!("Board: {size}x{size}");
    println!("Samples: {}", args.samples);
    println!();
    println!("Minimum presses:");
    for (count, &hits) in histogram.iter().enumerate() {
        if hits > 0 {
            println!("  {count:>3}: {hits}");
        }
    }

    let total: usize = histogram.iter().enumerate().map(|(c, &h)| c * h).sum();
    #[expect(clippy::cast_precision_loss)]
    let mean = total as f64 / args.samples as f64;
    println!();
    println!("Mean: {mean:.2}");
}

/// Inspecting and generating puzzle problems.
use super::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

use stplib::search::state::Board;
use stplib::utils;

impl Check {
    pub fn run(self) {
        let Check { path } = self;

        let mut problem = match PuzzleProblem::read_from_file(&path) {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Cannot read puzzle problem: {}", err),
        };
        let name = problem.name.take().unwrap_or_else(|| "-".to_string());
        println!("{}{}", "Problem Name:     ".bold(), name);

        let board = match parse_grid(&problem.grid) {
            Ok(board) => board,
            Err(err) => fatal_error!(1, "Invalid grid: {}", err),
        };

        println!("{}", board);

        println!(
            "{}{}",
            "Inversions:       ".bold(),
            utils::inversion_count(&board)
        );
        if utils::is_solvable(&board) {
            println!("{}{}", "Solvable:         ".bold(), "yes".green().bold());
        } else {
            println!("{}{}", "Solvable:         ".bold(), "no".red().bold());
        }
    }
}

impl Scramble {
    pub fn run(self) {
        let Scramble { steps, seed, json } = self;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = Board::scrambled(&mut rng, steps);

        if json {
            let problem = PuzzleProblem {
                name: Some(format!("scramble-{}", steps)),
                grid: format_grid(&board),
                max_depth: Some(steps),
                memory_limit: None,
            };
            let serialized = match serde_json::to_string_pretty(&problem) {
                Ok(s) => s,
                Err(e) => fatal_error!(1, "Error while serializing problem: {}", e),
            };
            println!("{}", serialized);
        } else {
            println!("{}", format_grid(&board));
        }
    }
}

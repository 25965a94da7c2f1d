use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

use stplib::io::*;
use stplib::SolveFailure;

mod list;
pub use list::*;

mod puzzle;
pub use puzzle::*;

mod run;
pub use run::*;

/// All CLI commands available in this binary.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run an experiment.
    #[command(alias = "r")]
    Run(Run),

    /// Solve a single puzzle problem.
    #[command(alias = "s")]
    Solve(Solve),

    /// Validate a puzzle problem and check whether it is solvable.
    #[command(alias = "c")]
    Check(Check),

    /// Generate a random solvable puzzle problem.
    Scramble(Scramble),

    /// Print the list of all explorer algorithms.
    ListAlgorithms,
}

#[derive(clap::Args, Debug)]
pub struct Run {
    /// Path to the experiment JSON or YAML file.
    path: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct Solve {
    /// Path to the JSON file containing the problem.
    path: PathBuf,
    /// Explorer class.
    #[arg(short, long, default_value = "BfsExplorer")]
    explorer: String,
    /// Maximum search depth in moves; overrides the problem file.
    #[arg(short, long)]
    max_depth: Option<usize>,
    /// Memory limit in bytes; overrides the problem file.
    #[arg(short = 'l', long)]
    memory_limit: Option<usize>,
    /// Print every board on the solution path.
    #[arg(short, long, default_value_t = false)]
    boards: bool,
    /// Print the solution as JSON (Hint: redirect stdout)
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

#[derive(clap::Args, Debug)]
pub struct Check {
    /// Path to the JSON file containing the problem.
    path: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct Scramble {
    /// Number of random blank moves away from the goal.
    #[arg(short, long, default_value_t = 40)]
    steps: usize,
    /// Seed for the random number generator.
    #[arg(long)]
    seed: Option<u64>,
    /// Print a problem JSON instead of a plain grid.
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

impl Command {
    pub fn run(self) {
        match self {
            Command::Run(args) => args.run(),
            Command::Solve(args) => args.run(),
            Command::Check(args) => args.run(),
            Command::Scramble(args) => args.run(),
            Command::ListAlgorithms => list_algorithms(),
        }
    }
}

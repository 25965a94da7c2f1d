use stplib::search::state::{Board, Move};
use stplib::search::{self, Solution, SolveStatus};
use stplib::utils;

/// Commands related to running experiments and solving problems.
use super::*;

pub const RESULTS_DIR: &str = "results";

fn print_status(status: SolveStatus) {
    match status {
        SolveStatus::Solved => {
            eprintln!("{}{}", "Status:           ".bold(), "Solved".green().bold())
        }
        SolveStatus::ExhaustedOrCutoff => eprintln!(
            "{}{}",
            "Status:           ".bold(),
            "Exhausted or cut off".yellow().bold()
        ),
    }
}

fn print_solution_stats(solution: &Solution) {
    print_status(solution.status);
    if let Some(depth) = solution.depth {
        eprintln!("{}{}", "Solution depth:   ".bold(), depth);
    }
    eprintln!("{}{}", "Expanded states:  ".bold(), solution.expanded);
    eprintln!("{}{}", "Visited states:   ".bold(), solution.visited);
    eprintln!("{}{}", "Max frontier:     ".bold(), solution.max_frontier);
    eprintln!(
        "{}{}",
        "Max memory usage: ".bold(),
        utils::fmt_bytes(solution.max_memory)
    );
    if let Some(rss) = utils::process_rss() {
        eprintln!("{}{}", "Process RSS:      ".bold(), utils::fmt_bytes(rss));
    }
    eprintln!("{}{:.4} s", "Search time:      ".bold(), solution.search_time);
    eprintln!("{}{:.4} s", "Total time:       ".bold(), solution.total_time);
}

fn print_solution_boards(start: &Board, moves: &[Move]) {
    let mut board = *start;
    eprintln!("{}", board);
    for &mv in moves {
        board = match board.apply(mv) {
            Ok(Some(next)) => next,
            _ => fatal_error!(2, "Solution replay failed at move {}", mv),
        };
        eprintln!("{}{}", "Move: ".bold(), mv);
        eprintln!("{}", board);
    }
}

impl Solve {
    pub fn run(self) {
        let Solve {
            path,
            explorer,
            max_depth,
            memory_limit,
            boards,
            json,
        } = self;

        let mut problem = match PuzzleProblem::read_from_file(&path) {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Cannot read puzzle problem: {}", err),
        };
        let name = problem.name.take().unwrap_or_else(|| "-".to_string());
        if let Some(v) = max_depth {
            problem.max_depth = Some(v);
        }
        if let Some(v) = memory_limit {
            problem.memory_limit = Some(v);
        }

        let (start, config) = match problem.prepare() {
            Ok(x) => x,
            Err(err) => fatal_error!(1, "Invalid grid: {}", err),
        };

        eprintln!("{}{}", "Problem Name:     ".bold(), name);
        eprintln!("{}{}", "Explorer:         ".bold(), explorer);
        let depth_limit = if config.max_depth == usize::MAX {
            "unlimited".to_string()
        } else {
            config.max_depth.to_string()
        };
        eprintln!("{}{}", "Depth limit:      ".bold(), depth_limit);
        if !utils::is_solvable(&start) {
            eprintln!(
                "{}",
                "This arrangement cannot reach the goal; the search can only exhaust.".yellow()
            );
        }

        eprintln!("{}", "Solving...".green().bold());

        let solution = match search::solve_custom(&start, &Board::GOAL, &config, &explorer) {
            Ok(s) => s,
            Err(err) => fatal_error!(1, "Cannot solve puzzle: {}", err),
        };

        print_solution_stats(&solution);

        if !solution.moves.is_empty() {
            let rendered: Vec<String> = solution.moves.iter().map(|mv| mv.to_string()).collect();
            eprintln!("{}{}", "Moves:            ".bold(), rendered.join(" "));
        }
        if boards && solution.status == SolveStatus::Solved {
            print_solution_boards(&start, &solution.moves);
        }
        if json {
            let serialized = match serde_json::to_string_pretty(&solution) {
                Ok(s) => s,
                Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
            };
            println!("{}", serialized);
        }
    }
}

fn print_benchmark_result(result: &Result<BenchmarkResult, SolveFailure>) {
    match result {
        Ok(result) => {
            print_status(result.status);
            if let Some(depth) = result.depth {
                eprintln!("{}{}", "Solution depth:   ".bold(), depth);
            }
            eprintln!("{}{}", "Expanded states:  ".bold(), result.expanded);
            eprintln!("{}{}", "Visited states:   ".bold(), result.visited);
            eprintln!(
                "{}{}",
                "Max memory usage: ".bold(),
                utils::fmt_bytes(result.max_memory)
            );
            eprintln!("{}{:.4} s", "Total time:       ".bold(), result.total_time);
        }
        Err(failure) => {
            eprintln!("{}", "Benchmark failed!".red().bold());
            eprintln!("{}", failure);
        }
    }
}

/// Run a single task in experiment.
fn run_experiment_task(
    problem: &PuzzleProblem,
    algorithm: &AlgorithmInfo,
    solutions_dir: Option<&PathBuf>,
    current: usize,
) -> serde_json::Value {
    eprintln!();
    eprintln!("{}{}", "Explorer:         ".bold(), algorithm.explorer);

    let solution = problem.solve_custom(&algorithm.explorer);
    let result = AlgorithmBenchmarkResult {
        algorithm: algorithm.clone(),
        result: match &solution {
            Ok(solution) => Ok(solution.get_benchmark_result()),
            Err(e) => Err(e.clone()),
        },
    };

    print_benchmark_result(&result.result);
    eprintln!();

    let mut result = match serde_json::to_value(&result) {
        Ok(s) => s,
        Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
    };
    let result_obj = result.as_object_mut().unwrap();

    if let Some(name) = &problem.name {
        result_obj.insert("name".to_string(), serde_json::Value::String(name.clone()));
    }

    // Save solution
    if let Ok(solution) = solution {
        if let Some(solutions_dir) = solutions_dir {
            let mut path = solutions_dir.clone();
            path.push(format!("{:03}.bin", current));
            let err = fs::save_solution(problem.clone(), solution, &path);
            if let Err(e) = err {
                log::error!("Failed to save solution {}: {}", current, e);
            } else {
                result_obj.insert(
                    "solution".to_string(),
                    serde_json::Value::String(path.to_string_lossy().to_string()),
                );
            }
        }
    }

    result
}

/// Run all tasks in experiment.
fn run_experiment(
    experiment: Experiment,
    solutions_dir: Option<&PathBuf>,
) -> Vec<serde_json::Value> {
    eprintln!(
        "{}{}\n",
        "Experiment Name:  ".bold(),
        experiment.name.as_deref().unwrap_or("-")
    );

    let mut current: usize = 1;
    let total_benchmarks: usize = experiment
        .tasks
        .iter()
        .map(|task| task.problems.len() * task.algorithms.len())
        .sum();

    let mut results: Vec<serde_json::Value> = Vec::new();

    for task in experiment.tasks.into_iter() {
        let ExperimentTask {
            problems,
            algorithms,
        } = task;
        for problem in problems {
            eprintln!(
                "{}{}",
                "Problem Name:     ".bold(),
                problem.name.as_deref().unwrap_or("-")
            );

            for algorithm in &algorithms {
                eprintln!(
                    "{}",
                    format!("Solving {}/{}...", current, total_benchmarks)
                        .green()
                        .bold()
                );

                results.push(run_experiment_task(
                    &problem,
                    algorithm,
                    solutions_dir,
                    current,
                ));

                current += 1;
            }
        }
    }

    results
}

impl Run {
    pub fn run(self) {
        let Run { path } = self;

        let mut results_path = match std::env::current_dir() {
            Ok(p) => p,
            Err(e) => fatal_error!(1, "Cannot open current working directory: {}", e),
        };

        results_path.push(RESULTS_DIR);
        if let Err(e) = std::fs::create_dir_all(&results_path) {
            fatal_error!(1, "Cannot create results directory: {e}");
        }
        results_path.push(match path.file_name() {
            Some(name) => name,
            None => fatal_error!(1, "Experiment path has no file name"),
        });
        results_path.set_extension("json");
        if results_path.exists() {
            fatal_error!(
                1,
                "Results file is present: {}",
                results_path.to_string_lossy()
            );
        }
        let results_path = results_path;

        let solutions_dir = results_path.with_extension("d");
        if let Err(e) = std::fs::create_dir_all(&solutions_dir) {
            fatal_error!(1, "Cannot create solutions directory: {e}");
        }

        let experiment = match read_experiment_from_file(&path) {
            Ok(s) => s,
            Err(err) => fatal_error!(1, "Cannot parse experiment: {}", err),
        };

        let results = run_experiment(experiment, Some(&solutions_dir));

        let serialized = match serde_json::to_string_pretty(&results) {
            Ok(s) => s,
            Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
        };

        // Save to file.
        let mut results_file = match std::fs::File::create(results_path) {
            Ok(f) => f,
            Err(e) => fatal_error!(1, "Cannot open results file: {}", e),
        };
        writeln!(&mut results_file, "{}", serialized).unwrap();

        eprintln!("{}", "Done!".green().bold());
    }
}

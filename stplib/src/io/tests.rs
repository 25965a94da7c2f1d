use super::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

const SCRAMBLED_GRID: &str =
    "2,11,0,4,5,6,1,3,9,12,8,19,13,7,10,18,17,14,15,20,16,21,22,23,24";

#[test]
fn parse_comma_separated_grid() {
    let board = parse_grid(SCRAMBLED_GRID).unwrap();
    assert_eq!(board.cells()[0], 2);
    assert_eq!(board.cells()[1], 11);
    assert_eq!(board.blank_index().unwrap(), 2);
    assert_eq!(board.cells()[24], 24);
}

#[test]
fn parse_whitespace_separated_grid() {
    let text = "1 2 3 4 5\n6 7 8 9 10\n11 12 13 14 15\n16 17 18 19 20\n21 22 23 24 0\n";
    assert_eq!(parse_grid(text).unwrap(), Board::GOAL);
}

#[test]
fn rejects_wrong_count() {
    let text = (0..24).map(|v| v.to_string()).collect::<Vec<_>>().join(" ");
    assert_eq!(parse_grid(&text), Err(GridError::WrongCount(24)));

    assert_eq!(parse_grid(""), Err(GridError::WrongCount(0)));
}

#[test]
fn rejects_out_of_range() {
    let mut values: Vec<String> = (0..25).map(|v| v.to_string()).collect();
    values[7] = "25".to_string();
    assert_eq!(
        parse_grid(&values.join(" ")),
        Err(GridError::OutOfRange("25".to_string()))
    );

    values[7] = "-1".to_string();
    assert_eq!(
        parse_grid(&values.join(" ")),
        Err(GridError::OutOfRange("-1".to_string()))
    );

    values[7] = "x".to_string();
    assert_eq!(
        parse_grid(&values.join(" ")),
        Err(GridError::OutOfRange("x".to_string()))
    );
}

#[test]
fn rejects_duplicates() {
    let mut values: Vec<String> = (0..25).map(|v| v.to_string()).collect();
    values[4] = "3".to_string();
    assert_eq!(
        parse_grid(&values.join(" ")),
        Err(GridError::DuplicateValue(3))
    );
}

#[test]
fn grid_round_trip() {
    assert_eq!(parse_grid(&format_grid(&Board::GOAL)).unwrap(), Board::GOAL);

    let mut rng = StdRng::seed_from_u64(7);
    let board = Board::scrambled(&mut rng, 50);
    assert_eq!(parse_grid(&format_grid(&board)).unwrap(), board);
}

#[test]
fn grid_error_serialization() {
    let serialized = serde_json::to_value(GridError::WrongCount(24)).unwrap();
    assert_eq!(serialized["type"], "WrongCount");
    assert_eq!(serialized["content"], 24);

    let serialized = serde_json::to_value(GridError::DuplicateValue(3)).unwrap();
    assert_eq!(serialized["type"], "DuplicateValue");
}

#[test]
fn problem_from_json() {
    let data = r#"
        {
            "name": "two moves",
            "grid": "1 2 3 4 5 6 7 8 9 10 11 12 13 14 0 16 17 18 19 15 21 22 23 24 20",
            "maxDepth": 10,
            "memoryLimit": 1073741824
        }"#;

    let problem: PuzzleProblem = serde_json::from_str(data).unwrap();
    assert_eq!(problem.name.as_deref(), Some("two moves"));

    let (board, config) = problem.prepare().unwrap();
    assert_eq!(board.blank_index().unwrap(), 14);
    assert_eq!(config.max_depth, 10);
    assert_eq!(config.max_memory, 1073741824);
}

#[test]
fn problem_limits_are_optional() {
    let data = r#"{ "name": null, "grid": "0" }"#;
    let problem: PuzzleProblem = serde_json::from_str(data).unwrap();
    assert_eq!(problem.prepare(), Err(GridError::WrongCount(1)));

    let failure = problem.solve_bfs().unwrap_err();
    assert!(matches!(failure, SolveFailure::BadInput(_)));
}

#[test]
fn experiment_from_json() {
    let data = r#"
        {
            "name": "cutoff sweep",
            "tasks": [
                {
                    "problems": [
                        { "name": "a", "grid": "g", "maxDepth": 5, "memoryLimit": null }
                    ],
                    "algorithms": [
                        { "explorer": "BfsExplorer" },
                        { "explorer": "DfsExplorer" }
                    ]
                }
            ]
        }"#;

    let experiment: Experiment = serde_json::from_str(data).unwrap();
    assert_eq!(experiment.name.as_deref(), Some("cutoff sweep"));
    assert_eq!(experiment.tasks.len(), 1);
    assert_eq!(experiment.tasks[0].problems.len(), 1);
    assert_eq!(experiment.tasks[0].algorithms.len(), 2);
    assert_eq!(experiment.tasks[0].algorithms[0].explorer, "BfsExplorer");
}

#[test]
fn experiment_from_yaml() {
    let data = r#"
name: cutoff sweep
tasks:
  - problems:
      - name: a
        grid: g
        maxDepth: 5
    algorithms:
      - explorer: BfsExplorer
"#;

    let experiment: Experiment = serde_yaml::from_str(data).unwrap();
    assert_eq!(experiment.name.as_deref(), Some("cutoff sweep"));
    assert_eq!(experiment.tasks[0].problems[0].max_depth, Some(5));
}

#[test]
fn solution_file_round_trip() {
    let problem = PuzzleProblem {
        name: Some("trivial".to_string()),
        grid: format_grid(&Board::GOAL),
        max_depth: Some(0),
        memory_limit: None,
    };
    let solution = problem.solve_bfs().unwrap();

    let path = std::env::temp_dir().join("stplib_solution_round_trip.bin");
    fs::save_solution(problem.clone(), solution.clone(), &path).unwrap();
    let (loaded_problem, loaded_solution) = fs::load_solution(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded_problem, problem);
    assert_eq!(loaded_solution.status, solution.status);
    assert_eq!(loaded_solution.depth, solution.depth);
    assert_eq!(loaded_solution.moves, solution.moves);
    assert_eq!(loaded_solution.visited, solution.visited);
}

#[test]
fn sanitized_names_are_safe() {
    assert_eq!(fs::sanitize_name("plain"), "plain");
    assert!(!fs::sanitize_name("a/b: c").contains('/'));
}

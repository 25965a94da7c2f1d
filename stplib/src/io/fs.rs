//! Filesystem interactions for saving and loading solutions.

use super::*;

/// Content of a saved solution file.
#[derive(Serialize, Deserialize, Debug)]
struct SaveFile {
    problem: PuzzleProblem,
    solution: search::Solution,
}

/// Sanitize a problem name for use as a file name.
pub fn sanitize_name(name: &str) -> String {
    sanitize_filename::sanitize(name)
}

/// Save a solved puzzle together with its problem to the given path in
/// binary format.
pub fn save_solution(
    problem: PuzzleProblem,
    solution: search::Solution,
    path: &Path,
) -> Result<(), String> {
    let file_content = SaveFile { problem, solution };
    let encoded: Vec<u8> = match bincode::serialize(&file_content) {
        Ok(encoded) => encoded,
        Err(e) => return Err(format!("Cannot serialize solution: {}", e)),
    };
    if let Err(e) = std::fs::write(path, encoded) {
        return Err(format!("Cannot write solution file: {}", e));
    }
    log::info!("Saved solution: {}", path.display());
    Ok(())
}

/// Load a previously saved solution.
pub fn load_solution(path: &Path) -> Result<(PuzzleProblem, search::Solution), String> {
    let encoded = match std::fs::read(path) {
        Ok(encoded) => encoded,
        Err(e) => return Err(format!("Cannot read solution file: {}", e)),
    };
    let decoded: SaveFile = match bincode::deserialize(&encoded[..]) {
        Ok(decoded) => decoded,
        Err(e) => return Err(format!("Cannot parse solution file: {}", e)),
    };
    Ok((decoded.problem, decoded.solution))
}

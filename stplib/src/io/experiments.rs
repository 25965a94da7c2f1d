use super::*;

use serde::Serializer;

/// Identifies an algorithm variation used to solve a puzzle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmInfo {
    /// Explorer class.
    pub explorer: String,
}

pub fn serialize_benchmark_result<S>(
    result: &Result<BenchmarkResult, SolveFailure>,
    s: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    use serde::ser::SerializeMap;
    match result {
        Ok(result) => {
            let mut ser = s.serialize_map(Some(1))?;
            ser.serialize_entry("success", result)?;
            ser.end()
        }
        Err(failure) => {
            let mut ser = s.serialize_map(Some(2))?;
            ser.serialize_entry("error", failure)?;
            ser.serialize_entry("description", format!("{}", failure).as_str())?;
            ser.end()
        }
    }
}

/// Result of solving one problem with one algorithm.
#[derive(Serialize, Debug)]
pub struct AlgorithmBenchmarkResult {
    pub algorithm: AlgorithmInfo,
    #[serde(serialize_with = "serialize_benchmark_result")]
    pub result: Result<BenchmarkResult, SolveFailure>,
}

/// A batch of problems to be solved with a set of algorithms.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ExperimentTask {
    pub problems: Vec<PuzzleProblem>,
    pub algorithms: Vec<AlgorithmInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Experiment {
    pub name: Option<String>,
    pub tasks: Vec<ExperimentTask>,
}

/// Reads an experiment from a JSON or YAML file, chosen by extension.
pub fn read_experiment_from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Experiment> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let experiment = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?,
        _ => serde_json::from_str(&content)?,
    };
    Ok(experiment)
}

/// Printing available algorithm variations.
use super::*;

pub fn list_algorithms() {
    let result = stplib::search::all_algorithms();
    let serialized = match serde_json::to_string_pretty(&result) {
        Ok(s) => s,
        Err(e) => fatal_error!(1, "Error while serializing results: {}", e),
    };
    println!("{}", serialized);
}

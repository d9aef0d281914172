use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable or does not hold a json object
pub fn check_readable_json_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The snapshot file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("Could not read '{file}': {e}"))?;
    let json: Value =
        serde_json::from_str(&contents).map_err(|e| format!("'{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(path)
}

/// Expected shape: `{ "course": { "holes": [...] }, "tournament": { "id": <int>, ... } }`
///
/// # Errors
///
/// Will return `Err` if either top-level key is missing or not an object
fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(obj) = json.as_object() else {
        return Err("The snapshot is not a json object.".to_string());
    };
    for key in ["course", "tournament"] {
        if !obj.get(key).is_some_and(Value::is_object) {
            return Err(format!(
                "The snapshot key {key} is missing or not an object."
            ));
        }
    }
    if !json["tournament"]["id"].is_number() {
        return Err("The snapshot key tournament.id is not a number.".to_string());
    }
    Ok(())
}

/// # Errors
///
/// Will return `Err` if the value is not a positive integer
pub fn check_page_size(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("Page size '{value}' must be a positive integer.")),
    }
}

/// # Errors
///
/// Will return `Err` if the value is not a round number of at least 1
pub fn check_round(value: &str) -> Result<i32, String> {
    match value.parse::<i32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("Round '{value}' must be 1 or greater.")),
    }
}

/// # Errors
///
/// Will return `Err` if the value is not a positive whole or half number
pub fn check_total_points(value: &str) -> Result<f64, String> {
    match value.parse::<f64>() {
        Ok(n) if n > 0.0 && (n * 2.0).fract() == 0.0 => Ok(n),
        _ => Err(format!(
            "Total points '{value}' must be a positive multiple of 0.5."
        )),
    }
}

//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, XiphosArgs};
use crate::error::Result;

/// One keyword occurrence found while scanning.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchRecord {
    pub file: Option<String>,
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub pattern: u32,
    pub keyword: String,
}

/// Statistics describing a compiled keyword set.
#[derive(Debug, Serialize, Deserialize)]
pub struct AutomatonStats {
    pub keywords: usize,
    pub states: usize,
    pub terminal_states: usize,
    pub transitions: usize,
    pub max_depth: usize,
}

/// Format one matching line in grep style.
pub fn format_matching_line(file: Option<&str>, line_number: Option<usize>, line: &str) -> String {
    match (file, line_number) {
        (Some(file), Some(number)) => format!("{file}:{number}:{line}"),
        (Some(file), None) => format!("{file}:{line}"),
        (None, Some(number)) => format!("{number}:{line}"),
        (None, None) => line.to_string(),
    }
}

/// Print one matching line in grep style.
pub fn print_matching_line(file: Option<&str>, line_number: Option<usize>, line: &str) {
    let formatted = format_matching_line(file, line_number, line);
    println!("{formatted}");
}

/// Print one occurrence as a JSON record.
pub fn print_match_record(record: &MatchRecord, args: &XiphosArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };

    println!("{json}");
    Ok(())
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &XiphosArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &XiphosArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match &value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let formatted_val = format_value(val);
                println!("{key}: {formatted_val}");
            }
        }
        _ => {
            let formatted_value = format_value(&value);
            println!("{formatted_value}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &XiphosArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_matching_line() {
        assert_eq!(
            format_matching_line(Some("input.txt"), Some(3), "she sells"),
            "input.txt:3:she sells"
        );
        assert_eq!(
            format_matching_line(Some("input.txt"), None, "she sells"),
            "input.txt:she sells"
        );
        assert_eq!(
            format_matching_line(None, Some(3), "she sells"),
            "3:she sells"
        );
        assert_eq!(format_matching_line(None, None, "she sells"), "she sells");
    }

    #[test]
    fn test_match_record_serialization() {
        let record = MatchRecord {
            file: Some("input.txt".to_string()),
            line: 2,
            start: 2,
            end: 4,
            pattern: 1,
            keyword: "she".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["file"], "input.txt");
        assert_eq!(json["line"], 2);
        assert_eq!(json["start"], 2);
        assert_eq!(json["end"], 4);
        assert_eq!(json["pattern"], 1);
        assert_eq!(json["keyword"], "she");
    }

    #[test]
    fn test_automaton_stats_serialization() {
        let stats = AutomatonStats {
            keywords: 4,
            states: 10,
            terminal_states: 4,
            transitions: 9,
            max_depth: 4,
        };

        let json = serde_json::to_string(&stats).unwrap();
        let parsed: AutomatonStats = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.keywords, 4);
        assert_eq!(parsed.max_depth, 4);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(
            format_value(&serde_json::Value::String("test".to_string())),
            "test"
        );
        assert_eq!(
            format_value(&serde_json::Value::Number(serde_json::Number::from(42))),
            "42"
        );
        assert_eq!(format_value(&serde_json::Value::Bool(false)), "false");
        assert_eq!(format_value(&serde_json::Value::Null), "null");
    }
}

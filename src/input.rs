//! Interactive prompts for the grid size and the importance ranking.
//!
//! Reads from any `BufRead` and prompts on any `Write`, so the binary passes
//! stdin/stdout and tests pass byte slices. Bad numbers are fatal, there is no re-prompt.
//! A blank location name is simply asked for again.

use std::io::{BufRead, Write};

use log::debug;

use crate::errors::RouteError;
use crate::importance::{ImportanceMap, parse_weight};
use crate::town::cell_count;

/// Entering this instead of a location name ends the ranking (any case)
pub const DONE_SENTINEL: &str = "done";


/// Print a prompt and read one trimmed line, None at end of input
fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>, RouteError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Ask for the side length of the town
pub fn read_grid_size<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<usize, RouteError> {
    let line = prompt_line(input, output, "Enter town grid size (e.g., 5 for 5x5): ")?.unwrap_or_default();

    match line.parse::<usize>() {
        Ok(size) if cell_count(size).is_ok() => Ok(size),
        _ => Err(RouteError::InvalidGridSize(line)),
    }
}

/// Ask for location/weight pairs until the sentinel or end of input
pub fn read_importance<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<ImportanceMap, RouteError> {
    writeln!(output, "Enter the importance of each location (higher is more important).")?;

    let mut importance = ImportanceMap::new();
    loop {
        let Some(location) = prompt_line(input, output, "Enter location name (or 'done' to finish): ")? else {
            break;
        };
        if location.eq_ignore_ascii_case(DONE_SENTINEL) {
            break;
        }
        // blank line, ask again
        if location.is_empty() {
            continue;
        }

        let value = prompt_line(input, output, &format!("Enter importance weight for {location}: "))?.unwrap_or_default();
        let weight = parse_weight(&location, &value)?;
        importance.insert(&location, weight)?;
        debug!("importance {location:?} = {weight}");
    }

    Ok(importance)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_grid_size() {
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(read_grid_size(&mut " 5\n".as_bytes(), &mut out).unwrap(), 5);
        assert!(String::from_utf8(out).unwrap().starts_with("Enter town grid size"));
    }

    #[test]
    fn test_read_grid_size_rejects_bad_input() {
        for bad in ["0\n", "-3\n", "five\n", "2.5\n", "", "5000000000\n"] {
            let result = read_grid_size(&mut bad.as_bytes(), &mut std::io::sink());
            assert!(matches!(result, Err(RouteError::InvalidGridSize(_))), "{bad:?} accepted");
        }
    }

    #[test]
    fn test_read_importance_until_done() {
        let script = "School\n3\nHospital\n9.5\nDONE\nPark\n1\n";
        let importance = read_importance(&mut script.as_bytes(), &mut std::io::sink()).unwrap();

        assert_eq!(importance.len(), 2);
        assert_eq!(importance.weight("School"), 3.0);
        assert_eq!(importance.weight("Hospital"), 9.5);
        assert_eq!(importance.most_important(), Some(("Hospital", 9.5)));
    }

    #[test]
    fn test_read_importance_end_of_input_finishes() {
        let importance = read_importance(&mut "Mall\n2\n".as_bytes(), &mut std::io::sink()).unwrap();
        assert_eq!(importance.weight("Mall"), 2.0);

        let empty = read_importance(&mut "".as_bytes(), &mut std::io::sink()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_read_importance_skips_blank_names() {
        let script = "\n   \nPark\n2\n\ndone\n";
        let importance = read_importance(&mut script.as_bytes(), &mut std::io::sink()).unwrap();

        assert_eq!(importance.len(), 1);
        assert_eq!(importance.weight("Park"), 2.0);
    }

    #[test]
    fn test_read_importance_bad_weight_is_fatal() {
        let result = read_importance(&mut "Mall\nvery\n".as_bytes(), &mut std::io::sink());
        assert_eq!(
            result,
            Err(RouteError::InvalidWeight { label: "Mall".to_string(), value: "very".to_string() })
        );
    }

    #[test]
    fn test_read_importance_prompts_by_name() {
        let mut out: Vec<u8> = Vec::new();
        read_importance(&mut "Library\n4\ndone\n".as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Enter importance weight for Library: "));
    }
}

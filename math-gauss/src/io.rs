//! Plain-text system files
//!
//! A system file holds whitespace-separated numbers, one equation per line.
//! Every non-blank line but the last is a row of `A`; the last non-blank line
//! is `b`:
//!
//! ```text
//! 1 2 3
//! 0 1 4
//! 5 6 0
//! 14 10 32
//! ```

use ndarray::Array1;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while reading a system file
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No numeric lines at all
    #[error("system file is empty")]
    Empty,

    /// A token is not a floating-point number
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber {
        /// 1-based line number
        line: usize,
        /// Offending token
        token: String,
    },

    /// A matrix row does not have one entry per row of the matrix
    #[error("line {line}: expected {expected} coefficients, got {got}")]
    RaggedRow {
        /// 1-based line number
        line: usize,
        /// Number of matrix rows
        expected: usize,
        /// Entries found on the line
        got: usize,
    },

    /// The right-hand side length does not match the matrix
    #[error("right-hand side has {got} entries, expected {expected}")]
    RhsLength {
        /// Number of matrix rows
        expected: usize,
        /// Entries found on the last line
        got: usize,
    },
}

/// Coefficient rows and right-hand side read from a system file
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSystem {
    /// Rows of `A`
    pub rows: Vec<Vec<f64>>,
    /// Right-hand side `b`
    pub rhs: Vec<f64>,
}

impl LoadedSystem {
    /// System dimension
    pub fn dim(&self) -> usize {
        self.rhs.len()
    }
}

/// Read a system from a file
pub fn load_system<P: AsRef<Path>>(path: P) -> Result<LoadedSystem, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    parse_system(&content)
}

/// Parse a system from text, enforcing a square matrix and a matching `b`
pub fn parse_system(content: &str) -> Result<LoadedSystem, LoadError> {
    let mut lines = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let values = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| LoadError::InvalidNumber {
                    line: idx + 1,
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        lines.push((idx + 1, values));
    }

    let (_, rhs) = lines.pop().ok_or(LoadError::Empty)?;
    let n = lines.len();

    if let Some((line, row)) = lines.iter().find(|(_, row)| row.len() != n) {
        return Err(LoadError::RaggedRow {
            line: *line,
            expected: n,
            got: row.len(),
        });
    }
    if rhs.len() != n {
        return Err(LoadError::RhsLength {
            expected: n,
            got: rhs.len(),
        });
    }

    let rows = lines.into_iter().map(|(_, row)| row).collect();
    Ok(LoadedSystem { rows, rhs })
}

/// Format a solution with six decimals, space separated
pub fn format_solution(x: &Array1<f64>) -> String {
    x.iter()
        .map(|v| format!("{v:.6}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_parse_system() {
        let text = "1 2 3\n0 1 4\n5 6 0\n14 10 32\n";

        let system = parse_system(text).expect("valid system");

        assert_eq!(system.dim(), 3);
        assert_eq!(system.rows[2], vec![5.0, 6.0, 0.0]);
        assert_eq!(system.rhs, vec![14.0, 10.0, 32.0]);
    }

    #[test]
    fn test_parse_skips_blank_lines_and_extra_spaces() {
        let text = "\n  2.5\t-1e-3 \n\n 4 1\n\n3 -2\n   \n";

        let system = parse_system(text).expect("valid system");

        assert_eq!(system.rows, vec![vec![2.5, -1e-3], vec![4.0, 1.0]]);
        assert_eq!(system.rhs, vec![3.0, -2.0]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_system(""), Err(LoadError::Empty)));
        assert!(matches!(parse_system(" \n\n"), Err(LoadError::Empty)));
    }

    #[test]
    fn test_parse_invalid_number() {
        let err = parse_system("1 2\n3 x\n1 1").unwrap_err();
        match err {
            LoadError::InvalidNumber { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_ragged_row() {
        let err = parse_system("1 2\n\n3 4 5\n1 1").unwrap_err();
        assert!(matches!(
            err,
            LoadError::RaggedRow {
                line: 3,
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn test_parse_rhs_length() {
        let err = parse_system("1 0\n0 1\n1 2 3").unwrap_err();
        assert!(matches!(
            err,
            LoadError::RhsLength {
                expected: 2,
                got: 3
            }
        ));
    }

    #[test]
    fn test_single_line_is_rhs_without_matrix() {
        // one line means a 0x0 matrix, so a non-empty b is inconsistent
        assert!(matches!(
            parse_system("5"),
            Err(LoadError::RhsLength {
                expected: 0,
                got: 1
            })
        ));
    }

    #[test]
    fn test_load_system_from_file() {
        let path =
            std::env::temp_dir().join(format!("math-gauss-system-{}.txt", std::process::id()));
        fs::write(&path, "5\n10\n").expect("temp file writable");

        let system = load_system(&path).expect("valid file");
        let _ = fs::remove_file(&path);

        assert_eq!(system.rows, vec![vec![5.0]]);
        assert_eq!(system.rhs, vec![10.0]);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("math-gauss-missing-system.txt");
        assert!(matches!(load_system(&path), Err(LoadError::Io(_))));
    }

    #[test]
    fn test_format_solution() {
        assert_eq!(format_solution(&array![4.0, 2.0, -2.5]), "4.000000 2.000000 -2.500000");
        assert_eq!(format_solution(&array![1.0 / 3.0]), "0.333333");
        assert_eq!(format_solution(&Array1::zeros(0)), "");
    }
}

//! Point-file reading and reordered output writing.
//!
//! The input format follows the common scan-export convention: one point
//! per line, comma- or whitespace-separated, coordinates preceded by an
//! optional label (`label,X,Y,Z` or `X,Y,Z`). Blank lines and `#` comments
//! are skipped. The original text of every point line is retained so the
//! output can reorder the file verbatim instead of reformatting it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use pathforge::{PathForgeError, Point, PointSet, Tour};

/// Errors from reading a point file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: expected {expected} coordinates with an optional label, found {found} fields")]
    WrongFieldCount {
        path: String,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{path}:{line}: invalid coordinate '{value}'")]
    InvalidCoordinate {
        path: String,
        line: usize,
        value: String,
    },

    #[error("no points found in {path}")]
    Empty { path: String },

    #[error(transparent)]
    Domain(#[from] PathForgeError),
}

/// A parsed input file: the validated point set plus the raw text of each
/// point line, index-aligned with it.
#[derive(Debug)]
pub struct ParsedInput {
    pub points: PointSet,
    pub raw_lines: Vec<String>,
}

/// Reads a point file with `dims` coordinates per line.
///
/// # Errors
///
/// Line-numbered errors for malformed lines, `Empty` when no point line
/// survives, and domain errors if the set fails validation.
pub fn read_points(path: &Path, dims: usize) -> Result<ParsedInput, ParseError> {
    let shown = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|source| ParseError::Read {
        path: shown.clone(),
        source,
    })?;

    let mut points = Vec::new();
    let mut raw_lines = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let tokens: Vec<&str> = if trimmed.contains(',') {
            trimmed.split(',').map(str::trim).collect()
        } else {
            trimmed.split_whitespace().collect()
        };

        let (label, coord_tokens) = if tokens.len() == dims + 1 {
            (tokens[0], &tokens[1..])
        } else if tokens.len() == dims {
            ("", &tokens[..])
        } else {
            return Err(ParseError::WrongFieldCount {
                path: shown,
                line: index + 1,
                expected: dims,
                found: tokens.len(),
            });
        };

        let mut coords = Vec::with_capacity(dims);
        for token in coord_tokens {
            let value: f64 = token.parse().map_err(|_| ParseError::InvalidCoordinate {
                path: shown.clone(),
                line: index + 1,
                value: token.to_string(),
            })?;
            coords.push(value);
        }

        points.push(Point::labeled(label, coords));
        raw_lines.push(line.to_string());
    }

    if points.is_empty() {
        return Err(ParseError::Empty { path: shown });
    }

    Ok(ParsedInput {
        points: PointSet::new(points)?,
        raw_lines,
    })
}

/// Writes the points in tour order as `label,X,Y[,Z]` lines, omitting the
/// label field for unlabeled points.
pub fn write_points(path: &Path, points: &PointSet, tour: &Tour) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for &idx in tour {
        let point = &points[idx];
        if let Some(label) = point.label() {
            write!(out, "{label},")?;
        }
        let coords: Vec<String> = point.coords().iter().map(f64::to_string).collect();
        writeln!(out, "{}", coords.join(","))?;
    }
    out.flush()
}

/// Writes the original input lines in tour order, byte for byte.
///
/// Pure index indirection: whatever formatting, spacing, or extra fields
/// the source file had survive the reordering untouched.
pub fn write_raw_lines(path: &Path, raw_lines: &[String], tour: &Tour) -> std::io::Result<()> {
    debug_assert_eq!(raw_lines.len(), tour.len());
    let mut out = BufWriter::new(File::create(path)?);
    for &idx in tour {
        writeln!(out, "{}", raw_lines[idx])?;
    }
    out.flush()
}

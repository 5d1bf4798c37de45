//! Association table loading utilities
//!
//! Reads `subject,object` CSV files. Blank lines and `#` comments are skipped.

use super::PairTable;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load an association table from a CSV file
///
/// Malformed lines are logged and skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use olympiika::associations::loader::load_from_file;
///
/// let table = load_from_file("data/associations.csv").unwrap();
/// println!("Loaded {} pairs", table.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<PairTable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let table = PairTable::new(parse_pairs(&content));
    debug!("Loaded {} pairs from {}", table.len(), path.display());
    Ok(table)
}

/// Parse CSV text into pairs
///
/// # Examples
/// ```
/// use olympiika::associations::loader::parse_pairs;
///
/// let pairs = parse_pairs("# header\nморе,волна\n\nлес, гриб\n");
/// assert_eq!(pairs, [("море", "волна"), ("лес", "гриб")]);
/// ```
#[must_use]
pub fn parse_pairs(content: &str) -> Vec<(&str, &str)> {
    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match trimmed.split_once(',') {
                Some((subject, object)) if !object.contains(',') => {
                    Some((subject.trim(), object.trim()))
                }
                _ => {
                    warn!("Skipping malformed association line {}: {trimmed}", line_no + 1);
                    None
                }
            }
        })
        .collect()
}

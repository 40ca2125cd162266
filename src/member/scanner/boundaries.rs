use log::{debug, warn};

use crate::member::types::{BraceMode, FooterLocation};
use super::braces::find_block_end;

/// Find the index just past the constructor whose signature appears literally in a line.
///
/// Only the first line containing `signature` is considered. Returns `None`
/// when the signature is absent or the constructor's braces never close.
pub fn locate_constructor_end(lines: &[String], signature: &str, mode: BraceMode) -> Option<usize> {
    let Some(start) = lines.iter().position(|line| line.contains(signature)) else {
        debug!("Constructor signature not found: {}", signature);
        return None;
    };

    match find_block_end(lines, start, mode) {
        Some(end) => {
            debug!("Constructor spans lines {}..={}", start, end);
            Some(end + 1)
        }
        None => {
            warn!("Constructor at line {} never closes its braces", start);
            None
        }
    }
}

/// Find the closing brace of the class, as distinct from the enclosing namespace.
///
/// Scans backward for a `}` line directly followed by another `}` line, after
/// `constructor_end`. Falls back to the last line when no such pair exists.
pub fn locate_class_footer(lines: &[String], constructor_end: usize) -> FooterLocation {
    let last = lines.len().saturating_sub(1);

    (constructor_end + 1..last)
        .rev()
        .find(|&i| lines[i].trim() == "}" && lines[i + 1].trim() == "}")
        .map(FooterLocation::Paired)
        .unwrap_or(FooterLocation::LastLine(last))
}

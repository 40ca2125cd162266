use log::{debug, trace, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::member::types::{AccessModifier, BraceMode, MethodRecord, ScanResult};
use super::braces::find_block_end;

// Access modifier, optional `static`, a return type, then the identifier before `(`
static METHOD_DECLARATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(public|private|internal|protected)(\s+static)?\s+.*\s+(\w+)\s*\(").unwrap()
});

/// The parts of a declaration line captured by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub access: AccessModifier,
    pub is_static: bool,
    pub name: String,
}

/// Finds method declarations and their bodies by brace counting
#[derive(Debug, Clone)]
pub struct MethodParser {
    /// Brace counting strategy used for method bodies
    brace_mode: BraceMode,
}

impl MethodParser {
    pub fn new(brace_mode: BraceMode) -> Self {
        Self { brace_mode }
    }

    /// Match a single line against the declaration pattern
    pub fn match_declaration(&self, line: &str) -> Option<MethodDeclaration> {
        let cap = METHOD_DECLARATION_RE.captures(line)?;
        let access = cap[1].parse().ok()?;

        Some(MethodDeclaration {
            access,
            is_static: cap.get(2).is_some(),
            name: cap[3].to_string(),
        })
    }

    /// Scan `lines` for methods, returning them in first-seen order.
    ///
    /// Indices in the returned records are relative to `lines`. A declaration
    /// whose braces never close is left out of `methods` and scanning resumes
    /// on the following line.
    pub fn find_method_boundaries(&self, lines: &[String]) -> ScanResult {
        let mut result = ScanResult::default();
        let mut i = 0;

        while i < lines.len() {
            let Some(declaration) = self.match_declaration(&lines[i]) else {
                i += 1;
                continue;
            };

            match find_block_end(lines, i, self.brace_mode) {
                Some(end) => {
                    trace!("Method {} spans lines {}..={}", declaration.name, i, end);
                    result.methods.push(MethodRecord {
                        access: declaration.access,
                        is_static: declaration.is_static,
                        name: declaration.name,
                        start: i,
                        end,
                        lines: lines[i..=end].to_vec(),
                    });
                    i = end + 1;
                }
                None => {
                    warn!("Braces of {} declared at line {} never close; skipping it", declaration.name, i);
                    result.unclosed.push(i);
                    i += 1;
                }
            }
        }

        debug!("Found {} methods in {} lines", result.methods.len(), lines.len());
        result
    }
}

use anyhow::Result;
use log::{debug, info, warn};

use crate::member::scanner::MemberScanner;
use crate::member::types::{
    FileSections, LineEnding, ReorderOptions, ReorderOutcome, ReorderedFile,
};
use crate::utils::file_utils;
use super::reassembler;
use super::stats::ReorderStats;

/// Printed when the constructor boundary cannot be found
pub const CONSTRUCTOR_NOT_FOUND_MESSAGE: &str = "Could not find constructor end";

/// Printed after the file has been rewritten
pub const SUCCESS_MESSAGE: &str = "File reordered successfully";

/// Printed after a dry run
pub const DRY_RUN_MESSAGE: &str = "Dry run: file left unchanged";

/// Member reorderer responsible for rewriting a file in canonical member order
#[derive(Debug)]
pub struct MemberReorderer {
    /// Configuration options for the run
    options: ReorderOptions,

    /// Scanner for constructor, footer and methods
    scanner: MemberScanner,
}

impl MemberReorderer {
    /// Create a new reorderer with the given options
    pub fn new(options: ReorderOptions) -> Self {
        let scanner = MemberScanner::new(options.constructor_signature.clone(), options.brace_mode);
        Self { options, scanner }
    }

    pub fn options(&self) -> &ReorderOptions {
        &self.options
    }

    /// Transform lines without touching the filesystem
    pub fn reorder_lines(&self, lines: &[String]) -> ReorderOutcome {
        let Some(constructor_end) = self.scanner.locate_constructor_end(lines) else {
            return ReorderOutcome::ConstructorNotFound {
                signature: self.options.constructor_signature.clone(),
            };
        };

        let footer = self.scanner.locate_class_footer(lines, constructor_end);
        let sections = FileSections::new(constructor_end, footer.index());
        let body = sections.body(lines);
        debug!(
            "Header {} lines, body {} lines, footer {} lines",
            sections.header(lines).len(),
            body.len(),
            sections.footer(lines).len()
        );

        let scan = self.scanner.scan_methods(body);
        let line_ending = LineEnding::detect(lines);
        let output = reassembler::reassemble(
            sections.header(lines),
            &scan.methods,
            sections.footer(lines),
            &self.options.category_order,
            line_ending,
        );

        let mut stats = ReorderStats::collect(body, &scan, &self.options.category_order, footer);
        stats.input_lines = lines.len();
        stats.output_lines = output.len();
        log_warnings(&stats, footer.index());

        ReorderOutcome::Reordered(ReorderedFile {
            lines: output,
            sections,
            footer,
            line_ending,
            stats,
        })
    }

    /// Read the configured file and compute its reordered form without writing it
    pub fn load_and_reorder(&self) -> Result<ReorderOutcome> {
        let path = &self.options.input_path;
        info!("Reordering members of {}", path.display());

        let lines = file_utils::read_lines(path)?;
        let outcome = self.reorder_lines(&lines);

        if let ReorderOutcome::ConstructorNotFound { signature } = &outcome {
            warn!("Constructor '{}' not found in {}; file left unchanged", signature, path.display());
        }
        Ok(outcome)
    }

    /// Overwrite the configured file with a reordered result, unless this is a dry run
    pub fn write(&self, file: &ReorderedFile) -> Result<()> {
        let path = &self.options.input_path;
        if self.options.dry_run {
            info!("Dry run: {} lines computed, {} not written", file.lines.len(), path.display());
            return Ok(());
        }

        file_utils::write_lines(path, &file.lines)?;
        info!("Rewrote {} ({} -> {} lines)", path.display(), file.stats.input_lines, file.stats.output_lines);
        Ok(())
    }

    /// Read, reorder and write back in one step
    pub fn run(&self) -> Result<ReorderOutcome> {
        let outcome = self.load_and_reorder()?;
        if let ReorderOutcome::Reordered(file) = &outcome {
            self.write(file)?;
        }
        Ok(outcome)
    }
}

fn log_warnings(stats: &ReorderStats, class_end: usize) {
    for method in &stats.excluded_methods {
        warn!("Dropping {} method {}: its access modifier is not in the category order", method.access, method.name);
    }
    if stats.unclosed_declarations > 0 {
        warn!("{} method declarations never closed their braces and were dropped", stats.unclosed_declarations);
    }
    if stats.dropped_lines > 0 {
        warn!("{} non-blank body lines outside any method were dropped", stats.dropped_lines);
    }
    if stats.footer_fallback {
        warn!("No class/namespace closing pair found; treating line {} as the class end", class_end);
    }
}

use crate::member::types::{AccessModifier, FooterLocation, MethodRecord, ScanResult};

/// A method left out of the output because its category is not emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedMethod {
    pub access: AccessModifier,
    pub name: String,
}

/// Statistics for a reorder run
#[derive(Debug, Default, Clone)]
pub struct ReorderStats {
    /// Methods written per category, in category order
    pub category_counts: Vec<(AccessModifier, usize)>,

    /// Methods found but not written
    pub excluded_methods: Vec<ExcludedMethod>,

    /// Declarations whose braces never closed
    pub unclosed_declarations: usize,

    /// Non-blank body lines outside every method, which are not written
    pub dropped_lines: usize,

    /// Whether the class end fell back to the last line
    pub footer_fallback: bool,

    /// Lines read
    pub input_lines: usize,

    /// Lines produced
    pub output_lines: usize,
}

impl ReorderStats {
    /// Collect statistics for a scanned body
    pub fn collect(
        body: &[String],
        scan: &ScanResult,
        category_order: &[AccessModifier],
        footer: FooterLocation,
    ) -> Self {
        let category_counts = category_order.iter()
            .map(|&access| (access, scan.methods.iter().filter(|m| m.access == access).count()))
            .collect();

        let excluded_methods = scan.methods.iter()
            .filter(|m| !category_order.contains(&m.access))
            .map(|m| ExcludedMethod { access: m.access, name: m.name.clone() })
            .collect();

        Self {
            category_counts,
            excluded_methods,
            unclosed_declarations: scan.unclosed.len(),
            dropped_lines: count_dropped_lines(body, &scan.methods),
            footer_fallback: footer.is_fallback(),
            ..Self::default()
        }
    }

    /// Number of methods written for a category
    pub fn count_for(&self, access: AccessModifier) -> usize {
        self.category_counts.iter()
            .find(|(a, _)| *a == access)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    /// Number of methods written across all categories
    pub fn written_methods(&self) -> usize {
        self.category_counts.iter().map(|(_, count)| count).sum()
    }

    /// Whether anything from the body was lost or guessed at
    pub fn has_warnings(&self) -> bool {
        !self.excluded_methods.is_empty()
            || self.unclosed_declarations > 0
            || self.dropped_lines > 0
            || self.footer_fallback
    }

    /// e.g. `Found 3 public, 1 internal, 2 private methods`
    pub fn summary_line(&self) -> String {
        let counts = self.category_counts.iter()
            .map(|(access, count)| format!("{} {}", count, access))
            .collect::<Vec<_>>()
            .join(", ");
        format!("Found {} methods", counts)
    }
}

fn count_dropped_lines(body: &[String], methods: &[MethodRecord]) -> usize {
    body.iter()
        .enumerate()
        .filter(|(index, line)| !line.trim().is_empty() && !methods.iter().any(|m| m.covers(*index)))
        .count()
}

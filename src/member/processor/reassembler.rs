use log::trace;

use crate::member::types::{AccessModifier, LineEnding, MethodRecord};

/// Group methods by category, keeping scan order within each group.
///
/// Methods whose access modifier is not in `category_order` are left out.
pub fn group_methods<'a>(
    methods: &'a [MethodRecord],
    category_order: &[AccessModifier],
) -> Vec<(AccessModifier, Vec<&'a MethodRecord>)> {
    category_order.iter()
        .map(|&access| {
            let group: Vec<_> = methods.iter().filter(|m| m.access == access).collect();
            (access, group)
        })
        .collect()
}

/// Rebuild the file: header, a blank separator, each category's methods
/// followed by a blank line, then footer.
pub fn reassemble(
    header: &[String],
    methods: &[MethodRecord],
    footer: &[String],
    category_order: &[AccessModifier],
    line_ending: LineEnding,
) -> Vec<String> {
    let blank = line_ending.as_str();
    let method_lines: usize = methods.iter().map(|m| m.lines.len() + 1).sum();
    let mut output = Vec::with_capacity(header.len() + 1 + method_lines + footer.len());

    output.extend_from_slice(header);
    output.push(blank.to_string());

    for (access, group) in group_methods(methods, category_order) {
        trace!("Writing {} {} methods", group.len(), access);
        for method in group {
            output.extend(method.lines.iter().cloned());
            output.push(blank.to_string());
        }
    }

    output.extend_from_slice(footer);
    output
}

//! Text rendering for reports and compared values

use super::model::Report;
use crate::value::{DeepEq, Shape};
use deepeq_core_types::LineSeparator;

/// Render every record of a report, one per line, in discovery order
///
/// No separator follows the last line. An empty report renders as the empty
/// string.
pub fn render_report(report: &Report, separator: LineSeparator) -> String {
    let lines: Vec<String> = report.mismatches().iter().map(|m| m.message()).collect();
    lines.join(separator.as_str())
}

/// Render a value for inclusion in a mismatch record
///
/// Leaves use their own rendering, absent values render as `null`, element
/// containers as `[a, b]` and records as `TypeName { field: value }`.
pub fn describe(value: &dyn DeepEq) -> String {
    match value.shape() {
        Shape::Absent => "null".to_string(),
        Shape::Leaf(leaf) => leaf.render(),
        Shape::Array(items) | Shape::Sequence(items) | Shape::Unordered(items) => {
            let rendered: Vec<String> = items.into_iter().map(describe).collect();
            format!("[{}]", rendered.join(", "))
        }
        Shape::Record(fields) => {
            let name = short_type_name(value.runtime_type_name());
            if fields.is_empty() {
                return name;
            }
            let rendered: Vec<String> = fields
                .iter()
                .map(|field| format!("{}: {}", field.name, describe(field.value)))
                .collect();
            format!("{} {{ {} }}", name, rendered.join(", "))
        }
    }
}

/// Strip the module path from the outermost type name, keeping generics
fn short_type_name(full: &str) -> String {
    let (head, generics) = match full.find('<') {
        Some(pos) => full.split_at(pos),
        None => (full, ""),
    };
    let base = head.rsplit("::").next().unwrap_or(head);
    format!("{}{}", base, generics)
}

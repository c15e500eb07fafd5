//! Line diff over pretty-printed values.

use std::fmt::Debug;

use similar::{ChangeTag, TextDiff};

use super::DiffGenerator;

/// Diffs the pretty `Debug` forms of two values line by line.
///
/// Output starts with a `--- expected` / `+++ actual` header; removed lines
/// are prefixed with `-`, added lines with `+`, unchanged lines with a space.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDiffGenerator;

impl DiffGenerator for TextDiffGenerator {
    fn diff(&self, actual: &dyn Debug, expected: &dyn Debug) -> String {
        let expected = format!("{expected:#?}");
        let actual = format!("{actual:#?}");
        let diff = TextDiff::from_lines(&expected, &actual);

        let mut output = String::from("--- expected\n+++ actual\n");
        for change in diff.iter_all_changes() {
            let sign = match change.tag() {
                ChangeTag::Delete => '-',
                ChangeTag::Insert => '+',
                ChangeTag::Equal => ' ',
            };
            output.push(sign);
            output.push_str(change.value());
            if change.missing_newline() {
                output.push('\n');
            }
        }
        output.truncate(output.trim_end_matches('\n').len());
        output
    }
}

mod json;
mod markdown;

pub use json::JsonOutput;
pub use markdown::MarkdownOutput;

use crate::model::ConformanceReport;
use std::io::Write;

pub trait OutputFormatter {
    fn format<W: Write>(&self, report: &ConformanceReport, writer: &mut W) -> std::io::Result<()>;
}

use crate::model::{ConformanceReport, Layer, RuleKind};
use crate::output::OutputFormatter;
use std::io::Write;

pub struct MarkdownOutput {
    pub show_units: bool,
}

impl MarkdownOutput {
    pub fn new(show_units: bool) -> Self {
        Self { show_units }
    }
}

impl Default for MarkdownOutput {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputFormatter for MarkdownOutput {
    fn format<W: Write>(&self, report: &ConformanceReport, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "# Module Conformance: {}\n", report.project_name)?;
        writeln!(
            writer,
            "Checked {} code units and {} dependencies.\n",
            report.unit_count, report.edge_count
        )?;

        if self.show_units {
            write_layers(report, writer)?;
        }

        if report.passed() {
            writeln!(writer, "## No Violations Found\n")?;
            writeln!(writer, "All module boundaries are respected.")?;
            return Ok(());
        }

        writeln!(writer, "## Violations ({})\n", report.violations.len())?;

        for rule in RuleKind::ALL {
            let violations: Vec<_> = report.violations_for(rule).collect();
            if violations.is_empty() {
                continue;
            }

            writeln!(writer, "### 🔴 {} ({})\n", heading(rule), violations.len())?;
            writeln!(writer, "_{}_\n", capitalize(rule.description()))?;
            for violation in violations {
                writeln!(writer, "- {}", violation.message)?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

fn write_layers<W: Write>(report: &ConformanceReport, writer: &mut W) -> std::io::Result<()> {
    writeln!(writer, "## Layers\n")?;
    for layer in Layer::ALL {
        let units: Vec<_> = report.units_in(layer).collect();
        writeln!(writer, "### {} ({})\n", layer, units.len())?;
        for unit in units {
            match &unit.module {
                Some(module) => writeln!(writer, "- `{}` ({})", unit.name, module)?,
                None => writeln!(writer, "- `{}`", unit.name)?,
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn heading(rule: RuleKind) -> &'static str {
    match rule {
        RuleKind::SliceEncapsulation => "Slice Encapsulation",
        RuleKind::LayeredAccess => "Layered Access",
        RuleKind::CrossModuleInternals => "Cross-Module Internals",
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Violation;

    fn render(report: &ConformanceReport) -> String {
        let mut buffer = Vec::new();
        MarkdownOutput::default().format(report, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_passing_report() {
        let report = ConformanceReport {
            project_name: "shop".to_string(),
            unit_count: 3,
            edge_count: 2,
            violations: Vec::new(),
            units: Vec::new(),
        };
        let text = render(&report);
        assert!(text.contains("# Module Conformance: shop"));
        assert!(text.contains("No Violations Found"));
    }

    #[test]
    fn test_messages_printed_verbatim_per_rule() {
        let report = ConformanceReport {
            project_name: "shop".to_string(),
            unit_count: 2,
            edge_count: 1,
            violations: vec![
                Violation {
                    rule: RuleKind::CrossModuleInternals,
                    source: "a".to_string(),
                    target: "b".to_string(),
                    message: "first message".to_string(),
                },
                Violation {
                    rule: RuleKind::SliceEncapsulation,
                    source: "a".to_string(),
                    target: "c".to_string(),
                    message: "second message".to_string(),
                },
            ],
            units: Vec::new(),
        };
        let text = render(&report);
        assert!(text.contains("## Violations (2)"));
        assert!(text.contains("- first message"));
        assert!(text.contains("- second message"));
        assert!(!text.contains("Layered Access"));
        let slice_pos = text.find("Slice Encapsulation").unwrap();
        let cross_pos = text.find("Cross-Module Internals").unwrap();
        assert!(slice_pos < cross_pos);
    }
}

use crate::model::ConformanceReport;
use crate::output::OutputFormatter;
use serde::Serialize;
use std::io::Write;

pub struct JsonOutput {
    pub include_units: bool,
}

impl JsonOutput {
    pub fn new(include_units: bool) -> Self {
        Self { include_units }
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new(false)
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    project_name: &'a str,
    passed: bool,
    unit_count: usize,
    edge_count: usize,
    violations: Vec<JsonViolation<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    units: Option<Vec<JsonUnit<'a>>>,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    rule: String,
    source: &'a str,
    target: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct JsonUnit<'a> {
    name: &'a str,
    module: Option<&'a str>,
    subpackage: Option<&'a str>,
    layer: String,
    slice: String,
    dependencies: &'a [String],
}

impl OutputFormatter for JsonOutput {
    fn format<W: Write>(&self, report: &ConformanceReport, writer: &mut W) -> std::io::Result<()> {
        let json_report = JsonReport {
            project_name: &report.project_name,
            passed: report.passed(),
            unit_count: report.unit_count,
            edge_count: report.edge_count,
            violations: report
                .violations
                .iter()
                .map(|v| JsonViolation {
                    rule: v.rule.to_string(),
                    source: &v.source,
                    target: &v.target,
                    message: &v.message,
                })
                .collect(),
            units: self.include_units.then(|| {
                report
                    .units
                    .iter()
                    .map(|u| JsonUnit {
                        name: &u.name,
                        module: u.module.as_ref().map(|m| m.as_str()),
                        subpackage: u.subpackage.as_deref(),
                        layer: u.layer.to_string(),
                        slice: u.slice.to_string(),
                        dependencies: &u.dependencies,
                    })
                    .collect()
            }),
        };

        let json = serde_json::to_string_pretty(&json_report).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RuleKind, Violation};

    fn report() -> ConformanceReport {
        ConformanceReport {
            project_name: "shop".to_string(),
            unit_count: 2,
            edge_count: 1,
            violations: vec![Violation {
                rule: RuleKind::LayeredAccess,
                source: "app.Main".to_string(),
                target: "app.modules.a.impl.Bar".to_string(),
                message: "app.Main breaks layering".to_string(),
            }],
            units: Vec::new(),
        }
    }

    #[test]
    fn test_json_fields() {
        let mut buffer = Vec::new();
        JsonOutput::default().format(&report(), &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["passed"], false);
        assert_eq!(value["violations"][0]["rule"], "layered-access");
        assert_eq!(value["violations"][0]["source"], "app.Main");
        assert!(value.get("units").is_none());
    }

    #[test]
    fn test_json_with_units() {
        let mut buffer = Vec::new();
        JsonOutput::new(true).format(&report(), &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert!(value["units"].as_array().unwrap().is_empty());
    }
}

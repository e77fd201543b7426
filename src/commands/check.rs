use crate::analysis::{self, Rule, RuleEngine};
use crate::cli::{CheckArgs, OutputFormat};
use crate::fs::{FileSystem, default_fs};
use crate::model::ConformanceReport;
use crate::output::{JsonOutput, MarkdownOutput, OutputFormatter};
use crate::style;
use std::io::{self, Write};

use super::{CommandContext, EXIT_SETUP, EXIT_VIOLATIONS};

pub fn cmd_check(args: CheckArgs) -> i32 {
    cmd_check_with_fs(args, default_fs())
}

pub fn cmd_check_with_fs(args: CheckArgs, fs: &dyn FileSystem) -> i32 {
    let ctx = match CommandContext::new(&args.graph, &args.config, fs) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    let engine = if args.rules.is_empty() {
        RuleEngine::default()
    } else {
        RuleEngine::with_rules(args.rules.iter().copied().map(Rule::from))
    };
    let report = analysis::check_with_engine(&ctx.graph, &ctx.config, &ctx.project_name, &engine);

    if let Err(e) = write_report(&report, &args, fs) {
        style::error(&format!("Failed to write report: {}", e));
        return EXIT_SETUP;
    }

    if report.passed() {
        if args.output.is_some() {
            style::success(&format!(
                "{} code units conform to the module boundaries",
                report.unit_count
            ));
        }
        0
    } else {
        if args.output.is_some() {
            style::warning(&format!(
                "{} module boundary violations",
                report.violations.len()
            ));
        }
        EXIT_VIOLATIONS
    }
}

fn write_report(report: &ConformanceReport, args: &CheckArgs, fs: &dyn FileSystem) -> io::Result<()> {
    let mut output: Box<dyn Write> = match &args.output {
        Some(output_path) => fs.create_file(output_path)?,
        None => Box::new(io::stdout()),
    };

    let mut buffer = Vec::new();
    match args.format {
        OutputFormat::Markdown => MarkdownOutput::new(args.units).format(report, &mut buffer)?,
        OutputFormat::Json => JsonOutput::new(args.units).format(report, &mut buffer)?,
    }

    let output_str = String::from_utf8_lossy(&buffer);

    // Render markdown for terminals, plain text for files and pipes
    if args.output.is_none() && args.format == OutputFormat::Markdown {
        style::render_markdown(&output_str, &mut output)?;
    } else {
        write!(output, "{}", output_str)?;
    }
    output.flush()
}

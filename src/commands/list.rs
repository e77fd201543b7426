use crate::analysis::{ClassificationTable, SliceAssigner, summarize};
use crate::cli::{ConfigArgs, LayersArgs, ListArgs};
use crate::fs::{FileSystem, default_fs};
use crate::model::{Layer, UnitSummary};
use crate::style;
use std::io::{self, Write};
use std::path::Path;

use super::{CommandContext, EXIT_SETUP};

fn load_units(
    graph: &Path,
    config: &ConfigArgs,
    fs: &dyn FileSystem,
) -> Result<Vec<UnitSummary>, i32> {
    let ctx = CommandContext::new(graph, config, fs)?;
    tracing::debug!("listing {} units of {}", ctx.graph.unit_count(), ctx.path.display());
    let assigner = SliceAssigner::from_config(&ctx.config);
    let table = ClassificationTable::build(&ctx.graph, &assigner);
    Ok(summarize(&ctx.graph, &table))
}

fn run_listing<F>(graph: &Path, config: &ConfigArgs, write: F) -> i32
where
    F: FnOnce(&[UnitSummary], &mut dyn Write) -> io::Result<()>,
{
    let units = match load_units(graph, config, default_fs()) {
        Ok(units) => units,
        Err(code) => return code,
    };

    let mut stdout = io::stdout().lock();
    if let Err(e) = write(&units, &mut stdout) {
        style::error(&format!("Failed to write listing: {}", e));
        return EXIT_SETUP;
    }
    0
}

pub fn cmd_deps(args: ListArgs) -> i32 {
    run_listing(&args.graph, &args.config, write_deps)
}

pub fn cmd_slices(args: ListArgs) -> i32 {
    run_listing(&args.graph, &args.config, write_slices)
}

pub fn cmd_layers(args: LayersArgs) -> i32 {
    let layers: Vec<Layer> = match args.layer {
        Some(layer) => vec![layer],
        None => Layer::ALL.to_vec(),
    };
    run_listing(&args.graph, &args.config, |units, out| {
        write_layers(units, &layers, out)
    })
}

fn write_deps(units: &[UnitSummary], out: &mut dyn Write) -> io::Result<()> {
    for unit in units {
        if unit.dependencies.is_empty() {
            writeln!(out, "{} (no dependencies)", unit.name)?;
            continue;
        }
        writeln!(out, "{} has the following dependencies:", unit.name)?;
        for dep in &unit.dependencies {
            writeln!(out, "    {}", dep)?;
        }
    }
    Ok(())
}

fn write_slices(units: &[UnitSummary], out: &mut dyn Write) -> io::Result<()> {
    let width = units.iter().map(|u| u.name.len()).max().unwrap_or(0);
    for unit in units {
        writeln!(out, "{:<width$} - {}", unit.name, unit.slice, width = width)?;
    }
    Ok(())
}

fn write_layers(units: &[UnitSummary], layers: &[Layer], out: &mut dyn Write) -> io::Result<()> {
    for &layer in layers {
        let members: Vec<_> = units.iter().filter(|u| u.layer == layer).collect();
        writeln!(out, "{}", style::section(&format!("{} ({})", layer, members.len())))?;
        for unit in members {
            match &unit.module {
                Some(module) => {
                    writeln!(out, "   {} {}", unit.name, style::dim(&format!("[{}]", module)))?
                }
                None => writeln!(out, "   {}", unit.name)?,
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFs;

    const GRAPH: &str = r#"{ "units": [
        { "name": "se.shop.Main",
          "depends_on": ["se.shop.modules.cart.api.Cart", "se.shop.modules.cart.api.Cart"] },
        { "name": "se.shop.modules.cart.api.Cart", "depends_on": ["se.shop.modules.cart.impl.CartImpl"] },
        { "name": "se.shop.modules.cart.impl.CartImpl" }
    ] }"#;

    fn units() -> Vec<UnitSummary> {
        let fs = MockFs::with_files([(Path::new("/g/graph.json"), GRAPH)]);
        load_units(Path::new("/g/graph.json"), &ConfigArgs::default(), &fs).unwrap()
    }

    fn render(write: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_deps_listing() {
        let text = render(|out| write_deps(&units(), out));
        assert!(text.contains(
            "se.shop.Main has the following dependencies:\n    se.shop.modules.cart.api.Cart\n"
        ));
        assert_eq!(text.matches("se.shop.modules.cart.api.Cart\n").count(), 1);
        assert!(text.contains("se.shop.modules.cart.impl.CartImpl (no dependencies)"));
    }

    #[test]
    fn test_slices_listing() {
        let text = render(|out| write_slices(&units(), out));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("se.shop.Main") && lines[0].ends_with("- ignored"));
        assert!(lines[1].ends_with("- ignored"));
        assert!(lines[2].ends_with("- cart"));
    }

    #[test]
    fn test_layers_listing_can_filter() {
        let text = render(|out| write_layers(&units(), &[Layer::NonPublicModule], out));
        assert!(text.contains("NonPublicModule (1)"));
        assert!(text.contains("se.shop.modules.cart.impl.CartImpl"));
        assert!(!text.contains("se.shop.Main"));
    }

    #[test]
    fn test_listing_with_invalid_config_fails() {
        let fs = MockFs::with_files([(Path::new("/g/graph.json"), GRAPH)]);
        let config = ConfigArgs {
            public: Some(vec!["api v2".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            load_units(Path::new("/g/graph.json"), &config, &fs).err(),
            Some(EXIT_SETUP)
        );
    }
}

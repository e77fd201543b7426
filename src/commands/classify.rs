use crate::analysis::SliceAssigner;
use crate::cli::ClassifyArgs;
use crate::fs::default_fs;
use crate::model::split_package;
use crate::style;
use std::path::Path;

use super::resolve_config;

pub fn cmd_classify(args: ClassifyArgs) -> i32 {
    let config = match resolve_config(Some(Path::new(".")), &args.config, default_fs()) {
        Ok(config) => config,
        Err(code) => return code,
    };

    let assigner = SliceAssigner::from_config(&config);
    let classification = assigner.classify_path(&split_package(&args.package));

    println!("{}", args.package);
    match &classification.descriptor {
        Some(descriptor) => {
            println!("{}", style::metric("module", &descriptor.module));
            println!(
                "{}",
                style::metric(
                    "subpackage",
                    descriptor.subpackage.as_deref().unwrap_or("(none)")
                )
            );
        }
        None => println!(
            "{}",
            style::metric("module", format!("(none, no '{}' segment)", config.module_marker))
        ),
    }
    println!("{}", style::metric("layer", classification.layer));
    println!("{}", style::metric("slice", &classification.slice));
    0
}

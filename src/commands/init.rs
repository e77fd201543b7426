use crate::cli::InitArgs;
use crate::config::{CONFIG_FILE_NAME, generate_config_template};
use crate::fs::{FileSystem, default_fs};
use crate::style;

use super::EXIT_SETUP;

pub fn cmd_init(args: InitArgs) -> i32 {
    cmd_init_with_fs(args, default_fs())
}

pub fn cmd_init_with_fs(args: InitArgs, fs: &dyn FileSystem) -> i32 {
    let config_path = args.path.join(CONFIG_FILE_NAME);
    if fs.exists(&config_path) {
        style::error(&format!(
            "{} already exists at {}",
            CONFIG_FILE_NAME,
            style::path(&config_path)
        ));
        return EXIT_SETUP;
    }

    let template = generate_config_template();
    if let Err(e) = fs.write(&config_path, &template) {
        style::error(&format!("Failed to write config file: {}", e));
        return EXIT_SETUP;
    }

    style::success(&format!(
        "Created {} at {}",
        CONFIG_FILE_NAME,
        style::path(&config_path)
    ));
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fs::mock::MockFs;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_init_writes_template() {
        let fs = MockFs::new();
        let code = cmd_init_with_fs(
            InitArgs {
                path: PathBuf::from("/project"),
            },
            &fs,
        );
        assert_eq!(code, 0);

        let written = fs.get(Path::new("/project/.modbound.toml")).unwrap();
        assert_eq!(Config::from_toml(&written).unwrap(), Config::default());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let fs = MockFs::with_files([(Path::new("/project/.modbound.toml"), "# mine")]);
        let code = cmd_init_with_fs(
            InitArgs {
                path: PathBuf::from("/project"),
            },
            &fs,
        );
        assert_eq!(code, EXIT_SETUP);
        assert_eq!(fs.get(Path::new("/project/.modbound.toml")).as_deref(), Some("# mine"));
    }
}

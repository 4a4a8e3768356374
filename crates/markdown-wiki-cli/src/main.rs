mod args;
mod commands;
mod preview;
mod tui;

use anyhow::Result;
use markdown_wiki_config::Config;
use markdown_wiki_engine::{FileKeyValueStore, load_pages_with};
use std::{env, io::stdout, path::PathBuf, process};

use args::{Command, parse_args, usage};

/// Where the store lives and how to treat it, after combining the command
/// line with the config file.
#[derive(Debug, PartialEq, Eq)]
struct Settings {
    store_dir: PathBuf,
    export_dir: PathBuf,
    seed_welcome: bool,
}

impl Settings {
    /// `--store`/positional directory wins over the config file's
    /// `store_path`; other settings still come from the config when present.
    fn resolve(store: Option<PathBuf>, config: Option<Config>) -> Option<Self> {
        match (store, config) {
            (Some(store_dir), config) => {
                let export_dir = config
                    .as_ref()
                    .and_then(|c| c.export_path.clone())
                    .unwrap_or_else(|| store_dir.join("export"));
                Some(Self {
                    export_dir,
                    seed_welcome: config.is_none_or(|c| c.seed_welcome_page),
                    store_dir,
                })
            }
            (None, Some(config)) => Some(Self {
                export_dir: config.export_dir(),
                seed_welcome: config.seed_welcome_page,
                store_dir: config.store_path,
            }),
            (None, None) => None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("markdown-wiki-cli", String::as_str);
    let config_path = Config::config_path();

    let invocation = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(invocation) => invocation,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(program));
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if invocation.store.is_some() => {
            log::warn!("Ignoring config file: {e}");
            None
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("{}", usage(program));
            process::exit(1);
        }
    };

    let Some(settings) = Settings::resolve(invocation.store, config) else {
        eprintln!("Error: No store directory provided and no config file found");
        eprintln!("{}", usage(program));
        eprintln!("Or create a config file at {}", config_path.display());
        process::exit(1);
    };

    if settings.store_dir.exists() && !settings.store_dir.is_dir() {
        eprintln!(
            "Error: Store path '{}' is not a directory",
            settings.store_dir.display()
        );
        process::exit(1);
    }
    let mut kv = FileKeyValueStore::new(&settings.store_dir);
    log::info!("Using store at {}", kv.root().display());
    let mut store = load_pages_with(&kv, settings.seed_welcome)?;
    let mut out = stdout().lock();

    match invocation.command {
        Command::Browse => tui::run(store),
        Command::Render { file } => commands::render_file(&file, &store, &mut out),
        Command::New { title } => commands::new_page(&mut kv, &mut store, &title, &mut out),
        Command::Save { title, file } => {
            commands::save_page(&mut kv, &mut store, &title, &file, &mut out)
        }
        Command::List => commands::list_pages(&store, &mut out),
        Command::Export { title, dir, format } => {
            let dir = dir.unwrap_or(settings.export_dir);
            commands::export(&store, &title, &dir, format, &mut out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nothing_to_go_on() {
        assert_eq!(Settings::resolve(None, None), None);
    }

    #[test]
    fn command_line_store_without_config() {
        assert_eq!(
            Settings::resolve(Some(PathBuf::from("/w")), None),
            Some(Settings {
                store_dir: PathBuf::from("/w"),
                export_dir: PathBuf::from("/w/export"),
                seed_welcome: true,
            })
        );
    }

    #[test]
    fn command_line_store_keeps_config_preferences() {
        let config = Config {
            store_path: PathBuf::from("/configured"),
            export_path: Some(PathBuf::from("/out")),
            seed_welcome_page: false,
        };

        assert_eq!(
            Settings::resolve(Some(PathBuf::from("/w")), Some(config)),
            Some(Settings {
                store_dir: PathBuf::from("/w"),
                export_dir: PathBuf::from("/out"),
                seed_welcome: false,
            })
        );
    }

    #[test]
    fn config_only() {
        assert_eq!(
            Settings::resolve(None, Some(Config::new("/configured"))),
            Some(Settings {
                store_dir: PathBuf::from("/configured"),
                export_dir: PathBuf::from("/configured/export"),
                seed_welcome: true,
            })
        );
    }
}

use markdown_wiki_engine::ExportFormat;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive page browser.
    Browse,
    Render {
        file: PathBuf,
    },
    New {
        title: String,
    },
    /// Replace a page's body with the contents of `file`.
    Save {
        title: String,
        file: PathBuf,
    },
    List,
    Export {
        title: String,
        dir: Option<PathBuf>,
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Store directory given on the command line, if any.
    pub store: Option<PathBuf>,
    pub command: Command,
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage:
  {program} [--store <dir>] [store-dir]          browse pages
  {program} [--store <dir>] render <file.md>     print rendered HTML
  {program} [--store <dir>] new <title>          create a page
  {program} [--store <dir>] save <title> <file.md> replace a page's body
  {program} [--store <dir>] list                 list page titles
  {program} [--store <dir>] export <title> [dir] [--html]"
    )
}

/// Parses the arguments after the program name.
pub fn parse_args(args: &[String]) -> Result<Invocation, String> {
    let mut store = None;
    let mut html = false;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--store" => {
                let dir = iter.next().ok_or("--store needs a directory")?;
                if store.replace(PathBuf::from(dir)).is_some() {
                    return Err("--store given more than once".to_string());
                }
            }
            "--html" => html = true,
            flag if flag.starts_with("--") => return Err(format!("Unknown option: {flag}")),
            _ => positional.push(arg.as_str()),
        }
    }

    let command = match positional.as_slice() {
        [] => Command::Browse,
        ["render", file] => Command::Render {
            file: PathBuf::from(file),
        },
        ["new", title @ ..] if !title.is_empty() => Command::New {
            title: title.join(" "),
        },
        ["save", title @ .., file] if !title.is_empty() => Command::Save {
            title: title.join(" "),
            file: PathBuf::from(file),
        },
        ["list"] => Command::List,
        ["export", title] => Command::Export {
            title: title.to_string(),
            dir: None,
            format: export_format(html),
        },
        ["export", title, dir] => Command::Export {
            title: title.to_string(),
            dir: Some(PathBuf::from(dir)),
            format: export_format(html),
        },
        ["render" | "new" | "save" | "list" | "export", ..] => {
            return Err(format!("Wrong arguments for '{}'", positional[0]));
        }
        [dir] => {
            if store.is_some() {
                return Err("Store directory given twice".to_string());
            }
            store = Some(PathBuf::from(dir));
            Command::Browse
        }
        _ => return Err("Too many arguments".to_string()),
    };

    if html && !matches!(command, Command::Export { .. }) {
        return Err("--html only applies to export".to_string());
    }

    Ok(Invocation { store, command })
}

fn export_format(html: bool) -> ExportFormat {
    if html {
        ExportFormat::Html
    } else {
        ExportFormat::Markdown
    }
}

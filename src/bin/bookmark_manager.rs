extern crate log;

use bookmark_manager::config::Settings;
use bookmark_manager::output::{render, render_all, write_output};
use bookmark_manager::{init_logger, BookmarkError, BookmarkStore, OutputFormat};
use dotenv::dotenv;
use log::*;
use structopt::StructOpt;

/// Save, update, remove and look up named time offsets.
#[derive(StructOpt, Debug)]
#[structopt(setting=structopt::clap::AppSettings::ColoredHelp, name = "bookmark_manager")]
struct Opt {
    /// Activate debug mode
    /// short and long flags (--debug) will be deduced from the field's name
    #[structopt(name = "debug", long = "debug")]
    debug: bool,

    /// The file to read/write to. If not set, use the value of environment variable BOOKMARK_FILE, otherwise `bookmarks` in the current directory.
    #[structopt(name = "file", short = "f", long = "file", value_name = "FILE")]
    file: Option<String>,

    /// The file to write the output to, `-` means stdout. If not set, use the value of environment variable BOOKMARK_OUTPUT, otherwise stdout.
    #[structopt(name = "output", long = "output-file", value_name = "FILE")]
    output: Option<String>,

    /// The output format. If not set, use the value of environment variable BOOKMARK_FORMAT, otherwise debug.
    #[structopt(
        name = "format",
        long = "format",
        possible_values = OutputFormat::variants(),
        case_insensitive = true
    )]
    format: Option<String>,

    #[structopt(subcommand)]
    cmd: SubCommands,
}

#[derive(Debug, PartialEq, StructOpt)]
enum SubCommands {
    #[structopt(name = "add")]
    Add(AddArguments),
    #[structopt(name = "remove")]
    Remove(RemoveArguments),
    #[structopt(name = "query")]
    Query(QueryArguments),
    /// List all bookmarks, sorted by offset.
    #[structopt(name = "list")]
    List,
}

/// Add a new bookmark, or update the offset of an existing one.
#[derive(StructOpt, PartialEq, Debug)]
#[structopt(setting=structopt::clap::AppSettings::ColoredHelp, name = "bookmark_manager - add")]
pub struct AddArguments {
    /// [Required] The name of the bookmark to add/update.
    #[structopt(name = "name", short = "n", long = "name", value_name = "NAME")]
    name: String,

    /// [Required] The time offset to save, in seconds. It must be a finite number, negative values are accepted.
    #[structopt(
        name = "offset",
        short = "o",
        long = "offset",
        value_name = "OFFSET",
        allow_hyphen_values = true
    )]
    offset: f64,
}

/// Remove an existing bookmark and output it.
#[derive(StructOpt, PartialEq, Debug)]
#[structopt(setting=structopt::clap::AppSettings::ColoredHelp, name = "bookmark_manager - remove")]
pub struct RemoveArguments {
    /// [Required] The name of the bookmark to remove.
    #[structopt(name = "name", short = "n", long = "name", value_name = "NAME")]
    name: String,
}

/// Get the value of an existing bookmark.
#[derive(StructOpt, PartialEq, Debug)]
#[structopt(setting=structopt::clap::AppSettings::ColoredHelp, name = "bookmark_manager - query")]
pub struct QueryArguments {
    /// [Required] The name of the bookmark to search for.
    #[structopt(name = "name", short = "n", long = "name", value_name = "NAME")]
    name: String,
}

fn exit_with_error(err: BookmarkError) -> ! {
    error!("{}", err);
    std::process::exit(1);
}

/// Run one subcommand against the bookmark file and write its result to the output target. Returns what was written.
///
/// Only remove, query and list produce output. The output target is not touched when there is nothing to write.
fn run(cmd: SubCommands, settings: &Settings) -> Result<Option<String>, BookmarkError> {
    let store = BookmarkStore::new(&settings.bookmark_file);

    let rendered = match cmd {
        SubCommands::Add(arguments) => {
            store.add(&arguments.name, arguments.offset)?;
            None
        }
        SubCommands::Remove(arguments) => match store.remove(&arguments.name)? {
            Some(bookmark) => Some(render(&bookmark, settings.format)?),
            None => {
                warn!(
                    "Bookmark {} not found in {}, nothing removed.",
                    arguments.name,
                    store.path().display()
                );
                None
            }
        },
        SubCommands::Query(arguments) => match store.query(&arguments.name)? {
            Some(bookmark) => Some(render(&bookmark, settings.format)?),
            None => {
                warn!(
                    "Bookmark {} not found in {}.",
                    arguments.name,
                    store.path().display()
                );
                None
            }
        },
        SubCommands::List => {
            let bookmarks = store.list()?;
            debug!("Found {} bookmarks.", bookmarks.len());
            Some(render_all(&bookmarks, settings.format)?)
        }
    };

    if let Some(content) = &rendered {
        write_output(&settings.output, content)?;
    }

    Ok(rendered)
}

fn main() {
    dotenv().ok();
    let opt = Opt::from_args();

    let _ = if opt.debug {
        init_logger("bookmark_manager", LevelFilter::Debug)
    } else {
        init_logger("bookmark_manager", LevelFilter::Info)
    };

    let settings = match Settings::from_env(opt.file, opt.output, opt.format) {
        Ok(v) => v,
        Err(e) => exit_with_error(e),
    };

    match run(opt.cmd, &settings) {
        Ok(_) => {}
        Err(e) => exit_with_error(e),
    }
}

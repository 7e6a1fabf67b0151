#![doc = include_str!("../README.md")]
//! bookmark-manager library: the bookmark model, the YAML backed store and the output renderers.

pub mod config;
pub mod model;
pub mod output;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

pub use model::bookmark::Bookmark;
pub use model::store::BookmarkStore;
pub use model::util::BookmarkError;
pub use output::OutputFormat;

/// Logs always go to stderr, stdout is reserved for the bookmark output.
pub fn init_logger(tag_name: &str, level: LevelFilter) -> Result<log4rs::Handle, String> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            &(format!("[{}]", tag_name) + " {d} - {h({l} - {t} - {m}{n})}"),
        )))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .logger(
            Logger::builder()
                .appender("stderr")
                .additive(false)
                .build("stderr", level),
        )
        .build(Root::builder().appender("stderr").build(level))
        .map_err(|e| format!("couldn't build log configuration. Reason: {}", e))?;

    log4rs::init_config(config)
        .map_err(|e| format!("couldn't initialize log configuration. Reason: {}", e))
}

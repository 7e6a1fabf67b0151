//! Render bookmarks for the calling program and open the output target.

use crate::model::bookmark::Bookmark;
use crate::model::util::BookmarkError;
use std::fmt;
use std::fs::File;
use std::io::{stdout, Write};
use std::str::FromStr;

pub const STDOUT_TARGET: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Bookmark { name: "intro", offset: 1.5 }`
    #[default]
    Debug,
    Yaml,
    Json,
    /// `intro<TAB>1.5`
    Plain,
}

impl OutputFormat {
    pub fn variants() -> &'static [&'static str] {
        &["debug", "yaml", "json", "plain"]
    }
}

impl FromStr for OutputFormat {
    type Err = BookmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(OutputFormat::Debug),
            "yaml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            "plain" => Ok(OutputFormat::Plain),
            _ => Err(BookmarkError::UnknownFormat {
                format: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            OutputFormat::Debug => "debug",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
            OutputFormat::Plain => "plain",
        };
        write!(f, "{}", name)
    }
}

fn render_error<E: fmt::Display>(format: OutputFormat, err: E) -> BookmarkError {
    BookmarkError::Render {
        format: format.to_string(),
        details: err.to_string(),
    }
}

fn output_error(target: &str, cause: std::io::Error) -> BookmarkError {
    BookmarkError::Output {
        target: target.to_string(),
        cause,
    }
}

/// Render one bookmark without a trailing newline.
pub fn render(bookmark: &Bookmark, format: OutputFormat) -> Result<String, BookmarkError> {
    let rendered = match format {
        OutputFormat::Debug => format!("{:?}", bookmark),
        OutputFormat::Yaml => serde_yaml::to_string(bookmark)
            .map_err(|e| render_error(format, e))?
            .trim_end()
            .to_string(),
        OutputFormat::Json => serde_json::to_string(bookmark).map_err(|e| render_error(format, e))?,
        OutputFormat::Plain => format!("{}\t{}", bookmark.name, bookmark.offset),
    };

    Ok(rendered)
}

/// Render a list of bookmarks. YAML output is a single document, all other formats are one line per bookmark.
pub fn render_all(bookmarks: &[Bookmark], format: OutputFormat) -> Result<String, BookmarkError> {
    if format == OutputFormat::Yaml {
        let rendered = serde_yaml::to_string(bookmarks).map_err(|e| render_error(format, e))?;
        return Ok(rendered.trim_end().to_string());
    }

    let lines = bookmarks
        .iter()
        .map(|b| render(b, format))
        .collect::<Result<Vec<String>, BookmarkError>>()?;
    Ok(lines.join("\n"))
}

/// `-` is stdout, anything else is a file which is created or truncated.
pub fn open_output(target: &str) -> Result<Box<dyn Write>, BookmarkError> {
    if target == STDOUT_TARGET {
        Ok(Box::new(stdout()))
    } else {
        let file = File::create(target).map_err(|e| output_error(target, e))?;
        Ok(Box::new(file))
    }
}

pub fn write_output(target: &str, content: &str) -> Result<(), BookmarkError> {
    let mut writer = open_output(target)?;
    if !content.is_empty() {
        writeln!(writer, "{}", content).map_err(|e| output_error(target, e))?;
    }
    writer.flush().map_err(|e| output_error(target, e))?;
    Ok(())
}

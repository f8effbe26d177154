use serde::Serialize;
use snafu::{ResultExt, Snafu};
use std::io;
use std::path::{Path, PathBuf};

use crate::grammar::Grammar;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("failed to serialize property list"))]
    PlistWrite { source: plist::Error },
    #[snafu(display("failed to deserialize property list"))]
    PlistRead { source: plist::Error },
    #[snafu(display("failed to serialize json"))]
    JsonWrite { source: serde_json::Error },
    #[snafu(display("failed to deserialize json at \"{}\"", path))]
    JsonRead {
        path: String,
        #[snafu(source(from(serde_path_to_error::Error<serde_json::Error>, serde_path_to_error::Error::into_inner)))]
        source: serde_json::Error,
    },
    #[snafu(display("failed to create directory {}", path.display()))]
    CreateDirectory { path: PathBuf, source: io::Error },
    #[snafu(display("failed to write {}", path.display()))]
    Write { path: PathBuf, source: io::Error },
    #[snafu(display("failed to read {}", path.display()))]
    Read { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// XML property list, what `.tmLanguage` files hold.
    #[default]
    Plist,
    /// Tab-indented JSON.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub path: PathBuf,
    pub format: Format,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            path: PathBuf::from("syntaxes/noze.tmLanguage"),
            format: Format::Plist,
        }
    }
}

impl Output {
    pub fn json() -> Self {
        Self {
            path: PathBuf::from("grammars/noze.json"),
            format: Format::Json,
        }
    }
}

pub fn to_bytes(grammar: &Grammar, format: Format) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    match format {
        Format::Plist => plist::to_writer_xml(&mut buf, grammar).context(PlistWriteSnafu)?,
        Format::Json => {
            let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
            let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
            grammar.serialize(&mut ser).context(JsonWriteSnafu)?;
        }
    }
    Ok(buf)
}

/// Serializes `grammar` and writes it to `output.path`, replacing whatever
/// was there. Missing parent directories are created.
pub fn write(grammar: &Grammar, output: &Output) -> Result<(), Error> {
    let bytes = to_bytes(grammar, output.format)?;

    if let Some(parent) = output.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).context(CreateDirectorySnafu { path: parent })?;
    }
    std::fs::write(&output.path, &bytes).context(WriteSnafu {
        path: output.path.as_path(),
    })?;

    log::info!(
        "wrote {} ({} rules, {} bytes)",
        output.path.display(),
        grammar.patterns.len(),
        bytes.len()
    );
    Ok(())
}

pub fn from_plist(bytes: &[u8]) -> Result<Grammar, Error> {
    plist::from_bytes(bytes).context(PlistReadSnafu)
}

pub fn from_json(json: &[u8]) -> Result<Grammar, Error> {
    let des = &mut serde_json::Deserializer::from_slice(json);

    serde_path_to_error::deserialize(des).with_context(|e| JsonReadSnafu {
        path: e.path().to_string(),
    })
}

pub fn read(path: &Path, format: Format) -> Result<Grammar, Error> {
    let bytes = std::fs::read(path).context(ReadSnafu { path })?;
    match format {
        Format::Plist => from_plist(&bytes),
        Format::Json => from_json(&bytes),
    }
}

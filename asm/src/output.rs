use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    symbols::SymbolTable,
};

/// Output path used when none is given: the input with a `.hack` extension.
pub fn default_output(input: impl AsRef<Path>) -> PathBuf {
    input.as_ref().with_extension("hack")
}

pub fn read_source(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let name = path.as_ref().display().to_string();
    let file = File::open(path.as_ref()).map_err(|e| Error::FileOpen(name.clone(), e))?;
    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| Error::FileRead(name, e))
}

/// Write `words` to a staging file next to `path` and rename it into place,
/// so `path` only ever holds a complete program.
pub fn commit(path: impl AsRef<Path>, words: &[String]) -> Result<()> {
    let path = path.as_ref();
    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    let staging = PathBuf::from(staging);

    let result = write_words(&staging, words).and_then(|_| {
        std::fs::rename(&staging, path)
            .map_err(|e| Error::FileWrite(path.display().to_string(), e))
    });
    if result.is_err() {
        let _ = std::fs::remove_file(&staging);
    }
    result
}

fn write_words(path: &Path, words: &[String]) -> Result<()> {
    let name = path.display().to_string();
    let file = File::create(path).map_err(|e| Error::FileCreate(name.clone(), e))?;
    let mut writer = BufWriter::new(file);
    for word in words {
        writeln!(writer, "{}", word).map_err(|e| Error::FileWrite(name.clone(), e))?;
    }
    writer
        .into_inner()
        .map_err(|e| Error::FileWrite(name.clone(), e.into_error()))?
        .sync_all()
        .map_err(|e| Error::FileWrite(name, e))
}

/// Export the symbol table as YAML.
pub fn write_symbols(path: impl AsRef<Path>, symbols: &SymbolTable) -> Result<()> {
    let text = serde_yaml::to_string(symbols).map_err(Error::SymbolMap)?;
    let name = path.as_ref().display().to_string();
    std::fs::write(path.as_ref(), text).map_err(|e| Error::FileWrite(name, e))
}

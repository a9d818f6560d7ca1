use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strum::{Display, EnumIter, IntoEnumIterator};
use thiserror::Error;

use crate::word::{is_bits, COMPUTE_PREFIX, WORD_WIDTH};

/// Key of the row that holds the code of an omitted field.
pub const ABSENT_KEY: &str = "null";

// ----------------------------------------------------------------------------
// Table kind

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TableKind {
    Symbols,
    Dest,
    Comp,
    Jump,
}

impl TableKind {
    /// File name of the table inside a table directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            TableKind::Symbols => "Symbols.txt",
            TableKind::Dest => "dest.txt",
            TableKind::Comp => "comp.txt",
            TableKind::Jump => "jump.txt",
        }
    }
}

// ----------------------------------------------------------------------------
// Error

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to open table file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Malformed {kind} table row at {file}:{line}: `{raw}`")]
    Row {
        kind: TableKind,
        file: String,
        line: usize,
        raw: String,
    },

    #[error("Cannot parse table config: {0}")]
    Config(String, #[source] serde_yaml::Error),

    #[error("The {0} table is empty")]
    Empty(TableKind),

    #[error("The {0} table has no `null` row for an omitted field")]
    NoAbsentCode(TableKind),

    #[error("The {kind} table maps `{key}` to `{code}`, expected {width} binary digits")]
    Code {
        kind: TableKind,
        key: String,
        code: String,
        width: usize,
    },

    #[error("Code widths add up to {0} bits, the word is {1} bits")]
    Width(usize, usize),
}

// ----------------------------------------------------------------------------
// Code table

/// Mnemonic to bit-code mapping of one instruction field.
///
/// The code of an omitted field is kept apart from the mnemonics, so the
/// `null` row of a table file can never match text written in a program.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndexMap<String, String>", into = "IndexMap<String, String>")]
pub struct CodeTable {
    absent: Option<String>,
    codes: IndexMap<String, String>,
}

impl CodeTable {
    pub fn new() -> Self {
        CodeTable::default()
    }

    pub fn insert(&mut self, mnemonic: String, code: String) -> Option<String> {
        if mnemonic == ABSENT_KEY {
            self.absent.replace(code)
        } else {
            self.codes.insert(mnemonic, code)
        }
    }

    /// Exact, case-sensitive lookup of a written mnemonic.
    pub fn get(&self, mnemonic: &str) -> Option<&str> {
        self.codes.get(mnemonic).map(|s| s.as_str())
    }

    pub fn absent(&self) -> Option<&str> {
        self.absent.as_deref()
    }

    /// Code of an optional field: the absent code for `None`.
    pub fn lookup(&self, field: Option<&str>) -> Option<&str> {
        match field {
            Some(mnemonic) => self.get(mnemonic),
            None => self.absent(),
        }
    }

    /// Number of mnemonics. The absent code is not one.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Width of the codes, taken from the first row.
    pub fn width(&self) -> Option<usize> {
        self.absent
            .iter()
            .chain(self.codes.values())
            .next()
            .map(|code| code.len())
    }

    fn check(&self, kind: TableKind) -> Result<usize, TableError> {
        let width = self.width().ok_or(TableError::Empty(kind))?;
        let rows = self
            .absent
            .iter()
            .map(|code| (ABSENT_KEY, code))
            .chain(self.codes.iter().map(|(key, code)| (key.as_str(), code)));
        for (key, code) in rows {
            if code.len() != width || !is_bits(code) {
                return Err(TableError::Code {
                    kind,
                    key: key.to_string(),
                    code: code.clone(),
                    width,
                });
            }
        }
        Ok(width)
    }
}

impl From<IndexMap<String, String>> for CodeTable {
    fn from(rows: IndexMap<String, String>) -> Self {
        let mut table = CodeTable::new();
        for (key, code) in rows {
            table.insert(key, code);
        }
        table
    }
}

impl From<CodeTable> for IndexMap<String, String> {
    fn from(table: CodeTable) -> Self {
        let mut rows = IndexMap::new();
        if let Some(code) = table.absent {
            rows.insert(ABSENT_KEY.to_string(), code);
        }
        rows.extend(table.codes);
        rows
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for CodeTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut table = CodeTable::new();
        for (key, code) in iter {
            table.insert(key.to_string(), code.to_string());
        }
        table
    }
}

// ----------------------------------------------------------------------------
// Table bundle

/// The four lookup tables consumed by the assembler.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tables {
    pub symbols: IndexMap<String, u16>,
    pub dest: CodeTable,
    pub comp: CodeTable,
    pub jump: CodeTable,
}

impl Tables {
    /// Read `Symbols.txt`, `dest.txt`, `comp.txt` and `jump.txt` from `dir`.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, TableError> {
        let mut tables = Tables::default();
        for kind in TableKind::iter() {
            let path = dir.as_ref().join(kind.file_name());
            let file = path.display().to_string();
            let text = std::fs::read_to_string(&path)
                .map_err(|e| TableError::FileOpen(file.clone(), e))?;
            tables.read(kind, &file, &text)?;
        }
        tables.validate()?;
        Ok(tables)
    }

    /// Read all four tables from one YAML document.
    pub fn load_yaml(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = path.as_ref().display().to_string();
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| TableError::FileOpen(file.clone(), e))?;
        Tables::from_yaml(&file, &text)
    }

    pub fn from_yaml(file: &str, text: &str) -> Result<Self, TableError> {
        let tables: Tables =
            serde_yaml::from_str(text).map_err(|e| TableError::Config(file.to_string(), e))?;
        tables.validate()?;
        Ok(tables)
    }

    /// Merge the `key value` rows of `text` into the table of `kind`.
    /// `file` only names the source in errors.
    pub fn read(&mut self, kind: TableKind, file: &str, text: &str) -> Result<(), TableError> {
        for (idx, raw) in text.lines().enumerate() {
            let words: Vec<&str> = raw.split_whitespace().collect();
            let row_error = || TableError::Row {
                kind,
                file: file.to_string(),
                line: idx + 1,
                raw: raw.to_string(),
            };
            let (key, value) = match words.as_slice() {
                [] => continue,
                [key, value] => (*key, *value),
                _ => return Err(row_error()),
            };
            match kind {
                TableKind::Symbols => {
                    let addr = value.parse::<u16>().map_err(|_| row_error())?;
                    self.symbols.insert(key.to_string(), addr);
                }
                TableKind::Dest => {
                    self.dest.insert(key.to_string(), value.to_string());
                }
                TableKind::Comp => {
                    self.comp.insert(key.to_string(), value.to_string());
                }
                TableKind::Jump => {
                    self.jump.insert(key.to_string(), value.to_string());
                }
            }
        }
        Ok(())
    }

    /// Check that every code is binary, that each table has a uniform width,
    /// and that a full compute instruction fills exactly one word.
    pub fn validate(&self) -> Result<(), TableError> {
        let comp = self.comp.check(TableKind::Comp)?;
        let dest = self.dest.check(TableKind::Dest)?;
        let jump = self.jump.check(TableKind::Jump)?;
        if self.dest.absent().is_none() {
            return Err(TableError::NoAbsentCode(TableKind::Dest));
        }
        if self.jump.absent().is_none() {
            return Err(TableError::NoAbsentCode(TableKind::Jump));
        }
        let total = COMPUTE_PREFIX.len() + comp + dest + jump;
        if total != WORD_WIDTH {
            return Err(TableError::Width(total, WORD_WIDTH));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEST: &str = "null 000\nM 001\nD 010\n";
    const COMP: &str = "0 0101010\nA 0110000\n\nD+A 0000010\n";
    const JUMP: &str = "null 000\nJMP 111\n";

    fn sample() -> Tables {
        let mut tables = Tables::default();
        tables.read(TableKind::Symbols, "Symbols.txt", "SP 0\nKBD 24576\n").unwrap();
        tables.read(TableKind::Dest, "dest.txt", DEST).unwrap();
        tables.read(TableKind::Comp, "comp.txt", COMP).unwrap();
        tables.read(TableKind::Jump, "jump.txt", JUMP).unwrap();
        tables
    }

    #[test]
    fn read_rows() {
        let tables = sample();
        assert_eq!(tables.symbols.get("KBD"), Some(&24576));
        assert_eq!(tables.dest.get("D"), Some("010"));
        assert_eq!(tables.comp.get("D+A"), Some("0000010"));
        assert_eq!(tables.comp.len(), 3);
        assert!(tables.validate().is_ok());
    }

    #[test]
    fn null_row_is_not_a_mnemonic() {
        let tables = sample();
        assert_eq!(tables.dest.get("null"), None);
        assert_eq!(tables.dest.lookup(None), Some("000"));
        assert_eq!(tables.jump.lookup(Some("JMP")), Some("111"));
        assert_eq!(tables.jump.lookup(Some("jmp")), None);

        let mut only_null = Tables::default();
        only_null.read(TableKind::Dest, "dest.txt", "null 000\n").unwrap();
        assert_eq!(only_null.dest.len(), 0);
        assert!(only_null.dest.is_empty());
        assert_eq!(only_null.dest.absent(), Some("000"));
    }

    #[test]
    fn reject_bad_rows() {
        let mut tables = Tables::default();
        let err = tables
            .read(TableKind::Dest, "dest.txt", "null 000\nM\n")
            .unwrap_err();
        assert!(matches!(err, TableError::Row { line: 2, .. }));

        let err = tables
            .read(TableKind::Symbols, "Symbols.txt", "R0 zero\n")
            .unwrap_err();
        assert!(matches!(err, TableError::Row { kind: TableKind::Symbols, .. }));

        let err = tables
            .read(TableKind::Symbols, "Symbols.txt", "R0 0 extra\n")
            .unwrap_err();
        assert!(matches!(err, TableError::Row { line: 1, .. }));
    }

    #[test]
    fn reject_bad_codes() {
        let mut tables = sample();
        tables.jump.insert("JGT".to_string(), "01".to_string());
        assert!(matches!(
            tables.validate(),
            Err(TableError::Code { kind: TableKind::Jump, .. })
        ));

        let mut tables = sample();
        tables.comp.insert("X".to_string(), "01x0101".to_string());
        assert!(matches!(
            tables.validate(),
            Err(TableError::Code { kind: TableKind::Comp, .. })
        ));

        let mut tables = sample();
        tables.dest = [("M", "001")].into_iter().collect();
        assert!(matches!(
            tables.validate(),
            Err(TableError::NoAbsentCode(TableKind::Dest))
        ));

        let mut tables = sample();
        tables.comp = CodeTable::new();
        assert!(matches!(tables.validate(), Err(TableError::Empty(TableKind::Comp))));
    }

    #[test]
    fn reject_wrong_word_width() {
        let mut tables = Tables::default();
        tables.read(TableKind::Dest, "dest.txt", "null 00\nM 01\n").unwrap();
        tables.read(TableKind::Comp, "comp.txt", COMP).unwrap();
        tables.read(TableKind::Jump, "jump.txt", JUMP).unwrap();
        assert!(matches!(tables.validate(), Err(TableError::Width(15, 16))));
    }

    #[test]
    fn yaml_config() {
        let text = r#"
symbols:
  SP: 0
  KBD: 24576
dest:
  "null": "000"
  M: "001"
comp:
  "0": "0101010"
  "D+A": "0000010"
jump:
  "null": "000"
  JMP: "111"
"#;
        let tables = Tables::from_yaml("tables.yaml", text).unwrap();
        assert_eq!(tables.symbols.get("SP"), Some(&0));
        assert_eq!(tables.dest.absent(), Some("000"));
        assert_eq!(tables.dest.get("M"), Some("001"));
        assert_eq!(tables.comp.get("0"), Some("0101010"));

        let dumped = serde_yaml::to_string(&tables).unwrap();
        let again = Tables::from_yaml("dumped.yaml", &dumped).unwrap();
        assert_eq!(tables, again);
    }

    #[test]
    fn table_kind_names() {
        assert_eq!(TableKind::Dest.to_string(), "dest");
        assert_eq!(TableKind::Symbols.file_name(), "Symbols.txt");
        assert_eq!(TableKind::iter().count(), 4);
    }
}

use arch::{TableError, Tables, HACK};
use hackasm::{assemble, output, Error};
use std::path::{Path, PathBuf};

fn tables_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("tables")
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("hackasm-files-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn table_files_match_builtin_tables() {
    let tables = Tables::load_dir(tables_dir()).unwrap();
    assert_eq!(tables, *HACK);
}

#[test]
fn missing_table_directory() {
    let err = Tables::load_dir(scratch("no-such-dir")).unwrap_err();
    assert!(matches!(err, TableError::FileOpen(..)));
}

#[test]
fn assemble_file() {
    let input = scratch("Add.asm");
    let out = output::default_output(&input);
    std::fs::write(&input, "// adds 2 and 3\n@2\nD=A\n@3\nD=D+A\n@0\nM=D\n").unwrap();

    let tables = Tables::load_dir(tables_dir()).unwrap();
    let t = assemble(&input, &out, &tables).unwrap();
    assert_eq!(t.words.len(), 6);
    assert_eq!(
        std::fs::read_to_string(&out).unwrap(),
        "0000000000000010\n\
         1110110000010000\n\
         0000000000000011\n\
         1110000010010000\n\
         0000000000000000\n\
         1110001100001000\n"
    );
}

#[test]
fn failed_assembly_keeps_previous_output() {
    let input = scratch("Broken.asm");
    let out = scratch("Broken.hack");
    std::fs::write(&out, "previous\n").unwrap();
    std::fs::write(&input, "@1\nD=A\nD=\n").unwrap();

    let err = assemble(&input, &out, &HACK).unwrap_err();
    assert!(matches!(err.kind(), Error::EmptyComp(_)));
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "previous\n");
}

#[test]
fn failed_assembly_creates_no_output() {
    let input = scratch("Unknown.asm");
    let out = scratch("Unknown.hack");
    let _ = std::fs::remove_file(&out);
    std::fs::write(&input, "@1\nD=Q\n").unwrap();

    assert!(assemble(&input, &out, &HACK).is_err());
    assert!(!out.exists());
}

#[test]
fn symbol_map_export() {
    let input = scratch("Vars.asm");
    let out = scratch("Vars.hack");
    let map = scratch("Vars.yaml");
    std::fs::write(&input, "@i\nM=1\n(LOOP)\n@LOOP\n0;JMP\n").unwrap();

    let t = assemble(&input, &out, &HACK).unwrap();
    output::write_symbols(&map, &t.context.symbols).unwrap();

    let text = std::fs::read_to_string(&map).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();
    assert_eq!(value["i"]["addr"].as_u64(), Some(16));
    assert_eq!(value["i"]["kind"].as_str(), Some("variable"));
    assert_eq!(value["LOOP"]["addr"].as_u64(), Some(2));
    assert_eq!(value["LOOP"]["kind"].as_str(), Some("label"));
    assert_eq!(value["KBD"]["kind"].as_str(), Some("predefined"));
}

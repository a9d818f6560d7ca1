//! Built-in copy of the standard Hack lookup tables.

use once_cell::sync::Lazy;

use crate::table::{CodeTable, Tables};

/// RAM base of the memory-mapped screen.
pub const SCREEN: u16 = 16384;

/// RAM address of the memory-mapped keyboard.
pub const KBD: u16 = 24576;

const POINTERS: [(&str, u16); 5] = [("SP", 0), ("LCL", 1), ("ARG", 2), ("THIS", 3), ("THAT", 4)];

const DEST: [(&str, &str); 8] = [
    ("null", "000"),
    ("M", "001"),
    ("D", "010"),
    ("MD", "011"),
    ("A", "100"),
    ("AM", "101"),
    ("AD", "110"),
    ("AMD", "111"),
];

// a-bit followed by c1..c6
const COMP: [(&str, &str); 28] = [
    ("0", "0101010"),
    ("1", "0111111"),
    ("-1", "0111010"),
    ("D", "0001100"),
    ("A", "0110000"),
    ("!D", "0001101"),
    ("!A", "0110001"),
    ("-D", "0001111"),
    ("-A", "0110011"),
    ("D+1", "0011111"),
    ("A+1", "0110111"),
    ("D-1", "0001110"),
    ("A-1", "0110010"),
    ("D+A", "0000010"),
    ("D-A", "0010011"),
    ("A-D", "0000111"),
    ("D&A", "0000000"),
    ("D|A", "0010101"),
    ("M", "1110000"),
    ("!M", "1110001"),
    ("-M", "1110011"),
    ("M+1", "1110111"),
    ("M-1", "1110010"),
    ("D+M", "1000010"),
    ("D-M", "1010011"),
    ("M-D", "1000111"),
    ("D&M", "1000000"),
    ("D|M", "1010101"),
];

const JUMP: [(&str, &str); 8] = [
    ("null", "000"),
    ("JGT", "001"),
    ("JEQ", "010"),
    ("JGE", "011"),
    ("JLT", "100"),
    ("JNE", "101"),
    ("JLE", "110"),
    ("JMP", "111"),
];

pub static HACK: Lazy<Tables> = Lazy::new(|| {
    let mut symbols = indexmap::IndexMap::new();
    for r in 0..16u16 {
        symbols.insert(format!("R{}", r), r);
    }
    for (name, addr) in POINTERS {
        symbols.insert(name.to_string(), addr);
    }
    symbols.insert("SCREEN".to_string(), SCREEN);
    symbols.insert("KBD".to_string(), KBD);

    Tables {
        symbols,
        dest: DEST.into_iter().collect::<CodeTable>(),
        comp: COMP.into_iter().collect::<CodeTable>(),
        jump: JUMP.into_iter().collect::<CodeTable>(),
    }
});

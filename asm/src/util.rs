use color_print::cformat;
use std::collections::HashMap;

use crate::{
    parser::{Code, Stmt},
    symbols::{Ident, SymbolTable},
    Translation,
};

/// Listing of `source` with the ROM address and word of every instruction.
pub fn listing(file: &str, source: &[String], translation: &Translation) -> Vec<String> {
    let emitted: HashMap<usize, (usize, &str)> = translation
        .lines
        .iter()
        .zip(&translation.words)
        .enumerate()
        .map(|(pc, (line, word))| (line.idx, (pc, word.as_str())))
        .collect();

    let mut out = vec![format!(
        "{}+------[{}]{}",
        "-".repeat(23),
        file,
        "-".repeat(45usize.saturating_sub(file.len()))
    )];

    for (idx, raw) in source.iter().enumerate() {
        let line_num = idx + 1;
        let comment = raw
            .find("//")
            .map(|pos| cformat!("<dim>{}</>", &raw[pos..]))
            .unwrap_or_default();

        let body = match (emitted.get(&idx), Stmt::parse(raw)) {
            (Some((pc, word)), Ok(Stmt::Instruction(text))) => {
                let code = Code::parse(&text)
                    .map(|code| code.cformat())
                    .unwrap_or(text);
                format!("[{:04X}] {} | {:>4}:   {} {}", pc, word, line_num, code, comment)
            }
            (_, Ok(Stmt::Label(name))) => {
                let label = cformat!("<g>({})</>", name);
                format!("{:23}| {:>4}: {} {}", "", line_num, label, comment)
            }
            _ => format!("{:23}| {:>4}: {}", "", line_num, comment),
        };
        out.push(body);
    }

    out.push(format!("{}+{}", "-".repeat(23), "-".repeat(53)));
    out
}

/// One row per symbol: address, kind and name.
pub fn symbol_rows(symbols: &SymbolTable) -> Vec<String> {
    symbols
        .iter()
        .map(|(name, sym)| {
            let kind = match sym.kind {
                Ident::Predefined => cformat!("<c>predef</>"),
                Ident::Label => cformat!("<g>label </>"),
                Ident::Variable => cformat!("<y>var   </>"),
            };
            format!("  0x{:04X} {} {}", sym.addr, kind, name)
        })
        .collect()
}

pub fn print_dump(file: &str, source: &[String], translation: &Translation) {
    for row in listing(file, source, translation) {
        println!("{}", row);
    }
    for row in symbol_rows(&translation.context.symbols) {
        println!("{}", row);
    }
}

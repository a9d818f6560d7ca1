//! Two-pass assembler for the Hack machine.
//!
//! Pass 1 binds labels to ROM addresses, pass 2 resolves symbols (allocating
//! variables from RAM address 16) and encodes one 16-bit word per
//! instruction.

pub mod codegen;
pub mod context;
pub mod error;
pub mod label;
pub mod msg;
pub mod output;
pub mod parser;
pub mod symbols;
pub mod util;

use arch::Tables;
use std::path::Path;

pub use context::TranslationContext;
pub use error::{Error, Result};
pub use label::Line;

/// Everything a translation run produced.
#[derive(Debug, Clone)]
pub struct Translation {
    pub context: TranslationContext,
    pub lines: Vec<Line>,
    pub words: Vec<String>,
}

/// Run both passes over `source` with a caller-owned context.
/// Diagnostics collected before a failure stay in `context`.
pub fn run<S: AsRef<str>>(
    source: &[S],
    tables: &Tables,
    context: &mut TranslationContext,
) -> Result<(Vec<Line>, Vec<String>)> {
    tables.validate()?;
    let lines = label::collect_labels(source, context)?;
    let words = codegen::generate(&lines, tables, context)?;
    Ok((lines, words))
}

pub fn translate<S: AsRef<str>>(source: &[S], tables: &Tables) -> Result<Translation> {
    let mut context = TranslationContext::new(tables);
    let (lines, words) = run(source, tables, &mut context)?;
    Ok(Translation {
        context,
        lines,
        words,
    })
}

/// Encode `source` into one binary word per instruction.
pub fn encode<S: AsRef<str>>(source: &[S], tables: &Tables) -> Result<Vec<String>> {
    translate(source, tables).map(|t| t.words)
}

/// Translate the file at `input` and commit the words to `output`.
/// `output` is left untouched when translation fails.
pub fn assemble(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    tables: &Tables,
) -> Result<Translation> {
    let source = output::read_source(input)?;
    let translation = translate(&source, tables)?;
    output::commit(output, &translation.words)?;
    Ok(translation)
}

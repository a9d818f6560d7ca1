use arch::{
    table::ABSENT_KEY,
    word::{is_word, to_word, COMPUTE_PREFIX},
    Tables,
};

use crate::{
    context::TranslationContext,
    error::{Error, Result},
    label::Line,
    parser::{Code, Operand},
};

/// Pass 2: encode every instruction into one word, allocating variables on
/// first use.
pub fn generate(
    lines: &[Line],
    tables: &Tables,
    ctx: &mut TranslationContext,
) -> Result<Vec<String>> {
    lines
        .iter()
        .map(|line| encode_line(line, tables, ctx).map_err(|e| e.at(line.idx)))
        .collect()
}

fn encode_line(line: &Line, tables: &Tables, ctx: &mut TranslationContext) -> Result<String> {
    match Code::parse(&line.text)? {
        Code::Address(operand) => Ok(to_word(resolve(&operand, line.idx, ctx)?)),
        Code::Compute { dest, comp, jump } => {
            encode_compute(dest.as_deref(), &comp, jump.as_deref(), tables)
        }
    }
}

/// Address of an `@` operand. Literals are used as is, known symbols are
/// looked up, anything else becomes a new variable.
pub fn resolve(operand: &Operand, line_idx: usize, ctx: &mut TranslationContext) -> Result<u16> {
    match operand {
        Operand::Literal(v) => Ok(*v),
        Operand::Symbol(name) => match ctx.symbols.resolve(name) {
            Some(addr) => Ok(addr),
            None => ctx.allocate(name, line_idx),
        },
    }
}

pub fn encode_compute(
    dest: Option<&str>,
    comp: &str,
    jump: Option<&str>,
    tables: &Tables,
) -> Result<String> {
    let comp_bits = tables
        .comp
        .get(comp)
        .ok_or_else(|| Error::UnknownComp(comp.to_string()))?;
    let dest_bits = tables
        .dest
        .lookup(dest)
        .ok_or_else(|| Error::UnknownDest(dest.unwrap_or(ABSENT_KEY).to_string()))?;
    let jump_bits = tables
        .jump
        .lookup(jump)
        .ok_or_else(|| Error::UnknownJump(jump.unwrap_or(ABSENT_KEY).to_string()))?;

    let word = format!("{}{}{}{}", COMPUTE_PREFIX, comp_bits, dest_bits, jump_bits);
    debug_assert!(is_word(&word), "tables are validated before encoding");
    Ok(word)
}

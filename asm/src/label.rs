use crate::{
    context::TranslationContext,
    error::{Error, Result},
    parser::Stmt,
    symbols::Ident,
};

/// A real instruction with the source line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub idx: usize,
    pub text: String,
}

/// Pass 1: bind every label to the ROM address of the next instruction and
/// return the instructions with labels, comments and blanks stripped.
pub fn collect_labels<S: AsRef<str>>(
    source: &[S],
    ctx: &mut TranslationContext,
) -> Result<Vec<Line>> {
    let mut lines = vec![];

    for (idx, raw) in source.iter().enumerate() {
        match Stmt::parse(raw.as_ref()).map_err(|e| e.at(idx))? {
            Stmt::Blank | Stmt::Comment => {}
            Stmt::Instruction(text) => lines.push(Line { idx, text }),
            Stmt::Label(name) => {
                let pc = u16::try_from(lines.len())
                    .map_err(|_| Error::AddressOverflow(name.clone()).at(idx))?;
                let prev = ctx.symbols.bind(name.clone(), pc, Ident::Label, Some(idx));
                match prev {
                    Some(prev) if prev.kind == Ident::Predefined => {
                        ctx.warn(idx, format!("Label `{}` overrides a predefined symbol", name));
                    }
                    Some(prev) => {
                        ctx.warn(idx, format!("Re-defined label: `{}`", name));
                        if let Some(prev_idx) = prev.line_idx {
                            ctx.note(
                                prev_idx,
                                "Already defined here. The value has been overridden.".to_string(),
                            );
                        }
                    }
                    None => {}
                }
            }
        }
    }

    Ok(lines)
}

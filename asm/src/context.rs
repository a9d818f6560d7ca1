use arch::{word::VAR_BASE, Tables};

use crate::{
    error::{Error, Result},
    msg::Msg,
    symbols::{Ident, SymbolTable},
};

/// State of one translation run, threaded through both passes.
#[derive(Debug, Clone)]
pub struct TranslationContext {
    pub symbols: SymbolTable,
    next_var: u32,
    msgs: Vec<(usize, Msg)>,
}

impl TranslationContext {
    pub fn new(tables: &Tables) -> Self {
        TranslationContext {
            symbols: SymbolTable::initialize(&tables.symbols),
            next_var: VAR_BASE as u32,
            msgs: vec![],
        }
    }

    /// Bind `name` to the next free variable address.
    pub fn allocate(&mut self, name: &str, line_idx: usize) -> Result<u16> {
        let addr =
            u16::try_from(self.next_var).map_err(|_| Error::AddressOverflow(name.to_string()))?;
        self.symbols
            .bind(name.to_string(), addr, Ident::Variable, Some(line_idx));
        self.next_var += 1;
        Ok(addr)
    }

    /// Address the next new variable would get.
    pub fn next_var(&self) -> u32 {
        self.next_var
    }

    pub fn warn(&mut self, line_idx: usize, msg: String) {
        self.msgs.push((line_idx, Msg::Warn(msg)));
    }

    pub fn note(&mut self, line_idx: usize, msg: String) {
        self.msgs.push((line_idx, Msg::Note(msg)));
    }

    pub fn msgs(&self) -> &[(usize, Msg)] {
        &self.msgs
    }
}

use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ident {
    Predefined,
    Label,
    Variable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub addr: u16,
    pub kind: Ident,
    /// 0-based source line that introduced the symbol.
    #[serde(skip)]
    pub line_idx: Option<usize>,
}

/// Symbol name to address, in insertion order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct SymbolTable(IndexMap<String, Symbol>);

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable(IndexMap::new())
    }

    /// Table seeded with the machine's predefined symbols.
    pub fn initialize(predefined: &IndexMap<String, u16>) -> Self {
        let mut table = SymbolTable::new();
        for (name, addr) in predefined {
            table.bind(name.clone(), *addr, Ident::Predefined, None);
        }
        table
    }

    /// Insert or overwrite. Returns the previous binding.
    pub fn bind(
        &mut self,
        name: String,
        addr: u16,
        kind: Ident,
        line_idx: Option<usize>,
    ) -> Option<Symbol> {
        self.0.insert(
            name,
            Symbol {
                addr,
                kind,
                line_idx,
            },
        )
    }

    pub fn resolve(&self, name: &str) -> Option<u16> {
        self.0.get(name).map(|sym| sym.addr)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.0.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_and_resolve() {
        let mut predefined = IndexMap::new();
        predefined.insert("SP".to_string(), 0);
        predefined.insert("SCREEN".to_string(), 16384);

        let mut table = SymbolTable::initialize(&predefined);
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("SCREEN"), Some(16384));
        assert_eq!(table.resolve("LOOP"), None);

        assert_eq!(table.bind("LOOP".into(), 4, Ident::Label, Some(7)), None);
        let prev = table.bind("LOOP".into(), 9, Ident::Label, Some(12)).unwrap();
        assert_eq!(prev.addr, 4);
        assert_eq!(prev.line_idx, Some(7));
        assert_eq!(table.resolve("LOOP"), Some(9));
        assert_eq!(table.len(), 3);

        let names: Vec<&str> = table.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["SP", "SCREEN", "LOOP"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut table = SymbolTable::new();
        table.bind("loop".into(), 1, Ident::Label, Some(0));
        assert_eq!(table.resolve("LOOP"), None);
        assert_eq!(table.get("loop").map(|s| s.kind), Some(Ident::Label));
    }
}

pub mod hack;
pub mod table;
pub mod word;

pub use hack::HACK;
pub use table::{CodeTable, TableError, TableKind, Tables};

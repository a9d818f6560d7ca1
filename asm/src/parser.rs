use color_print::cformat;

use crate::error::{Error, Result};

// ----------------------------------------------------------------------------
// Statement

/// One source line, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Blank,
    Comment,
    Label(String),
    Instruction(String),
}

impl Stmt {
    pub fn parse(raw: &str) -> Result<Stmt> {
        let (code, commented) = match raw.find("//") {
            Some(pos) => (&raw[..pos], true),
            None => (raw, false),
        };

        // (LOOP)
        if let Some(open) = code.find('(') {
            let malformed = || Error::MalformedLabel(code.trim().to_string());
            let rest = &code[open + 1..];
            let close = rest.find(')').ok_or_else(malformed)?;
            let name = rest[..close].trim();
            if name.is_empty() {
                return Err(malformed());
            }
            return Ok(Stmt::Label(name.to_string()));
        }

        let code = code.trim();
        if code.is_empty() {
            return Ok(if commented { Stmt::Comment } else { Stmt::Blank });
        }
        Ok(Stmt::Instruction(code.to_string()))
    }
}

// ----------------------------------------------------------------------------
// Instruction

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    /// `@value`
    Address(Operand),
    /// `dest=comp;jump`
    Compute {
        dest: Option<String>,
        comp: String,
        jump: Option<String>,
    },
}

impl Code {
    pub fn parse(text: &str) -> Result<Code> {
        if let Some((_, operand)) = text.split_once('@') {
            return Ok(Code::Address(Operand::parse(text, operand.trim())?));
        }

        let malformed = || Error::MalformedInstruction(text.to_string());

        let (dest, rest) = match text.split_once('=') {
            Some((dest, rest)) => (Some(dest.trim()), rest),
            None => (None, text),
        };
        let (comp, jump) = match rest.split_once(';') {
            Some((comp, jump)) => (comp.trim(), Some(jump.trim())),
            None => (rest.trim(), None),
        };

        // Only the first `=` and `;` may appear, in that order.
        if rest.contains('=')
            || dest.is_some_and(|d| d.contains(';'))
            || jump.is_some_and(|j| j.contains(';'))
        {
            return Err(malformed());
        }
        if comp.is_empty() {
            return Err(Error::EmptyComp(text.to_string()));
        }
        if dest.is_some_and(str::is_empty) || jump.is_some_and(str::is_empty) {
            return Err(malformed());
        }

        Ok(Code::Compute {
            dest: dest.map(str::to_string),
            comp: comp.to_string(),
            jump: jump.map(str::to_string),
        })
    }

    pub fn cformat(&self) -> String {
        match self {
            Code::Address(operand) => cformat!("<red>@</>{}", operand.cfmt()),
            Code::Compute { dest, comp, jump } => {
                let dest = dest
                    .as_ref()
                    .map(|d| cformat!("<blue>{}</>=", d))
                    .unwrap_or_default();
                let jump = jump
                    .as_ref()
                    .map(|j| cformat!(";<red>{}</>", j))
                    .unwrap_or_default();
                cformat!("{}<c>{}</>{}", dest, comp, jump)
            }
        }
    }
}

// ----------------------------------------------------------------------------
// Operand

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Literal(u16),
    Symbol(String),
}

impl Operand {
    fn parse(text: &str, s: &str) -> Result<Operand> {
        if s.is_empty() {
            return Err(Error::MalformedInstruction(text.to_string()));
        }
        let (negative, digits) = match s.strip_prefix('-') {
            Some(digits) => (true, digits),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        if !is_decimal(digits) {
            return Ok(Operand::Symbol(s.to_string()));
        }
        match digits.parse::<u16>() {
            // -0 is still address 0
            Ok(v) if !negative || v == 0 => Ok(Operand::Literal(v)),
            _ => Err(Error::AddressOverflow(s.to_string())),
        }
    }

    fn cfmt(&self) -> String {
        match self {
            Operand::Literal(v) => cformat!("<y>{}</>", v),
            Operand::Symbol(s) => cformat!("<g>{}</>", s),
        }
    }
}

fn is_decimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

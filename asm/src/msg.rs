use color_print::cprintln;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

impl Msg {
    fn header(&self) {
        match self {
            Msg::Error(msg) => cprintln!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => cprintln!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => cprintln!("<green,bold>note</>: {}", msg),
        }
    }

    /// Print with a pointer to `file:line` and the raw line.
    pub fn print(&self, info: (&str, usize, &str)) {
        let (file, line, raw) = info;
        self.header();
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line, raw);
        cprintln!("      <blue>|</>");
    }

    pub fn print_bare(&self) {
        self.header();
    }
}

/// Print messages collected while translating `source`.
pub fn dump(msgs: &[(usize, Msg)], file: &str, source: &[String]) {
    for (idx, msg) in msgs {
        let raw = source.get(*idx).map(|s| s.as_str()).unwrap_or("");
        msg.print((file, idx + 1, raw));
    }
}

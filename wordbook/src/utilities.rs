use std::io::{self, Write};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Repaints the whole page and leaves the cursor on the input prompt.
pub fn redraw(page: &str, searching: bool) -> io::Result<()> {
    let label = if searching { "Searching…" } else { "Search" };
    let mut stdout = io::stdout().lock();
    write!(stdout, "{CLEAR_SCREEN}{page}\n{label} >> ")?;
    stdout.flush()
}

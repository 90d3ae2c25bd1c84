//! `termfonts` command line tool.

use termfonts::{Result, cli};

fn main() -> Result<()> {
    cli::run()
}

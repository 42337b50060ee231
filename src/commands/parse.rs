//! Implementation of the `parse` command.

use super::to_json;
use crate::cli::ParseArgs;
use crate::error::Result;
use crate::parser::load_document;

/// Execute `addon-config parse`: print any document as JSON.
pub fn cmd_parse(args: ParseArgs) -> Result<()> {
    println!("{}", render_parse(&args)?);
    Ok(())
}

pub(super) fn render_parse(args: &ParseArgs) -> Result<String> {
    let doc = load_document(&args.file)?;
    to_json(&doc)
}

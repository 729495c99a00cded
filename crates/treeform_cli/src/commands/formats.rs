//! Format listing, example and syntax help commands

use miette::{IntoDiagnostic, Result};
use treeform_parser::{FormatParser, ParseError, Parser, ParserRegistry};

pub fn run_formats(registry: &ParserRegistry) {
    for parser in registry.parsers() {
        println!(
            "{:<10} {:<10} {}",
            parser.id(),
            parser.display_name(),
            parser.extensions().join(", ")
        );
    }
}

pub fn run_example(registry: &ParserRegistry, id: &str) -> Result<()> {
    let parser = lookup(registry, id)?;
    println!("{}", parser.example());
    Ok(())
}

pub fn run_syntax(registry: &ParserRegistry, id: &str) -> Result<()> {
    let parser = lookup(registry, id)?;

    println!("{} syntax:", parser.display_name());
    let width = parser
        .help()
        .iter()
        .map(|entry| entry.syntax.len())
        .max()
        .unwrap_or(0);
    for entry in parser.help() {
        println!("  {:<width$}  {}", entry.syntax, entry.description);
    }
    Ok(())
}

fn lookup<'a>(registry: &'a ParserRegistry, id: &str) -> Result<&'a FormatParser> {
    registry
        .get(id)
        .ok_or_else(|| ParseError::not_found(id))
        .into_diagnostic()
}

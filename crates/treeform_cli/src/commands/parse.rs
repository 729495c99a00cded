//! Parse command implementation

use std::io::Read;
use std::path::Path;

use miette::{IntoDiagnostic, Result};
use tracing::{debug, error};
use treeform_parser::{ParseError, Parser, ParserRegistry};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::output::output_tree;

pub struct ParseArgs<'a> {
    pub file: Option<&'a Path>,
    pub format: Option<&'a str>,
    pub output: Option<OutputFormat>,
    pub compact: bool,
}

pub fn run_parse(config: &Config, args: ParseArgs<'_>) -> Result<bool> {
    let registry = config.registry();
    let id = resolve_format(&registry, config, args.file, args.format)?;
    let source = read_source(args.file)?;

    debug!("Parsing {} bytes as {}", source.len(), id);

    match registry.parse(&id, &source) {
        Ok(tree) => {
            let output = args.output.unwrap_or(config.output);
            output_tree(&tree, output, args.compact || config.compact)?;
            Ok(false)
        }
        Err(e @ ParseError::InvalidFormat { .. }) => {
            error!("{}", e);
            Ok(true)
        }
        Err(e) => Err(e).into_diagnostic(),
    }
}

/// Picks the format id from the flag, the file extension, then the config.
fn resolve_format(
    registry: &ParserRegistry,
    config: &Config,
    file: Option<&Path>,
    explicit: Option<&str>,
) -> Result<String> {
    if let Some(id) = explicit {
        return Ok(id.to_string());
    }

    let by_extension = file
        .and_then(|path| path.extension())
        .and_then(|ext| ext.to_str())
        .and_then(|ext| registry.find_by_extension(ext));
    if let Some(parser) = by_extension {
        return Ok(parser.id().to_string());
    }

    match config.default_format {
        Some(format) => Ok(format.id().to_string()),
        None => Err(miette::miette!(
            "Cannot determine the input format. Use --format or set defaultFormat in the config."
        )),
    }
}

fn read_source(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .map_err(|e| miette::miette!("Failed to read {}: {}", path.display(), e)),
        _ => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .into_diagnostic()?;
            Ok(source)
        }
    }
}

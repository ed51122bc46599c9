use crate::error::CliError;
use log::{debug, info};
use mdh_pipeline::Pipeline;
use std::fs;
use std::io;
use std::path::Path;

/// Line counts of a finished conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub input_lines: usize,
    pub output_lines: usize,
}

/// Fail with [`CliError::MissingInput`] unless `input` exists.
pub fn ensure_input_exists(input: &Path) -> Result<(), CliError> {
    if input.exists() {
        Ok(())
    } else {
        Err(CliError::MissingInput(input.to_path_buf()))
    }
}

/// Convert the Markdown file at `input` into HTML at `output`.
///
/// The whole input is read before conversion and the whole output written
/// after it. An existing `output` is overwritten. Nothing is written if the
/// input is missing or unreadable; a missing input surfaces as
/// [`CliError::MissingInput`] from the read itself.
pub fn convert_file(
    input: &Path,
    output: &Path,
    pipeline: &Pipeline,
) -> Result<ConvertSummary, CliError> {
    let source = fs::read_to_string(input).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => CliError::MissingInput(input.to_path_buf()),
        _ => CliError::Read {
            path: input.to_path_buf(),
            source,
        },
    })?;

    let doc = mdh_pipeline::Document::from_source(&source);
    debug!("read {} lines from {}", doc.len(), input.display());

    let html = pipeline.run(&doc);

    fs::write(output, html.render()).map_err(|source| CliError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!("wrote {} lines to {}", html.len(), output.display());

    Ok(ConvertSummary {
        input_lines: doc.len(),
        output_lines: html.len(),
    })
}

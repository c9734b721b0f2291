//! Implementation of the render operation.
//!
//! Responsibility: translate CLI arguments into a `VarMap`, call the core
//! substitution engine, and perform the file I/O around it.  No string
//! logic lives here.

use std::fs;
use std::path::Path;

use tracing::{debug, info, instrument};

use stamp_core::VarMap;

use crate::{
    cli::Cli,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the render pipeline.
///
/// Sequence:
/// 1. Parse `--var` assignments (fails before any file I/O)
/// 2. Read the template file
/// 3. Apply the substitutions
/// 4. Create output parent directories
/// 5. Write the output file (overwrites an existing file)
///
/// The output path is only touched in step 5, so any earlier failure leaves
/// a pre-existing file at that path byte-identical.
#[instrument(skip_all, fields(template = %cli.template.display(), out = %cli.out.display()))]
pub fn execute(cli: Cli, output: OutputManager) -> CliResult<()> {
    // 1. Variables first: a malformed --var must fail before the template
    //    is even opened.
    let vars = VarMap::from_assignments(&cli.vars)?;
    debug!(vars = vars.len(), "assignments parsed");

    // 2. Read the template.
    let template = read_template(&cli.template)?;
    debug!(bytes = template.len(), "template read");

    // 3. Substitute.
    let rendered = stamp_core::render(&template, &vars);

    // 4 + 5. Write the artifact.
    write_output(&cli.out, &rendered)?;
    info!(path = %cli.out.display(), bytes = rendered.len(), "output written");

    // The artifact is on disk at this point; a broken stdout must not turn
    // a successful render into a failure.
    if let Err(e) = output.success(&format!("Rendered {}", cli.out.display())) {
        debug!("console write failed: {e}");
    }

    Ok(())
}

/// Read the template as UTF-8 text.
///
/// A missing file maps to [`CliError::TemplateNotFound`]; every other
/// failure (permissions, invalid UTF-8) to [`CliError::TemplateRead`].
fn read_template(path: &Path) -> CliResult<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CliError::TemplateNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CliError::TemplateRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Create the output's parent directories and write the file.
///
/// `create_dir_all` is idempotent — an already-existing tree is a no-op,
/// never an error.
fn write_output(path: &Path, content: &str) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        // `Path::parent` yields `Some("")` for bare file names; nothing to
        // create in that case.
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CliError::OutputWrite {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    fs::write(path, content).map_err(|e| CliError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

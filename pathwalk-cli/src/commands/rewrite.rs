//! Command to rewrite path components.

use crate::error::CliError;
use crate::utils::{resolve_context, run_to_string, GlobalOptions};
use clap::Args;

/// Replace the root, basename, or extension of a path.
#[derive(Args)]
pub struct RewriteCommand {
    /// Path to rewrite
    pub path: String,

    /// New root (replaces the old root verbatim)
    #[arg(long, value_name = "ROOT")]
    pub root: Option<String>,

    /// New basename (separators are trimmed)
    #[arg(long, value_name = "NAME")]
    pub basename: Option<String>,

    /// New extension (with or without the leading dot)
    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,
}

impl RewriteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if self.root.is_none() && self.basename.is_none() && self.extension.is_none() {
            return Err(CliError::InvalidArguments(
                "nothing to rewrite: pass --root, --basename, or --extension".to_string(),
            ));
        }

        let ctx = resolve_context(global)?;
        let mut path = self.path;

        if let Some(root) = &self.root {
            path = run_to_string(|buf| ctx.change_root(&path, root, buf));
        }
        if let Some(basename) = &self.basename {
            path = run_to_string(|buf| ctx.change_basename(&path, basename, buf));
        }
        if let Some(extension) = &self.extension {
            path = run_to_string(|buf| ctx.change_extension(&path, extension, buf));
        }

        println!("{path}");
        Ok(())
    }
}

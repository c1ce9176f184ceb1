//! Command to inspect the components of a path.

use crate::error::CliError;
use crate::utils::{resolve_context, GlobalOptions};
use clap::{Args, ValueEnum};
use serde_json::json;

/// Output format for the info command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable key/value lines.
    Text,
    /// A single JSON object.
    Json,
}

/// Inspect the components of a path.
#[derive(Args)]
pub struct InfoCommand {
    /// Path to inspect
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

impl InfoCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let ctx = resolve_context(global)?;

        let root = ctx.root(&self.path);
        let dirname = ctx.dirname(&self.path);
        let basename = ctx.basename(&self.path);
        let extension = ctx.extension(&self.path);
        let absolute = ctx.is_absolute(&self.path);
        let segments: Vec<&str> = ctx.segments(&self.path).map(|s| s.text()).collect();

        match self.output {
            OutputFormat::Text => {
                println!("path:      {}", self.path);
                println!("style:     {}", ctx.style());
                println!("root:      {root}");
                println!("absolute:  {absolute}");
                println!("dirname:   {dirname}");
                println!("basename:  {}", basename.unwrap_or(""));
                println!("extension: {}", extension.unwrap_or(""));
                println!("segments:  {}", segments.join(" "));
            }
            OutputFormat::Json => {
                let value = json!({
                    "path": self.path,
                    "style": ctx.style().to_string(),
                    "root": root,
                    "absolute": absolute,
                    "dirname": dirname,
                    "basename": basename,
                    "extension": extension,
                    "segments": segments,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        }

        Ok(())
    }
}

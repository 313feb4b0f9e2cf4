use clap::Parser;

use crate::error::AppError;

#[derive(Parser, Debug)]
#[command(name = "rename-template")]
#[command(author, version, long_about = None)]
#[command(about = "Rename the project template to your project name, then delete this tool")]
pub struct Args {
    /// New project name, using underscores instead of hyphens (e.g. my_project)
    #[arg(value_name = "NEW_NAME", allow_hyphen_values = true)]
    pub names: Vec<String>,
}

impl Args {
    /// The single positional argument, or a usage error
    pub fn new_name(&self) -> Result<&str, AppError> {
        match self.names.as_slice() {
            [name] => Ok(name),
            other => Err(AppError::Usage { count: other.len() }),
        }
    }
}

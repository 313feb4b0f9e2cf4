use clap::error::ErrorKind;
use clap::Parser;
use rename_template::cli::Args;
use rename_template::output::display_completion;
use rename_template::{logging, rename_template, validate_name, AppError, ExitCode, Progress};
use tracing::{debug, error};

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(ExitCode::InvalidArguments.into());
            }
        },
    };

    logging::init();

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let name = validate_name(args.new_name()?)?;

    let root = std::env::current_dir().map_err(AppError::WorkingDirectory)?;
    debug!(root = ?root, "Working directory");

    let mut progress = Progress::new();
    let result = rename_template(&root, &name, &mut progress)?;

    display_completion(&result, &mut std::io::stdout()).map_err(AppError::Output)?;

    Ok(())
}

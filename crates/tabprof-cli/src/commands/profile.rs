//! Profile command - write the JSON profile of a data file.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::cli::ProfileOptions;

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    pretty: bool,
    options: ProfileOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = super::profile_file(&file, &options)?;

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    match output {
        Some(path) => {
            fs::write(&path, json + "\n")?;
            tracing::info!(output = %path.display(), "Wrote profile");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}

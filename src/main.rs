//! pwdb - Entry Point
//!
//! Checks each username given on the command line against the credential
//! table, with the simulated server latency.

use log::info;
use std::process;
use tokio::io::AsyncWriteExt;

use pwdb::LookupConfig;
use pwdb::auth::check_user_exists_async;
use pwdb::error::PwdbError;
use pwdb::error::handlers::{
    EXIT_ALL_FOUND, EXIT_NOT_FOUND, EXIT_USAGE, error_to_exit_code, handle_error,
};
use pwdb::utils::logging::{log_lookup, setup_logging};

#[tokio::main]
async fn main() {
    setup_logging();

    let usernames: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    if usernames.is_empty() {
        eprintln!("usage: pwdb <username>...");
        process::exit(EXIT_USAGE);
    }

    let code = match run(&usernames).await {
        Ok(true) => EXIT_ALL_FOUND,
        Ok(false) => EXIT_NOT_FOUND,
        Err(e) => {
            handle_error(&e);
            error_to_exit_code(&e)
        }
    };

    process::exit(code);
}

/// Returns whether every username was found
async fn run(usernames: &[String]) -> Result<bool, PwdbError> {
    let config = LookupConfig::load()?;
    info!("Lookup config: {:?}", config);

    let mut stdout = tokio::io::stdout();
    let mut all_found = true;

    for username in usernames {
        let exists = check_user_exists_async(username, &config, &mut stdout).await?;
        log_lookup(username, exists);

        // terminate the progress line
        if config.show_progress && !username.is_empty() {
            stdout.write_all(b"\n").await?;
        }
        let verdict = if exists { "found" } else { "not found" };
        stdout
            .write_all(format!("{username}: {verdict}\n").as_bytes())
            .await?;

        all_found &= exists;
    }

    stdout.flush().await?;
    Ok(all_found)
}

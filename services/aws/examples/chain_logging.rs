//! Example demonstrating credential resolution logging

use credchain_aws::{ConsoleCredentialProvider, CredentialResolver};
use credchain_core::{Context, OsEnv};
use credchain_file_read_tokio::TokioFileRead;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logger with debug level
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    // No line reader is configured, so console fallback fails instead of blocking.
    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);

    let mut resolver = CredentialResolver::new(ctx)
        .with_console(ConsoleCredentialProvider::new().with_prompt("never shown"));

    println!("Attempting to resolve credentials...\n");
    match resolver.resolve_round().await {
        Ok(()) => println!("\nFound credential: {:?}", resolver.credential()),
        Err(err) => println!("\nNo credential found: {err} ({})", err.kind()),
    }

    Ok(())
}

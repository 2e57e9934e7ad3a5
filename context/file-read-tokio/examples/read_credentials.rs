use credchain_core::{Context, OsEnv, Result};
use credchain_file_read_tokio::TokioFileRead;
use std::env;

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_file_read(TokioFileRead).with_env(OsEnv);

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "~/.aws/credentials".to_string());
    let Some(path) = ctx.expand_home_dir(&path) else {
        eprintln!("Home directory not found, can't expand {path}");
        return Ok(());
    };

    match ctx.file_read_as_string(&path).await {
        Ok(content) => {
            // Only show key names, values are secrets.
            let keys: Vec<&str> = content
                .lines()
                .filter_map(|line| line.split_once('='))
                .map(|(key, _)| key.trim())
                .collect();
            println!("{path} defines {} keys: {keys:?}", keys.len());
        }
        Err(e) => {
            eprintln!("Failed to read file: {e} ({})", e.kind());
        }
    }

    Ok(())
}

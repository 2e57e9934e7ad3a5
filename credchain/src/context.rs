use credchain_core::{Context, OsEnv};
use credchain_file_read_tokio::TokioFileRead;
use credchain_line_read_tokio::DefaultLineRead;

/// Create a context for the current process.
///
/// - Files are read with tokio.
/// - Environment variables and home dir come from the OS.
/// - Console input is read from the terminal with echo disabled, or from
///   piped stdin when stdin isn't a terminal.
pub fn default_context() -> Context {
    Context::new()
        .with_file_read(TokioFileRead)
        .with_env(OsEnv)
        .with_line_read(DefaultLineRead::new())
}

//! Resolve temporary AWS credentials from the environment, the shared credentials
//! file or pasted console input.
//!
//! This crate re-exports [`credchain_core`] and [`credchain_aws`], and wires the
//! default runtime components together.
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> credchain::Result<()> {
//! let mut resolver = credchain::aws::CredentialResolver::new(credchain::default_context());
//! let cred = resolver.resolve().await?;
//! println!("credentials loaded from {}", cred.source());
//! # Ok(())
//! # }
//! ```

pub use credchain_core::*;

pub mod aws {
    //! AWS credential resolution.
    pub use credchain_aws::*;
}

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

//! Core components for resolving credentials.
//!
//! This crate provides the foundational types and traits for the credchain ecosystem.
//! It defines the abstractions that let a service crate describe *where* a credential
//! may come from, while the caller decides *how* files, environment variables and
//! console input are actually accessed.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for file reading, line reading and environment access
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and validity checks (`Credential`)
//! - **Chain**: An ordered, consume-once list of providers (`ProvideCredentialChain`)
//!
//! ## Example
//!
//! ```no_run
//! use credchain_core::{Context, Credential, ProvideCredential, ProvideCredentialChain, Result};
//! use async_trait::async_trait;
//!
//! #[derive(Clone)]
//! struct MyCredential {
//!     key: String,
//!     secret: String,
//! }
//!
//! impl Credential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty() && !self.secret.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-access-key".to_string(),
//!             secret: "my-secret-key".to_string(),
//!         }))
//!     }
//! }
//!
//! # async fn example() {
//! let ctx = Context::new();
//! let mut chain = ProvideCredentialChain::new().push(MyProvider);
//! let cred = chain.provide_credential(&ctx).await;
//! assert!(cred.is_some());
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`FileRead`]: For asynchronous file reading
//! - [`LineRead`]: For line-oriented operator input
//! - [`Env`]: For environment variable access
//! - [`ProvideCredential`]: For loading credentials from various sources
//! - [`Credential`]: For validating credentials

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod utils;

mod context;
pub use context::{
    Context, Env, FileRead, LineRead, NoopEnv, NoopFileRead, NoopLineRead, OsEnv, StaticEnv,
    StaticLineRead,
};

mod api;
pub use api::{Credential, ProvideCredential};
mod chain;
pub use chain::ProvideCredentialChain;

mod error;
pub use error::{Error, ErrorKind, Result};

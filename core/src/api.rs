use crate::{Context, Result};
use std::fmt::Debug;

/// Credential is the trait implemented by every value a provider can produce.
pub trait Credential: Send + Sync + Unpin + 'static {
    /// Check if the credential is structurally complete.
    fn is_valid(&self) -> bool;
}

impl<T: Credential> Credential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(cred) = self else {
            return false;
        };

        cred.is_valid()
    }
}

/// ProvideCredential is the trait used to load a credential from one source.
///
/// A provider looks for a complete credential in its own source only. It returns:
///
/// - `Ok(Some(cred))` if the source holds a complete credential.
/// - `Ok(None)` if the source is absent or incomplete.
/// - `Err(err)` if the source could not be consulted at all.
///
/// Callers such as [`crate::ProvideCredentialChain`] treat both `Ok(None)` and `Err`
/// as "try the next source".
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Credential;

    /// Load credential from the current context.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

use crate::{Context, Credential, ProvideCredential};
use log::{debug, warn};
use std::fmt::{self, Debug};

/// A chain of credential providers that will be tried in order.
///
/// Every provider is consulted at most once over the lifetime of the chain. A provider
/// that yields nothing, fails, or yields an incomplete credential is skipped for good;
/// the next call resumes from the first untried provider.
pub struct ProvideCredentialChain<C: Credential> {
    providers: Vec<Box<dyn ProvideCredential<Credential = C>>>,
    next: usize,
}

impl<C: Credential> ProvideCredentialChain<C> {
    /// Create a new empty credential provider chain.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            next: 0,
        }
    }

    /// Add a credential provider to the end of the chain.
    pub fn push(mut self, provider: impl ProvideCredential<Credential = C>) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Number of providers that have not been tried yet.
    pub fn remaining(&self) -> usize {
        self.providers.len() - self.next
    }

    /// Returns true once every provider has been tried without success.
    pub fn is_exhausted(&self) -> bool {
        self.next >= self.providers.len()
    }

    /// Try the untried providers in order and return the first complete credential.
    ///
    /// Returns `None` when the chain is exhausted.
    pub async fn provide_credential(&mut self, ctx: &Context) -> Option<C> {
        while let Some(provider) = self.providers.get(self.next) {
            debug!("trying credential provider: {provider:?}");

            match provider.provide_credential(ctx).await {
                Ok(Some(cred)) if cred.is_valid() => {
                    debug!("loaded credential from provider: {provider:?}");
                    return Some(cred);
                }
                Ok(Some(_)) => {
                    debug!("provider {provider:?} returned an incomplete credential");
                }
                Ok(None) => {
                    debug!("no credential found in provider: {provider:?}");
                }
                Err(err) => {
                    warn!("error loading credential from provider {provider:?}: {err:?}");
                }
            }

            self.next += 1;
        }

        None
    }
}

impl<C: Credential> Default for ProvideCredentialChain<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Credential> Debug for ProvideCredentialChain<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProvideCredentialChain")
            .field("providers", &self.providers)
            .field("next", &self.next)
            .finish()
    }
}

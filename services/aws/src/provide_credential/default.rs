use crate::provide_credential::{CredentialsFileProvider, EnvCredentialProvider};
use crate::CredentialSet;
use credchain_core::ProvideCredentialChain;

/// Build the non-interactive chain in priority order.
///
/// Resolution order:
///
/// 1. Environment variables
/// 2. Shared credentials file (`~/.aws/credentials`)
///
/// Console input is not part of the chain, it is only reached once every source
/// here has been tried.
pub fn default_chain() -> ProvideCredentialChain<CredentialSet> {
    ProvideCredentialChain::new()
        .push(EnvCredentialProvider::new())
        .push(CredentialsFileProvider::new())
}

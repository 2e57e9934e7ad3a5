use crate::provide_credential::{default_chain, ConsoleCredentialProvider};
use crate::{CredentialSet, EnvExport};
use credchain_core::{Context, Credential, ProvideCredential, ProvideCredentialChain, Result};
use log::{debug, info};

/// CredentialResolver fills a [`CredentialSet`] from the non-interactive chain, falling
/// back to console input once every source in the chain has been tried.
///
/// ```no_run
/// use credchain_aws::CredentialResolver;
/// use credchain_core::{Context, OsEnv};
///
/// # async fn example() -> credchain_core::Result<()> {
/// let mut resolver = CredentialResolver::new(Context::new().with_env(OsEnv));
/// while !resolver.is_resolved() {
///     resolver.resolve_round().await?;
/// }
/// println!("resolved from {}", resolver.credential().source());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CredentialResolver {
    ctx: Context,
    chain: ProvideCredentialChain<CredentialSet>,
    console: ConsoleCredentialProvider,
    credential: CredentialSet,
}

impl CredentialResolver {
    /// Create a resolver using the default chain: environment, then credentials file.
    pub fn new(ctx: Context) -> Self {
        Self::with_chain(ctx, default_chain())
    }

    /// Create a resolver with a custom non-interactive chain.
    pub fn with_chain(ctx: Context, chain: ProvideCredentialChain<CredentialSet>) -> Self {
        Self {
            ctx,
            chain,
            console: ConsoleCredentialProvider::new(),
            credential: CredentialSet::default(),
        }
    }

    /// Replace the console fallback, e.g. to change its prompt.
    pub fn with_console(mut self, console: ConsoleCredentialProvider) -> Self {
        self.console = console;
        self
    }

    /// Run one resolution round.
    ///
    /// - Does nothing once the credential is resolved.
    /// - Otherwise tries the untried sources of the chain in order.
    /// - If the chain is exhausted, runs one pass of console input.
    ///
    /// Returns an [`credchain_core::ErrorKind::InputExhausted`] error if console input
    /// ends before the credential is complete; the current credential is left untouched.
    pub async fn resolve_round(&mut self) -> Result<()> {
        if self.is_resolved() {
            debug!("credential already resolved from {}", self.credential.source());
            return Ok(());
        }

        if let Some(cred) = self.chain.provide_credential(&self.ctx).await {
            info!("credentials loaded from {}", cred.source());
            self.credential = cred;
            return Ok(());
        }

        debug!("all credential sources exhausted, asking for console input");
        match self.console.provide_credential(&self.ctx).await? {
            Some(cred) if cred.is_valid() => {
                info!("credentials loaded from {}", cred.source());
                self.credential = cred;
            }
            _ => debug!("console input didn't produce a complete credential"),
        }
        Ok(())
    }

    /// Run rounds until the credential is resolved.
    pub async fn resolve(&mut self) -> Result<&CredentialSet> {
        while !self.is_resolved() {
            self.resolve_round().await?;
        }
        Ok(&self.credential)
    }

    /// Returns true once all three credential values are known.
    pub fn is_resolved(&self) -> bool {
        self.credential.is_valid()
    }

    /// The credential resolved so far.
    pub fn credential(&self) -> &CredentialSet {
        &self.credential
    }

    /// Environment assignments for the resolved credential, `None` until resolved.
    pub fn exports(&self) -> Option<Vec<EnvExport>> {
        self.credential.exports()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::CredentialSource;
    use credchain_core::{ErrorKind, StaticEnv, StaticLineRead};
    use credchain_file_read_tokio::TokioFileRead;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    fn env_triple() -> HashMap<String, String> {
        HashMap::from([
            (AWS_ACCESS_KEY_ID.to_string(), "AKIAENV".to_string()),
            (AWS_SECRET_ACCESS_KEY.to_string(), "SECRETENV".to_string()),
            (AWS_SESSION_TOKEN.to_string(), "TOKENENV".to_string()),
        ])
    }

    #[tokio::test]
    async fn test_env_resolves_in_one_round() -> anyhow::Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();

        let home = tempdir()?;
        fs::create_dir_all(home.path().join(".aws"))?;
        fs::write(
            home.path().join(".aws/credentials"),
            "aws_access_key_id=AKIAFILE\naws_secret_access_key=S\naws_session_token=T\n",
        )?;
        let lines = StaticLineRead::new(["AKIA1", "SECRET2", "TOKEN3"]);
        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_line_read(lines.clone())
            .with_env(StaticEnv {
                home_dir: Some(home.path().to_path_buf()),
                envs: env_triple(),
            });

        let mut resolver = CredentialResolver::new(ctx);
        resolver.resolve_round().await?;

        assert!(resolver.is_resolved());
        assert_eq!(resolver.credential().source(), CredentialSource::Environment);
        assert_eq!(resolver.credential().access_key_id(), Some("AKIAENV"));
        assert!(lines.prompts().is_empty());
        assert_eq!(lines.remaining(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn test_file_resolves_without_env() -> anyhow::Result<()> {
        let home = tempdir()?;
        fs::create_dir_all(home.path().join(".aws"))?;
        fs::write(
            home.path().join(".aws/credentials"),
            "[default]\naws_access_key_id = AKIAFILE\naws_secret_access_key = S\naws_session_token = T\n",
        )?;
        let lines = StaticLineRead::new(Vec::<String>::new());
        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_line_read(lines.clone())
            .with_env(StaticEnv {
                home_dir: Some(home.path().to_path_buf()),
                envs: HashMap::new(),
            });

        let mut resolver = CredentialResolver::new(ctx);
        let cred = resolver.resolve().await?;

        assert_eq!(cred.source(), CredentialSource::CredentialsFile);
        assert_eq!(cred.access_key_id(), Some("AKIAFILE"));
        assert!(lines.prompts().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_falls_back_to_console_once() -> anyhow::Result<()> {
        let lines = StaticLineRead::new(["aws_session_token=TOK", "AKIA1", "SECRET2"]);
        let ctx = Context::new()
            .with_file_read(TokioFileRead)
            .with_line_read(lines.clone())
            .with_env(StaticEnv::default());

        let mut resolver = CredentialResolver::new(ctx);
        resolver.resolve_round().await?;

        assert!(resolver.is_resolved());
        let cred = resolver.credential();
        assert_eq!(cred.source(), CredentialSource::Console);
        assert_eq!(cred.access_key_id(), Some("AKIA1"));
        assert_eq!(cred.secret_access_key(), Some("SECRET2"));
        assert_eq!(cred.session_token(), Some("TOK"));
        assert_eq!(lines.prompts().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_round_is_noop_once_resolved() -> anyhow::Result<()> {
        let lines = StaticLineRead::new(["AKIA1", "SECRET2", "TOKEN3", "AKIA4", "SECRET5", "TOKEN6"]);
        let ctx = Context::new()
            .with_line_read(lines.clone())
            .with_env(StaticEnv::default());

        let mut resolver = CredentialResolver::new(ctx);
        resolver.resolve_round().await?;
        let resolved = resolver.credential().clone();

        resolver.resolve_round().await?;
        resolver.resolve().await?;

        assert_eq!(resolver.credential(), &resolved);
        assert_eq!(lines.remaining(), 3);
        assert_eq!(lines.prompts().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_input_exhausted_is_surfaced() -> anyhow::Result<()> {
        let ctx = Context::new()
            .with_line_read(StaticLineRead::new(["AKIA1", "SECRET2"]))
            .with_env(StaticEnv::default());

        let mut resolver = CredentialResolver::new(ctx);
        let err = resolver.resolve().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InputExhausted);
        assert!(!resolver.is_resolved());
        assert_eq!(resolver.credential().source(), CredentialSource::Unknown);
        assert_eq!(resolver.exports(), None);
        Ok(())
    }

    #[tokio::test]
    async fn test_exports_after_resolve() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs: env_triple(),
        });

        let mut resolver = CredentialResolver::new(ctx);
        resolver.resolve().await?;

        let exports = resolver.exports().expect("credential is resolved");
        let names: Vec<&str> = exports.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, AWS_SESSION_TOKEN]
        );
        Ok(())
    }
}

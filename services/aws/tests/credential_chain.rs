//! Integration tests for CredentialResolver with custom chains

use async_trait::async_trait;
use credchain_aws::{
    CredentialResolver, CredentialSet, CredentialSource, CredentialsFileProvider,
    EnvCredentialProvider,
};
use credchain_core::{
    Context, ErrorKind, ProvideCredential, ProvideCredentialChain, Result, StaticEnv,
    StaticLineRead,
};
use credchain_file_read_tokio::TokioFileRead;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock provider that tracks how many times it was called
#[derive(Debug)]
struct CountingProvider {
    name: String,
    return_credential: bool,
    call_count: Arc<Mutex<usize>>,
}

#[async_trait]
impl ProvideCredential for CountingProvider {
    type Credential = CredentialSet;

    async fn provide_credential(&self, _ctx: &Context) -> Result<Option<Self::Credential>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        if self.return_credential {
            Ok(Some(CredentialSet::new(
                format!("{}_id", self.name),
                format!("{}_key", self.name),
                format!("{}_token", self.name),
                CredentialSource::Environment,
            )))
        } else {
            Ok(None)
        }
    }
}

fn counting(name: &str, return_credential: bool) -> (CountingProvider, Arc<Mutex<usize>>) {
    let count = Arc::new(Mutex::new(0));
    (
        CountingProvider {
            name: name.to_string(),
            return_credential,
            call_count: count.clone(),
        },
        count,
    )
}

#[tokio::test]
async fn test_resolver_stops_at_first_success() -> anyhow::Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let (p1, count1) = counting("provider1", false);
    let (p2, count2) = counting("provider2", true);
    let (p3, count3) = counting("provider3", true);
    let chain = ProvideCredentialChain::new().push(p1).push(p2).push(p3);

    let lines = StaticLineRead::new(["unused"]);
    let mut resolver =
        CredentialResolver::with_chain(Context::new().with_line_read(lines.clone()), chain);
    let cred = resolver.resolve().await?;

    assert_eq!(cred.access_key_id(), Some("provider2_id"));
    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
    assert_eq!(*count3.lock().unwrap(), 0);
    assert!(lines.prompts().is_empty());
    Ok(())
}

#[tokio::test]
async fn test_exhausted_sources_are_never_retried() -> anyhow::Result<()> {
    let (p1, count1) = counting("provider1", false);
    let (p2, count2) = counting("provider2", false);
    let chain = ProvideCredentialChain::new().push(p1).push(p2);

    // Console input closes early on every pass.
    let lines = StaticLineRead::new(["AKIA1"]);
    let ctx = Context::new().with_line_read(lines.clone());
    let mut resolver = CredentialResolver::with_chain(ctx, chain);

    let err = resolver.resolve_round().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InputExhausted);
    assert!(!resolver.is_resolved());

    let err = resolver.resolve_round().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InputExhausted);

    assert_eq!(*count1.lock().unwrap(), 1);
    assert_eq!(*count2.lock().unwrap(), 1);
    assert_eq!(lines.prompts().len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_default_providers_fall_through_to_console() -> anyhow::Result<()> {
    let home = tempfile::tempdir()?;
    std::fs::create_dir_all(home.path().join(".aws"))?;
    // Incomplete: no session token.
    std::fs::write(
        home.path().join(".aws").join("credentials"),
        "aws_access_key_id=AKIAFILE\naws_secret_access_key=SECRETFILE\n",
    )?;

    let lines = StaticLineRead::new([
        "export AWS_ACCESS_KEY_ID=AKIA1",
        "export AWS_SECRET_ACCESS_KEY=SECRET2",
        "export AWS_SESSION_TOKEN=TOKEN3",
    ]);
    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_line_read(lines.clone())
        .with_env(StaticEnv {
            home_dir: Some(home.path().to_path_buf()),
            // Partial env triple must not be mixed with other sources.
            envs: HashMap::from([("AWS_SESSION_TOKEN".to_string(), "TOKENENV".to_string())]),
        });

    let chain = ProvideCredentialChain::new()
        .push(EnvCredentialProvider::new())
        .push(CredentialsFileProvider::new());
    let mut resolver = CredentialResolver::with_chain(ctx, chain);
    let cred = resolver.resolve().await?;

    assert_eq!(cred.source(), CredentialSource::Console);
    assert_eq!(cred.access_key_id(), Some("AKIA1"));
    assert_eq!(cred.session_token(), Some("TOKEN3"));
    Ok(())
}

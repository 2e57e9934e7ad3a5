use crate::constants::DEFAULT_CONSOLE_PROMPT;
use crate::{CredentialSet, SlotCollector};
use async_trait::async_trait;
use credchain_core::{Context, Error, ProvideCredential, Result};
use log::debug;

/// ConsoleCredentialProvider asks the operator to paste credentials.
///
/// The operator is prompted once, then lines are read from the context's line reader
/// until the access key id, secret access key and session token are all known. Each
/// line may be a shell assignment in any of the forms understood by
/// [`crate::parse_console_line`], or a bare value.
///
/// If the input stream closes first, an [`credchain_core::ErrorKind::InputExhausted`]
/// error is returned.
#[derive(Debug, Clone)]
pub struct ConsoleCredentialProvider {
    prompt: String,
}

impl Default for ConsoleCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleCredentialProvider {
    /// Create a new ConsoleCredentialProvider with the default prompt.
    pub fn new() -> Self {
        Self {
            prompt: DEFAULT_CONSOLE_PROMPT.to_string(),
        }
    }

    /// Set the message shown before reading.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

#[async_trait]
impl ProvideCredential for ConsoleCredentialProvider {
    type Credential = CredentialSet;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        ctx.line_prompt(&self.prompt).await?;

        let mut collector = SlotCollector::new();
        while let Some(line) = ctx.line_read().await? {
            if let Some(slot) = collector.feed(&line) {
                debug!("read value for {}", slot.key());
            }

            if collector.is_complete() {
                return Ok(collector.into_credential());
            }
        }

        let missing: Vec<&str> = collector.missing().iter().map(|s| s.key()).collect();
        Err(Error::input_exhausted(format!(
            "input closed before all credentials were provided, missing: {}",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CredentialSource;
    use credchain_core::{ErrorKind, StaticLineRead};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_console_unlabeled_lines() -> anyhow::Result<()> {
        let lines = StaticLineRead::new(["AKIA1", "SECRET2", "TOKEN3", "EXTRA"]);
        let ctx = Context::new().with_line_read(lines.clone());

        let cred = ConsoleCredentialProvider::new()
            .provide_credential(&ctx)
            .await?
            .expect("credential must be collected");
        assert_eq!(cred.access_key_id(), Some("AKIA1"));
        assert_eq!(cred.secret_access_key(), Some("SECRET2"));
        assert_eq!(cred.session_token(), Some("TOKEN3"));
        assert_eq!(cred.source(), CredentialSource::Console);

        // Reading stops as soon as all slots are filled.
        assert_eq!(lines.remaining(), 1);
        assert_eq!(lines.prompts(), vec![DEFAULT_CONSOLE_PROMPT.to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_console_shell_exports() -> anyhow::Result<()> {
        let ctx = Context::new().with_line_read(StaticLineRead::new([
            "export AWS_SESSION_TOKEN=TOK",
            "",
            "export AWS_ACCESS_KEY_ID=AKIA1",
            "export AWS_SECRET_ACCESS_KEY=SECRET2",
        ]));

        let cred = ConsoleCredentialProvider::new()
            .with_prompt("paste:")
            .provide_credential(&ctx)
            .await?
            .expect("credential must be collected");
        assert_eq!(cred.access_key_id(), Some("AKIA1"));
        assert_eq!(cred.secret_access_key(), Some("SECRET2"));
        assert_eq!(cred.session_token(), Some("TOK"));
        Ok(())
    }

    #[tokio::test]
    async fn test_console_input_exhausted() {
        let ctx = Context::new().with_line_read(StaticLineRead::new(["AKIA1"]));

        let err = ConsoleCredentialProvider::new()
            .provide_credential(&ctx)
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputExhausted);
        assert!(err.to_string().contains("aws_secret_access_key"));
        assert!(err.to_string().contains("aws_session_token"));
    }

    #[tokio::test]
    async fn test_console_without_line_reader() {
        let err = ConsoleCredentialProvider::new()
            .provide_credential(&Context::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
    }
}

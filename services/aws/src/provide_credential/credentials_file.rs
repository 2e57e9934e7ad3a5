use crate::{constants::*, CredentialSet, CredentialSource};
use async_trait::async_trait;
use credchain_core::{Context, ProvideCredential, Result};
use log::debug;

/// CredentialsFileProvider loads AWS credentials from the shared credentials file.
///
/// The file is read as flat `key = value` lines; section headers are not interpreted,
/// so when a key appears more than once the last occurrence wins. All three of
/// `aws_access_key_id`, `aws_secret_access_key` and `aws_session_token` must be
/// present with non-empty values.
///
/// A missing home directory, a missing or unreadable file and incomplete content
/// all yield `Ok(None)`.
#[derive(Debug, Clone)]
pub struct CredentialsFileProvider {
    path: String,
}

impl Default for CredentialsFileProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialsFileProvider {
    /// Create a provider reading `~/.aws/credentials`.
    pub fn new() -> Self {
        Self {
            path: DEFAULT_CREDENTIALS_FILE.to_string(),
        }
    }

    /// Set the path to the credentials file. A leading `~` is expanded.
    pub fn with_credentials_file(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }
}

#[async_trait]
impl ProvideCredential for CredentialsFileProvider {
    type Credential = CredentialSet;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let Some(path) = ctx.expand_home_dir(&self.path) else {
            debug!("failed to expand homedir for path: {}", self.path);
            return Ok(None);
        };

        let content = match ctx.file_read_as_string(&path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("failed to read credentials file {path}: {err:?}");
                return Ok(None);
            }
        };

        let cred = parse_credentials_file(&content);
        if cred.is_none() {
            debug!("credentials file {path} doesn't define all aws credential keys");
        }
        Ok(cred)
    }
}

fn parse_credentials_file(content: &str) -> Option<CredentialSet> {
    let mut access_key_id = None;
    let mut secret_access_key = None;
    let mut session_token = None;

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let value = value.trim().to_string();
        match key.trim() {
            KEY_ACCESS_KEY_ID => access_key_id = Some(value),
            KEY_SECRET_ACCESS_KEY => secret_access_key = Some(value),
            KEY_SESSION_TOKEN => session_token = Some(value),
            _ => {}
        }
    }

    match (access_key_id, secret_access_key, session_token) {
        (Some(ak), Some(sk), Some(token))
            if !ak.is_empty() && !sk.is_empty() && !token.is_empty() =>
        {
            Some(CredentialSet::new(
                ak,
                sk,
                token,
                CredentialSource::CredentialsFile,
            ))
        }
        _ => None,
    }
}

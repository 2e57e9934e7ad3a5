//! Example showing how to plug a custom provider into a chain.

use async_trait::async_trait;
use credchain_core::{
    Context, Credential, ProvideCredential, ProvideCredentialChain, Result, StaticEnv,
};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct ApiToken(String);

impl Credential for ApiToken {
    fn is_valid(&self) -> bool {
        !self.0.is_empty()
    }
}

/// Reads the token from a single environment variable.
#[derive(Debug)]
struct EnvTokenProvider {
    key: &'static str,
}

#[async_trait]
impl ProvideCredential for EnvTokenProvider {
    type Credential = ApiToken;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        Ok(ctx.env_var(self.key).map(ApiToken))
    }
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let ctx = Context::new().with_env(StaticEnv {
        home_dir: None,
        envs: HashMap::from([("BACKUP_TOKEN".to_string(), "token-value".to_string())]),
    });

    let mut chain = ProvideCredentialChain::new()
        .push(EnvTokenProvider { key: "PRIMARY_TOKEN" })
        .push(EnvTokenProvider { key: "BACKUP_TOKEN" });

    match chain.provide_credential(&ctx).await {
        Some(token) => println!("found token with {} chars", token.0.len()),
        None => println!("no token found"),
    }
}

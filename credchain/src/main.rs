mod cli;

use anyhow::{Context as _, Result};
use clap::Parser;
use cli::Cli;
use credchain::aws::{
    CredentialResolver, CredentialsFileProvider, EnvCredentialProvider, Region,
};
use credchain::ProvideCredentialChain;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_default_env()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let mut file = CredentialsFileProvider::new();
    if let Some(path) = &cli.credentials_file {
        file = file.with_credentials_file(path);
    }
    let chain = ProvideCredentialChain::new()
        .push(EnvCredentialProvider::new())
        .push(file);

    let ctx = credchain::default_context();
    let mut resolver = CredentialResolver::with_chain(ctx.clone(), chain);
    let cred = resolver
        .resolve()
        .await
        .context("no complete set of AWS credentials could be resolved")?;
    eprintln!("Credentials set from {}", cred.source());

    let region = match cli.region {
        Some(region) => Some(region),
        None if cli.prompt_region => Some(Region::prompt(&ctx).await?),
        None => None,
    };

    let mut lines = Vec::new();
    if let Some(exports) = resolver.exports() {
        lines.push(cli.shell.render_exports(&exports));
    }
    if let Some(region) = region {
        info!("using region {region}");
        lines.push(cli.shell.render("AWS_REGION", region.as_str()));
    }
    println!("{}", lines.join("\n"));

    Ok(())
}

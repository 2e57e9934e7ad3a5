use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use credchain_aws::{EnvExport, Region};

/// Resolve temporary AWS credentials and print them as shell assignments
///
/// Credentials are taken from the environment, then `~/.aws/credentials`, then
/// pasted console input. Diagnostics go to stderr, assignments to stdout.
#[derive(Debug, Parser)]
#[command(author, about, version)]
pub struct Cli {
    /// Shell syntax used for the printed assignments
    #[arg(long, value_enum, default_value_t = Shell::Posix)]
    pub shell: Shell,

    /// Region to export as AWS_REGION
    #[arg(long, env = "AWS_REGION", value_parser = Region::parse)]
    pub region: Option<Region>,

    /// Ask for a region on the console when none is given
    #[arg(long, conflicts_with = "region")]
    pub prompt_region: bool,

    /// Credentials file to read instead of ~/.aws/credentials
    #[arg(long, value_name = "PATH")]
    pub credentials_file: Option<String>,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

/// Shell dialect of the printed assignments.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// `export NAME='value'`
    Posix,
    /// `$Env:NAME='value'`
    #[value(name = "powershell")]
    PowerShell,
    /// `set "NAME=value"`
    Cmd,
}

impl Shell {
    /// Render a single assignment of `value` to `name`.
    pub fn render(self, name: &str, value: &str) -> String {
        match self {
            Shell::Posix => format!("export {name}='{}'", value.replace('\'', r"'\''")),
            Shell::PowerShell => format!("$Env:{name}='{}'", value.replace('\'', "''")),
            Shell::Cmd => format!("set \"{name}={value}\""),
        }
    }

    /// Render every export, one assignment per line.
    pub fn render_exports(self, exports: &[EnvExport]) -> String {
        exports
            .iter()
            .map(|v| self.render(v.name, &v.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

use crate::constants::DEFAULT_REGION_PROMPT;
use credchain_core::{Context, Error, Result};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

static REGION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z]+(?:-[a-z]+)*-[0-9]+$").expect("region pattern must be valid"));

/// A region identifier such as `us-east-1` or `us-gov-west-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Region(String);

impl Region {
    /// Validate `value` as a region identifier.
    pub fn parse(value: &str) -> Result<Self> {
        if REGION.is_match(value) {
            Ok(Region(value.to_string()))
        } else {
            Err(Error::config_invalid(format!(
                "{value:?} is not a valid region, expected something like us-east-1"
            )))
        }
    }

    /// Region identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Ask the operator for a region until a valid one is entered.
    ///
    /// The answer isn't secret, so it is read with echo enabled.
    ///
    /// Returns an [`credchain_core::ErrorKind::InputExhausted`] error if input closes first.
    pub async fn prompt(ctx: &Context) -> Result<Self> {
        loop {
            ctx.line_prompt(DEFAULT_REGION_PROMPT).await?;

            let Some(line) = ctx.line_read_visible().await? else {
                return Err(Error::input_exhausted(
                    "input closed before a region was provided",
                ));
            };

            match Region::parse(line.trim()) {
                Ok(region) => return Ok(region),
                Err(err) => warn!("{err}"),
            }
        }
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Region::parse(s)
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credchain_core::{ErrorKind, LineRead, StaticLineRead};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("us-east-1")]
    #[test_case("eu-central-2")]
    #[test_case("us-gov-west-1")]
    #[test_case("ap-southeast-10")]
    fn test_valid_region(value: &str) {
        assert_eq!(Region::parse(value).unwrap().as_str(), value);
    }

    #[test_case("us-east"; "missing number")]
    #[test_case("US-EAST-1"; "uppercase")]
    #[test_case("1"; "number only")]
    #[test_case("us_east_1"; "underscores")]
    #[test_case(" us-east-1"; "leading space")]
    #[test_case(""; "empty")]
    fn test_invalid_region(value: &str) {
        let err = Region::parse(value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[tokio::test]
    async fn test_prompt_until_valid() -> anyhow::Result<()> {
        let lines = StaticLineRead::new(["useast1", "us-east-1 "]);
        let ctx = Context::new().with_line_read(lines.clone());

        let region = Region::prompt(&ctx).await?;
        assert_eq!(region.to_string(), "us-east-1");
        assert_eq!(lines.prompts().len(), 2);
        Ok(())
    }

    /// Only serves visible reads, hidden reads fail.
    #[derive(Debug)]
    struct VisibleOnly(StaticLineRead);

    #[async_trait::async_trait]
    impl LineRead for VisibleOnly {
        async fn prompt(&self, message: &str) -> Result<()> {
            self.0.prompt(message).await
        }

        async fn read_line(&self) -> Result<Option<String>> {
            Err(Error::unexpected("hidden read used for region"))
        }

        async fn read_visible_line(&self) -> Result<Option<String>> {
            self.0.read_line().await
        }
    }

    #[tokio::test]
    async fn test_prompt_reads_with_echo() -> anyhow::Result<()> {
        let ctx = Context::new().with_line_read(VisibleOnly(StaticLineRead::new(["eu-west-1"])));

        let region = Region::prompt(&ctx).await?;
        assert_eq!(region.as_str(), "eu-west-1");
        Ok(())
    }

    #[tokio::test]
    async fn test_prompt_input_exhausted() {
        let ctx = Context::new().with_line_read(StaticLineRead::new(["nope"]));

        let err = Region::prompt(&ctx).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputExhausted);
    }
}

// Env values used for aws credentials.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_SESSION_TOKEN: &str = "AWS_SESSION_TOKEN";

// Keys used in the credentials file and in pasted console input.
pub const KEY_ACCESS_KEY_ID: &str = "aws_access_key_id";
pub const KEY_SECRET_ACCESS_KEY: &str = "aws_secret_access_key";
pub const KEY_SESSION_TOKEN: &str = "aws_session_token";

pub const DEFAULT_CREDENTIALS_FILE: &str = "~/.aws/credentials";

pub const DEFAULT_CONSOLE_PROMPT: &str = "Paste AWS credentials (not shown) then press enter:";
pub const DEFAULT_REGION_PROMPT: &str = "Enter AWS region (e.g. us-east-1):";

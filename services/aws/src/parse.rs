use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `KEY=value` as exported by POSIX shells, cmd or PowerShell.
///
/// The value charset covers base64 style secrets. Character classes are spelled out
/// so matching stays ASCII only.
static CONSOLE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^(?:export |SET |\$Env:)?([a-zA-Z_]+) ?= ?"?([A-Za-z0-9_+=/]+)"?$"#)
        .expect("console line pattern must be valid")
});

/// One line of pasted console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Lower-cased variable name, if the line looked like an assignment.
    pub key: Option<String>,
    /// Assigned value without quotes, or the raw line when no key was recognized.
    pub value: String,
}

/// Parse one line of pasted text.
///
/// Accepted forms:
///
/// - `export AWS_ACCESS_KEY_ID=AKIA...`
/// - `SET AWS_ACCESS_KEY_ID=AKIA...`
/// - `$Env:AWS_ACCESS_KEY_ID="AKIA..."`
/// - `AWS_ACCESS_KEY_ID = AKIA...`
///
/// Anything else is returned unchanged as a bare value, so a raw token pasted on
/// its own line is still usable.
pub fn parse_console_line(line: &str) -> ParsedLine {
    let line = line.strip_suffix('\r').unwrap_or(line);

    match CONSOLE_LINE.captures(line) {
        Some(caps) => ParsedLine {
            key: Some(caps[1].to_lowercase()),
            value: caps[2].to_string(),
        },
        None => ParsedLine {
            key: None,
            value: line.to_string(),
        },
    }
}

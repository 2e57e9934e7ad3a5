// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Tokio-based line reading implementations for credchain.
//!
//! This crate provides the interactive channel used when no other credential
//! source succeeded:
//!
//! - [`TerminalLineRead`] reads from the controlling terminal with echo disabled,
//!   so pasted secrets never show up on screen.
//! - [`TokioLineRead`] reads plain lines from stdin (or any async reader), for
//!   piped input.
//! - [`DefaultLineRead`] picks the terminal reader when both stdin and stderr are
//!   terminals, and stdin lines otherwise.
//!
//! Prompts are always written to stderr so stdout stays usable for `eval`.
//!
//! ## Example
//!
//! ```no_run
//! use credchain_core::Context;
//! use credchain_line_read_tokio::DefaultLineRead;
//!
//! #[tokio::main]
//! async fn main() -> credchain_core::Result<()> {
//!     let ctx = Context::new().with_line_read(DefaultLineRead::new());
//!
//!     ctx.line_prompt("Paste something (not shown):").await?;
//!     while let Some(line) = ctx.line_read().await? {
//!         eprintln!("got {} chars", line.len());
//!     }
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use console::Term;
use credchain_core::{Error, LineRead, Result};
use log::debug;
use std::fmt::{self, Debug};
use std::io::{self, IsTerminal};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader, Lines};
use tokio::sync::Mutex;

type BoxedLines = Lines<BufReader<Box<dyn AsyncRead + Send + Unpin>>>;

/// Reads plain lines from an async reader, stdin by default.
///
/// Input is echoed by whatever is attached to the reader, so use
/// [`TerminalLineRead`] for interactive sessions.
pub struct TokioLineRead {
    lines: Mutex<BoxedLines>,
}

impl TokioLineRead {
    /// Read lines from the process stdin.
    pub fn stdin() -> Self {
        Self::from_reader(tokio::io::stdin())
    }

    /// Read lines from the given reader.
    pub fn from_reader(reader: impl AsyncRead + Send + Unpin + 'static) -> Self {
        let reader: Box<dyn AsyncRead + Send + Unpin> = Box::new(reader);
        Self {
            lines: Mutex::new(BufReader::new(reader).lines()),
        }
    }
}

impl Default for TokioLineRead {
    fn default() -> Self {
        Self::stdin()
    }
}

impl Debug for TokioLineRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioLineRead").finish_non_exhaustive()
    }
}

#[async_trait]
impl LineRead for TokioLineRead {
    async fn prompt(&self, message: &str) -> Result<()> {
        let mut stderr = tokio::io::stderr();
        stderr.write_all(message.as_bytes()).await?;
        stderr.write_all(b"\n").await?;
        stderr.flush().await?;
        Ok(())
    }

    async fn read_line(&self) -> Result<Option<String>> {
        let mut lines = self.lines.lock().await;
        lines
            .next_line()
            .await
            .map_err(|e| Error::unexpected("failed to read line").with_source(e))
    }
}

/// Reads lines from the terminal behind stderr.
///
/// [`LineRead::read_line`] suppresses echo, [`LineRead::read_visible_line`] doesn't.
/// Every read runs on tokio's blocking pool since the terminal API is synchronous.
///
/// The terminal reports Ctrl-D and an empty line the same way, so an empty read is
/// treated as end of input. Without a terminal there is nothing to read and every
/// read returns `None`.
#[derive(Debug, Clone)]
pub struct TerminalLineRead {
    term: Term,
}

impl TerminalLineRead {
    /// Create a reader bound to the terminal behind stderr.
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    async fn read(&self, hidden: bool) -> Result<Option<String>> {
        if !self.term.is_term() {
            debug!("stderr is not a terminal, no terminal input available");
            return Ok(None);
        }

        let term = self.term.clone();
        let read = tokio::task::spawn_blocking(move || {
            if hidden {
                term.read_secure_line()
            } else {
                term.read_line()
            }
        })
        .await
        .map_err(|e| Error::unexpected("terminal reader task failed").with_source(e))?;

        terminal_line(read)
    }
}

impl Default for TerminalLineRead {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineRead for TerminalLineRead {
    async fn prompt(&self, message: &str) -> Result<()> {
        self.term.write_line(message)?;
        Ok(())
    }

    async fn read_line(&self) -> Result<Option<String>> {
        self.read(true).await
    }

    async fn read_visible_line(&self) -> Result<Option<String>> {
        self.read(false).await
    }
}

fn terminal_line(read: io::Result<String>) -> Result<Option<String>> {
    match read {
        Ok(line) if line.is_empty() => {
            debug!("terminal input closed");
            Ok(None)
        }
        Ok(line) => Ok(Some(line)),
        Err(err) => Err(Error::unexpected("failed to read from terminal").with_source(err)),
    }
}

/// Terminal input when both stdin and stderr are terminals, plain stdin lines otherwise.
#[derive(Debug)]
pub enum DefaultLineRead {
    /// Terminal input, echo suppressed for secrets.
    Terminal(TerminalLineRead),
    /// Piped stdin.
    Stdin(TokioLineRead),
}

impl DefaultLineRead {
    /// Detect the right reader for the current process.
    pub fn new() -> Self {
        Self::detect(io::stdin().is_terminal(), Term::stderr().is_term())
    }

    fn detect(stdin_is_term: bool, stderr_is_term: bool) -> Self {
        if stdin_is_term && stderr_is_term {
            DefaultLineRead::Terminal(TerminalLineRead::new())
        } else {
            DefaultLineRead::Stdin(TokioLineRead::stdin())
        }
    }
}

impl Default for DefaultLineRead {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LineRead for DefaultLineRead {
    async fn prompt(&self, message: &str) -> Result<()> {
        match self {
            DefaultLineRead::Terminal(r) => r.prompt(message).await,
            DefaultLineRead::Stdin(r) => r.prompt(message).await,
        }
    }

    async fn read_line(&self) -> Result<Option<String>> {
        match self {
            DefaultLineRead::Terminal(r) => r.read_line().await,
            DefaultLineRead::Stdin(r) => r.read_line().await,
        }
    }

    async fn read_visible_line(&self) -> Result<Option<String>> {
        match self {
            DefaultLineRead::Terminal(r) => r.read_visible_line().await,
            DefaultLineRead::Stdin(r) => r.read_visible_line().await,
        }
    }
}

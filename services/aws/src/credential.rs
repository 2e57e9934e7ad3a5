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

use crate::constants::*;
use credchain_core::utils::Redact;
use credchain_core::Credential;
use std::fmt::{self, Debug, Display, Formatter};

/// Where a [`CredentialSet`] came from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    /// Nothing has been resolved yet.
    #[default]
    Unknown,
    /// `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`.
    Environment,
    /// `~/.aws/credentials`.
    CredentialsFile,
    /// Values pasted by the operator.
    Console,
}

impl CredentialSource {
    /// Human readable label of this source.
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialSource::Unknown => "unknown source",
            CredentialSource::Environment => "environment variables",
            CredentialSource::CredentialsFile => "credentials file",
            CredentialSource::Console => "console input",
        }
    }
}

impl Display for CredentialSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temporary credential triple: access key id, secret access key and session token.
///
/// All three values are set together with their source, or not at all.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct CredentialSet {
    access_key_id: Option<String>,
    secret_access_key: Option<String>,
    session_token: Option<String>,
    source: CredentialSource,
}

impl CredentialSet {
    /// Create a credential set resolved from `source`.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
        source: CredentialSource,
    ) -> Self {
        Self {
            access_key_id: Some(access_key_id.into()),
            secret_access_key: Some(secret_access_key.into()),
            session_token: Some(session_token.into()),
            source,
        }
    }

    /// Access key id for aws services.
    pub fn access_key_id(&self) -> Option<&str> {
        self.access_key_id.as_deref()
    }

    /// Secret access key for aws services.
    pub fn secret_access_key(&self) -> Option<&str> {
        self.secret_access_key.as_deref()
    }

    /// Session token for aws services.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Source that produced this credential.
    pub fn source(&self) -> CredentialSource {
        self.source
    }

    /// Environment assignments the downstream layer should apply.
    ///
    /// Returns `None` while the credential is incomplete.
    pub fn exports(&self) -> Option<Vec<EnvExport>> {
        if !self.is_valid() {
            return None;
        }

        let exports = [
            (AWS_ACCESS_KEY_ID, &self.access_key_id),
            (AWS_SECRET_ACCESS_KEY, &self.secret_access_key),
            (AWS_SESSION_TOKEN, &self.session_token),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value.as_ref().map(|value| EnvExport {
                name,
                value: value.clone(),
            })
        })
        .collect();
        Some(exports)
    }
}

impl Debug for CredentialSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialSet")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("source", &self.source)
            .finish()
    }
}

impl Credential for CredentialSet {
    fn is_valid(&self) -> bool {
        [
            &self.access_key_id,
            &self.secret_access_key,
            &self.session_token,
        ]
        .iter()
        .all(|v| v.as_deref().is_some_and(|v| !v.is_empty()))
    }
}

/// One environment variable assignment.
#[derive(Clone, PartialEq, Eq)]
pub struct EnvExport {
    /// Variable name, e.g. `AWS_ACCESS_KEY_ID`.
    pub name: &'static str,
    /// Variable value.
    pub value: String,
}

impl Debug for EnvExport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvExport")
            .field("name", &self.name)
            .field("value", &Redact::from(&self.value))
            .finish()
    }
}

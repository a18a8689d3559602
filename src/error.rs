// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Errors raised at the edges of the engine
//!
//! Analysis and layout never fail. These errors come from reading user input:
//! session files, configuration, and identifiers typed on the command line.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading input or resolving user-supplied identifiers
#[derive(Error, Debug)]
pub enum StackError {
    /// Session file could not be read
    #[error("Failed to read session file {path}")]
    SessionRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Session file is not a valid stack document
    #[error("Failed to parse session file {path}")]
    SessionParse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Category tag not in the closed set
    #[error("Unknown category: '{0}'")]
    UnknownCategory(String),

    /// Scenario identifier not in the library
    #[error("Scenario not found: '{0}'")]
    UnknownScenario(String),

    /// Connection joins a tool to itself
    #[error("Connection '{0}' links a tool to itself")]
    SelfLoop(String),

    /// Configuration could not be assembled
    #[error("Invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StackStore;

    #[test]
    fn test_parse_error_chain_names_cause_once() {
        let source = serde_json::from_str::<StackStore>("{ \"tools\": 3 }").unwrap_err();
        let cause = source.to_string();
        let err = StackError::SessionParse {
            path: PathBuf::from("session.json"),
            source,
        };

        assert_eq!(err.to_string(), "Failed to parse session file session.json");
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches(cause.as_str()).count(), 1);
    }
}

// Copyright 2025 the Funnel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Error returned when a host option string names no known variant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown {option} value `{value}`")]
pub struct ParseOptionError {
    option: &'static str,
    value: String,
}

impl ParseOptionError {
    /// Creates an error for `option` rejecting `value`.
    pub fn new(option: &'static str, value: impl Into<String>) -> Self {
        Self {
            option,
            value: value.into(),
        }
    }

    /// Name of the option that failed to parse.
    pub fn option(&self) -> &'static str {
        self.option
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

//! 代理记录类型定义

use std::fmt;

use crate::error::{CoreError, CoreResult};
use crate::traits::RecordCodec;

/// Proxy family selected by the operator when adding an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyKind {
    /// `http://` or `https://`
    Http,
    /// `socks://` or `socks5://`
    Socks,
}

impl ProxyKind {
    /// Scheme prefixes accepted for this kind
    pub fn schemes(self) -> &'static [&'static str] {
        match self {
            Self::Http => &["http://", "https://"],
            Self::Socks => &["socks://", "socks5://"],
        }
    }

    /// Prefix added by the auto-prefix policy when the input has no scheme
    pub fn default_prefix(self) -> &'static str {
        match self {
            Self::Http => "http://",
            Self::Socks => "socks5://",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Http => "HTTP/HTTPS",
            Self::Socks => "SOCKS",
        }
    }

    /// Input format hint shown in prompts
    pub fn format_hint(self) -> &'static str {
        match self {
            Self::Http => "http://user:pass@ip:port",
            Self::Socks => "socks5://user:pass@ip:port",
        }
    }

    fn accepts(self, value: &str) -> bool {
        self.schemes().iter().any(|scheme| value.starts_with(scheme))
    }
}

/// How raw operator input is turned into a proxy record.
///
/// The two policies produce different data for the same input and are kept
/// as separate entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyEntryPolicy {
    /// Reject anything that does not start with one of the kind's schemes
    Strict,
    /// Prepend the kind's default scheme when the input has none
    AutoPrefix,
}

/// A proxy URI, stored and displayed verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRecord(String);

impl ProxyRecord {
    /// Validate operator input for the selected kind under the given policy.
    pub fn from_input(raw: &str, kind: ProxyKind, policy: ProxyEntryPolicy) -> CoreResult<Self> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(CoreError::Validation("Proxy cannot be empty".to_string()));
        }

        let value = if kind.accepts(value) {
            value.to_string()
        } else {
            match policy {
                ProxyEntryPolicy::AutoPrefix if !value.contains("://") => {
                    log::info!("No scheme given, adding {}", kind.default_prefix());
                    format!("{}{value}", kind.default_prefix())
                }
                _ => {
                    return Err(CoreError::Validation(format!(
                        "{} proxy must start with {}",
                        kind.label(),
                        kind.schemes().join(" or ")
                    )));
                }
            }
        };

        // Credentials are kept verbatim, reserved characters included.
        let address = value.split_once("://").map_or("", |(_, rest)| rest);
        if address.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Proxy address is missing: {value}"
            )));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProxyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl RecordCodec for ProxyRecord {
    fn parse_line(line: &str) -> Result<Self, String> {
        Ok(Self(line.to_string()))
    }

    fn format_line(&self) -> String {
        self.0.clone()
    }

    fn display_label(&self) -> &str {
        &self.0
    }
}

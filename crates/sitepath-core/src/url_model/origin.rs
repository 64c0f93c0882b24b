//! Origin comparison for deciding whether a link leaves the site.

use std::fmt;

use thiserror::Error;

/// Why a string could not be turned into an [`Origin`].
#[derive(Debug, Error)]
pub enum OriginError {
    #[error("invalid URL {url:?}")]
    Invalid {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("URL has no host: {0}")]
    MissingHost(String),
    #[error("URL has no port and no known default: {0}")]
    UnknownPort(String),
}

/// `(scheme, host, port)` of an absolute URL.
///
/// Paths, queries and credentials are dropped so that two URLs on the same
/// site compare equal. A missing port is filled with the scheme's default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    pub scheme: String,
    pub host: String,
    pub port: u16,
}

impl Origin {
    pub fn parse(url: &str) -> Result<Self, OriginError> {
        let parsed = url::Url::parse(url).map_err(|source| OriginError::Invalid {
            url: url.to_string(),
            source,
        })?;
        let host = parsed
            .host_str()
            .ok_or_else(|| OriginError::MissingHost(url.to_string()))?
            .to_string();
        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| OriginError::UnknownPort(url.to_string()))?;

        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host,
            port,
        })
    }

    fn default_port(&self) -> Option<u16> {
        match self.scheme.as_str() {
            "http" | "ws" => Some(80),
            "https" | "wss" => Some(443),
            "ftp" => Some(21),
            _ => None,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.default_port() == Some(self.port) {
            write!(f, "{}://{}", self.scheme, self.host)
        } else {
            write!(f, "{}://{}:{}", self.scheme, self.host, self.port)
        }
    }
}

/// Whether `url` starts with `http://` or `https://`.
pub fn is_absolute_http(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Whether `url` points outside `current_origin`.
///
/// Relative URLs are always internal, and so is an absolute URL that fails to
/// parse. Without a current origin every absolute URL is external; an
/// unparsable current origin matches nothing.
///
/// - `is_external("/blog", None)` → `false`
/// - `is_external("http://example.com", Some("https://example.com"))` → `true`
pub fn is_external(url: &str, current_origin: Option<&str>) -> bool {
    if !is_absolute_http(url) {
        return false;
    }
    let target = match Origin::parse(url) {
        Ok(origin) => origin,
        Err(err) => {
            tracing::trace!(%err, "treating unparsable absolute URL as internal");
            return false;
        }
    };
    match current_origin.map(Origin::parse) {
        Some(Ok(current)) => current != target,
        Some(Err(err)) => {
            tracing::trace!(%err, "current origin does not parse");
            true
        }
        None => true,
    }
}

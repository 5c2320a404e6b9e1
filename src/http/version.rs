/// HTTP protocol versions recognized on the request line.
///
/// The parser classifies the version token by exact match; anything else
/// (including malformed tokens) becomes `Unknown` rather than an error.
/// HTTP/2.0 is recorded when announced but its framing is not implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    /// HTTP/1.0
    Http10,
    /// HTTP/1.1
    Http11,
    /// HTTP/2.0 - recorded only, no h2 framing
    Http20,
    /// Anything that did not match the table above
    Unknown,
}

impl Version {
    /// Classifies a version token read off the request line.
    ///
    /// # Example
    ///
    /// ```
    /// # use trickle::http::version::Version;
    /// assert_eq!(Version::from_token("HTTP/1.1"), Version::Http11);
    /// assert_eq!(Version::from_token("FOO"), Version::Unknown);
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "HTTP/1.0" => Version::Http10,
            "HTTP/1.1" => Version::Http11,
            "HTTP/2.0" => Version::Http20,
            _ => Version::Unknown,
        }
    }

    /// The text written after the literal `HTTP/` prefix on a status line.
    ///
    /// `Unknown` yields the empty string, so a status line written for an
    /// unrecognized version reads `"HTTP/ 200"`. Callers that care should
    /// not reach the status line with an Unknown version.
    pub fn digits(&self) -> &'static str {
        match self {
            Version::Http10 => "1.0",
            Version::Http11 => "1.1",
            Version::Http20 => "2.0",
            Version::Unknown => "",
        }
    }
}

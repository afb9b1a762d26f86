/// Path segment the service is reachable under when fronted by a reverse proxy.
///
/// Always either empty or a `/`-prefixed segment without a trailing slash, so
/// joining it with an absolute path never yields `//` or a missing separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MountPrefix(String);

impl MountPrefix {
    /// Normalize a raw prefix as supplied by the operator.
    ///
    /// Surrounding whitespace is dropped, leading and trailing slash runs
    /// are reduced to a single leading slash, and `""` or `"/"` collapse to
    /// no prefix. A leading `//` would otherwise read as a protocol-relative
    /// URL in the browser.
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('/');
        if trimmed.is_empty() {
            return MountPrefix(String::new());
        }
        MountPrefix(format!("/{trimmed}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Absolute URL under which an un-prefixed service path is reachable.
    pub fn advertise(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.0, path)
        } else {
            format!("{}/{}", self.0, path)
        }
    }

    /// Server URL for the OpenAPI document.
    pub fn server_url(&self) -> String {
        if self.0.is_empty() {
            "/".to_string()
        } else {
            self.0.clone()
        }
    }
}

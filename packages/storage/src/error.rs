use inmemfs_tree::Error as TreeError;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("Tree error: {0}")]
    Tree(#[from] TreeError),

    #[error("This file is not accessible via a URL: no base URL is configured")]
    NoBaseUrl,

    #[error("Invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Whether the underlying tree error means nothing lives at the path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Tree(e) if e.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inmemfs_tree::path;

    #[test]
    fn tree_error_converts() {
        let e: StorageError = TreeError::PathNotFound {
            path: path!("file0"),
        }
        .into();
        assert!(e.is_not_found());
        assert!(format!("{}", e).contains("path not found: file0"));
    }

    #[test]
    fn no_base_url_display() {
        let e = StorageError::NoBaseUrl;
        assert!(format!("{}", e).contains("not accessible via a URL"));
        assert!(!e.is_not_found());
    }

    #[test]
    fn invalid_base_url_display() {
        let source = url::Url::parse("not a url").unwrap_err();
        let e = StorageError::InvalidBaseUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(format!("{}", e).contains("\"not a url\""));
        assert!(std::error::Error::source(&e).is_some());
    }
}

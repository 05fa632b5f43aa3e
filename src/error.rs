use thiserror::Error;

/// Everything that can go wrong between pressing the fetch button and a
/// populated gallery. The page collapses all of these into one placeholder.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("network request failed: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("feed returned HTTP {0}")]
    Status(u16),

    #[error("failed to parse feed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to render item {index} ({title}): {reason}")]
    Render {
        index: usize,
        title: String,
        reason: String,
    },
}

impl GalleryError {
    pub fn kind(&self) -> &'static str {
        match self {
            GalleryError::Network(_) | GalleryError::Status(_) => "network",
            GalleryError::Parse(_) => "parse",
            GalleryError::Render { .. } => "render",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = GalleryError::Network(io.into());
        assert_eq!(err.to_string(), "network request failed: refused");
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.is::<std::io::Error>());
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(GalleryError::Network("refused".into()).kind(), "network");
        assert_eq!(GalleryError::Status(404).kind(), "network");

        let parse = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
        assert_eq!(GalleryError::from(parse).kind(), "parse");

        let render = GalleryError::Render {
            index: 2,
            title: "Comet".into(),
            reason: "missing thumbnail_url".into(),
        };
        assert_eq!(render.kind(), "render");
        assert_eq!(
            render.to_string(),
            "failed to render item 2 (Comet): missing thumbnail_url"
        );
    }
}

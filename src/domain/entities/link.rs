//! Link entity representing a shortened URL mapping.

/// A shortened URL mapping.
///
/// The `id` is the short identifier, either generated or a user-supplied
/// alias. A link is immutable after creation except for `clicks`, which is
/// only ever incremented by the redirect path.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub id: String,
    pub long_url: String,
    pub clicks: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: String, long_url: String, clicks: i64) -> Self {
        Self {
            id,
            long_url,
            clicks,
        }
    }
}

/// Input data for creating a new link. New rows start with zero clicks.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub id: String,
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_creation() {
        let link = Link::new("abc123".to_string(), "https://example.com".to_string(), 0);

        assert_eq!(link.id, "abc123");
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.clicks, 0);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            id: "xyz789".to_string(),
            long_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.id, "xyz789");
        assert_eq!(new_link.long_url, "https://rust-lang.org");
    }
}

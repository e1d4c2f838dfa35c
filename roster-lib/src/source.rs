//! MemberSource trait and a static in-memory source

use async_trait::async_trait;

use crate::error::Error;
use crate::model::Member;

/// Something that can produce the full member list in one read.
///
/// The loader calls `fetch_members` exactly once per mounted view. The HTTP
/// implementation is [`RosterClient`](crate::RosterClient); tests and demos
/// can use [`StaticSource`] or their own implementation.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use roster_lib::MemberSource;
/// use roster_lib::error::Error;
/// use roster_lib::model::Member;
///
/// struct FileSource(std::path::PathBuf);
///
/// #[async_trait]
/// impl MemberSource for FileSource {
///     async fn fetch_members(&self) -> Result<Vec<Member>, Error> {
///         let text = tokio::fs::read_to_string(&self.0).await.unwrap();
///         Ok(serde_json::from_str(&text).unwrap())
///     }
/// }
/// ```
#[async_trait]
pub trait MemberSource: Send + Sync {
    /// Fetches every member from the source.
    async fn fetch_members(&self) -> Result<Vec<Member>, Error>;
}

/// A source that always returns the same members.
///
/// # Example
///
/// ```
/// use roster_lib::StaticSource;
/// use roster_lib::model::Member;
///
/// let source = StaticSource::new(vec![Member::new("1", "Aaron", "aaron@example.com", "member")]);
/// assert_eq!(source.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    members: Vec<Member>,
}

impl StaticSource {
    /// Creates a source over the given members.
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Returns the number of members this source yields.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the source yields no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[async_trait]
impl MemberSource for StaticSource {
    async fn fetch_members(&self) -> Result<Vec<Member>, Error> {
        Ok(self.members.clone())
    }
}

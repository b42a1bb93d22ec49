//! Wire types for the GitHub REST endpoints used by ghpm.

use serde::Deserialize;

/// Number of repositories requested per page. GitHub's maximum.
pub const PER_PAGE: usize = 100;

/// Authenticated user, as returned by `GET /user`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct User {
    pub login: String,
}

/// Snapshot of a repository's visibility-relevant fields.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RepositoryRecord {
    pub full_name: String,
    #[serde(rename = "stargazers_count", default)]
    pub stars: u64,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
}

/// Repository visibility, used both as a listing filter and as the
/// desired end state of a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }

    pub fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query())
    }
}

/// Whose repositories a listing request targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnerScope {
    /// `GET /user/repos`: everything the token owner can see as owner.
    AuthenticatedUser,
    /// `GET /users/{login}/repos`: a named user's repositories.
    NamedUser(String),
}

impl OwnerScope {
    /// Build the listing path for one page.
    pub fn page_path(&self, visibility: Visibility, page: u32) -> String {
        let base = match self {
            Self::AuthenticatedUser => "/user/repos".to_string(),
            Self::NamedUser(login) => format!("/users/{login}/repos"),
        };
        format!(
            "{base}?visibility={}&per_page={PER_PAGE}&page={page}",
            visibility.as_query()
        )
    }
}

/// Body of a visibility PATCH.
#[derive(Debug, serde::Serialize)]
pub(crate) struct VisibilityPatch {
    pub private: bool,
}

/// Error payload GitHub attaches to non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

// ABOUTME: Validated domain types.
// ABOUTME: Currently the owner/repo pair that addresses a GitHub repository.

mod repo_slug;

pub use repo_slug::{GITHUB_API_BASE, RepoSlug, RepoSlugError};

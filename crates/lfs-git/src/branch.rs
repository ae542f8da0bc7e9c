//! Current branch detection

use git2::{ErrorCode, Repository};

use crate::Result;

/// Get the short name of the checked-out branch.
///
/// Returns `None` when HEAD is detached or the branch has no commits yet.
pub fn current_branch(repo: &Repository) -> Result<Option<String>> {
    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
            tracing::debug!(error = %e, "HEAD does not point at a commit");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    if head.is_branch() {
        Ok(head.shorthand().map(str::to_string))
    } else {
        Ok(None)
    }
}

use anyhow::{Context, Result};
use tracing::info;

use super::TeamMemberInput;
use crate::content::ContentRegistry;
use crate::store::{to_body, Collection, DocumentStore};

/// Populate an empty roster from the about page's team list.
///
/// Returns how many members were inserted (zero when the collection already
/// has documents). The count-then-insert is not atomic: two first readers
/// racing on an empty collection can both seed it.
pub async fn ensure_seeded(store: &dyn DocumentStore) -> Result<usize> {
    if store.count(Collection::TeamMembers).await? > 0 {
        return Ok(0);
    }

    let mut bodies = Vec::new();
    for member in ContentRegistry::get().default_team() {
        let input = TeamMemberInput::parse(&member)
            .map_err(|e| anyhow::anyhow!("Default team member is invalid: {e}"))?;
        bodies.push(to_body(&input)?);
    }

    let inserted = store
        .create_many(Collection::TeamMembers, bodies)
        .await
        .context("seed team members")?
        .len();
    info!(inserted, "Seeded team roster with default members");
    Ok(inserted)
}

//! Generic update path: fetch, patch, persist.

use {
    tracing::debug,
    vidgraph_patch::{PatchRequest, Patchable, apply_patch},
};

use crate::{EntityManager, ServiceResult};

/// Apply `changes` to the entity stored under `id` and persist the result.
///
/// A missing entity or a rejected patch returns early; the manager's
/// `update` is only called once the patch has merged cleanly.
pub async fn patch_entity<E, M>(manager: &M, id: &str, changes: &PatchRequest) -> ServiceResult<E>
where
    E: Patchable + Send + 'static,
    M: EntityManager<E> + ?Sized,
{
    let mut entity = manager.find(id).await?;
    apply_patch(changes, &mut entity)?;
    debug!(id, fields = changes.len(), "patch merged");
    manager.update(entity).await
}

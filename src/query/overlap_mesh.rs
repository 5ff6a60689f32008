use crate::bounding_volume::OrientedBox;
use crate::partitioning::{BroadPhase, LayerMask, QueryTriggerInteraction};
use crate::query::{DefaultOverlapDispatcher, OverlapDispatcher, OverlapError, Unsupported};
use crate::shape::{ConvexMesh, MeshCollider};
use crate::transform::RigidTransform;

/// Finds the colliders of `broad_phase` overlapping a convex mesh.
///
/// The broad-phase writes its candidates into `candidates`, then every candidate is
/// tested exactly against `mesh` placed at `transform`. The handles of the overlapping
/// colliders are written, in candidate order, at the beginning of `results`, and their
/// number is returned.
///
/// Nothing is ever written past the end of `candidates` or `results`: only the first
/// `min(candidates.len(), results.len())` candidates reported by the broad-phase are
/// tested. Candidates whose shape has no overlap test are skipped.
///
/// A collider registered in `broad_phase` for `mesh` itself is reported like any other.
/// A mesh without vertices or without normals overlaps nothing.
pub fn overlap_mesh<B: BroadPhase>(
    mesh: &ConvexMesh,
    transform: &RigidTransform,
    broad_phase: &B,
    candidates: &mut [B::Handle],
    results: &mut [B::Handle],
    layers: LayerMask,
    triggers: QueryTriggerInteraction,
) -> usize {
    overlap_mesh_with(
        &DefaultOverlapDispatcher::default(),
        mesh,
        transform,
        broad_phase,
        candidates,
        results,
        layers,
        triggers,
    )
}

/// Same as [`overlap_mesh`] with a custom dispatcher.
pub fn overlap_mesh_with<B: BroadPhase>(
    dispatcher: &impl OverlapDispatcher,
    mesh: &ConvexMesh,
    transform: &RigidTransform,
    broad_phase: &B,
    candidates: &mut [B::Handle],
    results: &mut [B::Handle],
    layers: LayerMask,
    triggers: QueryTriggerInteraction,
) -> usize {
    if mesh.is_empty() {
        return 0;
    }

    let bounds = OrientedBox::from_local_aabb(mesh.local_aabb(), transform);
    let count = broad_phase.overlap_box(&bounds, layers, triggers, candidates);
    let count = count.min(candidates.len());

    overlap_candidates(
        dispatcher,
        mesh,
        transform,
        broad_phase,
        &candidates[..count],
        results,
    )
}

/// Tests a list of candidates gathered beforehand against a convex mesh.
///
/// The handles of the overlapping candidates are written, in order, at the beginning of
/// `results`, and their number is returned. Only the first `results.len()` candidates
/// are tested.
pub fn overlap_candidates<B: BroadPhase>(
    dispatcher: &impl OverlapDispatcher,
    mesh: &ConvexMesh,
    transform: &RigidTransform,
    broad_phase: &B,
    candidates: &[B::Handle],
    results: &mut [B::Handle],
) -> usize {
    let check = candidates.len().min(results.len());

    if check < candidates.len() {
        log::trace!(
            "Overlap query truncated: {} candidates for {} result slots.",
            candidates.len(),
            results.len()
        );
    }

    let mut written = 0;

    for (i, handle) in candidates[..check].iter().enumerate() {
        let Some(collider) = broad_phase.collider(*handle) else {
            log::trace!("Skipping candidate {}: unknown collider.", i);
            continue;
        };

        match dispatcher.intersection_test(transform, mesh, &collider.transform, collider.shape) {
            Ok(true) => {
                results[written] = *handle;
                written += 1;
            }
            Ok(false) => {}
            Err(Unsupported) => {
                log::trace!(
                    "Skipping candidate {}: unsupported shape type {:?}.",
                    i,
                    collider.shape.shape_type()
                );
            }
        }
    }

    written
}

/// Finds the colliders of `broad_phase` overlapping a mesh collider.
///
/// Fails if the collider is not flagged as convex, or if its mesh is empty.
pub fn try_overlap_mesh_collider<B: BroadPhase>(
    collider: &MeshCollider,
    broad_phase: &B,
    candidates: &mut [B::Handle],
    results: &mut [B::Handle],
    layers: LayerMask,
    triggers: QueryTriggerInteraction,
) -> Result<usize, OverlapError> {
    if !collider.convex {
        return Err(OverlapError::NonConvexMesh);
    }

    if collider.mesh.is_empty() {
        return Err(OverlapError::EmptyMesh);
    }

    Ok(overlap_mesh(
        &collider.mesh,
        &collider.transform,
        broad_phase,
        candidates,
        results,
        layers,
        triggers,
    ))
}

/// Finds the colliders of `broad_phase` overlapping a mesh collider.
///
/// Returns 0 if the collider is not flagged as convex, or if its mesh is empty.
pub fn overlap_mesh_collider<B: BroadPhase>(
    collider: &MeshCollider,
    broad_phase: &B,
    candidates: &mut [B::Handle],
    results: &mut [B::Handle],
    layers: LayerMask,
    triggers: QueryTriggerInteraction,
) -> usize {
    match try_overlap_mesh_collider(collider, broad_phase, candidates, results, layers, triggers) {
        Ok(count) => count,
        Err(err) => {
            log::debug!("Overlap query rejected: {}", err);
            0
        }
    }
}

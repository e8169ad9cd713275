// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The derived-consistency pass run after every mutation.
//!
//! Engagement existence is never edited directly. Mutations change the
//! participant and target collections, then this pass makes every target's
//! engagement list match the participant list.

use shotlog_domain::{Engagement, Participant, Target, total_hits, total_shots};
use tracing::debug;

/// Rebuilds each target's engagement list to match `participants`.
///
/// After this pass, for every target:
/// - there is exactly one engagement per participant
/// - engagements appear in participant order
/// - existing values are kept; missing engagements are zero-valued
/// - engagements for users who are not participants are dropped
///
/// Targets are otherwise untouched.
pub fn reconcile_engagements(participants: &[Participant], targets: &mut [Target]) {
    for target in targets.iter_mut() {
        let mut existing: Vec<Engagement> = std::mem::take(&mut target.engagements);
        target.engagements = participants
            .iter()
            .map(|participant| {
                existing
                    .iter()
                    .position(|e| &e.user_id == participant.user_id())
                    .map_or_else(
                        || Engagement::zeroed(participant.user_id().clone()),
                        |index| existing.swap_remove(index),
                    )
            })
            .collect();
    }
}

/// Clears combined hit figures that no longer describe their target.
///
/// A combined figure is tied to the shots and hits it was split across. When
/// either total on a target differs from `before`, the figure is dropped and
/// the target reports its summed hits again.
pub fn release_stale_combined_hits(before: &[Target], after: &mut [Target]) {
    for target in after.iter_mut().filter(|t| t.combined_hits.is_some()) {
        let unchanged: bool = before
            .iter()
            .find(|old| old.id() == target.id())
            .is_some_and(|old| {
                total_shots(old) == total_shots(target) && total_hits(old) == total_hits(target)
            });
        if !unchanged {
            debug!(target = %target.id(), "Dropping stale combined hits");
            target.combined_hits = None;
        }
    }
}

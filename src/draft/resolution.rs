use std::collections::BTreeMap;

use uuid::Uuid;

use crate::domain::nomination::Nomination;
use crate::domain::tournament::DraftStatus;
use crate::draft::tie_break::TieBreak;

/// Outcome of one resolution pass over a round's pending nominations
///
/// Every input nomination comes back in exactly one of the two buckets with
/// its status already transitioned. Team and membership effects for the
/// confirmed bucket are applied by the draft service.
#[derive(Debug)]
pub struct Resolution {
    /// Nominations resolved in their captain's favor
    pub confirmed: Vec<Nomination>,
    /// Nominations that lost a tie-break
    pub cancelled: Vec<Nomination>,
    /// True if any participant was nominated by two or more captains
    pub had_conflict: bool,
}

/// Checks whether the current round is ready to resolve
///
/// A round resolves only once every registered captain has at least one
/// pending nomination in it. An empty captain set is never ready: stray
/// nominations recorded while no captains exist must not trigger a pass.
pub fn all_captains_nominated(captains: &[Uuid], pending: &[Nomination]) -> bool {
    if captains.is_empty() {
        return false;
    }

    captains
        .iter()
        .all(|captain_id| pending.iter().any(|n| n.captain_id() == *captain_id))
}

/// Resolves a round's pending nominations
///
/// Groups the nominations by nominated participant. A participant wanted by
/// exactly one captain confirms immediately; a participant wanted by several
/// goes to the tie-break, which confirms one nomination and cancels the
/// rest.
///
/// # Errors
/// Returns an error if any input nomination is not pending.
pub fn resolve(pending: Vec<Nomination>, tie_break: &dyn TieBreak) -> Result<Resolution, String> {
    let mut groups: BTreeMap<Uuid, Vec<Nomination>> = BTreeMap::new();
    for nomination in pending {
        groups
            .entry(nomination.participant_id())
            .or_default()
            .push(nomination);
    }

    let mut resolution = Resolution {
        confirmed: Vec::new(),
        cancelled: Vec::new(),
        had_conflict: false,
    };

    for (_, mut contenders) in groups {
        if contenders.len() > 1 {
            resolution.had_conflict = true;
        }

        let winner_index = tie_break.pick(&contenders);
        let mut winner = contenders.swap_remove(winner_index);
        winner.confirm()?;
        resolution.confirmed.push(winner);

        for mut loser in contenders {
            loser.cancel()?;
            resolution.cancelled.push(loser);
        }
    }

    Ok(resolution)
}

/// Advances the draft counters after a resolution pass
///
/// A pass with any conflict moves straight to the next round. A clean pass
/// progresses round-robin: the turn wraps into a new round after the last
/// captain's slot, otherwise it just increments.
///
/// # Errors
/// Returns an error unless the draft is in progress.
pub fn advance(
    status: &mut DraftStatus,
    captain_count: usize,
    had_conflict: bool,
) -> Result<(), String> {
    if had_conflict || status.turn() >= captain_count as i32 {
        status.advance_round()
    } else {
        status.advance_turn()
    }
}

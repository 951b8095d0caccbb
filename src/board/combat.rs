//! Rock-Paper-Scissors combat resolution.

use crate::core::{CombatOutcome, PieceKind};

/// Resolve an attack by `attacker` on `defender`.
///
/// ```
/// use rps_tactics::board::resolve_combat;
/// use rps_tactics::core::{CombatOutcome, PieceKind};
///
/// assert_eq!(resolve_combat(PieceKind::Paper, PieceKind::Rock), CombatOutcome::AttackerWins);
/// assert_eq!(resolve_combat(PieceKind::Rock, PieceKind::Paper), CombatOutcome::DefenderWins);
/// assert_eq!(resolve_combat(PieceKind::Rock, PieceKind::Rock), CombatOutcome::Mutual);
/// ```
#[must_use]
pub fn resolve_combat(attacker: PieceKind, defender: PieceKind) -> CombatOutcome {
    if attacker == defender {
        CombatOutcome::Mutual
    } else if attacker.beats(defender) {
        CombatOutcome::AttackerWins
    } else {
        CombatOutcome::DefenderWins
    }
}

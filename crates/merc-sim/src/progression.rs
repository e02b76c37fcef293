//! Pilot progression: XP levels, skill improvements, morale effects,
//! desertion, and injury recovery.

use crate::combat::CombatOutcome;
use merc_core::{Company, MechId, Pilot, PilotStatus, MIN_SKILL, XP_THRESHOLDS};
use serde::{Deserialize, Serialize};

/// Morale swing applied by [`apply_morale_outcome`] after a clean win.
pub const MORALE_VICTORY_BOOST: i32 = 10;

/// Morale swing applied by [`apply_morale_outcome`] after a defeat.
pub const MORALE_DEFEAT_PENALTY: i32 = 15;

/// Below this morale a pilot fights with a -1 skill penalty.
pub const MORALE_LOW_THRESHOLD: i32 = 30;

/// Above this morale a pilot fights with a +1 skill bonus.
pub const MORALE_HIGH_THRESHOLD: i32 = 80;

/// Which skill a level-up improves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Skill {
    Gunnery,
    Piloting,
}

/// XP still needed for the next level, or `None` at the level cap.
pub fn xp_to_next_level(pilot: &Pilot) -> Option<u32> {
    let level = pilot.level() as usize;
    XP_THRESHOLDS
        .get(level)
        .map(|t| t.saturating_sub(pilot.experience))
}

/// Whether the pilot has a level-up they can actually spend: alive, with
/// unspent level-ups, and at least one skill above the floor.
pub fn can_level_up(pilot: &Pilot) -> bool {
    !pilot.is_kia()
        && pilot.available_levelups() > 0
        && (pilot.gunnery > MIN_SKILL || pilot.piloting > MIN_SKILL)
}

/// Spend one level-up improving `skill` by 1 (lower is better, floor 1).
/// Returns false without mutating when the pilot is KIA, has nothing to
/// spend, or the chosen skill is already at the floor - callers should
/// offer the other skill in that last case.
pub fn apply_level_up(pilot: &mut Pilot, skill: Skill) -> bool {
    if pilot.is_kia() || pilot.available_levelups() == 0 {
        return false;
    }
    let value = match skill {
        Skill::Gunnery => &mut pilot.gunnery,
        Skill::Piloting => &mut pilot.piloting,
    };
    if *value <= MIN_SKILL {
        return false;
    }
    *value -= 1;
    pilot.levelups_spent += 1;
    true
}

/// Standardized post-mission morale shift for every non-KIA pilot:
/// Victory +10, Defeat -15, Pyrrhic Victory unchanged. Clamped [0, 100].
pub fn apply_morale_outcome(company: &mut Company, outcome: CombatOutcome) {
    let delta = match outcome {
        CombatOutcome::Victory => MORALE_VICTORY_BOOST,
        CombatOutcome::PyrrhicVictory => 0,
        CombatOutcome::Defeat => -MORALE_DEFEAT_PENALTY,
    };
    if delta == 0 {
        return;
    }
    for pilot in company.mechwarriors.iter_mut().filter(|p| !p.is_kia()) {
        pilot.adjust_morale(delta);
    }
}

fn morale_skill_shift(pilot: &Pilot) -> i32 {
    if pilot.morale < MORALE_LOW_THRESHOLD {
        1
    } else if pilot.morale > MORALE_HIGH_THRESHOLD {
        -1
    } else {
        0
    }
}

/// Gunnery after the morale modifier, clamped to [1, 7]. A demoralized
/// gunnery-6 pilot can reach the worse-than-base value 7.
pub fn effective_gunnery(pilot: &Pilot) -> i32 {
    (pilot.gunnery + morale_skill_shift(pilot)).clamp(1, 7)
}

/// Piloting after the morale modifier, clamped to [1, 7].
pub fn effective_piloting(pilot: &Pilot) -> i32 {
    (pilot.piloting + morale_skill_shift(pilot)).clamp(1, 7)
}

/// Display text for a pilot's current morale effect; empty when neutral.
pub fn morale_modifier_text(pilot: &Pilot) -> &'static str {
    if pilot.morale < MORALE_LOW_THRESHOLD {
        "LOW MORALE (-1 skill penalty)"
    } else if pilot.morale > MORALE_HIGH_THRESHOLD {
        "HIGH MORALE (+1 skill bonus)"
    } else {
        ""
    }
}

/// A pilot who walked out on the company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeserterReport {
    pub pilot_name: String,
    pub callsign: String,
    pub mech_id: Option<MechId>,
    pub mech_name: Option<String>,
}

/// Remove every non-KIA pilot whose morale has bottomed out at 0. A
/// deserter's assigned mech leaves the roster with them - stolen, not
/// transferred. Evaluated once over the roster as it stands right now;
/// morale changes made after this call wait for the next check.
pub fn check_desertion(company: &mut Company) -> Vec<DeserterReport> {
    let mut reports = Vec::new();
    let mut stolen: Vec<MechId> = Vec::new();

    for pilot in &company.mechwarriors {
        if pilot.is_kia() || pilot.morale > 0 {
            continue;
        }
        let mech_name = pilot
            .assigned_mech
            .and_then(|id| company.mech(id))
            .map(|m| m.name.clone());
        reports.push(DeserterReport {
            pilot_name: pilot.name.clone(),
            callsign: pilot.callsign.clone(),
            mech_id: pilot.assigned_mech,
            mech_name,
        });
        if let Some(id) = pilot.assigned_mech {
            stolen.push(id);
        }
    }

    company
        .mechwarriors
        .retain(|p| p.is_kia() || p.morale > 0);
    company.mechs.retain(|m| !stolen.contains(&m.id));

    reports
}

/// Narrative line for a desertion event.
pub fn desertion_message(report: &DeserterReport) -> String {
    match &report.mech_name {
        Some(mech) => format!(
            "\"{}\" has had enough. They vanish in the night, taking the {} with them.",
            report.callsign, mech
        ),
        None => format!(
            "\"{}\" has had enough. They slip away in the night, leaving nothing but an empty bunk.",
            report.callsign
        ),
    }
}

/// One recovery tick: every Injured pilot sheds one injury; at zero they
/// return to Active duty. Returns display messages for the week report.
pub fn recover_injuries(company: &mut Company) -> Vec<String> {
    let mut messages = Vec::new();
    for pilot in &mut company.mechwarriors {
        if pilot.status != PilotStatus::Injured || pilot.injuries == 0 {
            continue;
        }
        pilot.injuries -= 1;
        if pilot.injuries == 0 {
            pilot.status = PilotStatus::Active;
            messages.push(format!(
                "\"{}\" has recovered from injuries and is ready for duty.",
                pilot.callsign
            ));
        } else {
            messages.push(format!(
                "\"{}\" is recovering but still has {} injury(s).",
                pilot.callsign, pilot.injuries
            ));
        }
    }
    messages
}

/// Only Active pilots may be sent on missions.
pub fn is_deployable(pilot: &Pilot) -> bool {
    pilot.status == PilotStatus::Active
}

/// Pilots currently holding a spendable level-up.
pub fn pilots_with_pending_levelups(company: &Company) -> Vec<&Pilot> {
    company
        .mechwarriors
        .iter()
        .filter(|p| can_level_up(p))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use merc_core::{Mech, MechStatus, WeightClass};

    fn pilot(xp: u32) -> Pilot {
        let mut p = Pilot::new("Test Pilot", "Ace", 3, 4);
        p.experience = xp;
        p
    }

    fn mech(id: u32) -> Mech {
        Mech {
            id: MechId(id),
            name: "Wolverine WVR-6R".to_string(),
            weight_class: WeightClass::Medium,
            tonnage: 55,
            armor_current: 136,
            armor_max: 136,
            structure_current: 48,
            structure_max: 48,
            firepower: 6,
            speed: 6,
            status: MechStatus::Ready,
            repair_weeks_remaining: 0,
        }
    }

    #[test]
    fn level_two_pilot_spends_exactly_two_levelups() {
        let mut p = pilot(300);
        assert_eq!(p.available_levelups(), 2);

        assert!(apply_level_up(&mut p, Skill::Gunnery));
        assert!(apply_level_up(&mut p, Skill::Piloting));
        assert_eq!(p.gunnery, 2);
        assert_eq!(p.piloting, 3);
        assert_eq!(p.levelups_spent, 2);

        // Budget exhausted: nothing more to spend.
        assert!(!can_level_up(&p));
        assert!(!apply_level_up(&mut p, Skill::Gunnery));
        assert_eq!(p.gunnery, 2);

        // Crossing the next threshold reopens the budget.
        p.experience = 600;
        assert!(can_level_up(&p));
        assert!(apply_level_up(&mut p, Skill::Gunnery));
        assert_eq!(p.gunnery, 1);
    }

    #[test]
    fn levelup_at_skill_floor_is_rejected_without_mutation() {
        let mut p = pilot(1500);
        p.gunnery = 1;
        assert!(!apply_level_up(&mut p, Skill::Gunnery));
        assert_eq!(p.levelups_spent, 0);
        // The other skill still works.
        assert!(apply_level_up(&mut p, Skill::Piloting));
        assert_eq!(p.piloting, 3);
        assert_eq!(p.levelups_spent, 1);
    }

    #[test]
    fn kia_pilots_never_level_up() {
        let mut p = pilot(1000);
        p.status = PilotStatus::Kia;
        assert!(!can_level_up(&p));
        assert!(!apply_level_up(&mut p, Skill::Gunnery));
    }

    #[test]
    fn both_skills_at_floor_blocks_leveling() {
        let mut p = pilot(1500);
        p.gunnery = 1;
        p.piloting = 1;
        assert!(!can_level_up(&p));
    }

    #[test]
    fn xp_to_next_level_counts_down_and_caps() {
        let mut p = pilot(40);
        assert_eq!(xp_to_next_level(&p), Some(60));
        p.experience = 1500;
        assert_eq!(xp_to_next_level(&p), None);
    }

    #[test]
    fn morale_outcome_shifts_non_kia_only() {
        let mut company = Company::new("Test Company");
        let mut a = pilot(0);
        a.morale = 50;
        let mut b = pilot(0);
        b.callsign = "Down".to_string();
        b.morale = 50;
        b.status = PilotStatus::Kia;
        company.mechwarriors.push(a);
        company.mechwarriors.push(b);

        apply_morale_outcome(&mut company, CombatOutcome::Victory);
        assert_eq!(company.mechwarriors[0].morale, 60);
        assert_eq!(company.mechwarriors[1].morale, 50);

        apply_morale_outcome(&mut company, CombatOutcome::Defeat);
        assert_eq!(company.mechwarriors[0].morale, 45);

        apply_morale_outcome(&mut company, CombatOutcome::PyrrhicVictory);
        assert_eq!(company.mechwarriors[0].morale, 45);
    }

    #[test]
    fn morale_clamps_at_both_ends() {
        let mut company = Company::new("Test Company");
        let mut high = pilot(0);
        high.morale = 95;
        let mut low = pilot(0);
        low.callsign = "Grim".to_string();
        low.morale = 5;
        company.mechwarriors.push(high);
        company.mechwarriors.push(low);

        apply_morale_outcome(&mut company, CombatOutcome::Victory);
        assert_eq!(company.mechwarriors[0].morale, 100);
        apply_morale_outcome(&mut company, CombatOutcome::Defeat);
        assert_eq!(company.mechwarriors[1].morale, 0);
    }

    #[test]
    fn effective_skills_follow_morale_bands() {
        let mut p = pilot(0);
        p.morale = 50;
        assert_eq!(effective_gunnery(&p), 3);
        assert_eq!(morale_modifier_text(&p), "");

        p.morale = 20;
        assert_eq!(effective_gunnery(&p), 4);
        assert_eq!(effective_piloting(&p), 5);

        p.morale = 90;
        assert_eq!(effective_gunnery(&p), 2);
        assert_eq!(effective_piloting(&p), 3);
    }

    #[test]
    fn demoralized_worst_skill_reaches_seven() {
        let mut p = pilot(0);
        p.gunnery = 6;
        p.morale = 10;
        assert_eq!(effective_gunnery(&p), 7);
        p.gunnery = 1;
        p.morale = 95;
        assert_eq!(effective_gunnery(&p), 1);
    }

    #[test]
    fn deserter_takes_their_mech_and_spares_the_rest() {
        let mut company = Company::new("Test Company");
        let a = mech(0);
        let b = mech(1);
        company.mechs.push(a);
        company.mechs.push(b);
        company.next_mech_id = 2;

        let mut deserter = pilot(0);
        deserter.morale = 0;
        deserter.assigned_mech = Some(MechId(0));
        let mut loyal = pilot(0);
        loyal.callsign = "Raven".to_string();
        loyal.morale = 50;
        loyal.assigned_mech = Some(MechId(1));
        company.mechwarriors.push(deserter);
        company.mechwarriors.push(loyal);

        let reports = check_desertion(&mut company);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].callsign, "Ace");
        assert_eq!(reports[0].mech_id, Some(MechId(0)));

        assert_eq!(company.mechwarriors.len(), 1);
        assert_eq!(company.mechwarriors[0].callsign, "Raven");
        assert_eq!(company.mechs.len(), 1);
        assert_eq!(company.mechs[0].id, MechId(1));

        // Nothing left to desert on a second pass.
        assert!(check_desertion(&mut company).is_empty());
    }

    #[test]
    fn unassigned_deserter_steals_nothing() {
        let mut company = Company::new("Test Company");
        company.mechs.push(mech(0));
        let mut deserter = pilot(0);
        deserter.morale = 0;
        company.mechwarriors.push(deserter);

        let reports = check_desertion(&mut company);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].mech_id, None);
        assert_eq!(company.mechs.len(), 1);
        assert!(desertion_message(&reports[0]).contains("empty bunk"));
    }

    #[test]
    fn kia_pilots_do_not_desert() {
        let mut company = Company::new("Test Company");
        let mut dead = pilot(0);
        dead.morale = 0;
        dead.status = PilotStatus::Kia;
        company.mechwarriors.push(dead);
        assert!(check_desertion(&mut company).is_empty());
        assert_eq!(company.mechwarriors.len(), 1);
    }

    #[test]
    fn injury_recovery_steps_down_to_active() {
        let mut company = Company::new("Test Company");
        let mut hurt = pilot(0);
        hurt.status = PilotStatus::Injured;
        hurt.injuries = 2;
        company.mechwarriors.push(hurt);

        let messages = recover_injuries(&mut company);
        assert_eq!(messages.len(), 1);
        assert_eq!(company.mechwarriors[0].injuries, 1);
        assert_eq!(company.mechwarriors[0].status, PilotStatus::Injured);
        assert!(!is_deployable(&company.mechwarriors[0]));

        recover_injuries(&mut company);
        assert_eq!(company.mechwarriors[0].injuries, 0);
        assert_eq!(company.mechwarriors[0].status, PilotStatus::Active);
        assert!(is_deployable(&company.mechwarriors[0]));

        // Fully recovered pilots are untouched.
        assert!(recover_injuries(&mut company).is_empty());
    }

    #[test]
    fn pending_levelup_listing_filters_correctly() {
        let mut company = Company::new("Test Company");
        company.mechwarriors.push(pilot(300));
        company.mechwarriors.push(pilot(0));
        let mut spent = pilot(100);
        spent.callsign = "Spent".to_string();
        spent.levelups_spent = 1;
        company.mechwarriors.push(spent);

        let pending = pilots_with_pending_levelups(&company);
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].callsign, "Ace");
    }
}

//! Auto-resolved mission combat: lance power rating, success probability,
//! outcome roll, narrative log, damage/injury application, rewards, and
//! company bookkeeping.
//!
//! [`resolve_combat`] is the single entry point and never fails: every
//! input combination, including an empty roster, produces a valid
//! [`MissionResult`]. Callers are responsible for only invoking it when a
//! contract is actually due for resolution.

use merc_core::{Company, Contract, PilotStatus};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

/// Possible mission outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatOutcome {
    Victory,
    #[serde(rename = "Pyrrhic Victory")]
    PyrrhicVictory,
    Defeat,
}

impl CombatOutcome {
    pub fn label(self) -> &'static str {
        match self {
            CombatOutcome::Victory => "Victory",
            CombatOutcome::PyrrhicVictory => "Pyrrhic Victory",
            CombatOutcome::Defeat => "Defeat",
        }
    }

    /// Both victory flavors count as mission success.
    pub fn is_success(self) -> bool {
        self != CombatOutcome::Defeat
    }
}

/// Damage dealt to a single mech during a mission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MechDamageReport {
    pub mech_name: String,
    pub armor_lost: i32,
    pub structure_lost: i32,
    pub destroyed: bool,
}

/// Injuries sustained by a single pilot during a mission.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PilotInjuryReport {
    pub callsign: String,
    pub injuries_sustained: u32,
}

/// Complete outcome of a resolved mission, handed to the presentation
/// layer as plain data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MissionResult {
    pub outcome: CombatOutcome,
    pub combat_log: Vec<String>,
    pub mech_damage: Vec<MechDamageReport>,
    pub pilot_injuries: Vec<PilotInjuryReport>,
    pub c_bills_earned: i64,
    pub xp_earned: u32,
    pub lance_power: f64,
    pub success_chance: f64,
}

/// Composite combat strength of the deployable lance.
///
/// Each non-Destroyed mech with a non-KIA assigned pilot contributes
/// `firepower*10` scaled by armor condition, plus a speed evasion bonus,
/// multiplied by pilot skill and morale modifiers, and reduced by 25% for
/// an injured pilot. Ineligible mechs and pilots contribute nothing. The
/// sum is rounded to one decimal; an empty lance rates exactly 0.0.
pub fn lance_power(company: &Company) -> f64 {
    let mut total = 0.0_f64;

    for (pi, mi) in company.deployed_pair_indices() {
        let pilot = &company.mechwarriors[pi];
        let mech = &company.mechs[mi];

        let mut power = f64::from(mech.firepower) * 10.0;
        power *= 0.5 + 0.5 * mech.armor_ratio();
        power += f64::from(mech.speed) * 1.5;

        // Skills run 1-6, lower is better, centered at 3.5.
        let skill_modifier = 1.0
            + (3.5 - f64::from(pilot.gunnery)) * 0.15
            + (3.5 - f64::from(pilot.piloting)) * 0.10;
        power *= skill_modifier.max(0.5);

        let morale_modifier = 1.0 + f64::from(pilot.morale - 50) * 0.003;
        power *= morale_modifier.max(0.8);

        if pilot.status == PilotStatus::Injured || pilot.injuries > 0 {
            power *= 0.75;
        }

        total += power;
    }

    (total * 10.0).round() / 10.0
}

/// Power threshold a lance must measure against per skull rating.
fn difficulty_rating(difficulty: i32) -> f64 {
    match difficulty {
        1 => 80.0,
        2 => 140.0,
        3 => 200.0,
        4 => 270.0,
        5 => 350.0,
        _ => 200.0,
    }
}

/// Probability of mission success for a lance power against a skull
/// rating, clamped to [0.05, 0.95] - success is never certain nor
/// impossible.
pub fn success_chance(lance_power: f64, difficulty: i32) -> f64 {
    let rating = difficulty_rating(difficulty);
    if rating <= 0.0 {
        return 0.95;
    }
    let ratio = lance_power / rating;
    // ratio 0.5 => ~33%, 1.0 => 65%, 2.0 => 95%.
    let chance = if ratio >= 1.0 {
        0.65 + 0.30 * (ratio - 1.0).min(1.0)
    } else {
        0.65 * ratio
    };
    chance.clamp(0.05, 0.95)
}

/// Roll the three-way outcome: of the success mass, 65% is a clean
/// Victory and the rest Pyrrhic; everything above `chance` is a Defeat.
pub fn roll_outcome(rng: &mut impl Rng, chance: f64) -> CombatOutcome {
    let roll: f64 = rng.gen();
    if roll < chance * 0.65 {
        CombatOutcome::Victory
    } else if roll < chance {
        CombatOutcome::PyrrhicVictory
    } else {
        CombatOutcome::Defeat
    }
}

// Narrative templates use {callsign}, {mech}, and {enemy} placeholders.
static VICTORY_EVENTS: &[&str] = &[
    "{callsign} lands a devastating alpha strike on an enemy {enemy}!",
    "{callsign}'s {mech} delivers a punishing barrage, crippling the opposition!",
    "Enemy fire bounces harmlessly off {callsign}'s {mech} armor!",
    "{callsign} outflanks the enemy lance with superior positioning!",
    "{callsign}'s precision shots core an enemy mech - it goes down!",
    "The enemy falls back under {callsign}'s relentless assault!",
    "{callsign} leads a coordinated strike that shatters the enemy formation!",
    "{callsign}'s {mech} weaves through enemy fire untouched!",
    "A well-placed shot from {callsign} detonates an enemy ammo rack!",
    "{callsign} pushes forward aggressively, forcing the enemy to retreat!",
];

static PYRRHIC_EVENTS: &[&str] = &[
    "{callsign}'s {mech} takes heavy fire to the left torso!",
    "{callsign} scores a hit but takes return fire to the center mass!",
    "An enemy mech lands a solid hit on {callsign}'s {mech} - armor buckling!",
    "{callsign} manages to down an enemy, but not before absorbing serious damage!",
    "Warning alarms blare in {callsign}'s cockpit as armor breaches mount!",
    "{callsign}'s {mech} staggers from a critical hit but keeps fighting!",
    "The enemy focuses fire on {callsign} - multiple armor sections compromised!",
    "{callsign} powers through the pain of a cockpit concussion to keep firing!",
    "Shrapnel rakes {callsign}'s {mech} as an enemy mech explodes nearby!",
];

static DEFEAT_EVENTS: &[&str] = &[
    "{callsign}'s {mech} is overwhelmed by concentrated enemy fire!",
    "The enemy lance outmaneuvers {callsign} - shots coming from all sides!",
    "{callsign} calls for retreat as {mech}'s armor is shredded!",
    "An enemy assault mech blindsides {callsign}'s {mech} with a devastating blow!",
    "{callsign} struggles to maintain control as {mech} takes critical damage!",
    "Enemy reinforcements arrive - {callsign} is outnumbered and outgunned!",
    "{callsign}'s {mech} goes down hard, smoke pouring from the reactor!",
    "The enemy commander targets {callsign} directly - it's a trap!",
    "{callsign} fights desperately but the enemy has the advantage!",
    "A lucky enemy shot hits {callsign}'s {mech} right in the cockpit!",
];

static NEUTRAL_EVENTS: &[&str] = &[
    "The lance closes to engagement range - weapons hot!",
    "Enemy contacts confirmed on radar - {callsign} calls out targets!",
    "The battlefield erupts as both lances open fire simultaneously!",
    "{callsign} maneuvers {mech} into cover behind a rocky outcrop!",
    "Missile trails criss-cross the sky as both sides exchange LRM volleys!",
    "The ground shakes as heavy mechs trade blows at close range!",
];

static ENEMY_MECH_NAMES: &[&str] = &[
    "Hunchback",
    "Wolverine",
    "Shadow Hawk",
    "Jenner",
    "Commando",
    "Centurion",
    "Thunderbolt",
    "Catapult",
    "Atlas",
    "BattleMaster",
    "Griffin",
    "Rifleman",
    "Marauder",
    "Warhammer",
    "Panther",
];

fn fill_template(template: &str, callsign: &str, mech: &str, enemy: &str) -> String {
    template
        .replace("{callsign}", callsign)
        .replace("{mech}", mech)
        .replace("{enemy}", enemy)
}

/// Generate the mission replay: 4-6 narrative lines (or `num_events` when
/// non-zero) referencing real callsigns and mech names from the roster. A
/// neutral opener and an outcome-matched closer bracket tone-weighted
/// body lines. Cosmetic only - no mechanical effect.
pub fn generate_combat_events(
    rng: &mut impl Rng,
    company: &Company,
    outcome: CombatOutcome,
    num_events: usize,
) -> Vec<String> {
    let num_events = if num_events == 0 {
        rng.gen_range(4..=6)
    } else {
        num_events
    };

    let pairs = company.deployed_pair_indices();
    if pairs.is_empty() {
        return vec!["The lance deploys but finds no opposition.".to_string()];
    }

    let (primary_pool, secondary_pool, primary_ratio) = match outcome {
        CombatOutcome::Victory => (VICTORY_EVENTS, NEUTRAL_EVENTS, 0.75),
        CombatOutcome::PyrrhicVictory => (PYRRHIC_EVENTS, VICTORY_EVENTS, 0.55),
        CombatOutcome::Defeat => (DEFEAT_EVENTS, PYRRHIC_EVENTS, 0.70),
    };

    let mut events = Vec::with_capacity(num_events + 1);

    let &(pi, mi) = pairs.choose(rng).unwrap_or(&pairs[0]);
    let enemy = ENEMY_MECH_NAMES.choose(rng).copied().unwrap_or("Atlas");
    let opener = NEUTRAL_EVENTS.choose(rng).copied().unwrap_or(NEUTRAL_EVENTS[0]);
    events.push(fill_template(
        opener,
        &company.mechwarriors[pi].callsign,
        &company.mechs[mi].name,
        enemy,
    ));

    let mut used_templates: HashSet<&str> = HashSet::new();
    for _ in 1..num_events {
        let &(pi, mi) = pairs.choose(rng).unwrap_or(&pairs[0]);
        let enemy = ENEMY_MECH_NAMES.choose(rng).copied().unwrap_or("Atlas");

        let pool = if rng.gen::<f64>() < primary_ratio {
            primary_pool
        } else {
            secondary_pool
        };
        let available: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|t| !used_templates.contains(t))
            .collect();
        let template = if available.is_empty() {
            pool.choose(rng).copied().unwrap_or(pool[0])
        } else {
            available.choose(rng).copied().unwrap_or(available[0])
        };
        used_templates.insert(template);

        events.push(fill_template(
            template,
            &company.mechwarriors[pi].callsign,
            &company.mechs[mi].name,
            enemy,
        ));
    }

    events.push(match outcome {
        CombatOutcome::Victory => "All enemy forces neutralized. Mission complete - Victory!",
        CombatOutcome::PyrrhicVictory => {
            "The enemy is defeated, but the cost was high. Pyrrhic Victory."
        }
        CombatOutcome::Defeat => "Command orders a fighting withdrawal. Mission failed - Defeat.",
    }
    .to_string());

    events
}

/// Apply combat damage to mechs and injuries to pilots.
///
/// Victory is clean. A Pyrrhic Victory hits 1-2 mechs at moderate
/// severity; a Defeat hits 2-3 at heavy severity, and every surviving
/// pilot loses extra morale. Damage depletes armor before bleeding into
/// structure; a mech reaching zero structure is Destroyed and its pilot's
/// injury odds jump.
pub fn apply_damage(
    rng: &mut impl Rng,
    company: &mut Company,
    outcome: CombatOutcome,
    difficulty: i32,
) -> (Vec<MechDamageReport>, Vec<PilotInjuryReport>) {
    if outcome == CombatOutcome::Victory {
        return (Vec::new(), Vec::new());
    }

    let pairs = company.deployed_pair_indices();
    if pairs.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let d = f64::from(difficulty);
    let (num_damaged, damage_severity, base_injury_chance) = match outcome {
        CombatOutcome::PyrrhicVictory => {
            let max_targets = pairs.len().min(2);
            (
                rng.gen_range(1..=max_targets.max(1)),
                0.15 + d * 0.05,
                0.25 + d * 0.05,
            )
        }
        _ => {
            let max_targets = pairs.len().min(3);
            (
                rng.gen_range(max_targets.min(2)..=max_targets.max(1)),
                0.25 + d * 0.10,
                0.40 + d * 0.10,
            )
        }
    };

    let targets: Vec<(usize, usize)> = pairs
        .choose_multiple(rng, num_damaged.min(pairs.len()))
        .copied()
        .collect();

    let mut mech_reports = Vec::new();
    let mut pilot_reports = Vec::new();

    for (pi, mi) in targets {
        let jitter = rng.gen_range(0.7..=1.3);
        let raw = f64::from(company.mechs[mi].armor_max) * damage_severity * jitter;
        let amount = (raw as i32).max(1);

        let breakdown = company.mechs[mi].take_damage(amount);
        let mut injury_chance = base_injury_chance;
        if breakdown.destroyed {
            injury_chance = (injury_chance + 0.30).min(0.90);
        }
        mech_reports.push(MechDamageReport {
            mech_name: company.mechs[mi].name.clone(),
            armor_lost: breakdown.armor_lost,
            structure_lost: breakdown.structure_lost,
            destroyed: breakdown.destroyed,
        });

        if rng.gen::<f64>() < injury_chance {
            let mut injuries = 1;
            if outcome == CombatOutcome::Defeat && difficulty >= 4 && rng.gen::<f64>() < 0.3 {
                injuries = 2;
            }
            let morale_hit = rng.gen_range(5..=15);
            let pilot = &mut company.mechwarriors[pi];
            pilot.injuries += injuries;
            pilot.status = PilotStatus::Injured;
            pilot.adjust_morale(-morale_hit);
            pilot_reports.push(PilotInjuryReport {
                callsign: pilot.callsign.clone(),
                injuries_sustained: injuries,
            });
        }
    }

    if outcome == CombatOutcome::Defeat {
        for pilot in company.mechwarriors.iter_mut().filter(|p| !p.is_kia()) {
            let hit = rng.gen_range(3..=8);
            pilot.adjust_morale(-hit);
        }
    }

    (mech_reports, pilot_reports)
}

/// Pay out C-Bills and award XP/morale for the outcome. Every non-KIA
/// pilot in the company gains the XP and morale, deployed or not.
/// Returns `(c_bills_earned, xp_per_pilot)`.
pub fn calculate_rewards(
    rng: &mut impl Rng,
    company: &mut Company,
    contract: &Contract,
    outcome: CombatOutcome,
) -> (i64, u32) {
    let d = contract.difficulty as u32;
    let (c_bills, base_xp, morale_boost) = match outcome {
        CombatOutcome::Victory => (contract.payout, 50 + d * 20, rng.gen_range(3..=8)),
        CombatOutcome::PyrrhicVictory => (contract.payout, 30 + d * 10, rng.gen_range(0..=3)),
        CombatOutcome::Defeat => (contract.payout / 4, 10 + d * 5, 0),
    };

    company.c_bills += c_bills;
    for pilot in company.mechwarriors.iter_mut().filter(|p| !p.is_kia()) {
        pilot.experience += base_xp;
        if morale_boost > 0 {
            pilot.adjust_morale(morale_boost);
        }
    }

    (c_bills, base_xp)
}

/// Resolve an entire mission against the active contract: rate the lance,
/// roll the outcome, narrate it, apply damage, pay rewards, and update
/// the company's campaign bookkeeping. The contract is consumed - the
/// company's `active_contract` is cleared and the week advances by one.
pub fn resolve_combat(
    rng: &mut impl Rng,
    company: &mut Company,
    contract: &Contract,
) -> MissionResult {
    let lance_power = lance_power(company);
    let success_chance = success_chance(lance_power, contract.difficulty);
    let outcome = roll_outcome(rng, success_chance);
    let combat_log = generate_combat_events(rng, company, outcome, 0);

    let kia_before = company.kia_count();
    let (mech_damage, pilot_injuries) =
        apply_damage(rng, company, outcome, contract.difficulty);
    let (c_bills_earned, xp_earned) = calculate_rewards(rng, company, contract, outcome);

    company.contracts_completed += 1;
    company.total_earnings += c_bills_earned;
    company.week += 1;
    company.recompute_month();

    let destroyed = mech_damage.iter().filter(|d| d.destroyed).count() as u32;
    company.mechs_lost += destroyed;
    company.pilots_lost += (company.kia_count() - kia_before) as u32;

    if contract.is_final_contract && outcome == CombatOutcome::Victory {
        company.final_contract_completed = true;
    }

    company.active_contract = None;

    let rep_delta = match outcome {
        CombatOutcome::Victory => rng.gen_range(2..=5),
        CombatOutcome::PyrrhicVictory => rng.gen_range(0..=2),
        CombatOutcome::Defeat => -rng.gen_range(1..=3),
    };
    company.reputation = (company.reputation + rep_delta).clamp(0, 100);

    info!(
        outcome = outcome.label(),
        lance_power,
        success_chance,
        payout = c_bills_earned,
        "mission resolved"
    );

    MissionResult {
        outcome,
        combat_log,
        mech_damage,
        pilot_injuries,
        c_bills_earned,
        xp_earned,
        lance_power,
        success_chance,
    }
}

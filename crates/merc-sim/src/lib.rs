#![deny(warnings)]

//! Campaign simulation engines for Iron Lance: pilot progression, the
//! contract market, auto-resolved combat, random events, and the weekly
//! turn cycle.
//!
//! Every probabilistic operation takes an explicit `rand::Rng`, so a
//! seeded `ChaCha8Rng` makes whole campaigns reproducible.

pub mod combat;
pub mod events;
pub mod market;
pub mod opposition;
pub mod progression;
pub mod turn;

pub use combat::{
    apply_damage, calculate_rewards, generate_combat_events, lance_power, resolve_combat,
    roll_outcome, success_chance, CombatOutcome, MechDamageReport, MissionResult,
    PilotInjuryReport,
};
pub use events::{apply_event, roll_event, RandomEventKind, EVENT_CHANCE, EVENT_POOL};
pub use market::{
    accept_contract, assign_pilot, buy_mech, dismiss_pilot, field_repair_quote, final_contract,
    generate_contracts, generate_hiring_hall, generate_salvage_market, hire_pilot, hiring_cost,
    max_difficulty_for_month, mech_price, order_field_repair, unassign_pilot, MarketError,
    PilotOffer, RepairQuote, SalvageItem, MAX_LANCE_SIZE,
};
pub use opposition::{describe_enemy_lance, generate_enemy_lance, EnemyMech};
pub use progression::{
    apply_level_up, apply_morale_outcome, can_level_up, check_desertion, desertion_message,
    effective_gunnery, effective_piloting, is_deployable, morale_modifier_text,
    pilots_with_pending_levelups, recover_injuries, xp_to_next_level, DeserterReport, Skill,
};
pub use turn::{advance_week, company_status_line, WeekSummary, WEEKLY_PAYROLL_PER_PILOT};

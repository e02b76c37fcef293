#![deny(warnings)]

//! Core domain models and catalogs for Iron Lance.
//!
//! This crate defines the serializable campaign entities (mechs, pilots,
//! contracts, and the company aggregate), validation helpers guaranteeing
//! their invariants, and the immutable template catalogs everything is
//! constructed from. All randomness is injected: generation helpers take
//! an explicit `rand::Rng`.

pub mod catalog;
pub mod contracts;
pub mod factions;
pub mod model;
pub mod names;

pub use catalog::{
    mech_template, CatalogError, MechTemplate, MECH_TEMPLATES, STARTING_LANCE_KEYS,
    STARTING_PILOTS,
};
pub use contracts::{ContractTemplate, CONTRACT_TEMPLATES, FINAL_CONTRACT_TEMPLATE};
pub use factions::{faction, faction_color, Faction, EMPLOYERS, FACTIONS};
pub use model::{
    validate_company, validate_contract, validate_mech, validate_pilot, Company, Contract,
    DamageBreakdown, Mech, MechId, MechStatus, MissionType, Pilot, PilotStatus, ValidationError,
    WeightClass, MIN_SKILL, NEW_PILOT_MORALE, STARTING_C_BILLS, STARTING_REPUTATION,
    XP_THRESHOLDS,
};
pub use names::{generate_callsign, generate_name, generate_pilot, generate_roster};

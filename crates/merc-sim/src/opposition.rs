//! Enemy lance generation for battle briefings.
//!
//! Difficulty decides the weight-class composition of the opposing
//! force; individual machines are drawn from a fixed template table.
//! The scouted lance is informational - auto-resolution rates the
//! opposition through the difficulty threshold, not unit by unit - but
//! it gives the briefing screen something concrete to show.

use merc_core::WeightClass;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A hostile mech as it appears in a briefing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyMech {
    pub name: String,
    pub weight_class: WeightClass,
    pub tonnage: u32,
    pub firepower: i32,
    pub gunnery: i32,
}

/// (variant, tonnage, firepower, gunnery) per weight class.
type EnemyTemplate = (&'static str, u32, i32, i32);

static LIGHT_ENEMIES: &[EnemyTemplate] = &[
    ("Locust LCT-1V", 20, 5, 3),
    ("Commando COM-2D", 25, 6, 4),
    ("Jenner JR7-D", 35, 7, 5),
    ("Panther PNT-9R", 35, 6, 4),
];

static MEDIUM_ENEMIES: &[EnemyTemplate] = &[
    ("Cicada CDA-2A", 40, 7, 5),
    ("Blackjack BJ-1", 45, 8, 6),
    ("Shadow Hawk SHD-2H", 55, 8, 6),
    ("Wolverine WVR-6R", 55, 9, 7),
];

static HEAVY_ENEMIES: &[EnemyTemplate] = &[
    ("Catapult CPLT-C1", 65, 9, 7),
    ("Thunderbolt TDR-5S", 65, 10, 8),
    ("Warhammer WHM-6R", 70, 10, 8),
    ("Marauder MAD-3R", 75, 11, 9),
];

static ASSAULT_ENEMIES: &[EnemyTemplate] = &[
    ("Zeus ZEU-6S", 80, 11, 9),
    ("Awesome AWS-8Q", 80, 12, 10),
    ("BattleMaster BLR-1G", 85, 12, 9),
    ("Atlas AS7-D", 100, 13, 10),
];

fn pool_for(weight_class: WeightClass) -> &'static [EnemyTemplate] {
    match weight_class {
        WeightClass::Light => LIGHT_ENEMIES,
        WeightClass::Medium => MEDIUM_ENEMIES,
        WeightClass::Heavy => HEAVY_ENEMIES,
        WeightClass::Assault => ASSAULT_ENEMIES,
    }
}

/// Opposing-force composition per skull rating.
fn composition(difficulty: i32) -> &'static [WeightClass] {
    match difficulty {
        1 => &[WeightClass::Light, WeightClass::Light],
        2 => &[WeightClass::Light, WeightClass::Light, WeightClass::Medium],
        3 => &[WeightClass::Medium, WeightClass::Medium, WeightClass::Heavy],
        4 => &[WeightClass::Heavy, WeightClass::Heavy, WeightClass::Medium],
        _ => &[
            WeightClass::Heavy,
            WeightClass::Heavy,
            WeightClass::Medium,
            WeightClass::Medium,
        ],
    }
}

/// Scout the enemy lance a contract of this difficulty fields: 2 light
/// machines at 1 skull up to a four-mech heavy formation at 5.
pub fn generate_enemy_lance(rng: &mut impl Rng, difficulty: i32) -> Vec<EnemyMech> {
    composition(difficulty)
        .iter()
        .map(|&wc| {
            let pool = pool_for(wc);
            let &(name, tonnage, firepower, gunnery) =
                pool.choose(rng).unwrap_or(&pool[0]);
            EnemyMech {
                name: name.to_string(),
                weight_class: wc,
                tonnage,
                firepower,
                gunnery,
            }
        })
        .collect()
}

/// One-line briefing text for a scouted lance.
pub fn describe_enemy_lance(lance: &[EnemyMech]) -> String {
    if lance.is_empty() {
        return "No enemy contacts reported.".to_string();
    }
    let names: Vec<&str> = lance.iter().map(|m| m.name.as_str()).collect();
    let total_tons: u32 = lance.iter().map(|m| m.tonnage).sum();
    format!(
        "{} hostiles ({} tons): {}",
        lance.len(),
        total_tons,
        names.join(", ")
    )
}

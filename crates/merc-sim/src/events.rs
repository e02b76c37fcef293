//! Random inter-week events: low-probability side effects rolled between
//! turns. Independent of the rest of the pipeline and easy to extend -
//! add a variant, its copy, and an arm in [`apply_event`].

use merc_core::{Company, MechStatus, PilotStatus};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Chance of any event firing after a week advance.
pub const EVENT_CHANCE: f64 = 0.30;

/// C-Bills granted by a windfall.
pub const WINDFALL_AMOUNT: i64 = 50_000;

/// The event pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RandomEventKind {
    Windfall,
    Desertion,
    ReputationBoost,
    MechanicsDiscovery,
    SupplyShortage,
    BlackMarketDeal,
    PirateAmbush,
    HiringFair,
}

pub static EVENT_POOL: [RandomEventKind; 8] = [
    RandomEventKind::Windfall,
    RandomEventKind::Desertion,
    RandomEventKind::ReputationBoost,
    RandomEventKind::MechanicsDiscovery,
    RandomEventKind::SupplyShortage,
    RandomEventKind::BlackMarketDeal,
    RandomEventKind::PirateAmbush,
    RandomEventKind::HiringFair,
];

impl RandomEventKind {
    pub fn title(self) -> &'static str {
        match self {
            RandomEventKind::Windfall => "Windfall",
            RandomEventKind::Desertion => "Desertion",
            RandomEventKind::ReputationBoost => "Reputation Boost",
            RandomEventKind::MechanicsDiscovery => "Mechanic's Discovery",
            RandomEventKind::SupplyShortage => "Supply Shortage",
            RandomEventKind::BlackMarketDeal => "Black Market Deal",
            RandomEventKind::PirateAmbush => "Pirate Ambush",
            RandomEventKind::HiringFair => "Hiring Fair",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RandomEventKind::Windfall => {
                "A grateful merchant whose convoy you once protected has sent a gift \
                 of spare parts and supplies to your company."
            }
            RandomEventKind::Desertion => {
                "One of your MechWarriors has gone AWOL. Security footage shows them \
                 leaving the DropShip in the middle of the night with a packed duffel bag."
            }
            RandomEventKind::ReputationBoost => {
                "Your last mission made the news feeds across several systems. Combat \
                 footage has gone viral, and your company's reputation has improved \
                 significantly."
            }
            RandomEventKind::MechanicsDiscovery => {
                "Your chief tech has found salvageable parts in the storage bay that \
                 were written off as scrap. One of your damaged mechs has been \
                 partially repaired at no cost."
            }
            RandomEventKind::SupplyShortage => {
                "A regional supply shortage has driven up the price of spare parts \
                 and repair materials. Your next repair will cost significantly more \
                 than usual."
            }
            RandomEventKind::BlackMarketDeal => {
                "A shady dealer has contacted you with an offer: a 'slightly used' \
                 mech at a steep discount. No questions asked about its origin."
            }
            RandomEventKind::PirateAmbush => {
                "Your DropShip has been ambushed by pirates during a routine jump! \
                 Scanners detect two light mechs closing in. Your pilots are \
                 scrambling to launch a defense."
            }
            RandomEventKind::HiringFair => {
                "A veteran MechWarrior who lost their last company is looking for \
                 work. They're willing to sign on for half the usual hiring bonus \
                 if you can offer them a mech to pilot."
            }
        }
    }

    /// Whether the presentation layer must ask before applying.
    pub fn requires_choice(self) -> bool {
        matches!(
            self,
            RandomEventKind::BlackMarketDeal | RandomEventKind::HiringFair
        )
    }

    pub fn choice_prompt(self) -> &'static str {
        match self {
            RandomEventKind::BlackMarketDeal => "Accept the black market deal?",
            RandomEventKind::HiringFair => "Hire the veteran pilot?",
            _ => "",
        }
    }
}

/// Roll the weekly event check: `Some` on the fixed 30% chance.
pub fn roll_event(rng: &mut impl Rng) -> Option<RandomEventKind> {
    if rng.gen::<f64>() < EVENT_CHANCE {
        EVENT_POOL.choose(rng).copied()
    } else {
        None
    }
}

/// Apply an event's effect to the company and describe what happened.
/// Choice events that were not accepted apply nothing.
pub fn apply_event(
    rng: &mut impl Rng,
    company: &mut Company,
    event: RandomEventKind,
    accepted: bool,
) -> String {
    if event.requires_choice() && !accepted {
        return "Declined.".to_string();
    }

    match event {
        RandomEventKind::Windfall => {
            company.c_bills += WINDFALL_AMOUNT;
            format!("Received {WINDFALL_AMOUNT} C-Bills.")
        }
        RandomEventKind::Desertion => {
            let awol = company
                .mechwarriors
                .iter()
                .enumerate()
                .filter(|(_, p)| p.status == PilotStatus::Active)
                .min_by_key(|(_, p)| p.morale)
                .map(|(i, _)| i);
            match awol {
                Some(idx) => {
                    let pilot = company.mechwarriors.remove(idx);
                    format!(
                        "{} ({}) has gone AWOL and left the company.",
                        pilot.name, pilot.callsign
                    )
                }
                None => "No active pilots to desert.".to_string(),
            }
        }
        RandomEventKind::ReputationBoost => {
            company.reputation = (company.reputation + 5).clamp(0, 100);
            "Reputation increased by 5.".to_string()
        }
        RandomEventKind::MechanicsDiscovery => {
            let damaged: Vec<usize> = company
                .mechs
                .iter()
                .enumerate()
                .filter(|(_, m)| m.status == MechStatus::Damaged)
                .map(|(i, _)| i)
                .collect();
            match damaged.choose(rng) {
                Some(&idx) => {
                    let mech = &mut company.mechs[idx];
                    let restored = mech.armor_max / 4;
                    mech.armor_current = (mech.armor_current + restored).min(mech.armor_max);
                    mech.recompute_status();
                    format!("Repaired {} armor by {} points.", mech.name, restored)
                }
                None => "No damaged mechs to repair.".to_string(),
            }
        }
        RandomEventKind::SupplyShortage => {
            "WARNING: Spare parts prices have doubled. Next repair will cost 2x normal."
                .to_string()
        }
        RandomEventKind::BlackMarketDeal => {
            "A shady dealer approaches with a mech offer...".to_string()
        }
        RandomEventKind::PirateAmbush => {
            "Pirates are attacking the DropShip! Prepare for combat!".to_string()
        }
        RandomEventKind::HiringFair => {
            "A veteran MechWarrior is available for hire at a discount.".to_string()
        }
    }
}

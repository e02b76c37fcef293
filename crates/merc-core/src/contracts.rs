//! Contract template catalog: the static offers the market scales and
//! draws from each week, plus the one-time campaign finale.

use crate::model::MissionType;

/// A contract blueprint before month scaling and employer assignment.
#[derive(Clone, Copy, Debug)]
pub struct ContractTemplate {
    pub mission_type: MissionType,
    pub base_difficulty: i32,
    pub base_payout: i64,
    pub salvage_rights: i32,
    pub bonus_objective: &'static str,
    pub description: &'static str,
}

/// The standing template pool: garrison duty (easy, low pay), raids
/// (medium risk, good pay), base assaults (high risk, high pay), and
/// recon (low risk, low pay).
pub static CONTRACT_TEMPLATES: &[ContractTemplate] = &[
    ContractTemplate {
        mission_type: MissionType::GarrisonDuty,
        base_difficulty: 1,
        base_payout: 80_000,
        salvage_rights: 10,
        bonus_objective: "No civilian casualties during garrison period.",
        description: "Border world needs a visible military presence. Expect light \
                      pirate activity and routine patrols. Lodging and resupply \
                      provided on-site.",
    },
    ContractTemplate {
        mission_type: MissionType::GarrisonDuty,
        base_difficulty: 1,
        base_payout: 90_000,
        salvage_rights: 15,
        bonus_objective: "Repel all raids without losing a mech.",
        description: "A mining colony on the Periphery border requires protection \
                      from bandits. Intelligence suggests only light resistance, \
                      but the locals are nervous.",
    },
    ContractTemplate {
        mission_type: MissionType::GarrisonDuty,
        base_difficulty: 2,
        base_payout: 120_000,
        salvage_rights: 15,
        bonus_objective: "Maintain garrison for the full contract period.",
        description: "Defend a strategic supply depot along a contested border. \
                      Previous garrison units reported minor skirmishes with \
                      unidentified raiding parties.",
    },
    ContractTemplate {
        mission_type: MissionType::Raid,
        base_difficulty: 2,
        base_payout: 200_000,
        salvage_rights: 30,
        bonus_objective: "Destroy the ammo depot before extraction.",
        description: "Strike behind enemy lines and hit a forward supply cache. \
                      Speed is essential - get in, cause damage, and withdraw \
                      before reinforcements arrive.",
    },
    ContractTemplate {
        mission_type: MissionType::Raid,
        base_difficulty: 3,
        base_payout: 280_000,
        salvage_rights: 35,
        bonus_objective: "Capture the enemy commander's mech intact.",
        description: "Intelligence has located an enemy staging area. Your lance \
                      will conduct a hit-and-run attack on the motor pool. \
                      Expect medium resistance and possible turret defenses.",
    },
    ContractTemplate {
        mission_type: MissionType::Raid,
        base_difficulty: 3,
        base_payout: 300_000,
        salvage_rights: 40,
        bonus_objective: "Disable the communications array.",
        description: "A rival house has established a listening post too close \
                      for comfort. Your mission: destroy the sensor equipment \
                      and any defending forces. Watch for minefields.",
    },
    ContractTemplate {
        mission_type: MissionType::BaseAssault,
        base_difficulty: 4,
        base_payout: 500_000,
        salvage_rights: 45,
        bonus_objective: "Secure the base with minimal structural damage.",
        description: "Full-scale assault on an enemy firebase. Intelligence reports \
                      a reinforced lance of heavy mechs defending the perimeter. \
                      Artillery support will soften targets before your advance.",
    },
    ContractTemplate {
        mission_type: MissionType::BaseAssault,
        base_difficulty: 4,
        base_payout: 550_000,
        salvage_rights: 50,
        bonus_objective: "Eliminate all defending forces.",
        description: "An enemy forward operating base threatens supply lines. \
                      We need it taken out. Expect heavy resistance including \
                      assault-class mechs and vehicle support.",
    },
    ContractTemplate {
        mission_type: MissionType::BaseAssault,
        base_difficulty: 5,
        base_payout: 750_000,
        salvage_rights: 50,
        bonus_objective: "Capture the base commander alive.",
        description: "This is the big one, Commander. A fortified command center \
                      deep in enemy territory. Two full lances defend it, with \
                      armor and air support. Glory or death awaits.",
    },
    ContractTemplate {
        mission_type: MissionType::Recon,
        base_difficulty: 1,
        base_payout: 60_000,
        salvage_rights: 5,
        bonus_objective: "Map all enemy positions without being detected.",
        description: "Scout a remote sector and report enemy troop movements. \
                      Stealth is paramount - engage only if discovered. Fast \
                      mechs recommended for this operation.",
    },
    ContractTemplate {
        mission_type: MissionType::Recon,
        base_difficulty: 2,
        base_payout: 100_000,
        salvage_rights: 10,
        bonus_objective: "Recover the data core from the crashed dropship.",
        description: "A DropShip went down in contested territory carrying \
                      sensitive intelligence. Retrieve the black box before \
                      the enemy does. Time is critical.",
    },
    ContractTemplate {
        mission_type: MissionType::Recon,
        base_difficulty: 1,
        base_payout: 70_000,
        salvage_rights: 5,
        bonus_objective: "Identify the enemy lance composition.",
        description: "Long-range sensors have detected movement in the northern \
                      wastes. We need eyes on the ground to confirm what we're \
                      dealing with. Avoid contact if possible.",
    },
];

/// The campaign capstone offered once the company survives to month 12.
pub static FINAL_CONTRACT_TEMPLATE: ContractTemplate = ContractTemplate {
    mission_type: MissionType::BaseAssault,
    base_difficulty: 5,
    base_payout: 1_500_000,
    salvage_rights: 60,
    bonus_objective: "Break the siege and hold the capital.",
    description: "Every favor you are owed has been called in for this one. A \
                  renegade warlord's headquarters stands between the Inner \
                  Sphere and another decade of war. Finish it, Commander.",
};

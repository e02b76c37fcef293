//! Employer faction catalog: the Great Houses plus the neutral parties
//! that post contracts on the market.

use crate::model::MissionType;

/// A contract-issuing faction.
#[derive(Clone, Copy, Debug)]
pub struct Faction {
    pub name: &'static str,
    /// Display color tag for the presentation layer.
    pub color: &'static str,
    pub preferred_contracts: &'static [MissionType],
    pub description: &'static str,
}

/// Employers drawn for market contracts, in catalog order.
pub static EMPLOYERS: [&str; 6] = [
    "House Davion",
    "House Steiner",
    "House Liao",
    "House Marik",
    "House Kurita",
    "ComStar",
];

pub static FACTIONS: &[Faction] = &[
    Faction {
        name: "House Davion",
        color: "blue",
        preferred_contracts: &[MissionType::GarrisonDuty, MissionType::Recon],
        description: "The Federated Suns - honorable and strategic, they prefer \
                      defensive contracts and intelligence gathering missions.",
    },
    Faction {
        name: "House Steiner",
        color: "cyan",
        preferred_contracts: &[MissionType::GarrisonDuty, MissionType::BaseAssault],
        description: "The Lyran Commonwealth - wealthy and industrial, they favor \
                      garrison duty and overwhelming force in major assaults.",
    },
    Faction {
        name: "House Liao",
        color: "green",
        preferred_contracts: &[MissionType::Raid, MissionType::Recon],
        description: "The Capellan Confederation - cunning and secretive, they \
                      specialize in raids and covert operations.",
    },
    Faction {
        name: "House Marik",
        color: "magenta",
        preferred_contracts: &[MissionType::Raid, MissionType::GarrisonDuty],
        description: "The Free Worlds League - pragmatic merchants who need both \
                      aggressive raids and defensive garrison contracts.",
    },
    Faction {
        name: "House Kurita",
        color: "red",
        preferred_contracts: &[MissionType::Raid, MissionType::BaseAssault],
        description: "The Draconis Combine - aggressive and honor-bound, they favor \
                      bold raids and direct assaults on enemy positions.",
    },
    Faction {
        name: "ComStar",
        color: "white",
        preferred_contracts: &[MissionType::GarrisonDuty, MissionType::Recon],
        description: "The interstellar communications network - neutral mediators \
                      who primarily need garrison forces and reconnaissance.",
    },
    Faction {
        name: "Mercenary Guild",
        color: "yellow",
        preferred_contracts: &[
            MissionType::Raid,
            MissionType::BaseAssault,
            MissionType::GarrisonDuty,
            MissionType::Recon,
        ],
        description: "Independent mercenary contracts from various sources. \
                      Mission types vary widely based on client needs.",
    },
];

/// Faction data by name, or `None` for unknown employers.
pub fn faction(name: &str) -> Option<&'static Faction> {
    FACTIONS.iter().find(|f| f.name == name)
}

/// Display color for a faction; "white" for unknown names.
pub fn faction_color(name: &str) -> &'static str {
    faction(name).map(|f| f.color).unwrap_or("white")
}

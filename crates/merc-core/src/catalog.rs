//! Static mech template catalog and campaign-start roster.
//!
//! Templates are immutable process-wide data; entities are only ever
//! constructed from them, never the other way around.

use crate::model::{Company, Mech, MechId, MechStatus, Pilot, WeightClass};
use thiserror::Error;

/// Stats for a mech variant that can be commissioned into a roster.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MechTemplate {
    pub key: &'static str,
    pub weight_class: WeightClass,
    pub tonnage: u32,
    pub armor_max: i32,
    pub structure_max: i32,
    pub firepower: i32,
    pub speed: i32,
}

/// The full variant catalog, spanning all four weight classes.
pub static MECH_TEMPLATES: &[MechTemplate] = &[
    // Light (20-35 tons)
    MechTemplate {
        key: "Locust LCT-1V",
        weight_class: WeightClass::Light,
        tonnage: 20,
        armor_max: 48,
        structure_max: 20,
        firepower: 2,
        speed: 10,
    },
    MechTemplate {
        key: "Commando COM-2D",
        weight_class: WeightClass::Light,
        tonnage: 25,
        armor_max: 64,
        structure_max: 25,
        firepower: 4,
        speed: 8,
    },
    MechTemplate {
        key: "Jenner JR7-D",
        weight_class: WeightClass::Light,
        tonnage: 35,
        armor_max: 72,
        structure_max: 30,
        firepower: 5,
        speed: 9,
    },
    MechTemplate {
        key: "Panther PNT-9R",
        weight_class: WeightClass::Light,
        tonnage: 35,
        armor_max: 88,
        structure_max: 30,
        firepower: 4,
        speed: 7,
    },
    // Medium (40-55 tons)
    MechTemplate {
        key: "Wolverine WVR-6R",
        weight_class: WeightClass::Medium,
        tonnage: 55,
        armor_max: 136,
        structure_max: 48,
        firepower: 6,
        speed: 6,
    },
    MechTemplate {
        key: "Shadow Hawk SHD-2H",
        weight_class: WeightClass::Medium,
        tonnage: 55,
        armor_max: 128,
        structure_max: 48,
        firepower: 5,
        speed: 6,
    },
    MechTemplate {
        key: "Hunchback HBK-4G",
        weight_class: WeightClass::Medium,
        tonnage: 50,
        armor_max: 120,
        structure_max: 44,
        firepower: 7,
        speed: 5,
    },
    MechTemplate {
        key: "Centurion CN9-A",
        weight_class: WeightClass::Medium,
        tonnage: 50,
        armor_max: 128,
        structure_max: 44,
        firepower: 6,
        speed: 5,
    },
    MechTemplate {
        key: "Griffin GRF-1N",
        weight_class: WeightClass::Medium,
        tonnage: 55,
        armor_max: 120,
        structure_max: 48,
        firepower: 6,
        speed: 6,
    },
    // Heavy (60-75 tons)
    MechTemplate {
        key: "Thunderbolt TDR-5S",
        weight_class: WeightClass::Heavy,
        tonnage: 65,
        armor_max: 176,
        structure_max: 56,
        firepower: 7,
        speed: 4,
    },
    MechTemplate {
        key: "Catapult CPLT-C1",
        weight_class: WeightClass::Heavy,
        tonnage: 65,
        armor_max: 152,
        structure_max: 56,
        firepower: 8,
        speed: 4,
    },
    MechTemplate {
        key: "Marauder MAD-3R",
        weight_class: WeightClass::Heavy,
        tonnage: 75,
        armor_max: 200,
        structure_max: 64,
        firepower: 8,
        speed: 4,
    },
    MechTemplate {
        key: "Warhammer WHM-6R",
        weight_class: WeightClass::Heavy,
        tonnage: 70,
        armor_max: 192,
        structure_max: 60,
        firepower: 8,
        speed: 4,
    },
    // Assault (80-100 tons)
    MechTemplate {
        key: "Atlas AS7-D",
        weight_class: WeightClass::Assault,
        tonnage: 100,
        armor_max: 304,
        structure_max: 80,
        firepower: 10,
        speed: 2,
    },
    MechTemplate {
        key: "BattleMaster BLR-1G",
        weight_class: WeightClass::Assault,
        tonnage: 85,
        armor_max: 256,
        structure_max: 68,
        firepower: 9,
        speed: 3,
    },
    MechTemplate {
        key: "King Crab KGC-0000",
        weight_class: WeightClass::Assault,
        tonnage: 100,
        armor_max: 296,
        structure_max: 80,
        firepower: 9,
        speed: 2,
    },
];

/// The default lance commissioned at company creation.
pub static STARTING_LANCE_KEYS: [&str; 4] = [
    "Wolverine WVR-6R",
    "Shadow Hawk SHD-2H",
    "Hunchback HBK-4G",
    "Commando COM-2D",
];

/// Preset identity for a campaign-start pilot.
#[derive(Clone, Copy, Debug)]
pub struct StartingPilot {
    pub name: &'static str,
    pub callsign: &'static str,
    pub gunnery: i32,
    pub piloting: i32,
}

/// The hardcoded starter roster, assigned to [`STARTING_LANCE_KEYS`] in
/// order.
pub static STARTING_PILOTS: [StartingPilot; 4] = [
    StartingPilot {
        name: "Marcus Steiner",
        callsign: "Ace",
        gunnery: 3,
        piloting: 4,
    },
    StartingPilot {
        name: "Nadia Kurita",
        callsign: "Raven",
        gunnery: 4,
        piloting: 3,
    },
    StartingPilot {
        name: "Gideon Davion",
        callsign: "Bulldog",
        gunnery: 3,
        piloting: 5,
    },
    StartingPilot {
        name: "Jade Liao",
        callsign: "Ghost",
        gunnery: 4,
        piloting: 3,
    },
];

/// Catalog lookup failures.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("unknown mech template: {0}")]
    UnknownTemplate(String),
}

/// Find a template by its catalog key.
pub fn mech_template(key: &str) -> Result<&'static MechTemplate, CatalogError> {
    MECH_TEMPLATES
        .iter()
        .find(|t| t.key == key)
        .ok_or_else(|| CatalogError::UnknownTemplate(key.to_string()))
}

impl Mech {
    /// A factory-fresh mech: full armor and structure, Ready.
    pub fn from_template(tmpl: &MechTemplate, id: MechId) -> Self {
        Self {
            id,
            name: tmpl.key.to_string(),
            weight_class: tmpl.weight_class,
            tonnage: tmpl.tonnage,
            armor_current: tmpl.armor_max,
            armor_max: tmpl.armor_max,
            structure_current: tmpl.structure_max,
            structure_max: tmpl.structure_max,
            firepower: tmpl.firepower,
            speed: tmpl.speed,
            status: MechStatus::Ready,
            repair_weeks_remaining: 0,
        }
    }
}

impl Company {
    /// Commission a mech from the catalog into this roster, allocating its
    /// id. Returns the new id.
    pub fn commission_mech(&mut self, template_key: &str) -> Result<MechId, CatalogError> {
        let tmpl = mech_template(template_key)?;
        let id = self.allocate_mech_id();
        self.mechs.push(Mech::from_template(tmpl, id));
        Ok(id)
    }

    /// A ready-to-play company: starting funds, the default lance, and the
    /// four preset pilots assigned to it in order.
    pub fn new_campaign(name: impl Into<String>) -> Result<Self, CatalogError> {
        let mut company = Company::new(name);
        let mut lance_ids = Vec::with_capacity(STARTING_LANCE_KEYS.len());
        for key in STARTING_LANCE_KEYS {
            lance_ids.push(company.commission_mech(key)?);
        }
        for (preset, id) in STARTING_PILOTS.iter().zip(lance_ids) {
            let mut pilot = Pilot::new(preset.name, preset.callsign, preset.gunnery, preset.piloting);
            pilot.assigned_mech = Some(id);
            company.mechwarriors.push(pilot);
        }
        Ok(company)
    }
}

//! Contract market, salvage market, hiring hall, and roster operations.
//!
//! Contract generation scales to the campaign month; purchase and hiring
//! operations validate preconditions and reject with a typed reason
//! rather than panicking - every rejected operation is a no-op.

use merc_core::{
    generate_pilot, Company, Contract, ContractTemplate, Mech, MechId, MechStatus, MechTemplate,
    Pilot, CONTRACT_TEMPLATES, EMPLOYERS, FINAL_CONTRACT_TEMPLATE, MECH_TEMPLATES,
};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// Maximum mechs in the bay and pilots on the active roster.
pub const MAX_LANCE_SIZE: usize = 4;

/// Purchase price per ton by weight class.
fn price_per_ton(tmpl: &MechTemplate) -> i64 {
    match tmpl.weight_class {
        merc_core::WeightClass::Light => 4_000,
        merc_core::WeightClass::Medium => 5_000,
        merc_core::WeightClass::Heavy => 6_500,
        merc_core::WeightClass::Assault => 8_000,
    }
}

/// Additional purchase price per firepower point.
pub const PRICE_PER_FIREPOWER: i64 = 10_000;

/// Signing bonus floor for any hire.
pub const HIRING_BASE_COST: i64 = 10_000;

/// Signing bonus per skill point below 6.
pub const HIRING_SKILL_BONUS: i64 = 5_000;

/// C-Bills per armor point for a scheduled field repair.
pub const FIELD_REPAIR_COST_PER_ARMOR: i64 = 2_000;

/// Armor points a repair crew works through per week.
pub const FIELD_REPAIR_ARMOR_PER_WEEK: i32 = 30;

/// Why a market operation was refused. The operation does not mutate
/// anything when it returns one of these.
#[derive(Debug, Error, PartialEq)]
pub enum MarketError {
    #[error("a contract is already active")]
    ContractAlreadyActive,
    #[error("lance is full (max {MAX_LANCE_SIZE} mechs)")]
    LanceFull,
    #[error("roster is full (max {MAX_LANCE_SIZE} pilots)")]
    RosterFull,
    #[error("not enough C-Bills ({available} < {required})")]
    InsufficientFunds { required: i64, available: i64 },
    #[error("no pilot with callsign {0}")]
    UnknownPilot(String),
    #[error("no mech with id {0} in the roster")]
    UnknownMech(u32),
    #[error("mech is destroyed")]
    MechDestroyed,
    #[error("mech already has an assigned pilot")]
    MechAlreadyAssigned,
    #[error("mech is not damaged")]
    NotDamaged,
    #[error("mech is already under repair")]
    AlreadyUnderRepair,
}

/// Hardest contracts the market offers in a given campaign month:
/// months 1-3 cap at 2 skulls, 4-6 at 3, and from month 7 the gloves
/// come off.
pub fn max_difficulty_for_month(month: u32) -> i32 {
    if month <= 3 {
        2
    } else if month <= 6 {
        3
    } else {
        5
    }
}

fn scale_template(
    rng: &mut impl Rng,
    tmpl: &ContractTemplate,
    month: u32,
    employer: &str,
) -> Contract {
    let bump = if month >= 7 {
        rng.gen_range(0..=2)
    } else if month >= 4 {
        rng.gen_range(0..=1)
    } else {
        0
    };
    let difficulty = (tmpl.base_difficulty + bump).min(5);

    let increase = difficulty - tmpl.base_difficulty;
    let multiplier = 1.0 + 0.3 * f64::from(increase);
    let variance = rng.gen_range(0.85..=1.15);
    let payout = (tmpl.base_payout as f64 * multiplier * variance) as i64;

    Contract {
        employer: employer.to_string(),
        mission_type: tmpl.mission_type,
        difficulty,
        payout,
        salvage_rights: tmpl.salvage_rights,
        bonus_objective: tmpl.bonus_objective.to_string(),
        description: tmpl.description.to_string(),
        duration: rng.gen_range(1..=3),
        weeks_remaining: 0,
        is_final_contract: false,
    }
}

/// Generate the week's contract offers, scaled to the campaign month.
///
/// Templates above the month's difficulty cap are excluded. Selection
/// greedily maximizes mission-type variety before falling back to repeats
/// - a heuristic, not a guarantee, when the eligible pool is small. Each
/// offer gets a unique employer until the faction list runs out.
pub fn generate_contracts(rng: &mut impl Rng, month: u32, count: usize) -> Vec<Contract> {
    let max_diff = max_difficulty_for_month(month);
    let eligible: Vec<&ContractTemplate> = CONTRACT_TEMPLATES
        .iter()
        .filter(|t| t.base_difficulty <= max_diff)
        .collect();
    if eligible.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..eligible.len()).collect();
    order.shuffle(rng);

    let mut selected: Vec<usize> = Vec::new();
    let mut used_types = HashSet::new();
    for &idx in &order {
        if selected.len() >= count {
            break;
        }
        if used_types.insert(eligible[idx].mission_type) {
            selected.push(idx);
        }
    }
    for &idx in &order {
        if selected.len() >= count {
            break;
        }
        if !selected.contains(&idx) {
            selected.push(idx);
        }
    }
    while selected.len() < count {
        selected.push(rng.gen_range(0..eligible.len()));
    }

    let mut used_employers: Vec<&str> = Vec::new();
    let mut contracts = Vec::with_capacity(selected.len());
    for idx in selected {
        let fresh: Vec<&str> = EMPLOYERS
            .iter()
            .copied()
            .filter(|e| !used_employers.contains(e))
            .collect();
        let pool: &[&str] = if fresh.is_empty() { &EMPLOYERS } else { &fresh };
        let employer = pool.choose(rng).copied().unwrap_or(EMPLOYERS[0]);
        used_employers.push(employer);
        contracts.push(scale_template(rng, eligible[idx], month, employer));
    }
    contracts
}

/// The one-time campaign capstone. ComStar brokers it.
pub fn final_contract(rng: &mut impl Rng) -> Contract {
    let t = &FINAL_CONTRACT_TEMPLATE;
    Contract {
        employer: "ComStar".to_string(),
        mission_type: t.mission_type,
        difficulty: t.base_difficulty,
        payout: t.base_payout,
        salvage_rights: t.salvage_rights,
        bonus_objective: t.bonus_objective.to_string(),
        description: t.description.to_string(),
        duration: rng.gen_range(1..=3),
        weeks_remaining: 0,
        is_final_contract: true,
    }
}

/// Take a contract: it becomes the single active engagement and its
/// countdown starts at the full duration. Only one contract may be active
/// at a time.
pub fn accept_contract(company: &mut Company, mut contract: Contract) -> Result<(), MarketError> {
    if company.active_contract.is_some() {
        return Err(MarketError::ContractAlreadyActive);
    }
    contract.weeks_remaining = contract.duration;
    company.active_contract = Some(contract);
    Ok(())
}

/// A mech on offer in the salvage market.
#[derive(Clone, Copy, Debug)]
pub struct SalvageItem {
    pub template: &'static MechTemplate,
    pub price: i64,
}

/// A pilot waiting in the hiring hall.
#[derive(Clone, Debug)]
pub struct PilotOffer {
    pub pilot: Pilot,
    pub hiring_cost: i64,
}

/// Price a mech template: tonnage at the class rate plus a firepower
/// premium, with +/-10% market fluctuation.
pub fn mech_price(rng: &mut impl Rng, tmpl: &MechTemplate) -> i64 {
    let base = i64::from(tmpl.tonnage) * price_per_ton(tmpl)
        + i64::from(tmpl.firepower) * PRICE_PER_FIREPOWER;
    let variance = rng.gen_range(0.90..=1.10);
    (base as f64 * variance) as i64
}

/// Signing bonus for a pilot; better skills command a higher bonus.
pub fn hiring_cost(pilot: &Pilot) -> i64 {
    let gunnery_bonus = i64::from((6 - pilot.gunnery).max(0)) * HIRING_SKILL_BONUS;
    let piloting_bonus = i64::from((6 - pilot.piloting).max(0)) * HIRING_SKILL_BONUS;
    HIRING_BASE_COST + gunnery_bonus + piloting_bonus
}

/// 2-3 distinct mech templates up for sale (or exactly `count` when
/// non-zero), priced with market variance.
pub fn generate_salvage_market(rng: &mut impl Rng, count: usize) -> Vec<SalvageItem> {
    let count = if count == 0 { rng.gen_range(2..=3) } else { count };
    MECH_TEMPLATES
        .choose_multiple(rng, count.min(MECH_TEMPLATES.len()))
        .map(|tmpl| SalvageItem {
            template: tmpl,
            price: mech_price(rng, tmpl),
        })
        .collect()
}

/// 2-3 hireable pilots (or exactly `count` when non-zero) with unique
/// callsigns against `used_callsigns`, which is extended in place.
pub fn generate_hiring_hall(
    rng: &mut impl Rng,
    count: usize,
    used_callsigns: &mut HashSet<String>,
) -> Vec<PilotOffer> {
    let count = if count == 0 { rng.gen_range(2..=3) } else { count };
    (0..count)
        .map(|_| {
            let pilot = generate_pilot(rng, used_callsigns);
            let hiring_cost = hiring_cost(&pilot);
            PilotOffer { pilot, hiring_cost }
        })
        .collect()
}

/// Buy a salvage-market mech into the bay. Enforces the lance cap and
/// funds; on success the price is deducted and the new id returned.
pub fn buy_mech(company: &mut Company, item: &SalvageItem) -> Result<MechId, MarketError> {
    if company.mechs.len() >= MAX_LANCE_SIZE {
        return Err(MarketError::LanceFull);
    }
    if company.c_bills < item.price {
        return Err(MarketError::InsufficientFunds {
            required: item.price,
            available: company.c_bills,
        });
    }
    company.c_bills -= item.price;
    let id = company.allocate_mech_id();
    company.mechs.push(Mech::from_template(item.template, id));
    Ok(id)
}

/// Sign a hiring-hall pilot onto the roster. Enforces the roster cap
/// (KIA pilots do not count against it) and funds.
pub fn hire_pilot(company: &mut Company, offer: PilotOffer) -> Result<(), MarketError> {
    if company.active_pilot_count() >= MAX_LANCE_SIZE {
        return Err(MarketError::RosterFull);
    }
    if company.c_bills < offer.hiring_cost {
        return Err(MarketError::InsufficientFunds {
            required: offer.hiring_cost,
            available: company.c_bills,
        });
    }
    company.c_bills -= offer.hiring_cost;
    company.mechwarriors.push(offer.pilot);
    Ok(())
}

/// Strike a living pilot from the roster. Their mech stays in the bay,
/// simply unassigned. Returns the dismissed pilot.
pub fn dismiss_pilot(company: &mut Company, callsign: &str) -> Result<Pilot, MarketError> {
    let idx = company
        .mechwarriors
        .iter()
        .position(|p| !p.is_kia() && p.callsign == callsign)
        .ok_or_else(|| MarketError::UnknownPilot(callsign.to_string()))?;
    Ok(company.mechwarriors.remove(idx))
}

/// Assign a pilot to a mech. The mech must exist, be repairable-or-ready
/// (not Destroyed), and not already be crewed by another living pilot.
pub fn assign_pilot(
    company: &mut Company,
    callsign: &str,
    mech_id: MechId,
) -> Result<(), MarketError> {
    let mech = company
        .mech(mech_id)
        .ok_or(MarketError::UnknownMech(mech_id.0))?;
    if mech.is_destroyed() {
        return Err(MarketError::MechDestroyed);
    }
    let taken = company
        .mechwarriors
        .iter()
        .any(|p| !p.is_kia() && p.callsign != callsign && p.assigned_mech == Some(mech_id));
    if taken {
        return Err(MarketError::MechAlreadyAssigned);
    }
    let pilot = company
        .mechwarriors
        .iter_mut()
        .find(|p| !p.is_kia() && p.callsign == callsign)
        .ok_or_else(|| MarketError::UnknownPilot(callsign.to_string()))?;
    pilot.assigned_mech = Some(mech_id);
    Ok(())
}

/// Clear a pilot's mech assignment.
pub fn unassign_pilot(company: &mut Company, callsign: &str) -> Result<(), MarketError> {
    let pilot = company
        .mechwarriors
        .iter_mut()
        .find(|p| !p.is_kia() && p.callsign == callsign)
        .ok_or_else(|| MarketError::UnknownPilot(callsign.to_string()))?;
    pilot.assigned_mech = None;
    Ok(())
}

/// Cost and crew time to put a damaged mech through the repair bay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepairQuote {
    pub cost: i64,
    pub weeks: u32,
}

/// Quote a field repair: armor points missing at the bay rate, worked
/// through at [`FIELD_REPAIR_ARMOR_PER_WEEK`] points per week (minimum
/// one week). Zero for anything not Damaged.
pub fn field_repair_quote(mech: &Mech) -> RepairQuote {
    if mech.status != MechStatus::Damaged {
        return RepairQuote { cost: 0, weeks: 0 };
    }
    let missing = mech.armor_max - mech.armor_current;
    let weeks = ((missing + FIELD_REPAIR_ARMOR_PER_WEEK - 1) / FIELD_REPAIR_ARMOR_PER_WEEK).max(1);
    RepairQuote {
        cost: i64::from(missing) * FIELD_REPAIR_COST_PER_ARMOR,
        weeks: weeks as u32,
    }
}

/// Pay up front and put a damaged mech in the repair bay; the weekly turn
/// advance works the timer down and restores the mech when it expires.
pub fn order_field_repair(
    company: &mut Company,
    mech_id: MechId,
) -> Result<RepairQuote, MarketError> {
    let available = company.c_bills;
    let mech = company
        .mech_mut(mech_id)
        .ok_or(MarketError::UnknownMech(mech_id.0))?;
    if mech.status != MechStatus::Damaged {
        return Err(MarketError::NotDamaged);
    }
    if mech.repair_weeks_remaining > 0 {
        return Err(MarketError::AlreadyUnderRepair);
    }
    let quote = field_repair_quote(mech);
    if available < quote.cost {
        return Err(MarketError::InsufficientFunds {
            required: quote.cost,
            available,
        });
    }
    mech.repair_weeks_remaining = quote.weeks;
    company.c_bills -= quote.cost;
    Ok(quote)
}

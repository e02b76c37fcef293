#![deny(warnings)]

//! Finance engine: salaries, maintenance, repairs, and the monthly
//! upkeep cycle.
//!
//! Cost functions are pure projections over entity state. The upkeep flow
//! is two-phase: [`monthly_upkeep`] builds an itemized [`UpkeepReport`]
//! without touching the company, the caller toggles repair approvals and
//! calls [`UpkeepReport::recalculate_totals`], and [`apply_upkeep`]
//! commits the result. Apply a given report at most once; committing the
//! same report twice double-deducts.

use merc_core::{Company, Mech, MechId, MechStatus, Pilot, PilotStatus, WeightClass};
use serde::{Deserialize, Serialize};

/// Base pilot salary per month, in C-Bills.
pub const PILOT_BASE_SALARY: i64 = 5_000;

/// Salary bonus per skill point below 6 (lower skill number = better
/// pilot = more expensive).
pub const PILOT_SKILL_BONUS: i64 = 2_500;

/// Repair cost per point of armor restored.
pub const REPAIR_COST_PER_ARMOR: i64 = 100;

/// Repair cost per point of structure restored.
pub const REPAIR_COST_PER_STRUCTURE: i64 = 500;

/// Monthly salary for a pilot. KIA pilots cost nothing.
///
/// `base + bonus*(6-gunnery) + bonus*(6-piloting)`: a gunnery 1 /
/// piloting 1 ace costs 30,000, a gunnery 6 / piloting 6 rookie 5,000.
pub fn pilot_salary(pilot: &Pilot) -> i64 {
    if pilot.status == PilotStatus::Kia {
        return 0;
    }
    let gunnery_bonus = i64::from(6 - pilot.gunnery) * PILOT_SKILL_BONUS;
    let piloting_bonus = i64::from(6 - pilot.piloting) * PILOT_SKILL_BONUS;
    PILOT_BASE_SALARY + gunnery_bonus + piloting_bonus
}

/// Monthly maintenance for a mech by weight class. Destroyed hulls still
/// cost half their class rate to keep in the bay.
pub fn mech_maintenance(mech: &Mech) -> i64 {
    let base = match mech.weight_class {
        WeightClass::Light => 5_000,
        WeightClass::Medium => 10_000,
        WeightClass::Heavy => 20_000,
        WeightClass::Assault => 35_000,
    };
    if mech.status == MechStatus::Destroyed {
        base / 2
    } else {
        base
    }
}

/// Cost to fully repair a damaged mech: armor points missing at
/// [`REPAIR_COST_PER_ARMOR`], structure at [`REPAIR_COST_PER_STRUCTURE`].
/// Ready mechs need nothing; destroyed mechs cannot be field-repaired.
pub fn repair_cost(mech: &Mech) -> i64 {
    match mech.status {
        MechStatus::Ready | MechStatus::Destroyed => 0,
        MechStatus::Damaged => {
            let armor_missing = i64::from(mech.armor_max - mech.armor_current);
            let structure_missing = i64::from(mech.structure_max - mech.structure_current);
            armor_missing * REPAIR_COST_PER_ARMOR + structure_missing * REPAIR_COST_PER_STRUCTURE
        }
    }
}

/// Restore a damaged mech to full armor/structure and Ready status.
/// Returns the cost that the repair was worth; 0 means nothing was done.
pub fn repair_mech(mech: &mut Mech) -> i64 {
    let cost = repair_cost(mech);
    if cost > 0 {
        mech.restore();
    }
    cost
}

/// A single pilot salary line item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PilotSalaryLine {
    pub name: String,
    pub callsign: String,
    pub salary: i64,
}

/// A single mech maintenance line item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MechMaintenanceLine {
    pub name: String,
    pub weight_class: String,
    pub cost: i64,
}

/// A repair decision for one damaged mech. Defaults to approved; the
/// player may toggle it off before the report is applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RepairLine {
    pub mech_id: MechId,
    pub mech_name: String,
    pub cost: i64,
    pub approved: bool,
}

/// Itemized monthly financial report: a pure projection until committed
/// with [`apply_upkeep`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpkeepReport {
    pub contract_income: i64,
    pub pilot_salaries: Vec<PilotSalaryLine>,
    pub mech_maintenance: Vec<MechMaintenanceLine>,
    pub repairs: Vec<RepairLine>,
    pub total_salaries: i64,
    pub total_maintenance: i64,
    pub total_repairs: i64,
    pub total_expenses: i64,
    pub net_change: i64,
    pub balance_before: i64,
    pub balance_after: i64,
}

impl UpkeepReport {
    /// Toggle one repair decision. Returns false for an out-of-range
    /// index. Call [`Self::recalculate_totals`] afterwards.
    pub fn set_repair_approved(&mut self, index: usize, approved: bool) -> bool {
        match self.repairs.get_mut(index) {
            Some(line) => {
                line.approved = approved;
                true
            }
            None => false,
        }
    }

    /// Refresh every derived total from the current repair decisions.
    pub fn recalculate_totals(&mut self) {
        self.total_repairs = self
            .repairs
            .iter()
            .filter(|r| r.approved)
            .map(|r| r.cost)
            .sum();
        self.total_expenses = self.total_salaries + self.total_maintenance + self.total_repairs;
        self.net_change = self.contract_income - self.total_expenses;
        self.balance_after = self.balance_before + self.net_change;
    }
}

/// Build the month's upkeep breakdown: per-pilot salaries, per-mech
/// maintenance, and repair estimates for every damaged mech (approved by
/// default). Does not mutate the company.
pub fn monthly_upkeep(company: &Company, contract_income: i64) -> UpkeepReport {
    let mut report = UpkeepReport {
        contract_income,
        balance_before: company.c_bills,
        ..UpkeepReport::default()
    };

    for pilot in &company.mechwarriors {
        let salary = pilot_salary(pilot);
        if salary > 0 {
            report.pilot_salaries.push(PilotSalaryLine {
                name: pilot.name.clone(),
                callsign: pilot.callsign.clone(),
                salary,
            });
        }
    }
    report.total_salaries = report.pilot_salaries.iter().map(|l| l.salary).sum();

    for mech in &company.mechs {
        report.mech_maintenance.push(MechMaintenanceLine {
            name: mech.name.clone(),
            weight_class: mech.weight_class.label().to_string(),
            cost: mech_maintenance(mech),
        });
    }
    report.total_maintenance = report.mech_maintenance.iter().map(|l| l.cost).sum();

    for mech in &company.mechs {
        let cost = repair_cost(mech);
        if cost > 0 {
            report.repairs.push(RepairLine {
                mech_id: mech.id,
                mech_name: mech.name.clone(),
                cost,
                approved: true,
            });
        }
    }

    report.recalculate_totals();
    report
}

/// Commit a finalized report: execute every approved repair and move the
/// balance to `balance_after`. The only mutating call in this crate;
/// apply each report at most once.
pub fn apply_upkeep(company: &mut Company, report: &UpkeepReport) {
    for line in report.repairs.iter().filter(|r| r.approved) {
        if let Some(mech) = company.mech_mut(line.mech_id) {
            repair_mech(mech);
        }
    }
    company.c_bills = report.balance_after;
}

/// A company is bankrupt strictly below zero; an exactly-zero balance is
/// still solvent.
pub fn is_bankrupt(company: &Company) -> bool {
    company.c_bills < 0
}

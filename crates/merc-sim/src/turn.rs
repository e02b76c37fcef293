//! The weekly turn cycle: payroll, repair and contract timers, market
//! regeneration, random events, and the week/month counters.

use crate::events::{self, RandomEventKind};
use crate::market;
use merc_core::{Company, Contract, MechStatus};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weekly payroll cost per non-KIA MechWarrior.
pub const WEEKLY_PAYROLL_PER_PILOT: i64 = 5_000;

/// Contract offers regenerated each week.
pub const WEEKLY_CONTRACT_COUNT: usize = 3;

/// The final contract enters the market once the campaign reaches this
/// month.
pub const FINAL_CONTRACT_MONTH: u32 = 12;

/// Everything the presentation layer needs to narrate one week advance.
/// Plain data; the turn cycle itself performs no I/O.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeekSummary {
    pub week_before: u32,
    pub week_after: u32,
    pub active_pilots: usize,
    pub payroll_cost: i64,
    pub balance_before: i64,
    pub balance_after: i64,
    /// Mechs whose repair timers moved this week.
    pub repairs_progressed: Vec<String>,
    pub status_changes: Vec<String>,
    /// Set when the active contract's countdown expired: the caller must
    /// resolve this battle, and the week counter has NOT advanced - the
    /// battle resolution owns that increment.
    pub battle_contract: Option<Contract>,
    /// A triggered random event. Non-choice events have already been
    /// applied (their message is in `status_changes`); choice events wait
    /// for the player's answer via [`events::apply_event`].
    pub event: Option<RandomEventKind>,
}

/// Advance the campaign by one week.
///
/// In order: deduct payroll, progress repair timers, count down the
/// active contract (flagging the battle instead of incrementing the week
/// when it expires), regenerate the contract market from the current
/// month, roll for a random event, and finally advance the week/month
/// counters.
pub fn advance_week(rng: &mut impl Rng, company: &mut Company) -> WeekSummary {
    let week_before = company.week;
    let balance_before = company.c_bills;
    let mut repairs_progressed = Vec::new();
    let mut status_changes = Vec::new();

    let active_pilots = company.active_pilot_count();
    let payroll_cost = active_pilots as i64 * WEEKLY_PAYROLL_PER_PILOT;
    company.c_bills -= payroll_cost;

    for mech in &mut company.mechs {
        if mech.status != MechStatus::Damaged {
            continue;
        }
        if mech.repair_weeks_remaining > 0 {
            mech.repair_weeks_remaining -= 1;
            repairs_progressed.push(mech.name.clone());
            if mech.repair_weeks_remaining == 0 {
                mech.restore();
                status_changes.push(format!(
                    "{}: Repair complete - ready for deployment!",
                    mech.name
                ));
            } else {
                status_changes.push(format!(
                    "{}: Repair in progress ({}w remaining)",
                    mech.name, mech.repair_weeks_remaining
                ));
            }
        } else {
            status_changes.push(format!("{}: Damaged - awaiting repair orders", mech.name));
        }
    }

    let mut battle_contract = None;
    if let Some(contract) = company.active_contract.as_mut() {
        contract.weeks_remaining = contract.weeks_remaining.saturating_sub(1);
        if contract.weeks_remaining == 0 {
            status_changes.push(format!(
                "Contract with {} ready for deployment!",
                contract.employer
            ));
            // Left active: combat resolution clears it.
            battle_contract = Some(contract.clone());
        }
    }

    let month = Company::month_for_week(week_before);
    company.available_contracts =
        market::generate_contracts(rng, month, WEEKLY_CONTRACT_COUNT);
    let final_pending = company
        .active_contract
        .as_ref()
        .map(|c| c.is_final_contract)
        .unwrap_or(false);
    if month >= FINAL_CONTRACT_MONTH && !company.final_contract_completed && !final_pending {
        company.available_contracts.push(market::final_contract(rng));
    }

    let event = events::roll_event(rng);
    if let Some(kind) = event {
        if !kind.requires_choice() {
            let message = events::apply_event(rng, company, kind, true);
            status_changes.push(format!("{}: {}", kind.title(), message));
        }
    }

    if battle_contract.is_none() {
        company.week += 1;
    }
    company.recompute_month();

    debug!(
        week = company.week,
        payroll = payroll_cost,
        battle = battle_contract.is_some(),
        "week advanced"
    );

    WeekSummary {
        week_before,
        week_after: company.week,
        active_pilots,
        payroll_cost,
        balance_before,
        balance_after: company.c_bills,
        repairs_progressed,
        status_changes,
        battle_contract,
        event,
    }
}

/// Contextual one-line company status for a dashboard footer: active
/// contract first, then mech and pilot readiness.
pub fn company_status_line(company: &Company) -> String {
    let mut parts = Vec::new();

    match &company.active_contract {
        Some(contract) => parts.push(format!(
            "Active: {} for {} ({}w remaining)",
            contract.mission_type.label(),
            contract.employer,
            contract.weeks_remaining
        )),
        None => parts.push("No active contract".to_string()),
    }

    let destroyed = company.mechs.iter().filter(|m| m.is_destroyed()).count();
    let damaged = company
        .mechs
        .iter()
        .filter(|m| m.status == MechStatus::Damaged)
        .count();
    if destroyed > 0 {
        parts.push(format!("{destroyed} mech(s) destroyed"));
    }
    if damaged > 0 {
        parts.push(format!("{damaged} mech(s) damaged"));
    } else if destroyed == 0 {
        parts.push("All mechs operational".to_string());
    }

    let kia = company.kia_count();
    let injured = company
        .mechwarriors
        .iter()
        .filter(|p| p.status == merc_core::PilotStatus::Injured)
        .count();
    if kia > 0 {
        parts.push(format!("{kia} pilot(s) KIA"));
    }
    if injured > 0 {
        parts.push(format!("{injured} pilot(s) injured"));
    }

    format!("STATUS: {}.", parts.join(". "))
}

#![deny(warnings)]

//! Headless campaign driver: builds a company, autoplays a number of
//! weeks with a seeded RNG, and prints one KPI line per week. Exercises
//! the full engine surface without any terminal UI.

use anyhow::Result;
use merc_core::Company;
use merc_econ::{apply_upkeep, is_bankrupt, monthly_upkeep};
use merc_sim::{
    accept_contract, advance_week, apply_event, apply_level_up, can_level_up, check_desertion,
    company_status_line, describe_enemy_lance, desertion_message, generate_enemy_lance,
    recover_injuries, resolve_combat, Skill,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

struct Args {
    name: String,
    seed: u64,
    weeks: u32,
    save: Option<PathBuf>,
}

fn parse_args() -> Args {
    let mut args = Args {
        name: "Iron Lance".to_string(),
        seed: 42,
        weeks: 52,
        save: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--name" => {
                if let Some(v) = it.next() {
                    args.name = v;
                }
            }
            "--seed" => {
                if let Some(v) = it.next().and_then(|s| s.parse().ok()) {
                    args.seed = v;
                }
            }
            "--weeks" => {
                if let Some(v) = it.next().and_then(|s| s.parse().ok()) {
                    args.weeks = v;
                }
            }
            "--save" => {
                args.save = Some(
                    it.next()
                        .map(PathBuf::from)
                        .unwrap_or_else(merc_persistence::autosave_path),
                );
            }
            _ => {}
        }
    }
    args
}

/// Spend every pending level-up, always improving the pilot's worse
/// skill first.
fn spend_levelups(company: &mut Company) {
    for pilot in &mut company.mechwarriors {
        while can_level_up(pilot) {
            let first = if pilot.gunnery >= pilot.piloting {
                Skill::Gunnery
            } else {
                Skill::Piloting
            };
            let second = match first {
                Skill::Gunnery => Skill::Piloting,
                Skill::Piloting => Skill::Gunnery,
            };
            if !apply_level_up(pilot, first) && !apply_level_up(pilot, second) {
                break;
            }
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .init();

    let args = parse_args();
    info!(name = %args.name, seed = args.seed, weeks = args.weeks, "starting campaign");

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut company = Company::new_campaign(args.name.as_str())?;

    println!(
        "Campaign start | company: {} | mechs: {} | pilots: {} | c-bills: {}",
        company.name,
        company.mechs.len(),
        company.mechwarriors.len(),
        company.c_bills
    );

    for _ in 0..args.weeks {
        if company.active_contract.is_none() {
            let offer = company
                .available_contracts
                .iter()
                .max_by_key(|c| (c.is_final_contract, c.payout))
                .cloned();
            if let Some(offer) = offer {
                let label = format!("{} ({} skulls)", offer.mission_type.label(), offer.difficulty);
                if accept_contract(&mut company, offer).is_ok() {
                    println!("  signed: {label}");
                }
            }
        }

        let summary = advance_week(&mut rng, &mut company);
        for line in &summary.status_changes {
            println!("  {line}");
        }
        if let Some(event) = summary.event {
            if event.requires_choice() {
                // Headless play declines anything that needs a decision.
                let message = apply_event(&mut rng, &mut company, event, false);
                println!("  {}: {}", event.title(), message);
            }
        }

        let mut income = 0;
        if let Some(battle) = summary.battle_contract {
            let scouted = generate_enemy_lance(&mut rng, battle.difficulty);
            println!("  scouts: {}", describe_enemy_lance(&scouted));
            let result = resolve_combat(&mut rng, &mut company, &battle);
            income = result.c_bills_earned;
            println!(
                "  battle: {} | power {:.1} | chance {:.0}% | earned {}",
                result.outcome.label(),
                result.lance_power,
                result.success_chance * 100.0,
                result.c_bills_earned
            );
            for deserter in check_desertion(&mut company) {
                println!("  {}", desertion_message(&deserter));
            }
        }

        for line in recover_injuries(&mut company) {
            println!("  {line}");
        }
        spend_levelups(&mut company);

        // Settle the books on each month boundary.
        if company.week % 4 == 1 {
            let report = monthly_upkeep(&company, income);
            apply_upkeep(&mut company, &report);
            println!(
                "  upkeep | salaries {} | maintenance {} | repairs {} | net {}",
                report.total_salaries, report.total_maintenance, report.total_repairs,
                report.net_change
            );
        }

        println!(
            "week {:>3} | month {:>2} | c-bills {:>9} | rep {:>3} | contracts {} | mechs {} | pilots {}",
            company.week,
            company.month,
            company.c_bills,
            company.reputation,
            company.contracts_completed,
            company.mechs.len(),
            company.mechwarriors.len()
        );

        if is_bankrupt(&company) {
            println!("BANKRUPT - the company folds in week {}", company.week);
            break;
        }
        if company.final_contract_completed {
            println!("FINAL CONTRACT COMPLETE - the company retires in glory");
            break;
        }
        if company.deployed_pair_indices().is_empty() && company.c_bills < 100_000 {
            println!("No deployable lance and no funds to rebuild - campaign over");
            break;
        }
    }

    println!("{}", company_status_line(&company));
    println!(
        "Campaign over | weeks: {} | contracts: {} | earnings: {} | mechs lost: {} | pilots lost: {}",
        company.week,
        company.contracts_completed,
        company.total_earnings,
        company.mechs_lost,
        company.pilots_lost
    );

    if let Some(path) = args.save {
        merc_persistence::save_game(&company, &path)?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}

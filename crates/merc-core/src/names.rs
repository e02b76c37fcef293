//! Random pilot identity generation from curated word lists.

use crate::model::Pilot;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

static FIRST_NAMES: &[&str] = &[
    "Alex", "Brynn", "Carlos", "Diana", "Erik", "Fatima", "Gideon", "Hana", "Ivan", "Jade",
    "Kai", "Lena", "Marcus", "Nadia", "Oscar", "Petra", "Quinn", "Riku", "Sasha", "Tomas",
    "Uma", "Victor", "Wren", "Xander", "Yara", "Zane", "Asha", "Declan", "Elena", "Felix",
    "Greta", "Hugo", "Ingrid", "Jasper", "Kira", "Leif", "Mira", "Nolan", "Opal", "Piotr",
];

static LAST_NAMES: &[&str] = &[
    "Steiner", "Kurita", "Davion", "Liao", "Marik", "Kerensky", "Hazen", "Pryde", "Ward",
    "Sortek", "Allard", "Kell", "Redburn", "Ardan", "Hasek", "Sung", "Tanaga", "Ngo",
    "Rivera", "Czerny", "Volkov", "Brandt", "Okada", "Frost", "Mercer", "Calloway",
    "Vasquez", "Ironside", "Drake", "Ashworth", "Takeda", "Lindholm", "Petrov", "Mbeki",
    "Okonkwo", "Chen", "Gallagher", "Torres", "Nakamura", "Johanssen",
];

static CALLSIGNS: &[&str] = &[
    "Anvil", "Blaze", "Cobra", "Dagger", "Echo", "Falcon", "Ghost", "Hammer", "Iceman",
    "Joker", "Knight", "Lightning", "Maverick", "Nomad", "Oracle", "Phoenix", "Raptor",
    "Spectre", "Thunder", "Viper", "Wolf", "Ace", "Bishop", "Cinder", "Deadbolt", "Ember",
    "Flint", "Grizzly", "Havoc", "Iron", "Jaguar", "Kraken", "Longbow", "Mustang", "Nitro",
    "Onyx", "Pyro", "Razor", "Sabre", "Talon",
];

/// A random "First Last" name.
pub fn generate_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Alex");
    let last = LAST_NAMES.choose(rng).copied().unwrap_or("Steiner");
    format!("{first} {last}")
}

/// Pick a callsign not in `used`; once the pool is exhausted, fall back to
/// a numbered variant ("Viper-17").
pub fn generate_callsign(rng: &mut impl Rng, used: &HashSet<String>) -> String {
    let available: Vec<&str> = CALLSIGNS
        .iter()
        .copied()
        .filter(|cs| !used.contains(*cs))
        .collect();
    match available.choose(rng) {
        Some(cs) => (*cs).to_string(),
        None => {
            let base = CALLSIGNS.choose(rng).copied().unwrap_or("Viper");
            format!("{base}-{}", rng.gen_range(2..=99))
        }
    }
}

/// A random hireable pilot: competent-but-not-elite skills (3-5) and
/// mid-range morale (60-85). The chosen callsign is recorded in `used`.
pub fn generate_pilot(rng: &mut impl Rng, used: &mut HashSet<String>) -> Pilot {
    let callsign = generate_callsign(rng, used);
    used.insert(callsign.clone());

    let mut pilot = Pilot::new(
        generate_name(rng),
        callsign,
        rng.gen_range(3..=5),
        rng.gen_range(3..=5),
    );
    pilot.morale = rng.gen_range(60..=85);
    pilot
}

/// A roster of `count` pilots with unique callsigns.
pub fn generate_roster(rng: &mut impl Rng, count: usize) -> Vec<Pilot> {
    let mut used = HashSet::new();
    (0..count).map(|_| generate_pilot(rng, &mut used)).collect()
}

mod monster;
mod save;

use monster::{LootItem, Monster, Status};

/// Relative path the demo reads and writes
const ROSTER_PATH: &str = "Data/monsters.json";

/// Builds the demo roster: three monsters with fixed stats and drops
fn sample_roster() -> Vec<Monster> {
    let mut slime = Monster::new("Slime", Status::new(1, 1, 1));
    slime.add_drop(LootItem::new("Sticky Jelly", 1));

    let mut werewolf = Monster::new("Werewolf", Status::new(5, 5, 5));
    werewolf.add_drop(LootItem::new("Claw", 2));
    werewolf.add_drop(LootItem::new("Wolf Pelt", 5));

    let mut demon = Monster::new("Demon", Status::new(10, 10, 10));
    demon.add_drop(LootItem::new("Wing", 10));
    demon.add_drop(LootItem::new("Talon", 5));

    vec![slime, werewolf, demon]
}

fn run() -> Result<(), save::SaveError> {
    let monsters = sample_roster();
    save::save_to_file(ROSTER_PATH, &monsters)?;
    println!("Saved {} monsters to {}", monsters.len(), ROSTER_PATH);

    // Drop the in-memory roster and rebuild it from the file
    drop(monsters);
    let loaded = save::load_from_file(ROSTER_PATH)?;
    println!("Loaded {} monsters back:", loaded.len());

    for monster in &loaded {
        println!(
            "  {} (level {}, {} hp, {} mp)",
            monster.name, monster.status.level, monster.status.hp, monster.status.mp
        );
        for item in &monster.drops {
            println!("    drops {} ({} gold)", item.name, item.gold);
        }
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Save/load demo failed: {}", e);
        std::process::exit(1);
    }
}

//! Enemy Pipeline Example
//!
//! Walks the whole enemy pipeline:
//! - Themed component factories (Fire, Ice, Shadow)
//! - Builders and the preset director
//! - Prototype registry with stat and element variants
//! - All of it combined into one flow
//!
//! Run with `RUST_LOG=debug cargo run --example pipeline` to see the
//! library's build and clone logs.

use enemyforge::ability::{FrostBreath, ShadowStrike};
use enemyforge::builder::{BasicEnemyBuilder, BossEnemyBuilder, EnemyBuilder};
use enemyforge::factory::{ComponentFactory, FireComponentFactory, ShadowComponentFactory};
use enemyforge::*;

fn section(title: &str) {
    println!("============================================");
    println!("{}", title);
    println!("============================================\n");
}

// ============================================================================
// Part 1: Themed components
// ============================================================================

fn show_theme(theme: Theme) {
    let factory = theme.factory();
    println!("--- {} theme ---", theme);
    for ability in factory.create_abilities() {
        println!(
            "Ability: {} ({} dmg) - {}",
            ability.name(),
            ability.damage(),
            ability.description()
        );
    }
    println!("Loot: {}", factory.create_loot_table());
    println!("AI: {}\n", factory.create_ai_behavior());
}

// ============================================================================
// Part 2: Builders and director
// ============================================================================

fn build_dragon(factory: &dyn ComponentFactory) -> Result<Enemy, EnemyError> {
    let mut builder = BossEnemyBuilder::new();
    builder
        .set_name("Ancient Fire Dragon")
        .set_health(50000)
        .set_damage(500)
        .set_defense(200)
        .set_speed(50)
        .set_element("FIRE")
        .set_abilities(factory.create_abilities())
        .set_loot_table(factory.create_loot_table())
        .set_ai_behavior(factory.create_ai_behavior())
        .add_phase(1, 50000)
        .add_phase(2, 30000)
        .add_phase(3, 15000)
        .set_can_fly(true)
        .set_breath_attack(true)
        .set_wingspan(20);
    builder.build()
}

fn main() -> Result<(), EnemyError> {
    env_logger::init();

    println!("=== RPG Enemy System ===\n");

    section("PART 1: Themed Components");
    for theme in Theme::ALL {
        show_theme(theme);
    }

    section("PART 2: Builder & Director");
    let fire = FireComponentFactory;
    let dragon = build_dragon(&fire)?;
    println!("{}\n", dragon);

    let mut director = EnemyDirector::new(BasicEnemyBuilder::new());
    let goblin = director.create_minion("Fire Goblin", &fire)?;
    println!("{}\n", goblin);
    for preset in Preset::ALL {
        let theme = Theme::Ice;
        let name = format!("{} {}", theme, preset);
        let enemy = director.create(preset, &name, theme.factory().as_ref())?;
        println!("{:<12} -> {}", preset.to_string(), enemy.stats());
    }
    println!();

    // A failed build leaves the builder usable
    let mut incomplete = BasicEnemyBuilder::new();
    incomplete.set_name("Nameless Wisp").set_health(30);
    if let Err(err) = incomplete.build() {
        println!("Build rejected: {}", err);
    }
    incomplete.set_loot_table(LootTable::ice());
    println!("After fix: {}\n", incomplete.build()?.name());

    section("PART 3: Prototype Variants");
    let mut registry = EnemyRegistry::new();
    registry.register_template("goblin", goblin);
    registry.register_template("dragon", dragon);

    let mut elite_goblin = registry.create_from_template("goblin")?;
    elite_goblin.multiply_stats(2.0);
    let mut champion_goblin = registry.create_from_template("goblin")?;
    champion_goblin.multiply_stats(5.0);

    let mut ice_dragon = registry.create_from_template("dragon")?;
    ice_dragon.set_element("ICE");
    ice_dragon.add_ability(Box::new(FrostBreath::new()));

    let template_goblin = registry.create_from_template("goblin")?;
    println!("Template goblin:  {}", template_goblin.stats());
    println!("Elite goblin:     {}", elite_goblin.stats());
    println!("Champion goblin:  {}", champion_goblin.stats());
    println!(
        "Ice dragon abilities: {:?} (template keeps {:?})",
        ice_dragon.ability_names(),
        registry.create_from_template("dragon")?.ability_names()
    );
    match registry.create_from_template("lich") {
        Ok(_) => println!("Unexpected lich template"),
        Err(err) => println!("Lookup failed as expected: {}", err),
    }
    println!();

    section("PART 4: All Together");
    let shadow = ShadowComponentFactory;
    let demon_lord = BasicEnemyBuilder::new()
        .set_name("Demon Lord")
        .set_health(5000)
        .set_damage(200)
        .set_defense(80)
        .set_speed(25)
        .set_element("SHADOW")
        .set_abilities(shadow.create_abilities())
        .set_loot_table(shadow.create_loot_table())
        .set_ai_behavior(shadow.create_ai_behavior())
        .build()?;
    registry.register_template("demon-lord", demon_lord);

    let mut greater_demon = registry.create_from_template("demon-lord")?;
    greater_demon.multiply_stats(2.0);
    greater_demon.add_ability(Box::new(ShadowStrike::new()));
    println!("{}", greater_demon);
    let snapshot = greater_demon.info();
    println!(
        "Total ability damage: {} across {:?}\n",
        snapshot.total_ability_damage(),
        snapshot.ability_names()
    );

    println!("Registered templates: {:?}", registry.list_templates());
    println!("\n=== Demo Complete ===");
    Ok(())
}

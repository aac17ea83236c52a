//! `disguise entities`

use disguise_types::entity::EntityType;

pub fn list_entities(json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&EntityType::ALL)?);
        return Ok(());
    }

    println!();
    for entity_type in EntityType::ALL {
        let marker = if entity_type.is_alive() {
            console::style("✓").green()
        } else {
            console::style("✗").red()
        };
        println!("  {marker} {entity_type}");
    }
    println!();
    Ok(())
}

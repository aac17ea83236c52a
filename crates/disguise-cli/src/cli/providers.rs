//! `disguise providers`

use disguise_infra::skin::BuiltinSkinApis;

pub fn list_providers(apis: &BuiltinSkinApis, json: bool) -> anyhow::Result<()> {
    let mut names: Vec<String> = apis
        .uuid_registry()
        .list_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    names.push(apis.mineskin().name().to_string());

    if json {
        println!("{}", serde_json::to_string_pretty(&names)?);
    } else {
        println!();
        for name in &names {
            println!("  {}", console::style(name).cyan());
        }
        println!();
    }
    Ok(())
}

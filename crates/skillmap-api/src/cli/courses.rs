//! `skillmap courses` -- print the loaded catalogue.
//!
//! Loads the catalogue directly rather than through AppState so listing
//! courses never pays for the embedding model.

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

use skillmap_infra::catalogue::load_catalogue;
use skillmap_infra::config::load_global_config;
use skillmap_infra::data_dir::resolve_data_dir;

pub async fn list_courses(json: bool) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir();
    let config = load_global_config(&data_dir).await;
    let path = config
        .catalogue_path
        .unwrap_or_else(|| data_dir.join("courses.json"));
    let catalogue = load_catalogue(&path).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalogue)?);
        return Ok(());
    }

    if catalogue.is_empty() {
        println!(
            "  {} No courses loaded (looked in {}).",
            console::style("!").yellow().bold(),
            path.display()
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Title", "Provider", "Description"]);
    for course in &catalogue {
        table.add_row(vec![
            course.title.clone(),
            course.provider.clone().unwrap_or_default(),
            course.desc.clone(),
        ]);
    }
    println!("{table}");
    println!("  {} courses", catalogue.len());
    Ok(())
}

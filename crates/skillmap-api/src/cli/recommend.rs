//! `skillmap recommend` -- query the course recommender from the terminal.

use comfy_table::Table;
use comfy_table::presets::UTF8_FULL;

use crate::state::AppState;

pub async fn recommend(state: &AppState, query: &str, k: usize, json: bool) -> anyhow::Result<()> {
    let courses = state.recommender.recommend(query, k).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&courses)?);
        return Ok(());
    }

    if courses.is_empty() {
        println!(
            "  {} No matching courses (catalogue holds {}).",
            console::style("!").yellow().bold(),
            state.recommender.catalogue().len()
        );
        return Ok(());
    }

    println!(
        "  {} Courses for {}",
        console::style("→").bold(),
        console::style(query).cyan()
    );

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["#", "Title", "Provider", "URL"]);
    for (rank, course) in courses.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            course.title.clone(),
            course.provider.clone().unwrap_or_default(),
            course.url.clone().unwrap_or_default(),
        ]);
    }
    println!("{table}");
    Ok(())
}

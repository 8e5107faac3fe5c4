use chrono::Local;
use colored::Colorize;
use recipebook::api::{CmdMessage, MessageLevel};
use recipebook::config::RecipeConfig;
use recipebook::model::Record;
use recipebook::state::SyncState;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const RECIPE_WIDTH: usize = 24;
const INGREDIENTS_WIDTH: usize = 40;
const CUISINE_WIDTH: usize = 12;
const GAP: &str = "  ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[Record]) {
    if records.is_empty() {
        println!("No recipes found.");
        return;
    }

    let id_width = records
        .iter()
        .map(|r| r.id.as_ref().map_or(0, |id| id.as_str().width()))
        .max()
        .unwrap_or(0)
        .max("ID".len());
    let recipe_width = column_width(records.iter().map(|r| r.recipe.as_str()), RECIPE_WIDTH);
    let ingredients_width = column_width(
        records.iter().map(|r| r.ingredients.as_str()),
        INGREDIENTS_WIDTH,
    );

    let header = [
        pad("ID", id_width),
        pad("Recipe", recipe_width),
        pad("Ingredients", ingredients_width),
        "Cuisine".to_string(),
    ]
    .join(GAP);
    println!("{}", header.bold());

    for record in records {
        let id = record.id.as_ref().map_or("", |id| id.as_str());
        println!(
            "{}{GAP}{}{GAP}{}{GAP}{}",
            pad(id, id_width).dimmed(),
            pad(&truncate_to_width(&record.recipe, recipe_width), recipe_width),
            pad(
                &truncate_to_width(&record.ingredients, ingredients_width),
                ingredients_width
            ),
            truncate_to_width(record.cuisine_or_empty(), CUISINE_WIDTH).cyan(),
        );
    }
}

pub(super) fn print_status(state: &SyncState) {
    let mut line = format!("{} of {} recipes", state.view().len(), state.records().len());
    if !state.search_term().trim().is_empty() {
        line.push_str(&format!(" matching \"{}\"", state.search_term()));
    }
    if let Some(at) = state.loaded_at() {
        line.push_str(&format!(
            ", loaded {}",
            at.with_timezone(&Local).format("%H:%M:%S")
        ));
    }
    println!("\n{}", line.dimmed());
}

pub(super) fn print_config(config: &RecipeConfig) {
    for key in RecipeConfig::keys() {
        println!("{} = {}", key.bold(), config.get(key).unwrap_or_default());
    }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>, cap: usize) -> usize {
    values.map(|v| v.width()).max().unwrap_or(0).min(cap)
}

fn pad(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

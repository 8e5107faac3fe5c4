use super::args::{Cli, Commands};
use super::print::{print_config, print_messages, print_records, print_status};
use recipebook::api::{ConfigAction, RecipeBook};
use recipebook::commands;
use recipebook::config::{default_config_dir, RecipeConfig, ENV_API_URL};
use recipebook::error::{RecipeError, Result};
use recipebook::model::RecordId;
use recipebook::store::http::HttpStore;
use std::path::Path;
use tracing::debug;

type Book = RecipeBook<HttpStore>;

pub async fn dispatch(cli: Cli) -> Result<()> {
    let config_dir = default_config_dir()?;
    let api_url = cli.api_url;

    match cli.command.unwrap_or(Commands::List { search: None }) {
        Commands::List { search } => {
            let mut book = connect(&config_dir, api_url).await?;
            handle_list(&mut book, search)
        }
        Commands::Search { term } => {
            let mut book = connect(&config_dir, api_url).await?;
            handle_list(&mut book, Some(term))
        }
        Commands::Add {
            recipe,
            ingredients,
            cuisine,
        } => {
            let mut book = connect(&config_dir, api_url).await?;
            handle_add(&mut book, recipe, ingredients, cuisine).await
        }
        Commands::Edit {
            id,
            recipe,
            ingredients,
            cuisine,
        } => {
            let mut book = connect(&config_dir, api_url).await?;
            handle_edit(&mut book, id.into(), recipe, ingredients, cuisine).await
        }
        Commands::Delete { ids } => {
            let mut book = connect(&config_dir, api_url).await?;
            handle_delete(&mut book, ids).await
        }
        Commands::Config { key, value } => handle_config(&config_dir, key, value),
    }
}

/// Resolve configuration, build the store and load the collection.
async fn connect(config_dir: &Path, api_url: Option<String>) -> Result<Book> {
    let config = RecipeConfig::load(config_dir)?
        .with_overrides(std::env::var(ENV_API_URL).ok(), api_url);
    debug!(api_url = %config.api_url, "connecting");

    let mut book = RecipeBook::new(HttpStore::from_config(&config)?);
    book.load().await;
    Ok(book)
}

fn handle_list(book: &mut Book, search: Option<String>) -> Result<()> {
    if let Some(term) = search {
        book.set_search_term(term);
    }
    print_records(book.view());
    print_status(book.state());
    Ok(())
}

async fn handle_add(
    book: &mut Book,
    recipe: Option<String>,
    ingredients: Option<String>,
    cuisine: Option<String>,
) -> Result<()> {
    book.set_recipe(recipe.unwrap_or_default());
    book.set_ingredients(ingredients.unwrap_or_default());
    book.set_cuisine(cuisine.unwrap_or_default());
    submit(book).await
}

async fn handle_edit(
    book: &mut Book,
    id: RecordId,
    recipe: Option<String>,
    ingredients: Option<String>,
    cuisine: Option<String>,
) -> Result<()> {
    book.begin_edit(&id);
    if !book.draft().is_editing() {
        return Err(RecipeError::RecordNotFound(id));
    }

    if let Some(recipe) = recipe {
        book.set_recipe(recipe);
    }
    if let Some(ingredients) = ingredients {
        book.set_ingredients(ingredients);
    }
    if let Some(cuisine) = cuisine {
        book.set_cuisine(cuisine);
    }
    submit(book).await
}

async fn submit(book: &mut Book) -> Result<()> {
    let result = book.submit().await;
    if let Some(error) = book.error() {
        return Err(RecipeError::Rejected(error.to_string()));
    }
    print_records(book.view());
    print_messages(&result.messages);
    Ok(())
}

async fn handle_delete(book: &mut Book, ids: Vec<String>) -> Result<()> {
    let mut messages = Vec::new();
    for id in ids {
        let result = book.delete(&RecordId::from(id)).await;
        messages.extend(result.messages);
    }
    print_records(book.view());
    print_messages(&messages);
    Ok(())
}

fn handle_config(dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = commands::config::run(dir, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

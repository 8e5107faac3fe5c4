use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "recipebook", version)]
#[command(about = "Keep a recipe collection in sync with its REST store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Collection endpoint of the remote store (overrides config and RECIPEBOOK_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List recipes
    #[command(alias = "ls")]
    List {
        /// Only show recipes whose ingredients contain this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search recipes by ingredient
    #[command(alias = "s")]
    Search { term: String },

    /// Add a new recipe
    #[command(alias = "n")]
    Add {
        /// Recipe name (required)
        #[arg(short, long)]
        recipe: Option<String>,

        /// Ingredients (required)
        #[arg(short, long)]
        ingredients: Option<String>,

        /// Cuisine
        #[arg(short, long)]
        cuisine: Option<String>,
    },

    /// Edit an existing recipe; omitted fields keep their current value
    #[command(alias = "e")]
    Edit {
        /// Id of the recipe
        id: String,

        #[arg(short, long)]
        recipe: Option<String>,

        #[arg(short, long)]
        ingredients: Option<String>,

        #[arg(short, long)]
        cuisine: Option<String>,
    },

    /// Delete one or more recipes
    #[command(alias = "rm")]
    Delete {
        /// Ids of the recipes
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (api-url, timeout)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edit_with_partial_fields() {
        let cli = Cli::parse_from(["recipebook", "edit", "abc", "-c", "Thai"]);
        match cli.command {
            Some(Commands::Edit {
                id,
                recipe,
                cuisine,
                ..
            }) => {
                assert_eq!(id, "abc");
                assert_eq!(recipe, None);
                assert_eq!(cuisine.as_deref(), Some("Thai"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_api_url_after_subcommand() {
        let cli = Cli::parse_from(["recipebook", "ls", "--api-url", "http://x.test/api"]);
        assert_eq!(cli.api_url.as_deref(), Some("http://x.test/api"));
        assert!(matches!(cli.command, Some(Commands::List { search: None })));
    }

    #[test]
    fn delete_requires_an_id() {
        assert!(Cli::try_parse_from(["recipebook", "delete"]).is_err());
    }
}

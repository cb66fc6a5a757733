use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::nutrition::MealItemRequest;
use crate::nutrition::constants::{DEFAULT_HISTORY_FILE, DEFAULT_INGREDIENTS_FILE};

/// Nutrition Tracker: keep an ingredient catalog, compose meals, and review past meals.
#[derive(Parser, Debug)]
#[command(name = "nutrition-tracker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub stores: StoreArgs,
}

/// Locations of the two JSON stores. Shared with the server binary.
#[derive(clap::Args, Debug, Clone)]
pub struct StoreArgs {
    /// Path to the ingredient catalog JSON file.
    #[arg(long, env = "NUTRITION_INGREDIENTS_FILE", default_value = DEFAULT_INGREDIENTS_FILE)]
    pub ingredients: PathBuf,

    /// Path to the meal history JSON file.
    #[arg(long, env = "NUTRITION_HISTORY_FILE", default_value = DEFAULT_HISTORY_FILE)]
    pub history: PathBuf,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Interactive menu (default).
    #[default]
    Menu,

    /// Add an ingredient. Values are for `--portion` grams and are stored per 100g.
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        calories: f64,

        /// Protein in grams.
        #[arg(long)]
        protein: f64,

        /// Carbohydrates in grams.
        #[arg(long)]
        carbs: f64,

        /// Fat in grams.
        #[arg(long)]
        fat: f64,

        /// Portion size the values above refer to, in grams.
        #[arg(long, default_value_t = 100.0)]
        portion: f64,
    },

    /// List all ingredients.
    List,

    /// Remove an ingredient by name.
    Remove { name: String },

    /// Compute a meal's nutrition from NAME=GRAMS items.
    Meal {
        /// Name of the meal.
        #[arg(long)]
        name: String,

        /// Ingredient and weight, e.g. --item "Chicken Breast=200". Repeatable.
        #[arg(long = "item", value_parser = parse_meal_item, required = true)]
        items: Vec<MealItemRequest>,

        /// Save the result to the meal history.
        #[arg(long)]
        save: bool,
    },

    /// Browse saved meals.
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },
}

#[derive(Subcommand, Debug, Clone, Default)]
pub enum HistoryAction {
    /// List saved meals, most recent first (default).
    #[default]
    List,

    /// Show one saved meal.
    Show { id: String },

    /// Delete one saved meal.
    Delete { id: String },
}

/// Parse `NAME=GRAMS`. The last `=` splits, so names may contain `=`.
pub fn parse_meal_item(raw: &str) -> Result<MealItemRequest, String> {
    let (name, weight) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=GRAMS, got '{}'", raw))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing ingredient name in '{}'", raw));
    }

    let weight: f64 = weight
        .trim()
        .parse()
        .map_err(|_| format!("invalid weight '{}' in '{}'", weight.trim(), raw))?;

    Ok(MealItemRequest::new(name, weight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meal_item() {
        let item = parse_meal_item("Chicken Breast=200").unwrap();
        assert_eq!(item, MealItemRequest::new("Chicken Breast", 200.0));

        let item = parse_meal_item(" Rice = 150.5 ").unwrap();
        assert_eq!(item, MealItemRequest::new("Rice", 150.5));

        assert!(parse_meal_item("Rice").is_err());
        assert!(parse_meal_item("=100").is_err());
        assert!(parse_meal_item("Rice=lots").is_err());
    }

    #[test]
    fn test_cli_parses_meal_command() {
        let cli = Cli::try_parse_from([
            "nutrition-tracker",
            "--ingredients",
            "db.json",
            "meal",
            "--name",
            "Dinner",
            "--item",
            "Chicken Breast=200",
            "--item",
            "Rice=150",
            "--save",
        ])
        .unwrap();

        assert_eq!(cli.stores.ingredients, PathBuf::from("db.json"));
        match cli.command {
            Some(Command::Meal { name, items, save }) => {
                assert_eq!(name, "Dinner");
                assert_eq!(items.len(), 2);
                assert!(save);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_default_command_is_menu() {
        let cli = Cli::try_parse_from(["nutrition-tracker"]).unwrap();
        assert!(matches!(cli.command.unwrap_or_default(), Command::Menu));
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

use clap::Parser;
use uuid::Uuid;

use nutrition_tracker::cli::{Cli, Command, HistoryAction};
use nutrition_tracker::error::{NutritionError, Result};
use nutrition_tracker::interface::{
    display_history, display_history_entry, display_ingredient_list, display_meal_report,
    run_menu,
};
use nutrition_tracker::logging;
use nutrition_tracker::nutrition::{
    IngredientInput, LooseNumber, MealItemRequest, compose_meal, suggest_names,
};
use nutrition_tracker::state::{IngredientCatalog, MealHistoryLog};

fn main() {
    logging::init("warn");

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    let mut catalog = IngredientCatalog::load(&cli.stores.ingredients);

    match command {
        Command::Menu => {
            let mut history = MealHistoryLog::load(&cli.stores.history);
            run_menu(&mut catalog, &mut history)
        }
        Command::Add {
            name,
            calories,
            protein,
            carbs,
            fat,
            portion,
        } => cmd_add(&mut catalog, name, calories, protein, carbs, fat, portion),
        Command::List => {
            display_ingredient_list(&catalog.iter_sorted());
            Ok(())
        }
        Command::Remove { name } => cmd_remove(&mut catalog, &name),
        Command::Meal { name, items, save } => {
            let mut history = MealHistoryLog::load(&cli.stores.history);
            cmd_meal(&catalog, &mut history, &name, &items, save)
        }
        Command::History { action } => {
            let mut history = MealHistoryLog::load(&cli.stores.history);
            cmd_history(&mut history, action.unwrap_or_default())
        }
    }
}

/// Add an ingredient given for `portion` grams.
fn cmd_add(
    catalog: &mut IngredientCatalog,
    name: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    portion: f64,
) -> Result<()> {
    let input = IngredientInput {
        name: Some(name),
        portion_size: Some(LooseNumber::Number(portion)),
        calories: Some(LooseNumber::Number(calories)),
        protein: Some(LooseNumber::Number(protein)),
        carbs: Some(LooseNumber::Number(carbs)),
        fat: Some(LooseNumber::Number(fat)),
    };

    let ingredient = input.into_ingredient()?;
    let name = ingredient.name().to_string();
    catalog.add(ingredient)?;

    if !catalog.persist() {
        eprintln!("Warning: could not write {}", catalog.path().display());
    }
    println!("Ingredient '{}' added.", name);
    Ok(())
}

/// Remove an ingredient by name.
fn cmd_remove(catalog: &mut IngredientCatalog, name: &str) -> Result<()> {
    if catalog.remove(name) {
        catalog.persist();
        println!("Ingredient '{}' removed.", name);
    } else {
        println!("Ingredient '{}' not found.", name);
    }
    Ok(())
}

/// Compute a meal from named items and optionally save it.
fn cmd_meal(
    catalog: &IngredientCatalog,
    history: &mut MealHistoryLog,
    name: &str,
    items: &[MealItemRequest],
    save: bool,
) -> Result<()> {
    let meal = match compose_meal(catalog, name, items) {
        Ok(meal) => meal,
        Err(NutritionError::MissingIngredients(missing)) => {
            for name in &missing {
                let suggestions = suggest_names(catalog, name, 3);
                if !suggestions.is_empty() {
                    eprintln!("'{}' not found. Did you mean: {}?", name, suggestions.join(", "));
                }
            }
            return Err(NutritionError::MissingIngredients(missing));
        }
        Err(e) => return Err(e),
    };

    display_meal_report(
        meal.name(),
        &meal.line_items(),
        &meal.total_nutrition(),
        &meal.nutrition_per_100g(),
    );

    if save {
        let entry = history.append_meal(&meal);
        println!("Saved to history as {}.", entry.id);
    }
    Ok(())
}

/// List, show or delete saved meals.
fn cmd_history(history: &mut MealHistoryLog, action: HistoryAction) -> Result<()> {
    match action {
        HistoryAction::List => display_history(&history.list_summaries()),
        HistoryAction::Show { id } => {
            match Uuid::parse_str(&id).ok().and_then(|id| history.get_by_id(id)) {
                Some(entry) => display_history_entry(entry),
                None => println!("Meal '{}' not found.", id),
            }
        }
        HistoryAction::Delete { id } => {
            let deleted = Uuid::parse_str(&id)
                .ok()
                .is_some_and(|id| history.delete_by_id(id));
            if deleted {
                println!("Meal '{}' deleted.", id);
            } else {
                println!("Meal '{}' not found.", id);
            }
        }
    }
    Ok(())
}

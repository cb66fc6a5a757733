//! The interactive menu.

use crate::error::{NutritionError, Result};
use crate::interface::prompts::{
    prompt_choice, prompt_existing_ingredient, prompt_non_negative, prompt_text, prompt_yes_no,
};
use crate::interface::render::{
    display_history, display_history_entry, display_ingredient_list, display_meal_report,
};
use crate::models::{Ingredient, Meal};
use crate::state::{IngredientCatalog, MealHistoryLog};

/// Run the main menu until the user exits.
pub fn run_menu(catalog: &mut IngredientCatalog, history: &mut MealHistoryLog) -> Result<()> {
    let options = [
        "Manage Ingredients",
        "Create Meal & Calculate Nutrition",
        "Meal History",
        "Exit",
    ];

    loop {
        println!();
        println!("========== Nutrition Tracker ==========");
        match prompt_choice("Main menu", &options)? {
            0 => manage_ingredients(catalog)?,
            1 => create_meal(catalog, history)?,
            2 => browse_history(history)?,
            _ => {
                println!("Goodbye!");
                return Ok(());
            }
        }
    }
}

fn manage_ingredients(catalog: &mut IngredientCatalog) -> Result<()> {
    let options = [
        "Add New Ingredient",
        "View All Ingredients",
        "Remove Ingredient",
        "Back to Main Menu",
    ];

    loop {
        match prompt_choice("Manage ingredients", &options)? {
            0 => add_ingredient(catalog)?,
            1 => display_ingredient_list(&catalog.iter_sorted()),
            2 => remove_ingredient(catalog)?,
            _ => return Ok(()),
        }
    }
}

fn add_ingredient(catalog: &mut IngredientCatalog) -> Result<()> {
    println!("Add New Ingredient (values per 100g)");
    let name = prompt_text("Ingredient name")?;
    if catalog.contains(&name) {
        println!(
            "Ingredient '{}' already exists. To update, remove it first and then add again.",
            name
        );
        return Ok(());
    }

    let calories = prompt_non_negative("Calories per 100g")?;
    let protein = prompt_non_negative("Protein (g) per 100g")?;
    let carbs = prompt_non_negative("Carbohydrates (g) per 100g")?;
    let fat = prompt_non_negative("Fat (g) per 100g")?;

    let added = Ingredient::new(name, calories, protein, carbs, fat)
        .and_then(|ingredient| {
            let name = ingredient.name().to_string();
            catalog.add(ingredient)?;
            Ok(name)
        });

    match added {
        Ok(name) => {
            catalog.persist();
            println!("Ingredient '{}' added.", name);
        }
        Err(e @ (NutritionError::Validation(_) | NutritionError::DuplicateName(_))) => {
            println!("Error: {}", e);
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

fn remove_ingredient(catalog: &mut IngredientCatalog) -> Result<()> {
    let Some(name) = prompt_existing_ingredient(catalog, "Name of ingredient to remove")? else {
        return Ok(());
    };

    if catalog.remove(&name) {
        catalog.persist();
        println!("Ingredient '{}' removed.", name);
    } else {
        println!("Ingredient '{}' not found.", name);
    }
    Ok(())
}

fn create_meal(catalog: &IngredientCatalog, history: &mut MealHistoryLog) -> Result<()> {
    let names = catalog.list();
    if names.is_empty() {
        println!("No ingredients in database. Please add some first from 'Manage Ingredients'.");
        return Ok(());
    }

    let meal_name = prompt_text("Name for your meal")?;
    let mut meal = Meal::new(meal_name)?;

    let mut options = names.clone();
    options.push("Finish Adding Ingredients".to_string());

    loop {
        let choice = prompt_choice("Choose an ingredient to add", &options)?;
        let Some(name) = names.get(choice) else {
            break;
        };
        let Some(ingredient) = catalog.get(name) else {
            continue;
        };

        let weight = prompt_non_negative(&format!("Weight of {} in grams", name))?;
        meal.add_line(ingredient, weight)?;
        println!("Added {}g of {} to {}.", weight, name, meal.name());
    }

    if meal.is_empty() {
        println!("Meal is empty. No nutrition to calculate.");
        return Ok(());
    }

    display_meal_report(
        meal.name(),
        &meal.line_items(),
        &meal.total_nutrition(),
        &meal.nutrition_per_100g(),
    );

    if prompt_yes_no("Save this meal to history?", true)? {
        let entry = history.append_meal(&meal);
        println!("Saved as {}.", entry.id);
    }
    Ok(())
}

fn browse_history(history: &mut MealHistoryLog) -> Result<()> {
    let options = ["List Meals", "View Meal", "Delete Meal", "Back to Main Menu"];

    loop {
        match prompt_choice("Meal history", &options)? {
            0 => display_history(&history.list_summaries()),
            1 => {
                if let Some(id) = pick_history_entry(history)? {
                    if let Some(entry) = history.get_by_id(id) {
                        display_history_entry(entry);
                    }
                }
            }
            2 => {
                if let Some(id) = pick_history_entry(history)? {
                    if prompt_yes_no("Delete this meal?", false)? && history.delete_by_id(id) {
                        println!("Meal deleted.");
                    }
                }
            }
            _ => return Ok(()),
        }
    }
}

fn pick_history_entry(history: &MealHistoryLog) -> Result<Option<uuid::Uuid>> {
    let summaries = history.list_summaries();
    if summaries.is_empty() {
        println!("No saved meals.");
        return Ok(None);
    }

    let mut options: Vec<String> = summaries
        .iter()
        .map(|s| {
            format!(
                "{}  {} ({:.0} kcal)",
                s.timestamp.format("%Y-%m-%d %H:%M"),
                s.name,
                s.total_calories
            )
        })
        .collect();
    options.push("Cancel".to_string());

    let choice = prompt_choice("Select a meal", &options)?;
    Ok(summaries.get(choice).map(|s| s.id))
}

use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::nutrition::suggest_names;
use crate::state::IngredientCatalog;

/// Prompt until a non-empty line is entered.
pub fn prompt_text(prompt: &str) -> Result<String> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if !input.is_empty() {
            return Ok(input.to_string());
        }
        println!("Input cannot be empty. Please try again.");
    }
}

/// Prompt until a non-negative number is entered.
pub fn prompt_non_negative(prompt: &str) -> Result<f64> {
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;

        match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => return Ok(value),
            Ok(_) => println!("Value cannot be negative. Please try again."),
            Err(_) => println!("Invalid input. Please enter a number."),
        }
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Pick one of `items`. Returns the chosen index.
pub fn prompt_choice<T: ToString>(prompt: &str, items: &[T]) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()?)
}

/// Ask for the name of an ingredient already in the catalog.
///
/// Exact matches are accepted as typed; otherwise close names are offered. Returns
/// `None` if the user picks none of them.
pub fn prompt_existing_ingredient(
    catalog: &IngredientCatalog,
    prompt: &str,
) -> Result<Option<String>> {
    let input = prompt_text(prompt)?;
    if catalog.contains(&input) {
        return Ok(Some(input));
    }

    let candidates = suggest_names(catalog, &input, 5);
    if candidates.is_empty() {
        println!("Ingredient '{}' not found.", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let confirm = prompt_yes_no(&format!("Did you mean '{}'?", candidates[0]), true)?;
        return Ok(confirm.then(|| candidates[0].clone()));
    }

    let mut options = candidates.clone();
    options.push("None of these".to_string());
    let selection = prompt_choice("Which did you mean?", &options)?;

    Ok(candidates.get(selection).cloned())
}

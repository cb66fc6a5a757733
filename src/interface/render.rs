use crate::models::{
    HistoryEntry, HistorySummary, Ingredient, LineItemBreakdown, NutritionPer100g,
    TotalNutrition,
};

/// Display all ingredients with their per-100g figures.
pub fn display_ingredient_list(ingredients: &[&Ingredient]) {
    if ingredients.is_empty() {
        println!("No ingredients in the database.");
        return;
    }

    println!();
    println!("=== Ingredients ({} items, per 100g) ===", ingredients.len());
    println!();

    let width = ingredients
        .iter()
        .map(|i| i.name().len())
        .max()
        .unwrap_or(10);

    for ingredient in ingredients {
        println!(
            "  {:<width$}  {:>7.1} kcal | P {:>5.1}g | C {:>5.1}g | F {:>5.1}g",
            ingredient.name(),
            ingredient.calories(),
            ingredient.protein_g(),
            ingredient.carbs_g(),
            ingredient.fat_g(),
            width = width
        );
    }

    println!();
}

/// Display the computed nutrition of a meal.
pub fn display_meal_report(
    meal_name: &str,
    items: &[LineItemBreakdown],
    total: &TotalNutrition,
    per_100g: &NutritionPer100g,
) {
    println!();
    println!("=== Nutrition for {} ===", meal_name);
    println!();

    if items.is_empty() {
        println!("  (no ingredients)");
    }
    for item in items {
        println!(
            "  - {}: {}g (Cals: {:.1}, P: {:.1}g, C: {:.1}g, F: {:.1}g)",
            item.name, item.weight_g, item.calories, item.protein_g, item.carbs_g, item.fat_g
        );
    }

    display_nutrition(total, per_100g);
}

/// Display totals and per-100g figures.
pub fn display_nutrition(total: &TotalNutrition, per_100g: &NutritionPer100g) {
    println!();
    println!("--- Total ---");
    println!("  Weight:   {:.1}g", total.weight_g);
    println!("  Calories: {:.1} kcal", total.calories);
    println!("  Protein:  {:.1}g", total.protein_g);
    println!("  Carbs:    {:.1}g", total.carbs_g);
    println!("  Fat:      {:.1}g", total.fat_g);

    println!();
    println!("--- Per 100g ---");
    match (
        per_100g.calories,
        per_100g.protein_g,
        per_100g.carbs_g,
        per_100g.fat_g,
    ) {
        (Some(cal), Some(p), Some(c), Some(f)) => {
            println!("  Calories: {:.1} kcal", cal);
            println!("  Protein:  {:.1}g", p);
            println!("  Carbs:    {:.1}g", c);
            println!("  Fat:      {:.1}g", f);
        }
        _ => println!("  Cannot calculate per 100g as meal weight is zero."),
    }
    println!();
}

/// Display history summaries as a table.
pub fn display_history(summaries: &[HistorySummary]) {
    if summaries.is_empty() {
        println!("No saved meals.");
        return;
    }

    println!();
    println!("=== Meal History ({} meals) ===", summaries.len());
    println!();

    for summary in summaries {
        println!(
            "  {}  {}  {:>8.1} kcal  {}",
            summary.timestamp.format("%Y-%m-%d %H:%M"),
            summary.id,
            summary.total_calories,
            summary.name
        );
    }

    println!();
}

/// Display a full history entry.
pub fn display_history_entry(entry: &HistoryEntry) {
    println!();
    println!("Meal:  {}", entry.name);
    println!("ID:    {}", entry.id);
    println!("Saved: {}", entry.timestamp.to_rfc3339());

    println!();
    println!("Ingredients used:");
    for used in &entry.ingredients_used {
        println!("  - {}: {}g", used.name, used.weight_g);
    }

    display_nutrition(&entry.total_nutrition, &entry.nutrition_per_100g);
}

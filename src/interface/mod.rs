pub mod menu;
pub mod prompts;
pub mod render;

pub use menu::run_menu;
pub use prompts::{
    prompt_choice, prompt_existing_ingredient, prompt_non_negative, prompt_text, prompt_yes_no,
};
pub use render::{
    display_history, display_history_entry, display_ingredient_list, display_meal_report,
    display_nutrition,
};

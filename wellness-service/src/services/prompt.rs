//! Prompt templates for the three activity categories.
//!
//! The payload is not interpreted: whatever JSON the caller sent is
//! serialized compactly and spliced into the template.

use crate::models::{Category, UnknownCategory};
use serde_json::Value;

const WATER_INSTRUCTIONS: &str = "Give the amount of water they should drink today and a motivating line. \
     Limit response to 25 words.";

const GYM_INSTRUCTIONS: &str = "Motivate based on their routine, suggest exercise intensity, and advise healthy eating. \
     Limit response to 25 words.";

const FOOD_INSTRUCTIONS: &str = "A detail meal what the user ate, calculate the user calories intake and give your response. \
     Encourage healthy meals and motivate them to eat better. \
     Limit response to 25 words.";

/// Build the generation prompt for `data` under `category`.
pub fn build_prompt(data: &Value, category: Category) -> String {
    let (subject, instructions) = match category {
        Category::Water => ("water intake", WATER_INSTRUCTIONS),
        Category::Gym => ("gym activity", GYM_INSTRUCTIONS),
        Category::Food => ("food intake", FOOD_INSTRUCTIONS),
    };

    format!(
        "You have the following data: {} of a person's {}. {}",
        data, subject, instructions
    )
}

/// Same as [`build_prompt`] for a textual category tag.
pub fn build_prompt_for_tag(data: &Value, tag: &str) -> Result<String, UnknownCategory> {
    let category = tag.parse::<Category>()?;
    Ok(build_prompt(data, category))
}

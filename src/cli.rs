use clap::{Parser, Subcommand, ValueEnum};

use crate::models::FoodSelection;
use crate::planner::FormPreference;

/// Feline Diet Planner: energy targets, food rankings, and portion plans for cats.
#[derive(Parser, Debug)]
#[command(name = "feline_diet")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the cat profile JSON file.
    #[arg(short, long, global = true, default_value = "profile.json")]
    pub profile: String,

    /// Path to the food catalog JSON file.
    #[arg(short, long, global = true, default_value = "foods.json")]
    pub catalog: String,

    /// Optional planner config JSON (scoring weights, deviation bounds).
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum FormArg {
    Dry,
    Wet,
    #[default]
    Any,
}

impl From<FormArg> for FormPreference {
    fn from(arg: FormArg) -> Self {
        match arg {
            FormArg::Dry => FormPreference::Dry,
            FormArg::Wet => FormPreference::Wet,
            FormArg::Any => FormPreference::Any,
        }
    }
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Show the daily energy plan for the cat.
    #[default]
    Plan,

    /// Rank catalog foods for the cat.
    Recommend {
        /// Restrict to one food form.
        #[arg(long, value_enum, default_value_t = FormArg::Any)]
        form: FormArg,

        /// Maximum monthly spend.
        #[arg(long)]
        budget: Option<f64>,

        /// Health condition tag; overrides the profile's conditions. Repeatable.
        #[arg(long = "condition")]
        conditions: Vec<String>,

        /// Also write the ranking to a CSV file.
        #[arg(long)]
        csv: Option<String>,
    },

    /// List practical daily portions of one food.
    Portions {
        /// Catalog id of the food.
        #[arg(long)]
        food: String,
    },

    /// Rank single-food and wet/dry combo plans around one food.
    Meals {
        /// Catalog id of the primary food.
        #[arg(long)]
        food: String,

        /// Maximum number of options to show.
        #[arg(long)]
        max: Option<usize>,
    },

    /// Build a multi-food plan, interactively unless selections are given.
    Build {
        /// Food and meal count as ID=COUNT. Repeatable.
        #[arg(long = "select", value_parser = parse_selection)]
        selections: Vec<FoodSelection>,

        /// Save the finished plan to this path.
        #[arg(long)]
        save: Option<String>,
    },

    /// Compare the profile's current feeding with its target.
    Current,

    /// Summarize a saved plan.
    Summary {
        /// Path to the saved plan JSON file.
        #[arg(long)]
        plan: String,
    },
}

/// Parse `ID=COUNT` into a selection.
pub fn parse_selection(raw: &str) -> Result<FoodSelection, String> {
    let (id, count) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=COUNT, got '{}'", raw))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing food id in '{}'", raw));
    }

    let count: u32 = count
        .trim()
        .parse()
        .map_err(|_| format!("invalid meal count in '{}'", raw))?;

    Ok(FoodSelection::new(id, count))
}

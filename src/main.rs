use clap::Parser;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use feline_diet_planner_rs::cli::{Cli, Command, FormArg};
use feline_diet_planner_rs::error::{PlannerError, Result};
use feline_diet_planner_rs::interface::{
    build_plan_interactively, display_current_feeding, display_meal_plan_options,
    display_nutrition_plan, display_plan_summary, display_portion_options,
    display_recommendations, prompt_yes_no, write_recommendations_csv,
};
use feline_diet_planner_rs::models::{CatProfile, FoodItem, FoodSelection};
use feline_diet_planner_rs::planner::{
    compute_nutrition_plan, daily_energy_requirement, evaluate_current_feeding,
    generate_meal_plan_options, generate_portion_options, generate_recommendations,
    recommended_meals_per_day, PlannerConfig, RecommendationOptions, DEFAULT_MAX_MEAL_OPTIONS,
};
use feline_diet_planner_rs::state::{
    load_catalog, load_plan, load_profile, save_plan, PlanBuilder,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::default(),
    };
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&cli.profile),
        Command::Recommend {
            form,
            budget,
            conditions,
            csv,
        } => cmd_recommend(
            &cli.profile,
            &cli.catalog,
            &config,
            form,
            budget,
            conditions,
            csv.as_deref(),
        ),
        Command::Portions { food } => cmd_portions(&cli.profile, &cli.catalog, &config, &food),
        Command::Meals { food, max } => cmd_meals(
            &cli.profile,
            &cli.catalog,
            &config,
            &food,
            max.unwrap_or(DEFAULT_MAX_MEAL_OPTIONS),
        ),
        Command::Build { selections, save } => cmd_build(
            &cli.profile,
            &cli.catalog,
            &config,
            selections,
            save.as_deref(),
        ),
        Command::Current => cmd_current(&cli.profile, &cli.catalog),
        Command::Summary { plan } => cmd_summary(&cli.catalog, &config, &plan),
    }
}

fn find_food<'a>(catalog: &'a [FoodItem], id: &str) -> Result<&'a FoodItem> {
    catalog
        .iter()
        .find(|f| f.id == id)
        .ok_or_else(|| PlannerError::FoodNotFound(id.to_string()))
}

fn load_inputs(profile_path: &str, catalog_path: &str) -> Result<(CatProfile, Vec<FoodItem>)> {
    let profile = load_profile(profile_path)?;
    let catalog = load_catalog(catalog_path)?;
    info!(foods = catalog.len(), cat = %profile.name, "loaded inputs");
    Ok((profile, catalog))
}

/// Print the daily energy plan.
fn cmd_plan(profile_path: &str) -> Result<()> {
    let profile = load_profile(profile_path)?;
    let plan = compute_nutrition_plan(&profile);
    display_nutrition_plan(&profile, &plan);
    Ok(())
}

/// Rank foods, optionally exporting to CSV.
fn cmd_recommend(
    profile_path: &str,
    catalog_path: &str,
    config: &PlannerConfig,
    form: FormArg,
    budget: Option<f64>,
    conditions: Vec<String>,
    csv: Option<&str>,
) -> Result<()> {
    let (profile, catalog) = load_inputs(profile_path, catalog_path)?;

    let options = RecommendationOptions {
        form_preference: form.into(),
        max_monthly_budget: budget,
        health_conditions: if conditions.is_empty() {
            None
        } else {
            Some(conditions)
        },
    };

    let recommendations = generate_recommendations(&profile, &catalog, &options, config);
    display_recommendations(&recommendations);

    if let Some(path) = csv {
        write_recommendations_csv(&recommendations, Path::new(path))?;
        println!("Wrote {} rows to {}", recommendations.len(), path);
    }

    Ok(())
}

/// Show practical portions of one food.
fn cmd_portions(
    profile_path: &str,
    catalog_path: &str,
    config: &PlannerConfig,
    food_id: &str,
) -> Result<()> {
    let (profile, catalog) = load_inputs(profile_path, catalog_path)?;
    let food = find_food(&catalog, food_id)?;

    let target = daily_energy_requirement(&profile);
    let meals = recommended_meals_per_day(&profile);
    let options = generate_portion_options(food, target, meals, config);
    display_portion_options(&food.display_name(), &options);
    Ok(())
}

/// Show ranked meal plans built around one food.
fn cmd_meals(
    profile_path: &str,
    catalog_path: &str,
    config: &PlannerConfig,
    food_id: &str,
    max_options: usize,
) -> Result<()> {
    let (profile, catalog) = load_inputs(profile_path, catalog_path)?;
    let food = find_food(&catalog, food_id)?;

    let options = generate_meal_plan_options(food, &profile, &catalog, max_options, config);
    display_meal_plan_options(&options);
    Ok(())
}

/// Build a multi-food plan and optionally save it.
fn cmd_build(
    profile_path: &str,
    catalog_path: &str,
    config: &PlannerConfig,
    selections: Vec<FoodSelection>,
    save: Option<&str>,
) -> Result<()> {
    let (profile, catalog) = load_inputs(profile_path, catalog_path)?;

    let target = daily_energy_requirement(&profile);
    let meals = recommended_meals_per_day(&profile);
    let mut builder = PlanBuilder::new(target, meals);

    if selections.is_empty() {
        build_plan_interactively(&mut builder, &catalog, config)?;
    } else {
        for selection in &selections {
            find_food(&catalog, &selection.food_id)?;
            builder.add(&selection.food_id, selection.meal_count)?;
        }
    }

    display_plan_summary(&builder.summary(&catalog, config));

    let Some(path) = save else {
        return Ok(());
    };

    if !builder.is_complete() {
        println!(
            "Plan not saved: {} meal slot(s) still open.",
            builder.remaining_slots()
        );
        return Ok(());
    }

    if Path::new(path).exists() && !prompt_yes_no(&format!("Overwrite {}?", path), false)? {
        return Ok(());
    }

    let plan = builder.into_saved_plan(&profile.name)?;
    save_plan(path, &plan)?;
    println!("Plan saved to {}.", path);
    Ok(())
}

/// Evaluate the profile's current feeding.
fn cmd_current(profile_path: &str, catalog_path: &str) -> Result<()> {
    let (profile, catalog) = load_inputs(profile_path, catalog_path)?;

    match evaluate_current_feeding(&profile, &catalog) {
        Some(report) => display_current_feeding(&report),
        None => println!("No current feeding recorded for {}.", profile.name),
    }
    Ok(())
}

/// Summarize a saved plan against its stored target.
fn cmd_summary(catalog_path: &str, config: &PlannerConfig, plan_path: &str) -> Result<()> {
    let catalog = load_catalog(catalog_path)?;
    let plan = load_plan(plan_path)?;

    println!("Plan: {}", plan.name);
    display_plan_summary(&plan.summarize(&catalog, config));
    Ok(())
}

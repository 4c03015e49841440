mod manager;
mod persistence;

pub use manager::PlanBuilder;
pub use persistence::{load_catalog, load_plan, load_profile, save_plan};

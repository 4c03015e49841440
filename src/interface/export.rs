use std::io;
use std::path::Path;

use crate::error::Result;
use crate::models::FoodRecommendation;

const HEADER: [&str; 14] = [
    "rank",
    "food_id",
    "food",
    "form",
    "overall",
    "nutrition",
    "value",
    "suitability",
    "daily_amount",
    "per_meal_amount",
    "daily_cost",
    "monthly_cost",
    "cost_per_100kcal",
    "badges",
];

fn write_records<W: io::Write>(
    wtr: &mut csv::Writer<W>,
    recommendations: &[FoodRecommendation],
) -> Result<()> {
    wtr.write_record(HEADER)?;

    for (i, rec) in recommendations.iter().enumerate() {
        let badges: Vec<&str> = rec.badges.iter().map(|b| b.label()).collect();
        wtr.write_record([
            (i + 1).to_string(),
            rec.food.id.clone(),
            rec.food.display_name(),
            rec.food.form.unit().to_string(),
            rec.score.overall.to_string(),
            rec.score.nutrition.to_string(),
            rec.score.value.to_string(),
            rec.score.suitability.to_string(),
            format!("{:.2}", rec.daily_amount),
            format!("{:.2}", rec.per_meal_amount),
            format!("{:.2}", rec.daily_cost),
            format!("{:.2}", rec.monthly_cost),
            format!("{:.2}", rec.cost_per_100kcal),
            badges.join(";"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write ranked recommendations to a CSV file.
pub fn write_recommendations_csv(recommendations: &[FoodRecommendation], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_records(&mut wtr, recommendations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile_fixtures::adult_cat;
    use crate::models::food_fixtures::{dry_food, wet_food};
    use crate::planner::{generate_recommendations, PlannerConfig, RecommendationOptions};
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_has_header_and_one_row_per_food() {
        let foods = vec![dry_food("d1", 400.0, 28.0), wet_food("w1", 80.0, 24.0)];
        let recs = generate_recommendations(
            &adult_cat(10.0),
            &foods,
            &RecommendationOptions::default(),
            &PlannerConfig::default(),
        );

        let file = NamedTempFile::new().unwrap();
        write_recommendations_csv(&recs, file.path()).unwrap();

        let mut rdr = csv::Reader::from_path(file.path()).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.len(), HEADER.len());
        assert_eq!(&headers[0], "rank");

        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), recs.len());
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[0][1], recs[0].food.id.as_str());
    }
}

use reqwest::Client;
use tracing::{info, warn};

use crate::config::Upstreams;
use crate::models::mashup::Recipe;
use crate::services::upstream::{fetch_json, join_url};
use crate::types::external::{MdbMeal, MdbMealList};
use crate::utils::error::LookupError;

const UPSTREAM: &str = "mealdb";

/// One summary lookup against the recipe API.
#[derive(Debug, Clone, PartialEq)]
pub enum MealQuery {
    FilterByArea(String),
    Search(String),
}

impl MealQuery {
    fn tail(&self) -> String {
        match self {
            MealQuery::FilterByArea(area) => format!("filter.php?a={}", urlencoding::encode(area)),
            MealQuery::Search(term) => format!("search.php?s={}", urlencoding::encode(term)),
        }
    }
}

/// How a recipe is obtained for a given country.
#[derive(Debug, Clone, PartialEq)]
pub enum RecipePlan {
    /// A hand-picked recipe; the recipe API is not consulted.
    Fixed(Recipe),
    /// Summary lookups tried in order until one yields a meal.
    Chain(Vec<MealQuery>),
}

const OVERRIDES: &[(&str, fn() -> Recipe)] = &[("Sweden", swedish_meatballs)];

fn swedish_meatballs() -> Recipe {
    Recipe {
        name: "Swedish Meatballs".into(),
        image_url: "https://images.services.kitchenstories.io/hP04DDCA2zQ-oTBkgfZDNJ52CHw=/3840x0/filters:quality(85)/images.kitchenstories.io/wagtailOriginalImages/R2854-photo-final-1.jpg".into(),
        id: "manual_1".into(),
        instructions: "1. Mix meat and spices. 2. Fry in butter. 3. Serve with lingonberries. Smaklig måltid! :)".into(),
        source_url: "https://kitchenstories.com/en/recipes/traditional-swedish-meatballs".into(),
    }
}

pub fn fixed_recipe_for(country: &str) -> Option<Recipe> {
    let country = country.trim();
    OVERRIDES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(country))
        .map(|(_, make)| make())
}

pub fn fallback_queries(area: &str, country: &str) -> Vec<MealQuery> {
    let area = area.trim();
    vec![
        MealQuery::FilterByArea(area.to_string()),
        MealQuery::Search(area.to_string()),
        MealQuery::Search(country.trim().to_string()),
    ]
}

pub fn plan_for(area: &str, country: &str) -> RecipePlan {
    match fixed_recipe_for(country) {
        Some(recipe) => RecipePlan::Fixed(recipe),
        None => RecipePlan::Chain(fallback_queries(area, country)),
    }
}

/// Prefers `strSource`, then `strYoutube`, then nothing.
pub fn source_link(source: Option<String>, youtube: Option<String>) -> String {
    source
        .filter(|s| !s.is_empty())
        .or(youtube.filter(|s| !s.is_empty()))
        .unwrap_or_default()
}

/// Resolves at most one recipe. Upstream failures yield an empty list.
pub async fn resolve_recipe(
    http: &Client,
    upstreams: &Upstreams,
    area: &str,
    country: &str,
) -> Vec<Recipe> {
    let queries = match plan_for(area, country) {
        RecipePlan::Fixed(recipe) => {
            info!(country, recipe = %recipe.name, "using fixed recipe");
            return vec![recipe];
        }
        RecipePlan::Chain(queries) => queries,
    };

    let base = upstreams.meal_db_url.as_deref();
    let Some(id) = first_match(http, base, &queries).await else {
        info!(country, area, "no recipe found");
        return Vec::new();
    };

    match lookup_detail(http, base, &id).await {
        Ok(recipe) => vec![recipe],
        Err(e) => {
            warn!(meal_id = %id, error = %e, "recipe detail lookup failed");
            Vec::new()
        }
    }
}

/// Runs the queries in order and returns the id of the first meal found.
async fn first_match(http: &Client, base: Option<&str>, queries: &[MealQuery]) -> Option<String> {
    for q in queries {
        let listed = match join_url(UPSTREAM, base, &q.tail()) {
            Ok(url) => fetch_json::<MdbMealList>(http, UPSTREAM, &url).await,
            Err(e) => Err(e),
        };
        match listed {
            // a listed meal ends the chain, even when it carries no id
            Ok(MdbMealList { meals: Some(meals) }) if !meals.is_empty() => {
                let id = meals.into_iter().next().and_then(|m| m.id);
                if id.is_none() {
                    warn!(query = ?q, "first listed meal has no idMeal");
                }
                return id;
            }
            Ok(_) => {}
            Err(e) => warn!(query = ?q, error = %e, "recipe lookup failed"),
        }
    }
    None
}

async fn lookup_detail(http: &Client, base: Option<&str>, id: &str) -> Result<Recipe, LookupError> {
    let tail = format!("lookup.php?i={}", urlencoding::encode(id));
    let url = join_url(UPSTREAM, base, &tail)?;
    let list: MdbMealList = fetch_json(http, UPSTREAM, &url).await?;
    let meal = list
        .meals
        .and_then(|m| m.into_iter().next())
        .ok_or_else(|| LookupError::NotFound(format!("no meal with id {id}")))?;
    recipe_from(meal, id)
}

fn recipe_from(m: MdbMeal, fallback_id: &str) -> Result<Recipe, LookupError> {
    let missing = |field: &str| LookupError::Schema(format!("meal detail is missing {field}"));
    Ok(Recipe {
        name: m.name.ok_or_else(|| missing("strMeal"))?,
        image_url: m.thumb.ok_or_else(|| missing("strMealThumb"))?,
        id: m.id.unwrap_or_else(|| fallback_id.to_string()),
        instructions: m.instructions.unwrap_or_default(),
        source_url: source_link(m.source, m.youtube),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweden_in_any_case_gets_the_fixed_recipe() {
        for name in ["Sweden", "sweden", "SWEDEN", " sWeDeN "] {
            match plan_for("Swedish", name) {
                RecipePlan::Fixed(r) => assert_eq!(r.id, "manual_1"),
                other => panic!("expected fixed plan for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn other_countries_use_the_chain_in_order() {
        assert_eq!(
            plan_for("  French ", " France "),
            RecipePlan::Chain(vec![
                MealQuery::FilterByArea("French".into()),
                MealQuery::Search("French".into()),
                MealQuery::Search("France".into()),
            ])
        );
    }

    #[test]
    fn query_values_are_url_encoded() {
        assert_eq!(MealQuery::FilterByArea("New Zealander".into()).tail(), "filter.php?a=New%20Zealander");
        assert_eq!(MealQuery::Search("Côte".into()).tail(), "search.php?s=C%C3%B4te");
    }

    #[test]
    fn source_link_prefers_source_then_youtube() {
        assert_eq!(source_link(Some("https://a".into()), Some("https://yt".into())), "https://a");
        assert_eq!(source_link(Some(String::new()), Some("https://yt".into())), "https://yt");
        assert_eq!(source_link(None, None), "");
    }

    #[test]
    fn detail_without_name_is_rejected() {
        let m = MdbMeal { thumb: Some("t".into()), ..Default::default() };
        assert!(recipe_from(m, "1").is_err());
    }
}

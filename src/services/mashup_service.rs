use tracing::info;

use crate::config::AppState;
use crate::models::mashup::MashupResult;
use crate::services::country_service::resolve_country;
use crate::services::recipe_service::resolve_recipe;
use crate::services::weather_service::resolve_weather;
use crate::utils::error::LookupError;

/// Builds the mashup for `name`.
///
/// Country resolution must succeed; nothing else is fetched otherwise.
/// Weather and recipe are then resolved side by side, and either may be
/// missing from the result.
pub async fn build_mashup(state: &AppState, name: &str) -> Result<MashupResult, LookupError> {
    let http = &state.http;
    let upstreams = state.upstreams.as_ref();

    let country = resolve_country(http, upstreams, name).await?;

    let (weather, recipes) = tokio::join!(
        resolve_weather(http, upstreams, &country.capital),
        resolve_recipe(http, upstreams, &country.demonym, &country.name),
    );

    info!(
        country = %country.name,
        weather = weather.is_some(),
        recipes = recipes.len(),
        "mashup assembled"
    );
    Ok(MashupResult { country, weather, recipes })
}

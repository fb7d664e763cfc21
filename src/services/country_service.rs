use reqwest::Client;
use tracing::info;

use crate::config::Upstreams;
use crate::models::mashup::{defaults, CountryFacts};
use crate::services::upstream::{fetch_json, join_url};
use crate::types::external::RcCountry;
use crate::utils::error::LookupError;

const UPSTREAM: &str = "countries";

/// Looks `name` up on the country API and builds facts from the first match.
pub async fn resolve_country(
    http: &Client,
    upstreams: &Upstreams,
    name: &str,
) -> Result<CountryFacts, LookupError> {
    let tail = format!("name/{}", urlencoding::encode(name));
    let url = join_url(UPSTREAM, upstreams.country_api_url.as_deref(), &tail)?;

    let list: Option<Vec<RcCountry>> = fetch_json(http, UPSTREAM, &url).await?;
    let first = list
        .and_then(|l| l.into_iter().next())
        .ok_or_else(|| LookupError::NotFound(format!("no country matches {name:?}")))?;

    let facts = facts_from(first)?;
    info!(query = name, country = %facts.name, "country resolved");
    Ok(facts)
}

fn required<T>(v: Option<T>, field: &str) -> Result<T, LookupError> {
    v.ok_or_else(|| LookupError::Schema(format!("country response is missing {field}")))
}

pub fn facts_from(c: RcCountry) -> Result<CountryFacts, LookupError> {
    let name = required(c.name.and_then(|n| n.common), "name.common")?;
    let region = required(c.region, "region")?;
    let flags = required(c.flags, "flags")?;
    let flag_url = required(flags.svg, "flags.svg")?;
    let population = required(c.population, "population")?;

    let capital = c
        .capital
        .and_then(|v| v.into_iter().next())
        .unwrap_or_else(|| defaults::CAPITAL.to_string());
    let demonym = c
        .demonyms
        .and_then(|d| d.eng)
        .and_then(|e| e.m)
        .unwrap_or_else(|| defaults::DEMONYM.to_string());

    let fact = match flags.alt {
        Some(alt) if !alt.is_empty() => alt,
        _ => {
            let landlocked = c.landlocked.unwrap_or(defaults::LANDLOCKED);
            let side = c
                .car
                .and_then(|car| car.side)
                .unwrap_or_else(|| defaults::CAR_SIDE.to_string());
            synthesize_fact(&name, landlocked, &side)
        }
    };

    Ok(CountryFacts { name, region, capital, population, flag_url, demonym, fact })
}

pub fn synthesize_fact(name: &str, landlocked: bool, side: &str) -> String {
    let land = if landlocked { "landlocked" } else { "not landlocked" };
    format!("{name} is {land} and they drive on the {side} side.")
}

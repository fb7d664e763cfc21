use serde::Serialize;

/// Substitutions for optional country fields the upstream may leave out.
pub mod defaults {
    pub const CAPITAL: &str = "Unknown";
    pub const DEMONYM: &str = "Unknown";
    pub const CAR_SIDE: &str = "right";
    pub const LANDLOCKED: bool = false;
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountryFacts {
    pub name: String,
    pub region: String,
    pub capital: String,
    pub population: u64,
    pub flag_url: String,
    pub demonym: String,
    pub fact: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    pub image_url: String,
    pub id: String,
    pub instructions: String,
    pub source_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub temp_c: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MashupResult {
    pub country: CountryFacts,
    pub weather: Option<WeatherSnapshot>,
    pub recipes: Vec<Recipe>,
}

// --- wire shape ---
// Field names follow the upstream APIs; the browser client reads them as-is.

#[derive(Serialize)]
struct CommonName<'a> { common: &'a str }

#[derive(Serialize)]
struct Flags<'a> { svg: &'a str }

#[derive(Serialize)]
struct Demonym<'a> { m: &'a str }

#[derive(Serialize)]
struct Demonyms<'a> { eng: Demonym<'a> }

#[derive(Serialize)]
pub struct CountryBody<'a> {
    name: CommonName<'a>,
    region: &'a str,
    capital: [&'a str; 1],
    population: u64,
    flags: Flags<'a>,
    demonyms: Demonyms<'a>,
    fact: &'a str,
}

#[derive(Serialize)]
struct Temp { temp: f64 }

#[derive(Serialize)]
struct Condition<'a> { description: &'a str }

#[derive(Serialize)]
pub struct WeatherBody<'a> {
    main: Temp,
    weather: [Condition<'a>; 1],
}

#[derive(Serialize)]
pub struct MealBody<'a> {
    #[serde(rename = "strMeal")]
    name: &'a str,
    #[serde(rename = "strMealThumb")]
    thumb: &'a str,
    #[serde(rename = "idMeal")]
    id: &'a str,
    #[serde(rename = "strInstructions")]
    instructions: &'a str,
    #[serde(rename = "strSource")]
    source: &'a str,
}

#[derive(Serialize)]
pub struct MealsBody<'a> { meals: Vec<MealBody<'a>> }

#[derive(Serialize)]
pub struct MashupBody<'a> {
    country: CountryBody<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    weather: Option<WeatherBody<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    meals: Option<MealsBody<'a>>,
}

impl<'a> From<&'a CountryFacts> for CountryBody<'a> {
    fn from(c: &'a CountryFacts) -> Self {
        Self {
            name: CommonName { common: &c.name },
            region: &c.region,
            capital: [&c.capital],
            population: c.population,
            flags: Flags { svg: &c.flag_url },
            demonyms: Demonyms { eng: Demonym { m: &c.demonym } },
            fact: &c.fact,
        }
    }
}

impl<'a> From<&'a WeatherSnapshot> for WeatherBody<'a> {
    fn from(w: &'a WeatherSnapshot) -> Self {
        Self {
            main: Temp { temp: w.temp_c },
            weather: [Condition { description: &w.description }],
        }
    }
}

impl<'a> From<&'a Recipe> for MealBody<'a> {
    fn from(r: &'a Recipe) -> Self {
        Self {
            name: &r.name,
            thumb: &r.image_url,
            id: &r.id,
            instructions: &r.instructions,
            source: &r.source_url,
        }
    }
}

impl<'a> From<&'a MashupResult> for MashupBody<'a> {
    fn from(r: &'a MashupResult) -> Self {
        let meals = if r.recipes.is_empty() {
            None
        } else {
            Some(MealsBody { meals: r.recipes.iter().map(MealBody::from).collect() })
        };
        Self {
            country: CountryBody::from(&r.country),
            weather: r.weather.as_ref().map(WeatherBody::from),
            meals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn france() -> CountryFacts {
        CountryFacts {
            name: "France".into(),
            region: "Europe".into(),
            capital: "Paris".into(),
            population: 67_391_582,
            flag_url: "https://flagcdn.com/fr.svg".into(),
            demonym: "French".into(),
            fact: "The flag of France is composed of three equal vertical bands.".into(),
        }
    }

    #[test]
    fn absent_features_are_omitted_not_null() {
        let r = MashupResult { country: france(), weather: None, recipes: vec![] };
        let v = serde_json::to_value(MashupBody::from(&r)).unwrap();
        let obj = v.as_object().unwrap();
        assert!(obj.contains_key("country"));
        assert!(!obj.contains_key("weather"));
        assert!(!obj.contains_key("meals"));
    }

    #[test]
    fn full_envelope_keeps_upstream_field_names() {
        let r = MashupResult {
            country: france(),
            weather: Some(WeatherSnapshot { temp_c: 12.5, description: "light rain".into() }),
            recipes: vec![Recipe {
                name: "Ratatouille".into(),
                image_url: "https://img/rat.jpg".into(),
                id: "52908".into(),
                instructions: "Cook.".into(),
                source_url: String::new(),
            }],
        };
        let v = serde_json::to_value(MashupBody::from(&r)).unwrap();
        assert_eq!(
            v,
            json!({
                "country": {
                    "name": { "common": "France" },
                    "region": "Europe",
                    "capital": ["Paris"],
                    "population": 67391582u64,
                    "flags": { "svg": "https://flagcdn.com/fr.svg" },
                    "demonyms": { "eng": { "m": "French" } },
                    "fact": "The flag of France is composed of three equal vertical bands."
                },
                "weather": { "main": { "temp": 12.5 }, "weather": [{ "description": "light rain" }] },
                "meals": { "meals": [{
                    "strMeal": "Ratatouille",
                    "strMealThumb": "https://img/rat.jpg",
                    "idMeal": "52908",
                    "strInstructions": "Cook.",
                    "strSource": ""
                }] }
            })
        );
    }
}

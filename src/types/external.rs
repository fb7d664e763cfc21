//! Response shapes of the upstream APIs. Every field is optional here;
//! required-ness is decided by the services that consume them.

use serde::Deserialize;

#[derive(Deserialize, Debug, Default)]
pub struct RcName { pub common: Option<String> }

#[derive(Deserialize, Debug, Default)]
pub struct RcFlags {
    pub svg: Option<String>,
    pub alt: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct RcDemonym { pub m: Option<String> }

#[derive(Deserialize, Debug, Default)]
pub struct RcDemonyms { pub eng: Option<RcDemonym> }

#[derive(Deserialize, Debug, Default)]
pub struct RcCar { pub side: Option<String> }

#[derive(Deserialize, Debug, Default)]
pub struct RcCountry {
    pub name: Option<RcName>,
    pub region: Option<String>,
    pub capital: Option<Vec<String>>,
    pub population: Option<u64>,
    pub flags: Option<RcFlags>,
    pub demonyms: Option<RcDemonyms>,
    pub landlocked: Option<bool>,
    pub car: Option<RcCar>,
}

/// `filter.php` / `search.php` body. `meals` is `null` when nothing matched.
#[derive(Deserialize, Debug, Default)]
pub struct MdbMealList {
    #[serde(default)]
    pub meals: Option<Vec<MdbMeal>>,
}

#[derive(Deserialize, Debug, Default)]
pub struct MdbMeal {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    #[serde(rename = "strMeal")]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumb: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strSource")]
    pub source: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct OwMain { pub temp: Option<f64> }

#[derive(Deserialize, Debug, Default)]
pub struct OwCondition { pub description: Option<String> }

#[derive(Deserialize, Debug, Default)]
pub struct OwWeather {
    pub main: Option<OwMain>,
    pub weather: Option<Vec<OwCondition>>,
}

use reqwest::Client;
use tracing::warn;

use crate::config::Upstreams;
use crate::models::mashup::WeatherSnapshot;
use crate::services::upstream::{fetch_json, validate};
use crate::types::external::OwWeather;
use crate::utils::error::LookupError;

const UPSTREAM: &str = "weather";

pub fn weather_url(upstreams: &Upstreams, city: &str) -> Result<String, LookupError> {
    let (Some(base), Some(key)) = (
        upstreams.weather_api_url.as_deref(),
        upstreams.weather_api_key.as_deref(),
    ) else {
        return Err(LookupError::Unavailable(format!("{UPSTREAM}: url or api key is not configured")));
    };
    let url = format!(
        "{base}?q={}&appid={}&units=metric",
        urlencoding::encode(city),
        urlencoding::encode(key)
    );
    validate(UPSTREAM, url)
}

pub fn snapshot_from(w: OwWeather) -> Option<WeatherSnapshot> {
    let temp_c = w.main?.temp?;
    let description = w.weather?.into_iter().next()?.description?;
    Some(WeatherSnapshot { temp_c, description })
}

/// Current weather in `city`, or `None` when it cannot be determined.
pub async fn resolve_weather(http: &Client, upstreams: &Upstreams, city: &str) -> Option<WeatherSnapshot> {
    let fetched = match weather_url(upstreams, city) {
        Ok(url) => fetch_json::<OwWeather>(http, UPSTREAM, &url).await,
        Err(e) => Err(e),
    };
    match fetched {
        Ok(body) => {
            let snap = snapshot_from(body);
            if snap.is_none() {
                warn!(city, "weather response lacks main.temp or weather[0].description");
            }
            snap
        }
        Err(e) => {
            warn!(city, error = %e, "weather lookup failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::external::{OwCondition, OwMain};

    fn upstreams() -> Upstreams {
        Upstreams {
            weather_api_url: Some("https://api.openweathermap.org/data/2.5/weather".into()),
            weather_api_key: Some("k3y".into()),
            ..Default::default()
        }
    }

    #[test]
    fn url_carries_city_key_and_metric_units() {
        let url = weather_url(&upstreams(), "Buenos Aires").unwrap();
        assert_eq!(
            url,
            "https://api.openweathermap.org/data/2.5/weather?q=Buenos%20Aires&appid=k3y&units=metric"
        );
    }

    #[test]
    fn missing_key_is_refused() {
        let mut u = upstreams();
        u.weather_api_key = None;
        assert!(weather_url(&u, "Paris").is_err());
    }

    #[test]
    fn snapshot_needs_temp_and_description() {
        let full = OwWeather {
            main: Some(OwMain { temp: Some(3.2) }),
            weather: Some(vec![OwCondition { description: Some("snow".into()) }]),
        };
        assert_eq!(
            snapshot_from(full),
            Some(WeatherSnapshot { temp_c: 3.2, description: "snow".into() })
        );

        let no_desc = OwWeather { main: Some(OwMain { temp: Some(3.2) }), weather: Some(vec![]) };
        assert_eq!(snapshot_from(no_desc), None);
        assert_eq!(snapshot_from(OwWeather::default()), None);
    }
}

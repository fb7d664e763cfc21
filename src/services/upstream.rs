use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::utils::error::LookupError;

/// Appends `tail` to a configured base URL and checks the result is a
/// well-formed http(s) URL. Refuses to build anything from an unset base.
pub fn join_url(upstream: &str, base: Option<&str>, tail: &str) -> Result<String, LookupError> {
    let base = base.ok_or_else(|| {
        LookupError::Unavailable(format!("{upstream}: base url is not configured"))
    })?;
    let url = format!("{}/{}", base.trim_end_matches('/'), tail.trim_start_matches('/'));
    validate(upstream, url)
}

pub fn validate(upstream: &str, url: String) -> Result<String, LookupError> {
    match Url::parse(&url) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => Ok(url),
        _ => Err(LookupError::Unavailable(format!(
            "{upstream}: refusing malformed url {}",
            redacted(&url)
        ))),
    }
}

/// The url without its query string, which may carry an api key.
pub fn redacted(url: &str) -> &str {
    url.split_once('?').map_or(url, |(path, _)| path)
}

/// GETs `url` and decodes a 200 body as `T`.
///
/// 404 maps to `NotFound`, any other non-200 or transport error to
/// `Unavailable`, and an undecodable body to `Schema`.
pub async fn fetch_json<T: DeserializeOwned>(
    http: &Client,
    upstream: &str,
    url: &str,
) -> Result<T, LookupError> {
    debug!(upstream, url = redacted(url), "upstream request");
    let resp = http
        .get(url)
        .send()
        .await
        .map_err(|e| LookupError::Unavailable(format!("{upstream}: {}", e.without_url())))?;

    match resp.status() {
        StatusCode::OK => {}
        StatusCode::NOT_FOUND => {
            return Err(LookupError::NotFound(format!("{upstream}: no match")));
        }
        s => return Err(LookupError::Unavailable(format!("{upstream} returned {s}"))),
    }

    let body = resp
        .bytes()
        .await
        .map_err(|e| LookupError::Unavailable(format!("{upstream}: {}", e.without_url())))?;
    serde_json::from_slice(&body)
        .map_err(|e| LookupError::Schema(format!("{upstream}: could not parse body: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn transport_errors_do_not_leak_the_query() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&mock)
            .await;
        let http = Client::builder().timeout(Duration::from_millis(100)).build().unwrap();
        let url = format!("{}/weather?q=Paris&appid=SECRETKEY123&units=metric", mock.uri());

        let err = fetch_json::<serde_json::Value>(&http, "weather", &url).await.unwrap_err();
        assert!(matches!(err, LookupError::Unavailable(_)));
        assert!(!err.to_string().contains("SECRETKEY123"), "leaked: {err}");
    }

    #[test]
    fn malformed_url_errors_do_not_leak_the_query() {
        let err = validate("weather", "weather?q=Paris&appid=SECRETKEY123".into()).unwrap_err();
        assert!(!err.to_string().contains("SECRETKEY123"), "leaked: {err}");
        assert_eq!(redacted("http://h/w?appid=k"), "http://h/w");
        assert_eq!(redacted("http://h/w"), "http://h/w");
    }

    #[test]
    fn joins_without_doubling_slashes() {
        let url = join_url("mealdb", Some("https://www.themealdb.com/api/json/v1/1/"), "filter.php?a=French");
        assert_eq!(url.unwrap(), "https://www.themealdb.com/api/json/v1/1/filter.php?a=French");
    }

    #[test]
    fn unset_base_is_refused() {
        let err = join_url("countries", None, "name/france").unwrap_err();
        assert!(matches!(err, LookupError::Unavailable(_)));
    }

    #[test]
    fn non_http_base_is_refused() {
        assert!(join_url("countries", Some("restcountries.com/v3.1"), "name/x").is_err());
        assert!(join_url("countries", Some("ftp://example.com"), "name/x").is_err());
    }
}

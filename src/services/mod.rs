pub mod country_service;
pub mod mashup_service;
pub mod recipe_service;
pub mod upstream;
pub mod weather_service;

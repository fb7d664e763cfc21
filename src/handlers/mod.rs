pub mod mashup;

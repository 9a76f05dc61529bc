pub mod colors;
pub mod currency;
pub mod date;
pub mod path;
pub mod table;
pub mod time;

// Re-export dos helpers usati in tutto il codice
pub use currency::format_brl;
pub use currency::parse_currency;
pub use time::format_hours;
pub use time::parse_duration;

pub mod currency;

pub use currency::{format_amount, format_currency, format_percent};

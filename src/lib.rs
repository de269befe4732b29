pub mod bbox;
pub mod filter;
pub mod input;
pub mod record;

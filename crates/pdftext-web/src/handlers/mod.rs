pub mod health;
pub mod parse;

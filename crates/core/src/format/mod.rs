pub mod currency;
pub mod words;

pub mod about;
pub mod generate;
pub mod prompt;

pub mod counter;
pub mod files;
pub mod name_replacement;

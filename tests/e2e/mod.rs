pub mod autocomplete;
pub mod clock;
pub mod persistence;

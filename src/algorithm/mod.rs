pub mod dereplication;
pub mod mapping;
pub mod validation;

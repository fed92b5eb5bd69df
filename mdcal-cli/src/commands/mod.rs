pub mod convert;
pub mod index;

pub mod fields;
pub mod reducer;

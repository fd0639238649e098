pub mod icons;
pub mod memo;
pub mod month_names;
pub mod number_format;

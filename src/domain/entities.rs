pub mod date_range;
pub mod education;
pub mod option_fields;
pub mod responses;
pub mod work;

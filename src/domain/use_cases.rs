pub mod education;
pub mod work;

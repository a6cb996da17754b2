pub mod education;
pub mod sqlx_repo;
pub mod work;

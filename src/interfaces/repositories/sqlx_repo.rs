use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxWorkRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxEducationRepo {
    pub pool: PgPool,
}

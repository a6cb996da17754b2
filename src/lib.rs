use std::sync::Arc;

use sqlx::PgPool;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod telemetry;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils};

use repositories::{
    education::EducationRepository,
    sqlx_repo::{SqlxEducationRepo, SqlxWorkRepo},
    work::WorkRepository,
};
use use_cases::{education::EducationService, work::WorkService};

pub type DynWorkRepo = Arc<dyn WorkRepository>;
pub type DynEducationRepo = Arc<dyn EducationRepository>;

pub type AppWorkService = WorkService<DynWorkRepo>;
pub type AppEducationService = EducationService<DynEducationRepo>;

pub struct AppState {
    pub work_service: AppWorkService,
    pub education_service: AppEducationService,
    pub db_pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let work_repo: DynWorkRepo = Arc::new(SqlxWorkRepo::new(pool.clone()));
        let education_repo: DynEducationRepo = Arc::new(SqlxEducationRepo::new(pool.clone()));

        Self::from_repos(work_repo, education_repo, pool)
    }

    /// Builds the state around arbitrary repository implementations.
    pub fn from_repos(
        work_repo: DynWorkRepo,
        education_repo: DynEducationRepo,
        pool: PgPool,
    ) -> Self {
        AppState {
            work_service: WorkService::new(work_repo),
            education_service: EducationService::new(education_repo),
            db_pool: pool,
        }
    }
}

pub use sea_orm_migration::prelude::*;

mod m20251017_000001_lynqr_user;
mod m20251017_000002_lynqr_link;
mod m20251017_000003_lynqr_click;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251017_000001_lynqr_user::Migration),
            Box::new(m20251017_000002_lynqr_link::Migration),
            Box::new(m20251017_000003_lynqr_click::Migration),
        ]
    }
}

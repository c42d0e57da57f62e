use sea_orm_migration::prelude::*;

mod m20231003_000001_create_car;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20231003_000001_create_car::Migration)]
    }
}

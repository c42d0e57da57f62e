use std::sync::Arc;

use rocket::{
    fairing::{self, Fairing, Info, Kind},
    Build, Rocket,
};
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;

use crate::{config::AppConfig, controller::CarController, migrator::Migrator};

use super::SeaOrmCarModel;

/// Connects to the database on ignite and manages a [`CarController`] over it.
pub struct DatabaseFairing;

impl DatabaseFairing {
    pub fn fairing() -> Self {
        Self {}
    }
}

#[rocket::async_trait]
impl Fairing for DatabaseFairing {
    fn info(&self) -> Info {
        Info {
            name: "Database",
            kind: Kind::Ignite | Kind::Singleton,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> fairing::Result {
        let config = match rocket.figment().extract::<AppConfig>() {
            Ok(config) => config,
            Err(e) => {
                error!("Invalid application configuration: {e}");
                return Err(rocket);
            }
        };

        let mut options = ConnectOptions::new(config.database_url.clone());
        options.max_connections(config.max_connections);

        let db = match Database::connect(options).await {
            Ok(db) => db,
            Err(e) => {
                error!(
                    "Failed to connect to database ({}): {e}",
                    config.database_url
                );
                return Err(rocket);
            }
        };

        if config.run_migrations {
            match Migrator::get_pending_migrations(&db).await {
                Ok(migrations) => {
                    info!("{} database migrations pending.", migrations.len());
                    #[allow(clippy::cast_possible_truncation)]
                    let result = Migrator::up(&db, Some(migrations.len() as u32)).await;

                    if let Err(e) = result {
                        error!("Failed to apply pending migrations: {e}");
                        return Err(rocket);
                    }
                    info!("Database migrations succesfully applied!");
                }
                Err(e) => {
                    error!("Failed to get pending migrations: {e}");
                    return Err(rocket);
                }
            };
        } else {
            warn!("Skipping database migrations.");
        }

        let controller = CarController::new(Arc::new(SeaOrmCarModel::new(db)));
        Ok(rocket.manage(controller))
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use shared::data::{Car, CarAttributes};

use crate::error::Error;

use self::{
    entities::car,
    model::{CarInstance, CarModel},
};

pub mod convert;
pub mod entities;
pub mod fairing;
pub mod model;

/// [`CarModel`] backed by a SeaORM connection.
pub struct SeaOrmCarModel {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmCarModel {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }
}

#[async_trait]
impl CarModel for SeaOrmCarModel {
    async fn find_all(&self) -> Result<Vec<Car>, Error> {
        let cars = car::Entity::find()
            .order_by_asc(car::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(cars.into_iter().map(Into::into).collect())
    }

    async fn create(&self, attributes: CarAttributes) -> Result<Car, Error> {
        let now = Utc::now().naive_utc();
        let model = convert::new_car(attributes, now)
            .insert(self.db.as_ref())
            .await?;
        Ok(model.into())
    }

    async fn find_by_pk(&self, id: i32) -> Result<Box<dyn CarInstance>, Error> {
        let model = car::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(Error::CarNotFound(id))?;
        Ok(Box::new(StoredCar {
            db: Arc::clone(&self.db),
            model,
        }))
    }
}

struct StoredCar {
    db: Arc<DatabaseConnection>,
    model: car::Model,
}

#[async_trait]
impl CarInstance for StoredCar {
    fn car(&self) -> Car {
        self.model.clone().into()
    }

    async fn update(&mut self, attributes: CarAttributes) -> Result<(), Error> {
        let now = Utc::now().naive_utc();
        self.model = convert::updated_car(self.model.clone(), attributes, now)
            .update(self.db.as_ref())
            .await?;
        Ok(())
    }

    async fn destroy(&self) -> Result<(), Error> {
        car::Entity::delete_by_id(self.model.id)
            .exec(self.db.as_ref())
            .await?;
        Ok(())
    }
}

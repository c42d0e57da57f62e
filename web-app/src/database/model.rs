use async_trait::async_trait;
use shared::data::{Car, CarAttributes};

use crate::error::Error;

/// Data-store operations the car controller delegates to.
#[async_trait]
pub trait CarModel: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Car>, Error>;

    async fn create(&self, attributes: CarAttributes) -> Result<Car, Error>;

    /// Looks up a car by primary key. A miss is reported as [`Error::CarNotFound`].
    async fn find_by_pk(&self, id: i32) -> Result<Box<dyn CarInstance>, Error>;
}

/// A car that has been retrieved from the store and can be changed or removed.
#[async_trait]
pub trait CarInstance: Send + Sync {
    fn car(&self) -> Car;

    async fn update(&mut self, attributes: CarAttributes) -> Result<(), Error>;

    async fn destroy(&self) -> Result<(), Error>;
}

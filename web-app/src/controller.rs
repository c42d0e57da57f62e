use std::sync::Arc;

use rocket::{
    http::Status,
    response::{self, Responder},
    serde::json::Json,
    Request, Response,
};
use shared::data::{Car, CarAttributes, ErrorBody};

use crate::{database::model::CarModel, error::Error};

/// Request handlers for the car resource.
///
/// Only creation translates a failure into a response. Every other handler
/// hands model errors back to the caller untouched.
pub struct CarController {
    car_model: Arc<dyn CarModel>,
}

pub enum CarResponse {
    Cars(Vec<Car>),
    Car(Car),
    Created(Car),
    Rejected(ErrorBody),
    NoContent,
}

impl CarController {
    pub fn new(car_model: Arc<dyn CarModel>) -> Self {
        Self { car_model }
    }

    pub async fn handle_list_cars(&self) -> Result<CarResponse, Error> {
        let cars = self.car_model.find_all().await?;
        Ok(CarResponse::Cars(cars))
    }

    pub async fn handle_create_car(&self, body: CarAttributes) -> CarResponse {
        match self.car_model.create(body).await {
            Ok(car) => CarResponse::Created(car),
            Err(e) => self.reject_car(&e),
        }
    }

    /// Answers a creation that failed before or inside the model.
    pub fn reject_car(&self, error: &Error) -> CarResponse {
        warn!("Rejected car creation: {error}");
        CarResponse::Rejected(ErrorBody::new(error.name(), error.to_string()))
    }

    pub async fn handle_get_car(&self, id: i32) -> Result<CarResponse, Error> {
        let car = self.car_model.find_by_pk(id).await?;
        Ok(CarResponse::Car(car.car()))
    }

    pub async fn handle_update_car(
        &self,
        id: i32,
        body: CarAttributes,
    ) -> Result<CarResponse, Error> {
        let mut car = self.car_model.find_by_pk(id).await?;
        car.update(body).await?;
        Ok(CarResponse::Car(car.car()))
    }

    pub async fn handle_delete_car(&self, id: i32) -> Result<CarResponse, Error> {
        let car = self.car_model.find_by_pk(id).await?;
        car.destroy().await?;
        Ok(CarResponse::NoContent)
    }
}

impl<'r> Responder<'r, 'static> for CarResponse {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        match self {
            CarResponse::Cars(cars) => (Status::Ok, Json(cars)).respond_to(request),
            CarResponse::Car(car) => (Status::Ok, Json(car)).respond_to(request),
            CarResponse::Created(car) => (Status::Created, Json(car)).respond_to(request),
            CarResponse::Rejected(body) => {
                (Status::UnprocessableEntity, Json(body)).respond_to(request)
            }
            CarResponse::NoContent => Response::build().status(Status::NoContent).ok(),
        }
    }
}

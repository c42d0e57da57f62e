#![allow(clippy::no_effect_underscore_binding)]
use rocket::{
    figment::Figment,
    serde::json::{self, Json},
    Build, Rocket, State,
};
use shared::data::CarAttributes;

use controller::{CarController, CarResponse};
use database::fairing::DatabaseFairing;
use error::Error;

mod config;
mod controller;
mod database;
mod error;
mod migrator;

#[macro_use]
extern crate rocket;

#[get("/cars")]
async fn list_cars(controller: &State<CarController>) -> Result<CarResponse, Error> {
    controller.handle_list_cars().await
}

#[post("/cars", data = "<car>")]
async fn create_car(
    car: Result<Json<CarAttributes>, json::Error<'_>>,
    controller: &State<CarController>,
) -> CarResponse {
    match car {
        Ok(car) => controller.handle_create_car(car.into_inner()).await,
        Err(e) => controller.reject_car(&Error::InvalidAttributes(e.to_string())),
    }
}

#[get("/cars/<id>")]
async fn get_car(id: i32, controller: &State<CarController>) -> Result<CarResponse, Error> {
    controller.handle_get_car(id).await
}

#[put("/cars/<id>", data = "<car>")]
async fn update_car(
    id: i32,
    car: Json<CarAttributes>,
    controller: &State<CarController>,
) -> Result<CarResponse, Error> {
    controller.handle_update_car(id, car.into_inner()).await
}

#[delete("/cars/<id>")]
async fn delete_car(id: i32, controller: &State<CarController>) -> Result<CarResponse, Error> {
    controller.handle_delete_car(id).await
}

/// Mounts the car routes. A [`CarController`] must be managed before launch.
fn mount_cars(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket.mount(
        "/",
        routes![list_cars, create_car, get_car, update_car, delete_car],
    )
}

fn server(figment: Figment) -> Rocket<Build> {
    mount_cars(rocket::custom(figment).attach(DatabaseFairing::fairing()))
}

#[launch]
fn rocket() -> _ {
    server(rocket::Config::figment())
}

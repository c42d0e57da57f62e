use chrono::NaiveDateTime;
use sea_orm::ActiveValue;
use shared::data::{Car, CarAttributes};

use super::entities::car::{ActiveModel as CarActiveModel, Model as CarModel};

impl From<CarModel> for Car {
    fn from(value: CarModel) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            size: value.size,
            image: value.image,
            is_currently_rented: value.is_currently_rented,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Builds the row for a new car. The id is left to the database.
pub fn new_car(value: CarAttributes, now: NaiveDateTime) -> CarActiveModel {
    CarActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(value.name),
        price: ActiveValue::Set(value.price),
        size: ActiveValue::Set(value.size),
        image: ActiveValue::Set(value.image),
        is_currently_rented: ActiveValue::Set(value.is_currently_rented.unwrap_or(false)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
}

/// Applies new attributes on top of a stored car. The rented flag is kept
/// when the attributes leave it out.
pub fn updated_car(stored: CarModel, value: CarAttributes, now: NaiveDateTime) -> CarActiveModel {
    let mut model = CarActiveModel::from(stored);
    model.name = ActiveValue::Set(value.name);
    model.price = ActiveValue::Set(value.price);
    model.size = ActiveValue::Set(value.size);
    model.image = ActiveValue::Set(value.image);
    if let Some(rented) = value.is_currently_rented {
        model.is_currently_rented = ActiveValue::Set(rented);
    }
    model.updated_at = ActiveValue::Set(now);
    model
}

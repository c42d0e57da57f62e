use std::io::Cursor;

use rocket::{
    http::{ContentType, Status},
    response::{self, Responder},
    Request, Response,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("An error occured whilst trying to access the database: {0}")]
    DatabaseError(#[from] sea_orm::DbErr),
    #[error("No car with {0} as it's id could be found.")]
    CarNotFound(i32),
    #[error("The car attributes could not be read: {0}")]
    InvalidAttributes(String),
}

impl Error {
    /// The class name reported to clients alongside the message.
    pub fn name(&self) -> &'static str {
        match self {
            Error::DatabaseError(_) => "DatabaseError",
            Error::CarNotFound(_) => "NotFoundError",
            Error::InvalidAttributes(_) => "ValidationError",
        }
    }
}

pub trait ErrorResponder {
    fn response(&self) -> (Status, String);
}

impl ErrorResponder for Error {
    fn response(&self) -> (Status, String) {
        (
            match self {
                Error::DatabaseError(_) => Status::InternalServerError,
                Error::CarNotFound(_) => Status::NotFound,
                Error::InvalidAttributes(_) => Status::UnprocessableEntity,
            },
            self.to_string(),
        )
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let (status, body) = self.response();
        Response::build()
            .status(status)
            .header(ContentType::Plain)
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::*;

    #[test]
    fn missing_car_maps_to_not_found() {
        let (status, body) = Error::CarNotFound(3).response();
        assert_eq!(status, Status::NotFound);
        assert!(body.contains('3'));
    }

    #[test]
    fn database_failure_maps_to_internal_error() {
        let err = Error::from(DbErr::Custom("connection reset".into()));
        let (status, body) = err.response();
        assert_eq!(status, Status::InternalServerError);
        assert!(body.contains("connection reset"));
        assert_eq!(err.name(), "DatabaseError");
    }

    #[test]
    fn unreadable_attributes_are_a_validation_error() {
        let err = Error::InvalidAttributes("missing field `price`".into());
        assert_eq!(err.name(), "ValidationError");
        assert_eq!(err.response().0, Status::UnprocessableEntity);
    }
}

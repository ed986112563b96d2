use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query,
    },
    Json,
};

use crate::server::error::Error;

/// Unwraps a JSON body, turning a malformed body into a 400 with axum's rejection text.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Error> {
    match body {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => Err(Error::BadRequest(rejection.body_text())),
    }
}

pub fn query_params<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, Error> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => Err(Error::BadRequest(rejection.body_text())),
    }
}

pub fn path_param<T>(path: Result<Path<T>, PathRejection>) -> Result<T, Error> {
    match path {
        Ok(Path(value)) => Ok(value),
        Err(rejection) => Err(Error::BadRequest(rejection.body_text())),
    }
}

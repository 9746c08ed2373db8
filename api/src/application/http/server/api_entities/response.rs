use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::IntoResponse,
};
use serde::Serialize;

pub enum Response<T: Serialize> {
    OK(T),
    Created { location: String, body: T },
}

impl<T> IntoResponse for Response<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::OK(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Created { location, body } => {
                let mut response = (StatusCode::CREATED, Json(body)).into_response();

                if let Ok(location) = HeaderValue::from_str(&location) {
                    response.headers_mut().insert(LOCATION, location);
                }

                response
            }
        }
    }
}

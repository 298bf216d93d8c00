use crate::db::StoreError;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use serde::Serialize;

/// Envelope for every resource endpoint.
#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) list: Option<Vec<T>>,
}

pub(crate) struct JsonResponseBuilder<T> {
    message: String,
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            message: String::new(),
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub(crate) fn set_msg<S: Into<String>>(mut self, msg: S) -> Self {
        self.message = msg.into();
        self
    }

    pub(crate) fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub(crate) fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    fn into_body(self) -> JsonResponse<T> {
        JsonResponse {
            message: self.message,
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub(crate) fn ok<S: Into<String>>(self, msg: S) -> web::Json<JsonResponse<T>> {
        web::Json(self.set_msg(msg).into_body())
    }

    pub(crate) fn created<S: Into<String>>(self, msg: S) -> HttpResponse {
        HttpResponse::Created().json(self.set_msg(msg).into_body())
    }

    fn error<S: Into<String>>(self, status: StatusCode, msg: S) -> Error {
        let body = self.set_msg(msg).into_body();
        let cause = body.message.clone();
        InternalError::from_response(cause, HttpResponse::build(status).json(body)).into()
    }

    pub(crate) fn bad_request<S: Into<String>>(self, msg: S) -> Error {
        self.error(StatusCode::BAD_REQUEST, msg)
    }

    pub(crate) fn form_error<S: Into<String>>(self, msg: S) -> Error {
        self.error(StatusCode::BAD_REQUEST, msg)
    }

    pub(crate) fn not_found<S: Into<String>>(self, msg: S) -> Error {
        self.error(StatusCode::NOT_FOUND, msg)
    }

    pub(crate) fn conflict<S: Into<String>>(self, msg: S) -> Error {
        self.error(StatusCode::CONFLICT, msg)
    }

    pub(crate) fn internal_server_error<S: Into<String>>(self, msg: S) -> Error {
        self.error(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    pub(crate) fn store_error(self, err: StoreError) -> Error {
        match err {
            StoreError::Conflict(msg) => self.conflict(msg),
            StoreError::NotFound(msg) => self.not_found(msg),
            StoreError::Internal(msg) => self.internal_server_error(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn error_carries_status_and_message() {
        let err = JsonResponse::<String>::build().not_found("Inversion not found");
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Inversion not found");
        assert!(json.get("item").is_none());
    }

    #[test]
    fn store_errors_map_to_statuses() {
        let conflict = JsonResponse::<String>::build()
            .store_error(StoreError::Conflict("Name already registered".into()));
        assert_eq!(conflict.error_response().status(), StatusCode::CONFLICT);

        let gone = JsonResponse::<String>::build()
            .store_error(StoreError::NotFound("Inversion not found".into()));
        assert_eq!(gone.error_response().status(), StatusCode::NOT_FOUND);

        let broken =
            JsonResponse::<String>::build().store_error(StoreError::Internal("Failed".into()));
        assert_eq!(
            broken.error_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn created_response_is_201() {
        let response = JsonResponse::build().set_item(7).created("Created");
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Wraps each request in a span carrying a request id and logs the outcome
/// with its latency.
///
/// The id is taken from the incoming `X-Request-Id` header or generated, and
/// is echoed on the response so the UI can quote it when reporting failures.
pub struct RequestTracing;

impl<S, B> Transform<S, ServiceRequest> for RequestTracing
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestTracingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestTracingService {
            service: Rc::new(service),
        }))
    }
}

pub struct RequestTracingService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequestTracingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let method = req.method().to_string();
        let path = req.path().to_string();
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let span = tracing::info_span!(
                "http_request",
                request_id = %request_id,
                method = %method,
                path = %path
            );

            async move {
                let started = Instant::now();
                let mut res = service.call(req).await?;
                let elapsed_ms = started.elapsed().as_millis();

                if res.status().is_server_error() {
                    let cause = res
                        .response()
                        .error()
                        .map(|err| err.to_string())
                        .unwrap_or_default();
                    tracing::error!(
                        "[{}] {} {} -> {} in {}ms: {}",
                        request_id,
                        method,
                        path,
                        res.status(),
                        elapsed_ms,
                        cause
                    );
                } else {
                    tracing::info!(
                        "{} {} -> {} in {}ms",
                        method,
                        path,
                        res.status(),
                        elapsed_ms
                    );
                }

                if let Ok(value) = HeaderValue::from_str(&request_id) {
                    res.headers_mut()
                        .insert(HeaderName::from_static("x-request-id"), value);
                }

                Ok(res)
            }
            .instrument(span)
            .await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn ok() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn fail() -> HttpResponse {
        HttpResponse::InternalServerError().finish()
    }

    fn response_id<B>(res: &ServiceResponse<B>) -> String {
        res.headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn test_incoming_request_id_is_echoed() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTracing)
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((REQUEST_ID_HEADER, "req-42"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(response_id(&res), "req-42");
    }

    #[actix_web::test]
    async fn test_missing_request_id_is_generated() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTracing)
                .route("/", web::get().to(ok)),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let res = test::call_service(&app, req).await;

        assert!(Uuid::parse_str(&response_id(&res)).is_ok());
    }

    #[actix_web::test]
    async fn test_server_errors_keep_the_request_id() {
        let app = test::init_service(
            App::new()
                .wrap(RequestTracing)
                .route("/", web::get().to(fail)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((REQUEST_ID_HEADER, "req-500"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response_id(&res), "req-500");
    }
}

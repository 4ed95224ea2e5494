//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use backend::Trace;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::inbound::http::catalogue::{get_destination, get_facets, list_hotels, list_promotion};
use backend::inbound::http::health::{HealthState, live, ready};
use backend::inbound::http::placements::{get_placement, list_placements};
use backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    // `/hotels/facets` is registered before any pattern that could shadow it.
    let api = web::scope("/api/v1")
        .service(get_facets)
        .service(list_hotels)
        .service(list_promotion)
        .service(get_destination)
        .service(list_placements)
        .service(get_placement);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use rstest::rstest;

    use super::*;

    fn dependencies() -> AppDependencies {
        let config = ServerConfig::new("127.0.0.1:0".parse().expect("address"));
        let health_state = web::Data::new(HealthState::new());
        health_state.mark_ready();
        AppDependencies {
            health_state,
            http_state: build_http_state(&config),
        }
    }

    #[rstest]
    #[case("/api/v1/hotels")]
    #[case("/api/v1/hotels/facets")]
    #[case("/api/v1/promotion")]
    #[case("/api/v1/placements/hero")]
    #[case("/api/v1/placements?surfaces=hero")]
    #[case("/health/ready")]
    #[case("/health/live")]
    #[actix_web::test]
    async fn routes_answer_with_fixture_ports(#[case] uri: &str) {
        let app = test::init_service(build_app(dependencies())).await;

        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(res.status(), StatusCode::OK, "{uri}");
        assert!(res.headers().contains_key(backend::domain::TRACE_ID_HEADER));
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_destination_is_not_found_with_empty_catalogue() {
        let app = test::init_service(build_app(dependencies())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/destinations/tokyo")
                .to_request(),
        )
        .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}

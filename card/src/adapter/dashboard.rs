use std::sync::{Arc, Mutex};

use actix_web::web::{self, Json};
use actix_web::{HttpResponse, ResponseError, http::header};
use anyhow::anyhow;
use derive_more::derive::{Display, Error};

use crate::card::{StatusCard, registry};
use crate::core::StateSnapshot;

/// Host surface of the card: the host pushes full state snapshots and reads
/// back the rendered panel, the size hint and the card catalog.
pub struct DashboardState {
    card: Mutex<StatusCard>,
}

impl DashboardState {
    pub fn new(card: StatusCard) -> Self {
        Self { card: Mutex::new(card) }
    }
}

pub fn new_routes(state: Arc<DashboardState>) -> actix_web::Scope {
    web::scope("/dashboard")
        .route("/states", web::put().to(put_states))
        .route("/card", web::get().to(get_card))
        .route("/meta", web::get().to(get_meta))
        .route("/cards", web::get().to(get_cards))
        .app_data(web::Data::from(state))
}

type DashboardResponse = Result<HttpResponse, DashboardApiError>;

#[derive(Debug, Error, Display)]
enum DashboardApiError {
    #[display("Card not rendered yet")]
    NotRendered,

    #[display("Internal error")]
    InternalError(anyhow::Error),
}

impl ResponseError for DashboardApiError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        tracing::warn!("DashboardApiError: {:?}", self);

        match self {
            DashboardApiError::NotRendered => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

async fn put_states(state: web::Data<DashboardState>, Json(snapshot): Json<StateSnapshot>) -> DashboardResponse {
    tracing::info!("Received state snapshot with {} entities", snapshot.len());

    let mut card = lock_card(&state)?;
    card.update(&snapshot);

    Ok(HttpResponse::NoContent().finish())
}

async fn get_card(state: web::Data<DashboardState>) -> DashboardResponse {
    let card = lock_card(&state)?;

    let markup = card.markup().ok_or(DashboardApiError::NotRendered)?;

    Ok(HttpResponse::Ok()
        .append_header(header::ContentType(mime::TEXT_HTML))
        .body(markup.to_owned()))
}

async fn get_meta(state: web::Data<DashboardState>) -> DashboardResponse {
    #[derive(serde::Serialize)]
    struct Meta {
        r#type: &'static str,
        card_size: u8,
    }

    let card = lock_card(&state)?;

    Ok(HttpResponse::Ok().json(Meta {
        r#type: StatusCard::TYPE_NAME,
        card_size: card.card_size(),
    }))
}

async fn get_cards() -> DashboardResponse {
    Ok(HttpResponse::Ok().json(registry().cards()))
}

fn lock_card(state: &web::Data<DashboardState>) -> Result<std::sync::MutexGuard<'_, StatusCard>, DashboardApiError> {
    state
        .card
        .lock()
        .map_err(|_| DashboardApiError::InternalError(anyhow!("Card state lock poisoned")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardConfig;
    use actix_web::{App, test};
    use serde_json::json;

    fn new_test_state() -> Arc<DashboardState> {
        let card = StatusCard::new(CardConfig::new("sensor.room_status")).unwrap();
        Arc::new(DashboardState::new(card))
    }

    #[actix_web::test]
    async fn card_is_not_found_before_the_first_snapshot() {
        let app = test::init_service(App::new().service(new_routes(new_test_state()))).await;

        let req = test::TestRequest::get().uri("/dashboard/card").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn pushing_a_snapshot_renders_the_card() {
        let app = test::init_service(App::new().service(new_routes(new_test_state()))).await;

        let req = test::TestRequest::put()
            .uri("/dashboard/states")
            .set_json(json!({
                "sensor.room_status": {"state": "acting"},
                "sensor.room_reason": {"state": "Preheating"}
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/dashboard/card").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::OK);

        let body = String::from_utf8(test::read_body(res).await.to_vec()).unwrap();
        assert!(body.contains("Preheating"));
        assert!(body.contains("--accent: #30d158"));
    }

    #[actix_web::test]
    async fn meta_reports_the_size_hint() {
        let app = test::init_service(App::new().service(new_routes(new_test_state()))).await;

        let req = test::TestRequest::get().uri("/dashboard/meta").to_request();
        let meta: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(meta, json!({"type": "powerstat-card", "card_size": 5}));
    }

    #[actix_web::test]
    async fn catalog_lists_the_registered_card_once() {
        registry().register(StatusCard::definition());
        registry().register(StatusCard::definition());

        let app = test::init_service(App::new().service(new_routes(new_test_state()))).await;

        let req = test::TestRequest::get().uri("/dashboard/cards").to_request();
        let cards: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let entries: Vec<_> = cards
            .as_array()
            .unwrap()
            .iter()
            .filter(|card| card["type"] == "powerstat-card")
            .collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["description"], "Advanced AI thermostat control card");
    }
}

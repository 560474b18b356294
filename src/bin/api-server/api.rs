use actix_web::{web, HttpResponse};
use restaurant_service::catalog::Catalog;

#[derive(serde::Serialize)]
struct ErrJsonResp {
    message: String,
}

#[actix_web::get("/")]
pub(super) async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "Restaurant Service",
        "status": "running",
    }))
}

#[actix_web::get("/health")]
pub(super) async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "Restaurant Service",
    }))
}

#[actix_web::get("/restaurants")]
pub(super) async fn restaurants(data: web::Data<Catalog>) -> HttpResponse {
    tracing::info!("GET /restaurants - returning restaurant list");
    HttpResponse::Ok().json(data.restaurants())
}

#[derive(serde::Deserialize)]
pub(super) struct MenuPath {
    restaurant_id: u32,
}

#[actix_web::get("/restaurants/{restaurant_id}/menu")]
pub(super) async fn menu(data: web::Data<Catalog>, path: web::Path<MenuPath>) -> HttpResponse {
    tracing::info!("GET /restaurants/{}/menu - returning menu", path.restaurant_id);
    let items = data.menu(path.restaurant_id);
    if items.is_empty() {
        HttpResponse::NotFound().json(ErrJsonResp {
            message: "restaurant not found".to_string(),
        })
    } else {
        HttpResponse::Ok().json(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Catalog::builtin()))
                    .service(index)
                    .service(health)
                    .service(restaurants)
                    .service(menu),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn restaurants_listing_starts_with_pizza_palace() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/restaurants").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let list = body.as_array().expect("array response");
        assert_eq!(list.len(), 5);
        assert_eq!(
            list[0],
            serde_json::json!({
                "id": 1,
                "name": "Pizza Palace",
                "cuisine": "Italian",
                "rating": 4.5,
                "deliveryTime": "30-40 mins"
            })
        );
    }

    #[actix_web::test]
    async fn menu_of_known_restaurant() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/restaurants/3/menu")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let list = body.as_array().expect("array response");
        assert_eq!(list.len(), 5);
        assert_eq!(
            list[0],
            serde_json::json!({
                "id": 301,
                "name": "Salmon Sushi",
                "description": "Fresh salmon sushi (6 pieces)",
                "price": 499
            })
        );
    }

    #[actix_web::test]
    async fn menu_of_unknown_restaurant_is_not_found() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/restaurants/999/menu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "restaurant not found");
    }

    #[actix_web::test]
    async fn non_integer_restaurant_id_is_a_client_error() {
        let app = test_app!();
        let req = test::TestRequest::get()
            .uri("/restaurants/pizza/menu")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());
    }

    #[actix_web::test]
    async fn health_does_not_drift() {
        let app = test_app!();
        let mut bodies = Vec::new();
        for _ in 0..3 {
            let req = test::TestRequest::get().uri("/health").to_request();
            let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
            bodies.push(body);
        }
        assert_eq!(bodies[0]["status"], "ok");
        assert_eq!(bodies[0], bodies[1]);
        assert_eq!(bodies[1], bodies[2]);
    }

    #[actix_web::test]
    async fn index_reports_service_identity() {
        let app = test_app!();
        let req = test::TestRequest::get().uri("/").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["service"], "Restaurant Service");
        assert_eq!(body["status"], "running");
    }
}

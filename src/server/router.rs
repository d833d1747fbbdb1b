//! Route table and OpenAPI document.
//!
//! Login and the API docs are public; every other route sits behind
//! [`require_auth`].

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginDto, PrincipalDto, TokenDto},
        blood_donation::{BloodDonationDto, CreateBloodDonationDto, UpdateBloodDonationDto},
        blood_type::{BloodTypeDto, CreateBloodTypeDto, UpdateBloodTypeDto},
        donor::{CreateDonorDto, DonorDto, UpdateDonorDto},
        personnel::{CreatePersonnelDto, PersonnelDto, UpdatePersonnelDto},
    },
    server::{
        controller::{auth, blood_donation, blood_type, donor, personnel},
        middleware::auth::require_auth,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::me,
        donor::create_donor,
        donor::get_donors,
        donor::get_donor_by_id,
        donor::get_donor_by_pesel,
        donor::update_donor,
        donor::delete_donor,
        blood_donation::create_donation,
        blood_donation::get_donations,
        blood_donation::get_donation_by_id,
        blood_donation::update_donation,
        blood_donation::delete_donation,
        blood_type::create_blood_type,
        blood_type::get_blood_types,
        blood_type::get_blood_type_by_id,
        blood_type::update_blood_type,
        blood_type::delete_blood_type,
        personnel::create_personnel,
        personnel::get_personnel,
        personnel::get_personnel_by_id,
        personnel::update_personnel,
        personnel::delete_personnel,
    ),
    components(schemas(
        ErrorDto,
        LoginDto,
        TokenDto,
        PrincipalDto,
        DonorDto,
        CreateDonorDto,
        UpdateDonorDto,
        BloodDonationDto,
        CreateBloodDonationDto,
        UpdateBloodDonationDto,
        BloodTypeDto,
        CreateBloodTypeDto,
        UpdateBloodTypeDto,
        PersonnelDto,
        CreatePersonnelDto,
        UpdatePersonnelDto,
    )),
    modifiers(&SecurityAddon),
    info(title = "Blood Donors API")
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/auth/me", get(auth::me))
        .route(
            "/api/donors",
            get(donor::get_donors).post(donor::create_donor),
        )
        .route(
            "/api/donors/{id}",
            get(donor::get_donor_by_id)
                .put(donor::update_donor)
                .delete(donor::delete_donor),
        )
        .route("/api/donors/pesel/{pesel}", get(donor::get_donor_by_pesel))
        .route(
            "/api/donations",
            get(blood_donation::get_donations).post(blood_donation::create_donation),
        )
        .route(
            "/api/donations/{id}",
            get(blood_donation::get_donation_by_id)
                .put(blood_donation::update_donation)
                .delete(blood_donation::delete_donation),
        )
        .route(
            "/api/blood-types",
            get(blood_type::get_blood_types).post(blood_type::create_blood_type),
        )
        .route(
            "/api/blood-types/{id}",
            get(blood_type::get_blood_type_by_id)
                .put(blood_type::update_blood_type)
                .delete(blood_type::delete_blood_type),
        )
        .route(
            "/api/personnel",
            get(personnel::get_personnel).post(personnel::create_personnel),
        )
        .route(
            "/api/personnel/{id}",
            get(personnel::get_personnel_by_id)
                .put(personnel::update_personnel)
                .delete(personnel::delete_personnel),
        )
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .merge(protected)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        auth::{encrypter::Encrypter, test_support::jwt_config},
        config::SeedConfig,
        data::{seed::seed, store::Store},
    };
    use axum::{
        body::Body,
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const PESEL: &str = "44051401359";
    const PASSWORD: &str = "nurse-password";

    async fn app() -> Router {
        let store = Store::in_memory();
        let encrypter = Encrypter::new(10);
        seed(
            &store,
            &encrypter,
            &SeedConfig {
                personnel: Some((PESEL.to_string(), PASSWORD.to_string())),
            },
        )
        .await
        .unwrap();

        router(AppState::from_config(store, &jwt_config(), encrypter).unwrap())
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    async fn login(app: &Router) -> String {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "pesel": PESEL, "password": PASSWORD })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        body["token"].as_str().unwrap().to_string()
    }

    /// Expected: 401 without a token, 200 with the seeded blood types after login
    #[tokio::test]
    async fn protected_routes_require_token() {
        let app = app().await;

        let (status, body) = send(&app, Method::GET, "/api/blood-types", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Unauthorized" }));

        let token = login(&app).await;
        let (status, body) =
            send(&app, Method::GET, "/api/blood-types", Some(&token), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().map(Vec::len), Some(8));
    }

    /// Expected: 401 for a wrong password, same body as a missing token
    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let app = app().await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "pesel": PESEL, "password": "nope" })),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, json!({ "error": "Unauthorized" }));
    }

    /// Expected: /api/auth/me echoes the token's subject and role
    #[tokio::test]
    async fn me_returns_principal() {
        let app = app().await;
        let token = login(&app).await;

        let (status, body) = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["subject"], PESEL);
        assert_eq!(body["issuer"], "blooddonors");
        assert_eq!(body["role"], "personnel");
    }

    /// Expected: donor lifecycle over HTTP, including lookup by PESEL and 404 after delete
    #[tokio::test]
    async fn donor_crud_round() {
        let app = app().await;
        let token = login(&app).await;

        let (status, donor) = send(
            &app,
            Method::POST,
            "/api/donors",
            Some(&token),
            Some(json!({
                "pesel": "02070803628",
                "first_name": "Anna",
                "last_name": "Nowak",
                "blood_type_id": 1,
                "phone_number": "500100200"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = donor["id"].as_i64().unwrap();

        let (status, duplicate) = send(
            &app,
            Method::POST,
            "/api/donors",
            Some(&token),
            Some(json!({
                "pesel": "02070803628",
                "first_name": "Other",
                "last_name": "Person",
                "blood_type_id": 1,
                "phone_number": "500100201"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(duplicate["error"].as_str().is_some());

        let (status, found) = send(
            &app,
            Method::GET,
            "/api/donors/pesel/02070803628",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found["id"].as_i64(), Some(id));

        let (status, _) = send(
            &app,
            Method::DELETE,
            &format!("/api/donors/{}", id),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(
            &app,
            Method::GET,
            &format!("/api/donors/{}", id),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    /// Expected: personnel responses never include password material
    #[tokio::test]
    async fn personnel_dto_hides_password() {
        let app = app().await;
        let token = login(&app).await;

        let (status, body) = send(&app, Method::GET, "/api/personnel", Some(&token), None).await;

        assert_eq!(status, StatusCode::OK);
        let account = &body[0];
        assert_eq!(account["pesel"], PESEL);
        assert!(account.get("password_hash").is_none());
        assert!(account.get("salt").is_none());
    }

    /// Expected: OpenAPI document served publicly with the bearer scheme
    #[tokio::test]
    async fn serves_openapi_document() {
        let app = app().await;

        let (status, body) =
            send(&app, Method::GET, "/api/docs/openapi.json", None, None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"]["/api/donors/{id}"].is_object());
        assert!(body["components"]["securitySchemes"]["bearer"].is_object());
    }
}

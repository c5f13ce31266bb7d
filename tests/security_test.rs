use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use book_catalog::api::auth::INVALID_CREDENTIALS;
use book_catalog::auth::{SessionKeys, create_jwt};
use book_catalog::db;
use book_catalog::forms::{BookForm, CategoryForm};
use book_catalog::infrastructure::AppState;
use book_catalog::seed::ensure_superuser;
use book_catalog::server::build_router;
use book_catalog::services::{book_service, category_service};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create app state over an in-memory database
async fn setup_state() -> AppState {
    db::init_db("sqlite::memory:")
        .await
        .map(|db| AppState::new(db, SessionKeys::new("test-secret", 1)))
        .expect("Failed to init DB")
}

// Helper to create a category with one book, returning both ids
async fn create_fixture(state: &AppState) -> (i32, i32) {
    let category = category_service::add(
        state.category_repo.as_ref(),
        &CategoryForm {
            name: Some("Fiction".to_string()),
            description: None,
        },
    )
    .await
    .unwrap();

    let book = book_service::add(
        state.book_repo.as_ref(),
        state.category_repo.as_ref(),
        &BookForm {
            category: Some(category.id.to_string()),
            published_date: Some("1965-06-01".to_string()),
            title: Some("Dune".to_string()),
            hepburn: Some(String::new()),
            author: Some("Herbert".to_string()),
            release: Some(String::new()),
            url: Some(String::new()),
            summary: None,
        },
    )
    .await
    .unwrap();

    (category.id, book.id)
}

fn cookie_for(state: &AppState, username: &str, role: &str) -> String {
    let token = create_jwt(state.session_keys(), username, role).unwrap();
    format!("session={}", token)
}

fn request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri).method(method);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

fn login_request(username: &str, password: &str) -> Request<Body> {
    Request::builder()
        .uri("/login/")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!(
            "username={}&password={}",
            username, password
        )))
        .unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> Response {
    app.clone().oneshot(req).await.unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn counts(state: &AppState) -> (usize, usize) {
    let categories = category_service::list(state.category_repo.as_ref())
        .await
        .unwrap();
    let books = book_service::list(state.book_repo.as_ref()).await.unwrap();
    (categories.len(), books.len())
}

#[tokio::test]
async fn test_anonymous_delete_is_forbidden() {
    let state = setup_state().await;
    let (category_id, book_id) = create_fixture(&state).await;
    let app = build_router(state.clone());

    for method in ["GET", "POST"] {
        let response = send(
            &app,
            request(method, &format!("/categories/delete/{}/", category_id), None),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        assert_eq!(
            body_string(response).await,
            category_service::DELETE_FORBIDDEN
        );

        let response = send(&app, request(method, &format!("/delete/{}/", book_id), None)).await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_string(response).await, book_service::DELETE_FORBIDDEN);
    }

    assert_eq!(counts(&state).await, (1, 1));
}

#[tokio::test]
async fn test_plain_user_delete_is_forbidden() {
    let state = setup_state().await;
    let (category_id, book_id) = create_fixture(&state).await;
    let app = build_router(state.clone());
    let cookie = cookie_for(&state, "reader", "user");

    let response = send(
        &app,
        request("POST", &format!("/delete/{}/", book_id), Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = send(
        &app,
        request(
            "POST",
            &format!("/categories/delete/{}/", category_id),
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    assert_eq!(counts(&state).await, (1, 1));
}

#[tokio::test]
async fn test_forged_token_is_anonymous() {
    let state = setup_state().await;
    let (_, book_id) = create_fixture(&state).await;
    let app = build_router(state.clone());

    let forged = create_jwt(&SessionKeys::new("wrong-secret", 1), "admin", "superuser").unwrap();
    let req = Request::builder()
        .uri(format!("/delete/{}/", book_id))
        .method("POST")
        .header(header::AUTHORIZATION, format!("Bearer {}", forged))
        .body(Body::empty())
        .unwrap();

    let response = send(&app, req).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(counts(&state).await, (1, 1));
}

#[tokio::test]
async fn test_superuser_get_on_delete_only_confirms() {
    let state = setup_state().await;
    let (category_id, book_id) = create_fixture(&state).await;
    let app = build_router(state.clone());
    let cookie = cookie_for(&state, "admin", "superuser");

    let uri = format!("/categories/delete/{}/", category_id);
    let response = send(&app, request("GET", &uri, Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Delete Category: Fiction"));
    assert!(html.contains(&format!(r#"<form method="post" action="{}">"#, uri)));

    let uri = format!("/delete/{}/", book_id);
    let response = send(&app, request("GET", &uri, Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Delete Book: Dune"));

    assert_eq!(counts(&state).await, (1, 1));

    let response = send(&app, request("GET", "/delete/999/", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_superuser_can_delete_book() {
    let state = setup_state().await;
    let (_, book_id) = create_fixture(&state).await;
    let app = build_router(state.clone());
    let cookie = cookie_for(&state, "admin", "superuser");

    let response = send(
        &app,
        request("POST", &format!("/delete/{}/", book_id), Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/");
    assert_eq!(counts(&state).await, (1, 0));

    // Deleting again is a 404, not a second success
    let response = send(
        &app,
        request("POST", &format!("/delete/{}/", book_id), Some(&cookie)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let state = setup_state().await;
    let (category_id, _) = create_fixture(&state).await;
    ensure_superuser(&state, "admin", "admin_password")
        .await
        .expect("Failed to create superuser");
    let app = build_router(state.clone());

    // Wrong password re-renders the form without a cookie
    let response = send(&app, login_request("admin", "nope")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    assert!(body_string(response).await.contains(INVALID_CREDENTIALS));

    // Unknown user gets the same treatment
    let response = send(&app, login_request("ghost", "admin_password")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let response = send(&app, login_request("admin", "admin_password")).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let set_cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("session="));
    assert!(set_cookie.contains("HttpOnly"));

    let cookie = set_cookie.split(';').next().unwrap().to_string();
    let response = send(
        &app,
        request(
            "POST",
            &format!("/categories/delete/{}/", category_id),
            Some(&cookie),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(counts(&state).await, (0, 0));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let state = setup_state().await;
    let app = build_router(state.clone());
    let cookie = cookie_for(&state, "admin", "superuser");

    let response = send(&app, request("POST", "/logout/", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::FOUND);
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
    assert!(set_cookie.starts_with("session=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_admin_endpoints_require_superuser() {
    let state = setup_state().await;
    let (category_id, _) = create_fixture(&state).await;
    let app = build_router(state.clone());

    let response = send(&app, request("GET", "/admin/books/", None)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let reader = cookie_for(&state, "reader", "user");
    let response = send(&app, request("GET", "/admin/categories/", Some(&reader))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let admin = cookie_for(&state, "admin", "superuser");
    let response = send(
        &app,
        request(
            "GET",
            &format!("/admin/books/?q=dun&category={}", category_id),
            Some(&admin),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["total"], 1);
    assert_eq!(json["books"][0]["title"], "Dune");
    assert_eq!(json["books"][0]["category_name"], "Fiction");

    let response = send(
        &app,
        request("GET", "/admin/books/?published_date=2001-01-01", Some(&admin)),
    )
    .await;
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["total"], 0);

    let response = send(
        &app,
        request("GET", "/admin/books/?published_date=someday", Some(&admin)),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, request("GET", "/admin/categories/?q=fic", Some(&admin))).await;
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["categories"][0]["name"], "Fiction");

    // A bare `%` is a literal character, not a match-all pattern
    let response = send(&app, request("GET", "/admin/categories/?q=%25", Some(&admin))).await;
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["total"], 0);
}

#[tokio::test]
async fn test_health_check() {
    let state = setup_state().await;
    let app = build_router(state);

    let response = send(&app, request("GET", "/health", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["status"], "ok");
}

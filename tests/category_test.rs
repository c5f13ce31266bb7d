use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use book_catalog::auth::SessionKeys;
use book_catalog::db;
use book_catalog::domain::{Category, CategoryFilter, DomainError};
use book_catalog::forms::category::DUPLICATE_NAME;
use book_catalog::forms::{CategoryForm, REQUIRED};
use book_catalog::infrastructure::AppState;
use book_catalog::server::build_router;
use book_catalog::services::category_service;
use tower::util::ServiceExt; // for `oneshot`

// Helper to create app state over an in-memory database
async fn setup_state() -> AppState {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    AppState::new(db, SessionKeys::new("test-secret", 1))
}

fn category_form(name: &str, description: &str) -> CategoryForm {
    CategoryForm {
        name: Some(name.to_string()),
        description: Some(description.to_string()),
    }
}

async fn search(state: &AppState, q: &str) -> Vec<Category> {
    state
        .category_repo
        .find_all(CategoryFilter {
            query: Some(q.to_string()),
        })
        .await
        .unwrap()
}

fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
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

#[tokio::test]
async fn test_add_category_is_retrievable() {
    let state = setup_state().await;
    let repo = state.category_repo.as_ref();

    let created = category_service::add(repo, &category_form("Fiction", "Made-up stories"))
        .await
        .expect("Failed to add category");

    let fetched = category_service::view(repo, created.id).await.unwrap();
    assert_eq!(fetched.name, "Fiction");
    assert_eq!(fetched.description.as_deref(), Some("Made-up stories"));
    assert_eq!(category_service::list(repo).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_name_is_rejected() {
    let state = setup_state().await;
    let repo = state.category_repo.as_ref();

    category_service::add(repo, &category_form("Fiction", ""))
        .await
        .unwrap();

    match category_service::add(repo, &category_form("Fiction", "again")).await {
        Err(DomainError::Validation(errors)) => {
            assert_eq!(errors.get("name"), [DUPLICATE_NAME]);
        }
        other => panic!("expected validation failure, got {:?}", other),
    }

    assert_eq!(category_service::list(repo).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unique_constraint_backs_up_the_check() {
    let state = setup_state().await;
    let repo = state.category_repo.as_ref();

    let input = category_form("Fiction", "").clean_for_add().unwrap();
    repo.create(input.clone()).await.unwrap();

    // Bypass the service pre-check, as a racing request would
    match repo.create(input).await {
        Err(DomainError::Validation(errors)) => assert!(errors.has("name")),
        other => panic!("expected unique violation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_add_rejects_blank_and_long_names() {
    let state = setup_state().await;
    let repo = state.category_repo.as_ref();

    match category_service::add(repo, &category_form("   ", "x")).await {
        Err(DomainError::Validation(errors)) => assert_eq!(errors.get("name"), [REQUIRED]),
        other => panic!("expected validation failure, got {:?}", other),
    }

    let long_name = "n".repeat(256);
    assert!(matches!(
        category_service::add(repo, &category_form(&long_name, "")).await,
        Err(DomainError::Validation(_))
    ));

    assert!(category_service::list(repo).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let state = setup_state().await;
    let repo = state.category_repo.as_ref();

    for name in ["Zoology", "Art", "Manga"] {
        category_service::add(repo, &category_form(name, ""))
            .await
            .unwrap();
    }

    let names: Vec<String> = category_service::list(repo)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Zoology", "Art", "Manga"]);
}

#[tokio::test]
async fn test_search_filter_matches_name_or_description() {
    let state = setup_state().await;
    let repo = state.category_repo.as_ref();

    category_service::add(repo, &category_form("Fiction", "Novels"))
        .await
        .unwrap();
    category_service::add(repo, &category_form("Poetry", "Verse and fiction-adjacent"))
        .await
        .unwrap();
    category_service::add(repo, &category_form("Cooking", ""))
        .await
        .unwrap();

    let hits = repo
        .find_all(CategoryFilter {
            query: Some("fiction".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn test_search_treats_wildcards_literally() {
    let state = setup_state().await;
    let repo = state.category_repo.as_ref();

    category_service::add(repo, &category_form("Fiction", ""))
        .await
        .unwrap();
    category_service::add(repo, &category_form("Sale_50%", "Discounted"))
        .await
        .unwrap();

    let hits = search(&state, "%").await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Sale_50%");

    let hits = search(&state, "_").await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Sale_50%");

    assert!(search(&state, "Fic%").await.is_empty());
    assert_eq!(search(&state, "fic").await.len(), 1);
}

#[tokio::test]
async fn test_add_over_http_redirects_to_list() {
    let state = setup_state().await;
    let app = build_router(state.clone());

    let response = send(
        &app,
        form_request("/categories/add/", "name=Fiction&description="),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/categories/");

    let response = send(&app, get_request("/categories/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Categories List"));
    assert!(html.contains("Fiction"));

    let stored = category_service::list(state.category_repo.as_ref())
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].description, None);
}

#[tokio::test]
async fn test_invalid_add_rerenders_form() {
    let state = setup_state().await;
    let app = build_router(state.clone());

    send(&app, form_request("/categories/add/", "name=Fiction")).await;
    let response = send(&app, form_request("/categories/add/", "name=Fiction")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Add Category"));
    assert!(html.contains(DUPLICATE_NAME));

    let response = send(&app, form_request("/categories/add/", "description=nameless")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(REQUIRED));
    assert!(html.contains("nameless"));

    assert_eq!(
        category_service::list(state.category_repo.as_ref())
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_edit_never_changes_name() {
    let state = setup_state().await;
    let repo = state.category_repo.as_ref();
    let app = build_router(state.clone());

    let category = category_service::add(repo, &category_form("Fiction", "Old"))
        .await
        .unwrap();

    let response = send(
        &app,
        form_request(
            &format!("/categories/edit/{}/", category.id),
            "name=Renamed&description=New+description",
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(response.headers()[header::LOCATION], "/categories/");

    let updated = category_service::view(repo, category.id).await.unwrap();
    assert_eq!(updated.name, "Fiction");
    assert_eq!(updated.description.as_deref(), Some("New description"));
}

#[tokio::test]
async fn test_edit_form_shows_disabled_name() {
    let state = setup_state().await;
    let repo = state.category_repo.as_ref();
    let app = build_router(state.clone());

    let category = category_service::add(repo, &category_form("Fiction", ""))
        .await
        .unwrap();

    let response = send(&app, get_request(&format!("/categories/edit/{}/", category.id))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("Edit Category: Fiction"));
    assert!(html.contains(r#"value="Fiction" disabled"#));
}

#[tokio::test]
async fn test_missing_or_malformed_id_is_404() {
    let state = setup_state().await;
    let app = build_router(state);

    for uri in [
        "/categories/view/99/",
        "/categories/edit/99/",
        "/categories/view/abc/",
    ] {
        let response = send(&app, get_request(uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }

    let response = send(&app, form_request("/categories/edit/99/", "description=x")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

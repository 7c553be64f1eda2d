//! Integration tests for login, guest entry and logout.

use axum::http::StatusCode;
use shoe_shop_integration_tests::TestContext;

#[tokio::test]
async fn test_root_without_session_redirects_to_login() {
    let mut ctx = TestContext::new();
    assert!(ctx.get("/").await.redirects_to("/auth/login"));
    assert!(ctx.get("/catalog").await.redirects_to("/auth/login"));
    assert!(ctx.get("/pickup").await.redirects_to("/auth/login"));
}

#[tokio::test]
async fn test_login_page_lists_demo_accounts() {
    let mut ctx = TestContext::new();
    let page = ctx.get("/auth/login").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("client / 123 (Клиент)"));
    assert!(page.body.contains("manager / 123 (Менеджер)"));
    assert!(page.body.contains("admin / 123 (Администратор)"));
}

#[tokio::test]
async fn test_client_login_lands_on_catalog_with_welcome() {
    let mut ctx = TestContext::new();
    let response = ctx.login("client", "123").await;
    assert!(response.redirects_to("/catalog"));

    let page = ctx.get("/catalog").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Добро пожаловать, Анна Иванова!"));
    assert!(page.body.contains("Клиент"));

    // The notice is shown once.
    let page = ctx.get("/catalog").await;
    assert!(!page.body.contains("Добро пожаловать"));
}

#[tokio::test]
async fn test_wrong_password_shows_error_and_keeps_form() {
    let mut ctx = TestContext::new();
    let response = ctx.login("client", "wrong").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Неверный логин или пароль"));
    assert!(response.body.contains("value=\"client\""));

    // Still logged out, and the form still works.
    assert!(ctx.get("/catalog").await.redirects_to("/auth/login"));
    assert!(ctx.login("client", "123").await.redirects_to("/catalog"));
}

#[tokio::test]
async fn test_unknown_login_is_rejected() {
    let mut ctx = TestContext::new();
    let response = ctx.login("nobody", "123").await;
    assert!(response.body.contains("Неверный логин или пароль"));
}

#[tokio::test]
async fn test_padded_login_is_rejected() {
    let mut ctx = TestContext::new();
    let response = ctx.login("  client ", "123").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Неверный логин или пароль"));
    assert!(ctx.get("/catalog").await.redirects_to("/auth/login"));
}

#[tokio::test]
async fn test_failed_login_keeps_existing_session() {
    let mut ctx = TestContext::new();
    ctx.login("manager", "123").await;
    ctx.get("/pickup").await;
    ctx.post_form("/catalog/search", &[("q", "nike")]).await;

    let response = ctx.login("client", "wrong").await;
    assert!(response.body.contains("Неверный логин или пароль"));

    assert!(ctx.get("/").await.redirects_to("/pickup"));
    let page = ctx.get("/catalog").await;
    assert!(page.body.contains("Менеджер"));
    assert!(page.body.contains("value=\"nike\""));
    assert_eq!(page.product_count(), 1);
}

#[tokio::test]
async fn test_guest_entry() {
    let mut ctx = TestContext::new();
    assert!(ctx.enter_as_guest().await.redirects_to("/catalog"));

    let page = ctx.get("/catalog").await;
    assert!(page.body.contains("Вход как гость"));
    assert!(page.body.contains("Гость"));
}

#[tokio::test]
async fn test_logged_in_login_page_redirects_to_active_tab() {
    let mut ctx = TestContext::new();
    ctx.login("admin", "123").await;
    ctx.get("/pickup").await;
    assert!(ctx.get("/auth/login").await.redirects_to("/pickup"));
    assert!(ctx.get("/").await.redirects_to("/pickup"));
}

#[tokio::test]
async fn test_logout_returns_to_login() {
    let mut ctx = TestContext::new();
    ctx.login("manager", "123").await;
    assert!(ctx.logout().await.redirects_to("/auth/login"));
    assert!(ctx.get("/catalog").await.redirects_to("/auth/login"));
}

#[tokio::test]
async fn test_health() {
    let mut ctx = TestContext::new();
    let response = ctx.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

//! Integration tests for tab visibility and the orders guard.

use axum::http::StatusCode;
use shoe_shop_integration_tests::TestContext;

#[tokio::test]
async fn test_client_cannot_open_orders() {
    let mut ctx = TestContext::new();
    ctx.login("client", "123").await;

    let response = ctx.get("/orders").await;
    assert!(response.redirects_to("/catalog"));
    assert!(!response.body.contains("Заказ #"));

    let page = ctx.get("/catalog").await;
    assert!(!page.body.contains("href=\"/orders\""));
    assert!(page.body.contains("href=\"/pickup\""));
}

#[tokio::test]
async fn test_rejected_orders_keeps_active_tab() {
    let mut ctx = TestContext::new();
    ctx.enter_as_guest().await;
    ctx.get("/pickup").await;

    assert!(ctx.get("/orders").await.redirects_to("/pickup"));
    assert!(ctx.get("/").await.redirects_to("/pickup"));
}

#[tokio::test]
async fn test_staff_see_orders() {
    for login in ["manager", "admin"] {
        let mut ctx = TestContext::new();
        ctx.login(login, "123").await;

        let page = ctx.get("/catalog").await;
        assert!(page.body.contains("href=\"/orders\""));

        let page = ctx.get("/orders").await;
        assert_eq!(page.status, StatusCode::OK);
        assert!(page.body.contains("Заказ #1"));
        assert!(page.body.contains("Заказ #2"));
        assert!(page.body.contains("20.12.2024"));
        assert!(page.body.contains("Доставлен"));
    }
}

#[tokio::test]
async fn test_pickup_points_for_everyone() {
    let mut ctx = TestContext::new();
    ctx.enter_as_guest().await;
    let page = ctx.get("/pickup").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("ул. Ленина, д. 45"));
    assert!(page.body.contains("8:00 - 22:00"));
}

#[tokio::test]
async fn test_logout_then_login_starts_on_catalog() {
    let mut ctx = TestContext::new();
    ctx.login("manager", "123").await;
    ctx.get("/orders").await;
    assert!(ctx.get("/").await.redirects_to("/orders"));

    ctx.logout().await;
    ctx.login("manager", "123").await;
    assert!(ctx.get("/").await.redirects_to("/catalog"));
}

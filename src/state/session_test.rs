use futures::executor::block_on;

use super::*;
use crate::config::EnvelopeMode;
use crate::net::testing::{harness, login_body, user_json};

fn alice() -> User {
    serde_json::from_value(user_json()).unwrap()
}

fn context() -> (SessionContext, crate::net::testing::Harness<crate::net::testing::MockBackend>) {
    let h = harness(EnvelopeMode::Nested);
    let ctx = SessionContext::init(AuthService::new(h.client.clone()), h.credentials.clone());
    (ctx, h)
}

fn alice_login() -> LoginRequest {
    LoginRequest { email: "alice@example.com".to_owned(), password: "secret1".to_owned() }
}

#[test]
fn starts_signed_out_with_empty_store() {
    let (ctx, _h) = context();
    assert!(!ctx.is_authenticated());
    assert_eq!(ctx.user(), None);
    assert!(!ctx.is_loading());
}

#[test]
fn init_restores_stored_session() {
    let h = harness(EnvelopeMode::Nested);
    h.credentials.save(&Session {
        user: Some(alice()),
        access_token: Some("at-1".to_owned()),
        refresh_token: Some("rt-1".to_owned()),
    });

    let ctx = SessionContext::init(AuthService::new(h.client.clone()), h.credentials.clone());

    assert!(ctx.is_authenticated());
    assert_eq!(ctx.user(), Some(alice()));
}

#[test]
fn token_without_user_is_not_authenticated() {
    let h = harness(EnvelopeMode::Nested);
    h.credentials.save(&Session { user: None, access_token: Some("at-1".to_owned()), refresh_token: None });

    let ctx = SessionContext::init(AuthService::new(h.client.clone()), h.credentials.clone());

    assert!(!ctx.is_authenticated());
}

#[test]
fn login_populates_state_and_store() {
    let (ctx, h) = context();
    h.backend.reply(200, login_body());

    let user = block_on(ctx.login(alice_login())).unwrap();

    assert_eq!(user, alice());
    assert!(ctx.is_authenticated());
    assert_eq!(ctx.user(), Some(alice()));
    assert!(!ctx.is_loading());
    let stored = h.credentials.load();
    assert_eq!(stored.access_token.as_deref(), Some("at-1"));
    assert_eq!(stored.refresh_token.as_deref(), Some("rt-1"));
    assert_eq!(stored.user, Some(alice()));
}

#[test]
fn failed_login_leaves_session_untouched() {
    let (ctx, h) = context();
    h.backend.reply(400, serde_json::json!({ "message": "Invalid credentials" }));

    let err = block_on(ctx.login(alice_login())).unwrap_err();

    assert_eq!(err.message, "Invalid credentials");
    assert!(!ctx.is_authenticated());
    assert!(!ctx.is_loading());
    assert_eq!(h.credentials.load(), Session::default());
}

#[test]
fn logout_clears_state_and_store() {
    let (ctx, h) = context();
    h.backend.reply(200, login_body());
    block_on(ctx.login(alice_login())).unwrap();

    ctx.logout();

    assert!(!ctx.is_authenticated());
    assert_eq!(ctx.user(), None);
    assert_eq!(h.credentials.load(), Session::default());
}

#[test]
fn register_signs_up_then_logs_in() {
    let (ctx, h) = context();
    h.backend.reply(201, user_json());
    h.backend.reply(200, login_body());
    let fields = RegisterRequest {
        email: "alice@example.com".to_owned(),
        password: "secret1".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Liddell".to_owned(),
    };

    block_on(ctx.register(fields)).unwrap();

    let paths: Vec<String> = h.backend.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, vec!["/auth/signup".to_owned(), "/auth/login".to_owned()]);
    assert_eq!(
        h.backend.last_request().body,
        Some(serde_json::json!({ "email": "alice@example.com", "password": "secret1" }))
    );
    assert!(ctx.is_authenticated());
}

#[test]
fn failed_signup_skips_login() {
    let (ctx, h) = context();
    h.backend.reply(409, serde_json::json!({ "message": "Email already registered" }));
    let fields = RegisterRequest {
        email: "alice@example.com".to_owned(),
        password: "secret1".to_owned(),
        first_name: "Alice".to_owned(),
        last_name: "Liddell".to_owned(),
    };

    let err = block_on(ctx.register(fields)).unwrap_err();

    assert_eq!(err.status_code, 409);
    assert_eq!(h.backend.requests().len(), 1);
    assert!(!ctx.is_loading());
}

#[test]
fn resync_picks_up_cleared_store() {
    let (ctx, h) = context();
    h.backend.reply(200, login_body());
    block_on(ctx.login(alice_login())).unwrap();
    h.backend.reply(401, serde_json::json!({ "message": "expired" }));

    let _ = block_on(h.client.execute(crate::net::http::HttpRequest::get("/blogs/my")));
    assert!(ctx.is_authenticated());
    ctx.resync();

    assert!(!ctx.is_authenticated());
    assert_eq!(h.navigator.visits(), vec!["/login".to_owned()]);
}

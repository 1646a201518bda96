use futures::executor::block_on;

use super::*;
use crate::config::EnvelopeMode;
use crate::net::testing::{harness, login_body};

fn alice_login() -> LoginRequest {
    LoginRequest { email: "alice@example.com".to_owned(), password: "secret1".to_owned() }
}

#[test]
fn login_posts_credentials_and_unwraps_results() {
    let h = harness(EnvelopeMode::Nested);
    h.backend.reply(200, login_body());
    let service = AuthService::new(h.client.clone());

    let tokens = block_on(service.login(&alice_login())).unwrap();

    assert_eq!(tokens.access_token, "at-1");
    assert_eq!(tokens.refresh_token, "rt-1");
    assert_eq!(tokens.user.email, "alice@example.com");

    let sent = h.backend.last_request();
    assert_eq!(sent.path, LOGIN_ENDPOINT);
    assert_eq!(sent.body, Some(serde_json::json!({ "email": "alice@example.com", "password": "secret1" })));
}

#[test]
fn login_does_not_persist_anything() {
    let h = harness(EnvelopeMode::Nested);
    h.backend.reply(200, login_body());
    let service = AuthService::new(h.client.clone());

    block_on(service.login(&alice_login())).unwrap();

    assert_eq!(h.credentials.access_token(), None);
}

#[test]
fn rejected_login_surfaces_server_message() {
    let h = harness(EnvelopeMode::Flat);
    h.backend.reply(400, serde_json::json!({ "message": "Invalid credentials" }));
    let service = AuthService::new(h.client.clone());

    let err = block_on(service.login(&alice_login())).unwrap_err();

    assert_eq!(err.status_code, 400);
    assert_eq!(err.message, "Invalid credentials");
}

#[test]
fn register_posts_signup_fields() {
    let h = harness(EnvelopeMode::Nested);
    h.backend.reply(
        201,
        serde_json::json!({ "id": 7, "email": "bob@example.com", "first_name": "Bob", "last_name": "Stone" }),
    );
    let service = AuthService::new(h.client.clone());
    let fields = RegisterRequest {
        email: "bob@example.com".to_owned(),
        password: "hunter22".to_owned(),
        first_name: "Bob".to_owned(),
        last_name: "Stone".to_owned(),
    };

    let user = block_on(service.register(&fields)).unwrap();

    assert_eq!(user.id, 7);
    let sent = h.backend.last_request();
    assert_eq!(sent.path, SIGNUP_ENDPOINT);
    assert_eq!(sent.body.unwrap()["first_name"], "Bob");
}

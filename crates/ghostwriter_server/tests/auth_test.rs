//! Tests for session token verification.

use chrono::{Duration, Utc};
use ghostwriter_error::AuthErrorKind;
use ghostwriter_server::{Claims, SessionVerifier};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use uuid::Uuid;

const SECRET: &str = "test-session-secret";

fn token_for(user: Uuid, lifetime: Duration) -> String {
    let now = Utc::now();
    let claims = Claims {
        sub: user,
        iat: now.timestamp(),
        exp: (now + lifetime).timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .expect("encode")
}

#[test]
fn valid_token_yields_the_user_id() {
    let verifier = SessionVerifier::new(SECRET);
    let user = Uuid::new_v4();

    let claims = verifier
        .verify(&token_for(user, Duration::hours(1)))
        .expect("verify");
    assert_eq!(claims.sub, user);
}

#[test]
fn expired_token_is_rejected_as_expired() {
    let verifier = SessionVerifier::new(SECRET);

    let err = verifier
        .verify(&token_for(Uuid::new_v4(), Duration::hours(-2)))
        .unwrap_err();
    assert!(matches!(err.kind, AuthErrorKind::ExpiredToken));
}

#[test]
fn token_signed_with_another_secret_is_invalid() {
    let verifier = SessionVerifier::new("a-different-secret");

    let err = verifier
        .verify(&token_for(Uuid::new_v4(), Duration::hours(1)))
        .unwrap_err();
    assert!(matches!(err.kind, AuthErrorKind::InvalidToken));
}

#[test]
fn garbage_token_is_invalid() {
    let verifier = SessionVerifier::new(SECRET);
    let err = verifier.verify("not.a.jwt").unwrap_err();
    assert!(matches!(err.kind, AuthErrorKind::InvalidToken));
}

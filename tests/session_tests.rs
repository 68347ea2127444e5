//! Session derivation and authorization tests

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::json;

use storefront::error::Error;
use storefront::session::{decode_token, Role, SessionService};
use storefront::store::{MemoryStore, TokenStore, IMAGE_URL_KEY, TOKEN_KEY};

/// Mint a real signed token the way the backend would.
fn mint(claims: serde_json::Value) -> String {
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-signing-secret"),
    )
    .expect("Failed to mint token")
}

fn store_with_token(claims: serde_json::Value) -> MemoryStore {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, &mint(claims));
    store
}

#[test]
fn test_minted_token_has_three_segments() {
    let token = mint(json!({"id": "u1"}));
    assert_eq!(token.split('.').count(), 3);
}

#[test]
fn test_round_trip_identity() {
    let now = Utc::now().timestamp();
    let store = store_with_token(json!({"id": "u1", "role": "admin", "exp": now + 3600}));
    let session = SessionService::new(&store);

    let identity = session.current_user().expect("Failed to derive identity");
    assert_eq!(identity.id, "u1");
    assert_eq!(identity.role, Role::Admin);
    assert!(session.is_authenticated());
    assert!(session.is_admin());
}

#[test]
fn test_missing_token_is_no_session() {
    let store = MemoryStore::new();
    let session = SessionService::new(&store);

    assert!(matches!(
        session.current_user().unwrap_err(),
        Error::TokenMissing
    ));
    assert!(!session.is_authenticated());
    assert!(!session.is_admin());
    assert!(!session.is_user());
}

#[test]
fn test_five_segment_token_is_not_authenticated() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "not.a.valid.token.shape");
    let session = SessionService::new(&store);

    assert!(!session.is_authenticated());
}

#[test]
fn test_malformed_token_is_purged() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "garbage");
    let session = SessionService::new(&store);

    assert!(matches!(
        session.current_user().unwrap_err(),
        Error::TokenMalformed(_)
    ));
    assert_eq!(store.get(TOKEN_KEY), None);
}

#[test]
fn test_expired_token_is_purged() {
    let now = Utc::now().timestamp();
    let store = store_with_token(json!({"id": "u1", "exp": now - 60}));
    let session = SessionService::new(&store);

    assert!(matches!(
        session.current_user().unwrap_err(),
        Error::TokenExpired
    ));
    assert_eq!(store.get(TOKEN_KEY), None);
    assert!(!session.is_authenticated());
}

#[test]
fn test_token_without_exp_never_expires() {
    let store = store_with_token(json!({"id": "u1"}));
    let session = SessionService::new(&store);

    assert!(session.is_authenticated());
}

#[test]
fn test_missing_role_defaults_to_user() {
    let store = store_with_token(json!({"id": "u1"}));
    let session = SessionService::new(&store);

    let identity = session.current_user().expect("Failed to derive identity");
    assert_eq!(identity.role, Role::User);
    assert!(session.is_user());
    assert!(!session.is_admin());
}

#[test]
fn test_is_admin_iff_admin_role() {
    let admin_store = store_with_token(json!({"id": "a1", "role": "admin"}));
    let admin = SessionService::new(&admin_store);
    assert!(admin.is_admin());
    assert!(!admin.is_user());

    let user_store = store_with_token(json!({"id": "u1", "role": "user"}));
    let user = SessionService::new(&user_store);
    assert!(!user.is_admin());
    assert!(user.is_user());
}

#[test]
fn test_has_permission_exact_match() {
    let store = store_with_token(json!({"id": "u1", "role": "user"}));
    let session = SessionService::new(&store);

    assert!(session.has_permission(Role::User));
    assert!(!session.has_permission(Role::Admin));
}

#[test]
fn test_has_permission_admin_bypass() {
    let store = store_with_token(json!({"id": "a1", "role": "admin"}));
    let session = SessionService::new(&store);

    assert!(session.has_permission(Role::Admin));
    assert!(session.has_permission(Role::User));
}

#[test]
fn test_has_permission_without_session() {
    let store = MemoryStore::new();
    let session = SessionService::new(&store);

    assert!(!session.has_permission(Role::User));
    assert!(!session.has_permission(Role::Admin));
}

#[test]
fn test_current_user_is_idempotent() {
    let store = store_with_token(json!({
        "id": "u1",
        "role": "user",
        "email": "u1@example.com",
        "firstName": "Ada",
        "lastName": "Lovelace"
    }));
    let session = SessionService::new(&store);

    let first = session.current_user().expect("Failed to derive identity");
    let second = session.current_user().expect("Failed to derive identity");
    assert_eq!(first, second);
}

#[test]
fn test_display_name_full_name() {
    let store = store_with_token(json!({
        "id": "u1",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com"
    }));
    let session = SessionService::new(&store);

    assert_eq!(session.display_name(), "Ada Lovelace");
}

#[test]
fn test_display_name_email_fallback() {
    let store = store_with_token(json!({"id": "u1", "email": "ada@example.com"}));
    let session = SessionService::new(&store);

    assert_eq!(session.display_name(), "ada@example.com");
}

#[test]
fn test_display_name_guest_without_session() {
    let store = MemoryStore::new();
    let session = SessionService::new(&store);

    assert_eq!(session.display_name(), "Guest");
}

#[test]
fn test_subject_precedence_user_id_then_sub() {
    let store = store_with_token(json!({"userId": "via-user-id", "sub": "via-sub"}));
    let session = SessionService::new(&store);
    assert_eq!(session.current_user().unwrap().id, "via-user-id");

    let store = store_with_token(json!({"sub": "via-sub"}));
    let session = SessionService::new(&store);
    assert_eq!(session.current_user().unwrap().id, "via-sub");
}

#[test]
fn test_image_url_falls_back_to_storage_key() {
    let store = store_with_token(json!({"id": "u1"}));
    store.set(IMAGE_URL_KEY, "https://cdn.example.com/stored.png");
    let session = SessionService::new(&store);

    let identity = session.current_user().expect("Failed to derive identity");
    assert_eq!(
        identity.image_url.as_deref(),
        Some("https://cdn.example.com/stored.png")
    );
}

#[test]
fn test_expiring_soon_inside_window() {
    let now = Utc::now().timestamp();
    let store = store_with_token(json!({"id": "u1", "exp": now + 200}));
    let session = SessionService::new(&store);

    assert!(session.is_token_expiring_soon());
}

#[test]
fn test_expiring_soon_outside_window() {
    let now = Utc::now().timestamp();
    let store = store_with_token(json!({"id": "u1", "exp": now + 400}));
    let session = SessionService::new(&store);

    assert!(!session.is_token_expiring_soon());
}

#[test]
fn test_expiring_soon_without_exp() {
    let store = store_with_token(json!({"id": "u1"}));
    let session = SessionService::new(&store);

    assert!(!session.is_token_expiring_soon());
}

#[test]
fn test_expiring_soon_custom_threshold() {
    let now = Utc::now().timestamp();
    let store = store_with_token(json!({"id": "u1", "exp": now + 400}));
    let session = SessionService::new(&store).with_refresh_warning_secs(600);

    assert!(session.is_token_expiring_soon());
}

#[test]
fn test_logout_clears_token_and_redirects() {
    let store = store_with_token(json!({"id": "u1"}));
    let session = SessionService::new(&store).with_login_path("/signin");

    let navigation = session.logout();
    assert_eq!(navigation.target, "/signin");
    assert!(navigation.replace);
    assert_eq!(store.get(TOKEN_KEY), None);
    assert!(!session.is_authenticated());
}

#[test]
fn test_bearer_token_round_trip() {
    let token = mint(json!({"id": "u1"}));
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, &token);
    let session = SessionService::new(&store);

    assert_eq!(session.bearer_token(), Some(token));
}

#[test]
fn test_decode_token_accepts_minted_token() {
    let payload = decode_token(&mint(json!({"id": "u1", "role": "user"})))
        .expect("Failed to decode minted token");
    assert_eq!(payload.id.as_deref(), Some("u1"));
    assert_eq!(payload.role.as_deref(), Some("user"));
}

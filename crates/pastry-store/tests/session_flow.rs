//! Sign-in, registration and session rehydration through the app context.

use std::time::Duration;

use pastry_core::Role;
use pastry_store::accounts::DEMO_SECRET;
use pastry_store::{AppConfig, AppContext, AuthError, StorageBackend};

fn file_config(dir: &std::path::Path, delay_ms: u64) -> AppConfig {
    let mut config = AppConfig::ephemeral();
    config.storage.backend = StorageBackend::File;
    config.storage.data_dir = Some(dir.to_path_buf());
    config.auth.sign_in_delay_ms = delay_ms;
    config
}

#[tokio::test(start_paused = true)]
async fn sign_in_honours_configured_delay() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = AppContext::open(&file_config(dir.path(), 800)).unwrap();
    let start = tokio::time::Instant::now();

    let user = ctx
        .session()
        .sign_in("staff@pastry.com", DEMO_SECRET)
        .await
        .unwrap();

    assert!(start.elapsed() >= Duration::from_millis(800));
    assert_eq!(user.name, "Funcionário");
    assert_eq!(user.role, Role::Staff);
}

#[tokio::test]
async fn registered_user_signs_in_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(dir.path(), 0);

    {
        let ctx = AppContext::open(&config).unwrap();
        ctx.accounts()
            .register("Beatriz", "bia@pastelaria.com", "massa123")
            .unwrap();
    }

    let ctx = AppContext::open(&config).unwrap();
    assert!(matches!(
        ctx.accounts().register("Bia", "bia@pastelaria.com", "outra"),
        Err(AuthError::DuplicateEmail(_))
    ));

    let user = ctx
        .session()
        .sign_in("bia@pastelaria.com", "massa123")
        .await
        .unwrap();
    assert_eq!(user.role, Role::Staff);
}

#[tokio::test]
async fn session_is_restored_until_sign_out() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(dir.path(), 0);

    {
        let ctx = AppContext::open(&config).unwrap();
        ctx.session()
            .sign_in("admin@pastry.com", DEMO_SECRET)
            .await
            .unwrap();
    }

    let ctx = AppContext::open(&config).unwrap();
    assert!(ctx.session().has_role(Role::Admin));

    ctx.session().sign_out();
    let ctx = AppContext::open(&config).unwrap();
    assert!(!ctx.session().is_authenticated());
}

#[tokio::test]
async fn wrong_password_leaves_session_empty() {
    let ctx = AppContext::open(&AppConfig::ephemeral()).unwrap();

    let err = ctx
        .session()
        .sign_in("admin@pastry.com", "Password")
        .await
        .unwrap_err();

    assert!(matches!(err, AuthError::InvalidCredentials));
    assert_eq!(ctx.session().current_user(), None);
}

use std::sync::Arc;
use std::time::Duration;

use campanile::auth::{AuthService, AuthStatus, GuardDecision};
use campanile::error::AppError;
use campanile::route::Route;
use campanile::test_support::{identity, ScriptedIdentityProvider};

fn service(provider: ScriptedIdentityProvider) -> AuthService {
    AuthService::new(Arc::new(provider))
}

#[tokio::test]
async fn test_guard_is_pending_until_first_report() -> anyhow::Result<()> {
    let auth = service(ScriptedIdentityProvider::new());
    let guard = auth.guard();

    // Before restore the stream has said nothing; the guard must hold, not
    // redirect.
    assert_eq!(guard.check(), GuardDecision::Pending);

    auth.restore().await;
    assert_eq!(guard.check(), GuardDecision::Redirect(Route::AdminLogin));

    Ok(())
}

#[tokio::test]
async fn test_restored_session_allows_without_login() -> anyhow::Result<()> {
    let auth = service(
        ScriptedIdentityProvider::new().with_restored(identity("admin@svuce.edu.in")),
    );
    let mut guard = auth.guard();

    auth.restore().await;

    assert_eq!(guard.resolve().await, GuardDecision::Allow);

    let status = auth.status();
    assert_eq!(
        status.identity().map(|who| who.email.as_str()),
        Some("admin@svuce.edu.in")
    );

    Ok(())
}

#[tokio::test]
async fn test_resolve_waits_out_the_unknown_window() -> anyhow::Result<()> {
    let auth = Arc::new(service(
        ScriptedIdentityProvider::new().with_restored(identity("admin@svuce.edu.in")),
    ));
    let mut guard = auth.guard();

    // Restore lands while the guard is already waiting.
    let restorer = {
        let auth = Arc::clone(&auth);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            auth.restore().await;
        })
    };

    let decision = tokio::time::timeout(Duration::from_secs(5), guard.resolve()).await?;
    assert_eq!(decision, GuardDecision::Allow);

    restorer.await?;
    Ok(())
}

#[tokio::test]
async fn test_sign_in_flips_the_stream() -> anyhow::Result<()> {
    let auth = service(ScriptedIdentityProvider::new().with_account("admin@svuce.edu.in", "s3cret"));
    let mut guard = auth.guard();

    auth.restore().await;
    assert_eq!(guard.resolve().await, GuardDecision::Redirect(Route::AdminLogin));

    let who = auth.sign_in("admin@svuce.edu.in", "s3cret").await?;
    assert_eq!(who.email, "admin@svuce.edu.in");
    assert_eq!(guard.resolve().await, GuardDecision::Allow);

    Ok(())
}

#[tokio::test]
async fn test_failed_sign_in_stays_inline() -> anyhow::Result<()> {
    let auth = service(ScriptedIdentityProvider::new().with_account("admin@svuce.edu.in", "s3cret"));

    auth.restore().await;

    let result = auth.sign_in("admin@svuce.edu.in", "wrong").await;
    assert!(matches!(result, Err(AppError::Auth(_))));

    // The failure surfaces on the form only; the shared state is untouched
    // and no subscriber is bounced anywhere.
    assert_eq!(auth.status(), AuthStatus::SignedOut);
    assert_eq!(
        auth.guard().check(),
        GuardDecision::Redirect(Route::AdminLogin)
    );

    Ok(())
}

#[tokio::test]
async fn test_duplicate_emission_never_redirects() -> anyhow::Result<()> {
    let auth = service(
        ScriptedIdentityProvider::new().with_restored(identity("admin@svuce.edu.in")),
    );
    let mut guard = auth.guard();

    // The provider may re-report the same signed-in identity; each report
    // must keep resolving to Allow.
    auth.restore().await;
    auth.restore().await;

    assert_eq!(guard.resolve().await, GuardDecision::Allow);
    assert_eq!(guard.check(), GuardDecision::Allow);

    Ok(())
}

#[tokio::test]
async fn test_sign_out_redirects_again() -> anyhow::Result<()> {
    let auth = service(
        ScriptedIdentityProvider::new().with_restored(identity("admin@svuce.edu.in")),
    );
    let mut guard = auth.guard();

    auth.restore().await;
    assert_eq!(guard.resolve().await, GuardDecision::Allow);

    auth.sign_out().await?;
    assert_eq!(guard.resolve().await, GuardDecision::Redirect(Route::AdminLogin));

    Ok(())
}

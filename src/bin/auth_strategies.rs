//! Dependency Inversion walkthrough.
//!
//! The same [`LoginService`] runs three interchangeable authentication
//! strategies. The service depends only on the
//! [`Authenticator`](solid_recipe::auth::Authenticator) abstraction; the
//! strategy is decided here, at the construction site.

use solid_recipe::auth::{AuthError, BasicAuth, GoogleAuth, LoginService, OAuth};
use solid_recipe::lifecycle::setup_tracing;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), AuthError> {
    setup_tracing();

    info!("Starting authentication strategies demo");

    let span = tracing::info_span!("login_flows");
    async {
        let basic = LoginService::new(Box::new(BasicAuth));
        basic.login("user123", "password123").await?;

        let oauth = LoginService::new(Box::new(OAuth));
        oauth.login("user456", "password456").await?;

        let google = LoginService::new(Box::new(GoogleAuth));
        google.login("user789", "password789").await?;

        Ok::<(), AuthError>(())
    }
    .instrument(span)
    .await?;

    info!("All strategies completed");
    Ok(())
}

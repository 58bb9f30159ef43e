//! Startup: recover a stored session, then initialize the catalog.

use tracing::{info, instrument, warn};

use libros_core::{AuthState, CatalogOptions, Error};

use crate::catalog::CatalogClient;
use crate::session::SessionManager;

/// Where the client lands after startup.
#[derive(Debug)]
pub enum Startup {
    /// No usable session. `notice` is set when a stored one expired.
    LoginRequired { notice: Option<&'static str> },
    /// Session recovered and catalog options loaded.
    Ready { options: CatalogOptions },
    /// Session recovered but the catalog could not be initialized.
    Degraded { error: Error },
}

impl Startup {
    pub fn is_authenticated(&self) -> bool {
        !matches!(self, Startup::LoginRequired { .. })
    }
}

/// Run session recovery and, when authenticated, load the catalog options.
#[instrument(skip_all)]
pub async fn start(session: &SessionManager, catalog: &CatalogClient) -> Startup {
    let recovered = session.bootstrap().await;
    if recovered.state != AuthState::Authenticated {
        return Startup::LoginRequired {
            notice: recovered.notice,
        };
    }

    match catalog.load_options().await {
        Ok(options) => {
            info!("Catalog ready");
            Startup::Ready { options }
        }
        Err(error) => {
            warn!(error = %error, "Catalog initialization failed");
            Startup::Degraded { error }
        }
    }
}

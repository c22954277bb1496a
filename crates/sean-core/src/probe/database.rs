//! Relational database connectivity probe
//!
//! Opens a real authenticated connection with the dialect's native driver,
//! pings, and closes. MariaDB speaks the MySQL protocol. Credentials are
//! passed through connect options, never a URL: the prompt contract accepts
//! free text, and characters like `/` or `#` must reach the server as given.

use super::{ProbeOutcome, PROBE_TIMEOUT};
use crate::session::{DatabaseSettings, Dialect};
use sqlx::mysql::MySqlConnectOptions;
use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, MySqlConnection, PgConnection};
use tokio::time::timeout;

fn pg_options(settings: &DatabaseSettings) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.username)
        .password(&settings.password)
        .database(&settings.name)
}

fn mysql_options(settings: &DatabaseSettings) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.username)
        .password(&settings.password)
        .database(&settings.name)
}

/// Attempt an authenticated handshake against the configured database.
pub async fn probe_database(settings: &DatabaseSettings) -> ProbeOutcome {
    let attempt = async {
        match settings.dialect {
            Dialect::Postgres => {
                let mut conn = PgConnection::connect_with(&pg_options(settings)).await?;
                conn.ping().await?;
                conn.close().await?;
                Ok::<_, sqlx::Error>(())
            }
            Dialect::MySql | Dialect::MariaDb => {
                let mut conn = MySqlConnection::connect_with(&mysql_options(settings)).await?;
                conn.ping().await?;
                conn.close().await?;
                Ok(())
            }
        }
    };

    match timeout(PROBE_TIMEOUT, attempt).await {
        Ok(Ok(())) => ProbeOutcome::Ok(format!(
            "{} connection to {}:{} is valid",
            settings.dialect, settings.host, settings.port
        )),
        Ok(Err(e)) => ProbeOutcome::Failed(e.to_string()),
        Err(_) => ProbeOutcome::Failed(format!(
            "timed out after {}s connecting to {}:{}",
            PROBE_TIMEOUT.as_secs(),
            settings.host,
            settings.port
        )),
    }
}

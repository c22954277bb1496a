//! Redis connectivity probe
//!
//! Connects over TCP and exchanges an inline RESP `PING`, optionally selecting
//! the configured logical database first. Success means the server answered
//! `+PONG`.

use super::{ProbeOutcome, PROBE_TIMEOUT};
use crate::session::RedisSettings;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::time::timeout;

async fn ping(settings: &RedisSettings) -> std::io::Result<String> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let stream = TcpStream::connect(&addr).await?;
    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);
    let mut line = String::new();

    if settings.database != 0 {
        write_half
            .write_all(format!("SELECT {}\r\n", settings.database).as_bytes())
            .await?;
        reader.read_line(&mut line).await?;
        if !line.starts_with("+OK") {
            return Err(std::io::Error::other(format!(
                "SELECT {} failed: {}",
                settings.database,
                line.trim_end()
            )));
        }
        line.clear();
    }

    write_half.write_all(b"PING\r\n").await?;
    reader.read_line(&mut line).await?;
    Ok(line.trim_end().to_string())
}

/// Attempt a connect + PING round trip against the configured Redis server.
pub async fn probe_redis(settings: &RedisSettings) -> ProbeOutcome {
    match timeout(PROBE_TIMEOUT, ping(settings)).await {
        Ok(Ok(reply)) if reply.starts_with("+PONG") => ProbeOutcome::Ok(format!(
            "Redis connection to {}:{} (db {}) is valid",
            settings.host, settings.port, settings.database
        )),
        Ok(Ok(reply)) => ProbeOutcome::Failed(format!("unexpected PING reply: {}", reply)),
        Ok(Err(e)) => ProbeOutcome::Failed(e.to_string()),
        Err(_) => ProbeOutcome::Failed(format!(
            "timed out after {}s connecting to {}:{}",
            PROBE_TIMEOUT.as_secs(),
            settings.host,
            settings.port
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn unreachable_redis_is_advisory() {
        let settings = RedisSettings {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..RedisSettings::default()
        };
        let outcome = probe_redis(&settings).await;
        assert!(!outcome.is_ok());
    }

    #[tokio::test]
    async fn pong_reply_is_success() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 64];
            let n = socket.read(&mut buf).await.unwrap();
            assert!(buf[..n].starts_with(b"PING"));
            socket.write_all(b"+PONG\r\n").await.unwrap();
        });

        let settings = RedisSettings {
            host: "127.0.0.1".to_string(),
            port,
            ..RedisSettings::default()
        };
        let outcome = probe_redis(&settings).await;
        assert!(outcome.is_ok(), "got {:?}", outcome);
    }

    #[tokio::test]
    async fn select_precedes_ping_for_nonzero_database() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            let (read_half, mut write_half) = socket.into_split();
            let mut reader = BufReader::new(read_half);
            let mut line = String::new();

            reader.read_line(&mut line).await.unwrap();
            assert_eq!(line.trim_end(), "SELECT 3");
            write_half.write_all(b"+OK\r\n").await.unwrap();

            line.clear();
            reader.read_line(&mut line).await.unwrap();
            assert_eq!(line.trim_end(), "PING");
            write_half.write_all(b"+PONG\r\n").await.unwrap();
        });

        let settings = RedisSettings {
            host: "127.0.0.1".to_string(),
            port,
            database: 3,
            ..RedisSettings::default()
        };
        let outcome = probe_redis(&settings).await;
        assert!(outcome.is_ok(), "got {:?}", outcome);
    }
}

use crate::events::AppEvent;
use anyhow::Context as _;
use async_channel::Sender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::net::UnixListener;

const SOCKET_PATH: &str = "/tmp/arcdial.sock";

/// Line-oriented control socket for retargeting the widgets at runtime:
/// `value <n>`, `progress <n>` or `reload`, one command per line.
pub async fn run_server(tx: Sender<AppEvent>) {
    if let Err(e) = serve(tx).await {
        log::error!("Control server error: {:#}", e);
    }
}

async fn serve(tx: Sender<AppEvent>) -> anyhow::Result<()> {
    // Cleanup old socket if it exists
    if std::fs::metadata(SOCKET_PATH).is_ok() {
        let _ = std::fs::remove_file(SOCKET_PATH);
    }

    let listener = UnixListener::bind(SOCKET_PATH)
        .with_context(|| format!("Failed to bind unix socket at {}", SOCKET_PATH))?;

    loop {
        match listener.accept().await {
            Ok((mut stream, _)) => {
                let tx = tx.clone();
                tokio::spawn(async move {
                    let reader = BufReader::new(&mut stream);
                    let mut lines = reader.lines();

                    while let Ok(Some(line)) = lines.next_line().await {
                        match parse_command(line.trim()) {
                            Some(event) => {
                                let _ = tx.send(event).await;
                            }
                            None => log::warn!("Ignoring control command: {:?}", line),
                        }
                    }
                });
            }
            Err(e) => {
                log::error!("Failed to accept connection: {}", e);
            }
        }
    }
}

fn parse_command(line: &str) -> Option<AppEvent> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "reload" => Some(AppEvent::ConfigReload),
        "value" => parts.next()?.parse().ok().map(AppEvent::SetValue),
        "progress" => parts.next()?.parse().ok().map(AppEvent::SetProgress),
        _ => None,
    }
}

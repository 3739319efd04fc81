//! meimei-tei backend server.
//!
//! Gate-keeps the bar by JST business hours and coordinates presence,
//! seating, and chat over a single WebSocket endpoint.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin server
//! cargo run --bin server -- --host 0.0.0.0 --port 3001
//! ```

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use meimei_server::{
    infrastructure::{
        message_pusher::WebSocketMessagePusher,
        repository::{InMemorySessionStore, InMemoryUserRegistry},
    },
    ui::{Server, state::AppState},
    usecase::{
        AuthenticateUseCase, CloseBarUseCase, ConnectUseCase, DisconnectUseCase, JoinUseCase,
        SendMessageUseCase, ToggleSeatUseCase,
    },
};
use meimei_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "server")]
#[command(about = "Realtime backend for the meimei-tei virtual bar", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "3001")]
    port: u16,

    /// Seconds between business-hours sweeps
    #[arg(long, default_value = "60")]
    sweep_interval_secs: u64,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Stores and pusher (shared singletons, constructed once)
    // 2. UseCases
    // 3. AppState and Server

    let registry = Arc::new(InMemoryUserRegistry::new());
    let sessions = Arc::new(InMemorySessionStore::new());
    let pusher = Arc::new(WebSocketMessagePusher::new());
    let clock = Arc::new(SystemClock);

    let state = Arc::new(AppState {
        connect_usecase: Arc::new(ConnectUseCase::new(pusher.clone())),
        join_usecase: Arc::new(JoinUseCase::new(registry.clone(), pusher.clone())),
        authenticate_usecase: Arc::new(AuthenticateUseCase::new(
            sessions.clone(),
            pusher.clone(),
            clock.clone(),
        )),
        toggle_seat_usecase: Arc::new(ToggleSeatUseCase::new(registry.clone(), pusher.clone())),
        send_message_usecase: Arc::new(SendMessageUseCase::new(
            registry.clone(),
            sessions.clone(),
            pusher.clone(),
            clock,
        )),
        disconnect_usecase: Arc::new(DisconnectUseCase::new(registry.clone(), pusher)),
    });
    let close_bar_usecase = Arc::new(CloseBarUseCase::new(registry, sessions));

    let server = Server::new(
        state,
        close_bar_usecase,
        Duration::from_secs(args.sweep_interval_secs),
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

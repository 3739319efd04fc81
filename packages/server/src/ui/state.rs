//! Shared application state handed to the axum handlers.

use std::sync::Arc;

use crate::usecase::{
    AuthenticateUseCase, ConnectUseCase, DisconnectUseCase, JoinUseCase, SendMessageUseCase,
    ToggleSeatUseCase,
};

/// One use case per protocol operation; the handlers own no logic
/// beyond validation and dispatch.
pub struct AppState {
    pub connect_usecase: Arc<ConnectUseCase>,
    pub join_usecase: Arc<JoinUseCase>,
    pub authenticate_usecase: Arc<AuthenticateUseCase>,
    pub toggle_seat_usecase: Arc<ToggleSeatUseCase>,
    pub send_message_usecase: Arc<SendMessageUseCase>,
    pub disconnect_usecase: Arc<DisconnectUseCase>,
}

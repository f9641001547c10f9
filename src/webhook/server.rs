//! Callback server for incoming calls and messages

use crate::client::Client;
use crate::error::{Error, Result};
use crate::pagination::ListOptions;
use crate::resource::{IncomingPhoneNumber, IncomingPhoneNumberFilter, NumberSettings};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Form, Router,
};
use futures::future::BoxFuture;
use std::collections::HashMap;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Form parameters the API posts to a callback (`From`, `To`, `Body`, ...)
pub type CallbackParams = HashMap<String, String>;

/// Handles one callback and answers with a TwiML document
pub trait CallbackHandler: Send + Sync {
    fn handle(&self, params: CallbackParams) -> BoxFuture<'static, anyhow::Result<String>>;
}

impl<F, Fut> CallbackHandler for F
where
    F: Fn(CallbackParams) -> Fut + Send + Sync,
    Fut: Future<Output = anyhow::Result<String>> + Send + 'static,
{
    fn handle(&self, params: CallbackParams) -> BoxFuture<'static, anyhow::Result<String>> {
        Box::pin(self(params))
    }
}

type Handlers = Arc<RwLock<HashMap<String, Arc<dyn CallbackHandler>>>>;

/// Which callback of a number to point at the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallbackKind {
    Voice,
    Sms,
}

/// Hosts `POST /incoming/:sid` and routes each callback to the handler
/// registered for that number
#[derive(Clone)]
pub struct CallbackServer {
    client: Client,
    hostname: String,
    port: u16,
    handlers: Handlers,
}

impl CallbackServer {
    /// Server for the webhook address in the client's config
    pub fn new(client: Client) -> Self {
        let hostname = client.config().webhook.hostname.clone();
        let port = client.config().webhook.port;
        Self {
            client,
            hostname,
            port,
            handlers: Arc::default(),
        }
    }

    /// Port the server listens on
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Public URL the API calls for number `sid`
    pub fn callback_url(&self, sid: &str) -> String {
        format!("http://{}:{}/incoming/{}", self.hostname, self.port, sid)
    }

    /// Route callbacks for number `sid` to `handler`, replacing any previous one
    pub async fn register<H>(&self, sid: impl Into<String>, handler: H)
    where
        H: CallbackHandler + 'static,
    {
        self.handlers
            .write()
            .await
            .insert(sid.into(), Arc::new(handler));
    }

    /// Number of numbers with a registered handler
    pub async fn handler_count(&self) -> usize {
        self.handlers.read().await.len()
    }

    /// Point the voice URL of `phone_number` at this server and handle its calls
    pub async fn register_incoming_call<H>(
        &self,
        phone_number: &str,
        handler: H,
    ) -> Result<IncomingPhoneNumber>
    where
        H: CallbackHandler + 'static,
    {
        self.register_incoming(phone_number, CallbackKind::Voice, handler)
            .await
    }

    /// Point the SMS URL of `phone_number` at this server and handle its messages
    pub async fn register_incoming_sms<H>(
        &self,
        phone_number: &str,
        handler: H,
    ) -> Result<IncomingPhoneNumber>
    where
        H: CallbackHandler + 'static,
    {
        self.register_incoming(phone_number, CallbackKind::Sms, handler)
            .await
    }

    async fn register_incoming<H>(
        &self,
        phone_number: &str,
        kind: CallbackKind,
        handler: H,
    ) -> Result<IncomingPhoneNumber>
    where
        H: CallbackHandler + 'static,
    {
        let numbers = self.client.api().incoming_phone_numbers();
        let found = numbers
            .list(
                &IncomingPhoneNumberFilter::phone_number(phone_number),
                &ListOptions::new().limit(1),
            )
            .await?;

        let Some(number) = found.into_iter().next() else {
            return Err(Error::webhook(format!(
                "No such incoming number: {phone_number}"
            )));
        };

        let url = self.callback_url(&number.sid);
        let settings = match kind {
            CallbackKind::Voice => NumberSettings::voice_webhook(url.as_str()),
            CallbackKind::Sms => NumberSettings::sms_webhook(url.as_str()),
        };
        let updated = numbers.get(number.sid.as_str()).update(&settings).await?;

        info!("Routing {:?} callbacks for {} to {}", kind, phone_number, url);
        self.register(number.sid, handler).await;
        Ok(updated)
    }

    /// Router serving the callbacks
    pub fn router(&self) -> Router {
        Router::new()
            .route("/incoming/:sid", post(incoming))
            .layer(TraceLayer::new_for_http())
            .with_state(Arc::clone(&self.handlers))
    }

    /// Bind the configured port and serve until the future is dropped
    pub async fn serve(&self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Starting webhook server on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| Error::webhook(format!("Failed to bind to port {}: {e}", self.port)))?;

        axum::serve(listener, self.router())
            .await
            .map_err(|e| Error::webhook(format!("Server error: {e}")))?;

        Ok(())
    }
}

impl std::fmt::Debug for CallbackServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackServer")
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

/// Dispatch one callback to its handler
async fn incoming(
    State(handlers): State<Handlers>,
    Path(sid): Path<String>,
    Form(params): Form<CallbackParams>,
) -> Response {
    let handler = handlers.read().await.get(&sid).cloned();
    let Some(handler) = handler else {
        return (StatusCode::NOT_FOUND, format!("No handler for {sid}")).into_response();
    };

    match handler.handle(params).await {
        Ok(twiml) => ([(header::CONTENT_TYPE, "application/xml")], twiml).into_response(),
        Err(e) => {
            warn!("Callback handler for {} failed: {:#}", sid, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Callback handler failed").into_response()
        }
    }
}

pub mod fsm;

pub use fsm::{BridgeEvent, BridgeState, BridgeStateMachine};

use crate::{
    config::BridgeConfig,
    tokenizer::{Encoded, TextTokenizer},
    Error, Result,
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

/// Sentinel emitted on the protocol stream once the model is loaded, so a
/// supervising process can detect readiness without relying on timing.
pub const READY_SENTINEL: &str = "TOKENIZER_READY";

/// Process-wide bridge state: the one loaded tokenizer plus its lifecycle.
///
/// Constructed once at startup and exclusively owned by the request loop.
/// The handler is synchronous so a test harness can drive it with plain
/// strings, no process I/O involved.
pub struct BridgeSession {
    tokenizer: TextTokenizer,
    fsm: BridgeStateMachine,
}

impl BridgeSession {
    pub fn new(config: &BridgeConfig) -> Result<Self> {
        info!("Tokenizer loading...");
        let tokenizer = TextTokenizer::load(config)?;
        Self::from_tokenizer(tokenizer)
    }

    /// Build a session around an already-loaded tokenizer.
    pub fn from_tokenizer(tokenizer: TextTokenizer) -> Result<Self> {
        let mut fsm = BridgeStateMachine::new();
        fsm.transition(BridgeEvent::ModelLoaded)?;
        Ok(Self { tokenizer, fsm })
    }

    pub fn state(&self) -> BridgeState {
        self.fsm.current_state()
    }

    /// Handle one protocol line.
    ///
    /// Returns `Ok(None)` when the trimmed line is empty, which ends the
    /// session. A tokenization failure also ends the session; there is no
    /// per-request recovery. Calling this after termination is an error.
    pub fn handle_line(&mut self, line: &str) -> Result<Option<Encoded>> {
        if self.fsm.current_state() != BridgeState::Ready {
            return Err(Error::InvalidTransition {
                current: format!("{:?}", self.fsm.current_state()),
                requested: "handle request".to_string(),
            });
        }

        let text = line.trim();
        if text.is_empty() {
            self.fsm.transition(BridgeEvent::InputClosed)?;
            return Ok(None);
        }

        match self.tokenizer.encode(text) {
            Ok(encoded) => Ok(Some(encoded)),
            Err(e) => {
                self.fsm.transition(BridgeEvent::ProcessingFailed)?;
                Err(e)
            }
        }
    }
}

/// Load the tokenizer and serve the line protocol on stdin/stdout.
pub async fn run(config: &BridgeConfig) -> Result<()> {
    let session = BridgeSession::new(config)?;
    let reader = BufReader::new(tokio::io::stdin());
    serve(session, reader, tokio::io::stdout()).await
}

/// Drive a session over arbitrary line-based streams.
///
/// Emits the readiness sentinel, then serves one request per line until the
/// session terminates. Every protocol write is followed by a flush so a
/// pipe-based consumer is never left waiting on a buffered response. Requests
/// are strictly serialized; the tokenizer is never shared.
pub async fn serve<R, W>(mut session: BridgeSession, mut reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    writer.write_all(READY_SENTINEL.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    info!("Tokenizer is ready and waiting for input");

    let mut line = String::new();
    loop {
        line.clear();
        // EOF leaves the line empty, which terminates the session below.
        reader.read_line(&mut line).await?;

        match session.handle_line(&line) {
            Ok(Some(response)) => {
                let payload = match serde_json::to_string(&response) {
                    Ok(payload) => payload,
                    Err(e) => {
                        error!("Tokenizer error: {}", e);
                        break;
                    }
                };
                writer.write_all(payload.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            Ok(None) => {
                debug!("Empty request, closing session");
                break;
            }
            Err(e) => {
                // Failure reason goes to the diagnostic stream only; the
                // caller observes the protocol stream closing.
                error!("Tokenizer error: {}", e);
                break;
            }
        }
    }

    Ok(())
}

//! Scripted driver for pipeline tests.

use async_trait::async_trait;
use ghostwriter_core::{GenerateRequest, GenerateResponse};
use ghostwriter_error::{GenerationError, GenerationErrorKind};
use ghostwriter_interface::GhostwriterDriver;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A driver that replays canned replies and records every request it saw.
pub struct FakeDriver {
    replies: Mutex<VecDeque<Result<String, GenerationErrorKind>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl FakeDriver {
    /// A driver that returns the given texts in order.
    pub fn with_replies(replies: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(|r| Ok(r.to_string())).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// A driver whose first call fails with the given kind.
    pub fn failing(kind: GenerationErrorKind) -> Self {
        Self {
            replies: Mutex::new(VecDeque::from([Err(kind)])),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every request the driver received, in order.
    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

#[async_trait]
impl GhostwriterDriver for FakeDriver {
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerationError> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());

        let next = self
            .replies
            .lock()
            .expect("replies lock")
            .pop_front()
            .unwrap_or(Err(GenerationErrorKind::EmptyCompletion));

        match next {
            Ok(text) => Ok(GenerateResponse::new(text, None)),
            Err(kind) => Err(GenerationError::new(kind)),
        }
    }

    fn name(&self) -> &str {
        "fake"
    }
}

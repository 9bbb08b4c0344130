//! The completion backend seam.

use async_trait::async_trait;
use ghostwriter_core::{GenerateRequest, GenerateResponse};
use ghostwriter_error::GenerationError;
use std::sync::Arc;

/// A backend capable of servicing generation requests.
///
/// Implemented by concrete provider clients; orchestrators are generic over
/// this trait so tests can substitute a scripted driver.
#[async_trait]
pub trait GhostwriterDriver: Send + Sync {
    /// Send a generation request and await the completion.
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerationError>;

    /// Short provider name for logging.
    fn name(&self) -> &str;
}

#[async_trait]
impl<T> GhostwriterDriver for &T
where
    T: GhostwriterDriver + ?Sized,
{
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerationError> {
        (**self).generate(request).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[async_trait]
impl<T> GhostwriterDriver for Arc<T>
where
    T: GhostwriterDriver + ?Sized,
{
    async fn generate(
        &self,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, GenerationError> {
        (**self).generate(request).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

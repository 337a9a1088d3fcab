//! Provider-facing services for dfgate-gw

pub mod presign;
pub mod provider_client;
pub mod result_poller;
pub mod result_projector;
pub mod upload_orchestrator;

pub use presign::{PresignFieldResolver, PresignResult};
pub use provider_client::{ProviderClient, RawResponse};
pub use result_poller::ResultPoller;
pub use result_projector::{ProjectedResult, ResultProjector};
pub use upload_orchestrator::{UploadOrchestrator, UploadOutcome, UploadRequest, UploadResult};

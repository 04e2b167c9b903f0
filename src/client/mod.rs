pub mod controller;
pub mod service;
pub mod view;

pub use controller::{QueryInput, SearchController};
pub use service::{HttpRecommendClient, RecommendationService, ServiceError};
pub use view::{RenderTarget, TerminalRenderer, View};

#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress;
pub mod topic_service;

pub use app_services::AppServices;
pub use error::AppServicesError;
pub use progress::{ProgressService, ProgressSnapshot, SubscriptionId};
pub use topic_service::TopicService;

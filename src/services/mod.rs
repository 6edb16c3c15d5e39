//! Services module
//!
//! This module contains business logic services

pub mod availability;
pub mod event;
pub mod user;

// Re-export commonly used services
pub use availability::AvailabilityService;
pub use event::{EventService, JoinOutcome};
pub use user::UserService;

use crate::config::Settings;
use crate::database::store::EventStore;
use crate::database::DatabaseService;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory<S> {
    pub user_service: UserService<S>,
    pub event_service: EventService<S>,
    pub availability_service: AvailabilityService<S>,
}

impl<S: EventStore + Clone> ServiceFactory<S> {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(store: S, settings: Settings) -> Self {
        let user_service = UserService::new(store.clone());
        let event_service = EventService::new(store.clone(), settings.clone());
        let availability_service = AvailabilityService::new(store, settings);

        Self {
            user_service,
            event_service,
            availability_service,
        }
    }
}

/// The factory wired to the Postgres-backed store
pub type Services = ServiceFactory<DatabaseService>;

//! Session application services.
//!
//! This module contains the concrete session factory and the service that
//! turns a plan index into a session view-model.

mod factory;
mod service;

pub use factory::StandardSessionFactory;
pub use service::SessionService;

pub mod config_service;
pub mod in_memory_plan_provider;
pub mod paths;

pub use crate::config_service::ConfigService;
pub use crate::in_memory_plan_provider::InMemoryPlanProvider;
pub use crate::paths::ReflexPaths;

pub mod traits;
pub mod evolution;
pub mod report;
pub mod manager;

pub use manager::AppConfig;
pub use evolution::EvolutionConfig;
pub use report::{ReportConfig, ReportFormat};
pub use traits::ConfigSection;

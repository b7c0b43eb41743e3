pub mod consumption;
pub mod settings;
pub mod temperature_log;
pub mod view;

pub use consumption::{BucketStat, ConsumptionStats};
pub use settings::DeviceCorrectionSettings;
pub use temperature_log::TemperatureLogStats;
pub use view::ConsumptionView;

pub mod primitives;
pub mod scale;
pub mod time_scale;
pub mod time_unit;
pub mod types;

pub use primitives::{instant_key_millis, instant_to_local, local_to_instant};
pub use scale::LinearScale;
pub use time_scale::{AxisTimeScale, TimeScale};
pub use time_unit::{TimeAxisTimeZone, TimeUnit};
pub use types::Viewport;

pub mod gesture;
pub mod pan;
pub mod sink;
pub mod throttle;
pub mod wheel;

pub use gesture::{GestureConfig, GestureInteractionLayer};
pub use pan::{DEFAULT_DRAG_THRESHOLD_PX, PanGesture};
pub use sink::{CommandSender, CommandSink, command_channel};
pub use throttle::{DEFAULT_THROTTLE_INTERVAL, Throttle};
pub use wheel::{DEFAULT_WHEEL_UNITS_PER_STEP, WheelZoom};

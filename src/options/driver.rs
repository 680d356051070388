use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Frame pacing for the animation driver.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[schemars(title = "Driver", inline)]
#[serde(default)]
pub struct DriverOptions {
    /// Upper bound on rendered frames per second. `0` renders on every
    /// display refresh.
    #[schemars(title = "Target FPS", range(min = 0, max = 240))]
    pub target_fps: u32,
}

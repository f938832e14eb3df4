//! Drawer configuration.

use swipe_drawer_foundation::SwipeConfig;
use web_time::Duration;

/// Delay between `open()` and applying the open classes. Gives the platform
/// a frame to commit the closed layout so the opening transition animates.
pub const OPEN_DELAY: Duration = Duration::from_millis(50);

/// Delay between re-rendering drawer sections and reopening the drawer.
pub const REOPEN_DELAY: Duration = Duration::from_millis(100);

/// Configuration for a drawer and its swipe-to-dismiss gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerConfig {
    pub open_delay: Duration,
    pub reopen_delay: Duration,
    pub swipe: SwipeConfig,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            open_delay: OPEN_DELAY,
            reopen_delay: REOPEN_DELAY,
            swipe: SwipeConfig::default(),
        }
    }
}

impl DrawerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let swipe = &self.swipe;
        if !swipe.close_distance.is_finite() || swipe.close_distance < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                name: "close_distance",
                value: swipe.close_distance,
            });
        }
        if !swipe.close_velocity.is_finite() || swipe.close_velocity < 0.0 {
            return Err(ConfigError::InvalidThreshold {
                name: "close_velocity",
                value: swipe.close_velocity,
            });
        }
        if swipe.stale_gesture_timeout == Some(Duration::ZERO) {
            return Err(ConfigError::ZeroStaleTimeout);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    InvalidThreshold { name: &'static str, value: f32 },
    ZeroStaleTimeout,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidThreshold { name, value } => {
                write!(f, "swipe threshold {name} must be finite and non-negative, got {value}")
            }
            ConfigError::ZeroStaleTimeout => {
                write!(f, "stale gesture timeout must be non-zero; use None to disable")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

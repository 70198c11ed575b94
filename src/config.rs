//! Application-level configuration constants.

// Default values for input state
pub const DEFAULT_SPLIT_COUNT: usize = 1;
pub const DEFAULT_TIP_SLIDER_IDX: usize = TIP_SLIDER_STEPS;

// UI constants
pub const TIP_SLIDER_STEPS: usize = 20;

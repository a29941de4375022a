//! Reusable UI Components
//!
//! ## Components
//!
//! - `TabSelector` - Login / Sign Up switch with arrow marker
//! - `InputField` - Text input with focus handling, password masking, and errors
//! - `StatusIndicator` - Spinner, success, and error indicators
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{dialog_area, render_dialog_frame, DialogFrameConfig};
pub use input_field::{input_field_height, render_input_field, InputFieldConfig};
pub use status_indicator::{render_status_indicator, spinner_char, StatusIndicator};
pub use tab_selector::render_tab_selector;

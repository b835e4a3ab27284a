use super::settings::{PercentField, Setting};
use crate::app::controllers::panel::{StepDirection, Toggle};

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    // Panel
    TogglePanel,
    ResetSettings,

    // Controls
    PercentChanged(PercentField, f64),
    PercentStep(PercentField, StepDirection),
    Flip(Toggle),
    Choose(Setting),

    // Pointer
    PointerMoved(i32, i32),

    WindowClose,
}

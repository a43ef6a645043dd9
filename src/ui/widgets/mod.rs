//! UI widgets for reusable components.

pub mod intensity_picker;
pub mod stat_card;
pub mod workout_card;

pub use intensity_picker::intensity_picker;
pub use stat_card::StatCard;
pub use workout_card::WorkoutCard;

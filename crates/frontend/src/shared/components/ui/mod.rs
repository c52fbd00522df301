pub mod badge;
pub mod button;
pub mod chip;
pub mod input;

pub use badge::StatusBadge;
pub use button::Button;
pub use chip::{Chip, ChipKind};
pub use input::Input;

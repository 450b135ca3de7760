pub mod acquisition;
pub mod display;
pub mod input;

pub use acquisition::AcquisitionTask;
pub use display::DisplayTask;
pub use input::InputTask;

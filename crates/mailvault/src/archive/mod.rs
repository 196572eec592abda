//! Archive orchestration: the scheduled sweep, the single-message event hook,
//! and the periodic scheduler that drives sweeps.

pub mod hook;
pub mod scheduler;
pub mod sweep;

pub use hook::on_new_message;
pub use scheduler::SweepScheduler;
pub use sweep::{MailSource, SweepReport, Sweeper};

mod notifier;
mod timer;

pub use notifier::{NotifierActor, NotifierHandle};
pub use timer::{TimerActor, TimerHandle};

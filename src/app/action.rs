use std::time::Duration;

use crate::app::event::TimerId;
use crate::notify::Notice;

/// Side effects the handler asks the main loop to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Notify(Notice),
    ScheduleTransition { id: TimerId, delay: Duration },
    CancelTransition { id: TimerId },
    Quit,
}

use crossterm::event::Event as CrosstermEvent;

pub type TimerId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// A scheduled transition's delay elapsed
    TransitionDue { id: TimerId },

    /// Tick for UI refresh
    Tick,
}

mod action;
mod signal;

pub use action::CtaAction;
pub use signal::HistorySignal;

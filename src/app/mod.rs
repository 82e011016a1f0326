//! Run modes: the interactive dashboard and the headless one-shot run.
mod dashboard;
mod headless;
mod input;
mod report;
mod state;


pub(crate) use dashboard::run_dashboard;
pub(crate) use headless::run_headless;

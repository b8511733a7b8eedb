//! Core application logic: screen state, key routing and deferred transitions.

pub mod action;
pub mod event;
pub mod handler;
pub mod state;
pub mod timer;

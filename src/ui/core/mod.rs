//! Core UI functionality for the ReEarth application.
//!
//! This module contains the fundamental building blocks for the user interface:
//! the action vocabulary, the component trait and terminal event polling.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Keyboard, mouse and resize event polling
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are read through the [`EventHandler`] and routed by the app
//!
//! Everything runs on the UI thread; an action is fully handled before the
//! next event is read.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, ScreenKind};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};

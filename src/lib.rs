//! ReEarth - A terminal recycling guide
//!
//! This library provides a full-screen terminal application that explains how
//! to recycle plastics, paper, metals and glass, answers fun fact searches for
//! those materials, and shows the common recycling symbols as images.
//!
//! # Modules
//!
//! * [`config`] - Optional configuration file
//! * [`content`] - Category instructions and fun facts
//! * [`search`] - Search validation and fun fact lookup
//! * [`images`] - Loading and encoding the recycling symbols images
//! * [`ui`] - Terminal user interface components

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Static recycling content
pub mod content;

/// Error types for search input and image loading
pub mod error;

/// Terminal image support for the symbols window
pub mod images;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Fun fact search
pub mod search;

/// Terminal user interface components and rendering
pub mod ui;

// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Double pendulum pose manipulator.
//!
//! The runtime owns the pose store, the drag state machine and the animation
//! ticker. A rendering collaborator feeds it pointer events and reads back the
//! current pose to draw.
pub mod event;
pub mod interaction;
pub mod logger;
pub mod sim;
pub mod store;

mod config;

pub use self::config::*;

pub use pendulum_core as core;

pub mod runtime;
pub use self::runtime::Error;
pub use self::runtime::Runtime;

/// Pendulum runtime module containing various constants.
pub mod consts {
    /// Pendulum runtime version.
    ///
    /// # Example
    ///
    /// ```
    /// use pendulum::consts::VERSION;
    ///
    /// println!("Pendulum runtime version: {}", VERSION);
    /// ```
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Global configuration file.
    pub const CONFIG_PATH_GLOBAL: &str = "/etc/pendulum/pendulumd.toml";

    /// Configuration file name looked up in the working directory.
    pub const CONFIG_FILE_LOCAL: &str = "pendulumd.toml";

    /// Nominal animation frame interval in milliseconds, about 60 Hz.
    pub const FRAME_INTERVAL_MS: u64 = 16;
}

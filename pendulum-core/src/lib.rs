// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! Kinematics core of the double pendulum.
//!
//! Planar vector algebra, the pendulum pose and the forward and inverse
//! kinematics solvers that turn a dragged cursor into arm angles.

pub mod algorithm;
pub mod outline;

mod error;
mod pose;
mod vector;

pub use self::error::DomainError;
pub use self::pose::{Arm, Discipline, Pose};
pub use self::vector::Vector;

pub use nalgebra;

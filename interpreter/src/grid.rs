// Copyright (C) 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::fmt::{Display, Formatter};

use anyhow::ensure;
use log::{debug, info};
use roverscript::{Command, Direction};

use crate::config::ConfigSectionGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rover {
    pub x: usize,
    pub y: usize,
}

/// The world the rover drives on. Moves that would leave the grid are
/// ignored.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    rover: Rover,
}

impl Grid {
    pub fn new(width: usize, height: usize, rover: Rover) -> anyhow::Result<Self> {
        ensure!(width > 0 && height > 0, "Grid must be at least 1x1, got {width}x{height}");
        ensure!(
            rover.x < width && rover.y < height,
            "Rover start ({}, {}) lies outside of the {width}x{height} grid", rover.x, rover.y
        );

        Ok(Self {
            width,
            height,
            rover,
        })
    }

    pub fn from_config(config: &ConfigSectionGrid) -> anyhow::Result<Self> {
        Self::new(config.width, config.height, Rover { x: config.start_x, y: config.start_y })
    }

    pub fn handle(&mut self, command: Command) {
        let Some(direction) = command.direction() else {
            info!("Program finished with the rover at ({}, {})", self.rover.x, self.rover.y);
            return;
        };

        let rover = &mut self.rover;
        match direction {
            Direction::Right if rover.x + 1 < self.width => rover.x += 1,
            Direction::Forward if rover.y + 1 < self.height => rover.y += 1,
            Direction::Left if rover.x > 0 => rover.x -= 1,
            Direction::Backward if rover.y > 0 => rover.y -= 1,
            _ => {
                debug!("Rover stays at ({}, {}), cannot move {} off the grid", rover.x, rover.y, direction.name());
                return;
            }
        }

        debug!("Rover moved {} to ({}, {})", direction.name(), rover.x, rover.y);
    }

    #[must_use]
    pub const fn rover(&self) -> Rover {
        self.rover
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = if self.rover == (Rover { x, y }) { '1' } else { '0' };
                write!(f, "{cell}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

//! Control-line abstractions
//!
//! The controller watches three digital inputs. The host reports every
//! transition as a `(Line, Level)` pair.

/// Logic level of a digital line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Logic 0
    Low,
    /// Logic 1
    High,
}

impl Level {
    /// Check if the level is high (logic 1)
    pub const fn is_high(self) -> bool {
        matches!(self, Level::High)
    }

    /// Check if the level is low (logic 0)
    pub const fn is_low(self) -> bool {
        !self.is_high()
    }
}

impl From<bool> for Level {
    fn from(high: bool) -> Self {
        if high {
            Level::High
        } else {
            Level::Low
        }
    }
}

impl From<Level> for bool {
    fn from(level: Level) -> Self {
        level.is_high()
    }
}

/// Control lines monitored by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Chip select (CS), active low. Gates byte reception.
    Select,
    /// Data/command select (DC). Low = command, high = data.
    Mode,
    /// Hardware reset (RST), active low, acts on the falling edge.
    Reset,
}

impl Line {
    /// Level the line idles at when nothing drives it
    ///
    /// CS and RST are pulled up; DC floats and is treated as low.
    pub const fn idle_level(self) -> Level {
        match self {
            Line::Select | Line::Reset => Level::High,
            Line::Mode => Level::Low,
        }
    }

    /// Pin name on the chip package
    pub const fn pin_name(self) -> &'static str {
        match self {
            Line::Select => "CS",
            Line::Mode => "DC",
            Line::Reset => "RST",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_bool() {
        assert_eq!(Level::from(true), Level::High);
        assert_eq!(Level::from(false), Level::Low);
        assert!(bool::from(Level::High));
        assert!(Level::Low.is_low());
    }

    #[test]
    fn test_idle_levels() {
        assert_eq!(Line::Select.idle_level(), Level::High);
        assert_eq!(Line::Reset.idle_level(), Level::High);
        assert_eq!(Line::Mode.idle_level(), Level::Low);
    }
}

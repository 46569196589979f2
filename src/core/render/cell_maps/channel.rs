use crate::core::actions::generate_styled_frame::ports::cell_map::CellMap;
use crate::core::data::colour::Colour;
use crate::core::data::styled_frame::StyledCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Gray,
}

impl Channel {
    #[must_use]
    pub const fn colour(self, intensity: u8) -> Colour {
        match self {
            Self::Red => Colour::new(intensity, 0, 0),
            Self::Green => Colour::new(0, intensity, 0),
            Self::Blue => Colour::new(0, 0, intensity),
            Self::Gray => Colour::grey(intensity),
        }
    }
}

/// Shades escaped cells on one channel, scaled so the frame's largest count is full intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelCellMap {
    channel: Channel,
    max_count: u32,
}

impl ChannelCellMap {
    /// `max_count` of `None` (no escaped cells) normalises against 1 instead of dividing by zero.
    #[must_use]
    pub fn new(channel: Channel, max_count: Option<u32>) -> Self {
        Self {
            channel,
            max_count: max_count.unwrap_or(1).max(1),
        }
    }

    #[must_use]
    pub fn intensity(&self, count: u32) -> u8 {
        let scaled = (f64::from(count) * 255.0 / f64::from(self.max_count)).round();

        scaled.min(255.0) as u8
    }
}

impl CellMap for ChannelCellMap {
    fn map(&self, count: u32) -> StyledCell {
        if count == 0 {
            return StyledCell::Blank;
        }

        StyledCell::Glyph(self.channel.colour(self.intensity(count)))
    }

    fn display_name(&self) -> &str {
        match self.channel {
            Channel::Red => "Red intensity",
            Channel::Green => "Green intensity",
            Channel::Blue => "Blue intensity",
            Channel::Gray => "Gray intensity",
        }
    }
}

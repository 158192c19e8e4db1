/// What a cell really holds, fixed once mines are placed and hints computed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TrueCell {
    Mine,
    #[default]
    Empty,
    /// Count of adjacent mines, always within `1..=8`.
    Numbered(u8),
}

impl TrueCell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    pub const fn from_adjacent_count(count: u8) -> Self {
        match count {
            0 => Self::Empty,
            n => Self::Numbered(n),
        }
    }
}

/// Canonical player-visible state stored by the gameplay engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum EngineCell {
    #[default]
    Hidden,
    Flagged,
    /// Revealed safe cell carrying its hint, zero meaning blank.
    Revealed(u8),
}

impl EngineCell {
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

/// One keystroke of the interactive command alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCommand {
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
    IncreaseIterations,
    DecreaseIterations,
    Quit,
}

impl NavigationCommand {
    pub const ALL: &'static [Self] = &[
        Self::Pan(PanDirection::Up),
        Self::Pan(PanDirection::Down),
        Self::Pan(PanDirection::Left),
        Self::Pan(PanDirection::Right),
        Self::DecreaseIterations,
        Self::IncreaseIterations,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::Quit,
    ];

    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Self::Pan(PanDirection::Up)),
            's' => Some(Self::Pan(PanDirection::Down)),
            'a' => Some(Self::Pan(PanDirection::Left)),
            'd' => Some(Self::Pan(PanDirection::Right)),
            'q' => Some(Self::DecreaseIterations),
            'e' => Some(Self::IncreaseIterations),
            'r' => Some(Self::ZoomIn),
            'f' => Some(Self::ZoomOut),
            'x' => Some(Self::Quit),
            _ => None,
        }
    }

    #[must_use]
    pub const fn key(self) -> char {
        match self {
            Self::Pan(PanDirection::Up) => 'w',
            Self::Pan(PanDirection::Down) => 's',
            Self::Pan(PanDirection::Left) => 'a',
            Self::Pan(PanDirection::Right) => 'd',
            Self::DecreaseIterations => 'q',
            Self::IncreaseIterations => 'e',
            Self::ZoomIn => 'r',
            Self::ZoomOut => 'f',
            Self::Quit => 'x',
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pan(PanDirection::Up) => "Pan up",
            Self::Pan(PanDirection::Down) => "Pan down",
            Self::Pan(PanDirection::Left) => "Pan left",
            Self::Pan(PanDirection::Right) => "Pan right",
            Self::DecreaseIterations => "Decrease iterations by 100",
            Self::IncreaseIterations => "Increase iterations by 100",
            Self::ZoomIn => "Zoom in",
            Self::ZoomOut => "Zoom out",
            Self::Quit => "Quit",
        }
    }
}

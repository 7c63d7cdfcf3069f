use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_preference(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// The value of the `data-color-scheme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The icon of the toggle button, which shows the theme a click switches to.
    pub fn toggle_icon_class(self) -> &'static str {
        match self {
            Self::Light => "fas fa-moon",
            Self::Dark => "fas fa-sun",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeState {
    current: Theme,
}

impl ThemeState {
    pub fn new(initial: Theme) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderVisibility {
    Shown,
    Hidden,
}

impl HeaderVisibility {
    /// The css transform that moves the header in or out of view.
    pub fn transform(self) -> &'static str {
        match self {
            Self::Shown => "translateY(0)",
            Self::Hidden => "translateY(-100%)",
        }
    }
}

/// Tracks the last scroll offset to hide the header while scrolling down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HeaderScrollState {
    last_offset: f64,
}

impl HeaderScrollState {
    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// The header is hidden when scrolling down below `threshold` and shown
    /// again as soon as the visitor scrolls up.
    pub fn update(&mut self, offset: f64, threshold: f64) -> HeaderVisibility {
        let visibility = if offset > self.last_offset && offset > threshold {
            HeaderVisibility::Hidden
        } else {
            HeaderVisibility::Shown
        };
        self.last_offset = offset.max(0.0);
        visibility
    }
}

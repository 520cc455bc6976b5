//! Face geometry and text styling
//!
//! Coordinates are in pixels from the top-left corner of the panel and may
//! be negative: the background image on the 144x168 face hangs 28 px off
//! the left edge so its subject sits behind the text column.

/// A rectangle on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: i16, y: i16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Horizontal center, in pixels
    pub fn center_x(&self) -> i32 {
        self.x as i32 + self.width as i32 / 2
    }

    pub fn right(&self) -> i32 {
        self.x as i32 + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y as i32 + self.height as i32
    }
}

/// Horizontal text alignment within a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Font size class; backends map these onto the fonts they have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// ~14 px, weather line
    Small,
    /// ~16 px, date
    Medium,
    /// ~28 px, time
    Large,
}

/// Logical text colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Red,
    DarkCandyAppleRed,
}

/// Which text layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Time,
    Date,
    Weather,
}

impl Layer {
    /// Drawing order
    pub const ALL: [Layer; 3] = [Layer::Time, Layer::Date, Layer::Weather];
}

/// Placement and styling of one text layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    pub area: Rect,
    pub font: FontSize,
    pub color: Color,
    pub alignment: Alignment,
}

/// Complete face layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceLayout {
    /// Panel size in pixels
    pub width: u16,
    pub height: u16,
    pub background: Rect,
    pub time: TextStyle,
    pub date: TextStyle,
    pub weather: TextStyle,
}

impl FaceLayout {
    /// 144x168 face; red accents when the panel has colour
    pub const fn wrist(color: bool) -> Self {
        let (time_color, accent) = if color {
            (Color::Red, Color::DarkCandyAppleRed)
        } else {
            (Color::Black, Color::Black)
        };

        Self {
            width: 144,
            height: 168,
            background: Rect::new(-28, 0, 144, 168),
            time: TextStyle {
                area: Rect::new(67, 35, 76, 40),
                font: FontSize::Large,
                color: time_color,
                alignment: Alignment::Center,
            },
            date: TextStyle {
                area: Rect::new(67, 70, 75, 25),
                font: FontSize::Medium,
                color: accent,
                alignment: Alignment::Center,
            },
            weather: TextStyle {
                area: Rect::new(67, 93, 75, 25),
                font: FontSize::Small,
                color: accent,
                alignment: Alignment::Center,
            },
        }
    }

    /// 128x64 monochrome OLED: three stacked full-width rows
    pub const fn oled_128x64() -> Self {
        Self {
            width: 128,
            height: 64,
            background: Rect::new(0, 0, 128, 64),
            time: TextStyle {
                area: Rect::new(0, 2, 128, 24),
                font: FontSize::Large,
                color: Color::White,
                alignment: Alignment::Center,
            },
            date: TextStyle {
                area: Rect::new(0, 28, 128, 16),
                font: FontSize::Medium,
                color: Color::White,
                alignment: Alignment::Center,
            },
            weather: TextStyle {
                area: Rect::new(0, 46, 128, 16),
                font: FontSize::Small,
                color: Color::White,
                alignment: Alignment::Center,
            },
        }
    }

    /// Layout for a panel of the given size
    ///
    /// The 144x168 wrist panel gets the full face; anything else gets the
    /// compact OLED rows. `color` only affects the wrist face.
    pub fn for_panel(width: u16, height: u16, color: bool) -> Self {
        match (width, height) {
            (144, 168) => Self::wrist(color),
            _ => Self::oled_128x64(),
        }
    }

    pub fn layer(&self, layer: Layer) -> &TextStyle {
        match layer {
            Layer::Time => &self.time,
            Layer::Date => &self.date,
            Layer::Weather => &self.weather,
        }
    }
}

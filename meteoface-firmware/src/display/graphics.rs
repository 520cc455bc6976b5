//! `DisplayBackend` over any monochrome `embedded-graphics` target

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_7X13};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment as TextAlignment, Baseline, Text, TextStyleBuilder};

use meteoface_display::{
    Alignment, Color, DisplayBackend, DisplayError, FontSize, Layer, Rect, TextStyle,
};

pub struct GraphicsBackend<D> {
    target: D,
}

impl<D> GraphicsBackend<D>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }
}

fn font(size: FontSize) -> &'static MonoFont<'static> {
    match size {
        FontSize::Small => &FONT_6X10,
        FontSize::Medium => &FONT_7X13,
        FontSize::Large => &FONT_10X20,
    }
}

/// Lit pixels for anything but black; the panel background is dark
fn pixel(color: Color) -> BinaryColor {
    match color {
        Color::Black => BinaryColor::Off,
        Color::White | Color::Red | Color::DarkCandyAppleRed => BinaryColor::On,
    }
}

fn rectangle(area: Rect) -> Rectangle {
    Rectangle::new(
        Point::new(area.x as i32, area.y as i32),
        Size::new(area.width as u32, area.height as u32),
    )
}

impl<D> DisplayBackend for GraphicsBackend<D>
where
    D: DrawTarget<Color = BinaryColor> + OriginDimensions,
{
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.target
            .clear(BinaryColor::Off)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_background(&mut self, area: Rect) -> Result<(), DisplayError> {
        rectangle(area)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
            .draw(&mut self.target)
            .map_err(|_| DisplayError::Communication)
    }

    fn draw_text(&mut self, _layer: Layer, text: &str, style: &TextStyle) -> Result<(), DisplayError> {
        let bounds = self.target.bounding_box();
        if bounds.intersection(&rectangle(style.area)).is_zero_sized() {
            return Err(DisplayError::InvalidCoordinates);
        }

        let (x, alignment) = match style.alignment {
            Alignment::Left => (style.area.x as i32, TextAlignment::Left),
            Alignment::Center => (style.area.center_x(), TextAlignment::Center),
            Alignment::Right => (style.area.right(), TextAlignment::Right),
        };
        let y = style.area.y as i32 + style.area.height as i32 / 2;

        let character_style = MonoTextStyle::new(font(style.font), pixel(style.color));
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(text, Point::new(x, y), character_style, text_style)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| DisplayError::Communication)
    }

    fn dimensions(&self) -> (u16, u16) {
        let size = self.target.size();
        (size.width as u16, size.height as u16)
    }
}

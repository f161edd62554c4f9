use std::ops::RangeInclusive;

pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 6..=72;
pub const DEFAULT_FONT_SIZE: u32 = 14;

/// Font families offered by the Font dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontChoice {
    #[default]
    Helvetica,
    HelveticaBold,
    Times,
    TimesItalic,
    Courier,
    CourierBold,
    Screen,
    ScreenBold,
}

impl FontChoice {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica Bold",
            Self::Times => "Times",
            Self::TimesItalic => "Times Italic",
            Self::Courier => "Courier",
            Self::CourierBold => "Courier Bold",
            Self::Screen => "Screen",
            Self::ScreenBold => "Screen Bold",
        }
    }

    pub fn all() -> &'static [FontChoice] {
        &[
            Self::Helvetica,
            Self::HelveticaBold,
            Self::Times,
            Self::TimesItalic,
            Self::Courier,
            Self::CourierBold,
            Self::Screen,
            Self::ScreenBold,
        ]
    }

    /// Position in `all()`, as used by choice widgets.
    pub fn index(&self) -> usize {
        Self::all().iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn from_index(index: i32) -> Option<FontChoice> {
        if index < 0 {
            return None;
        }
        Self::all().get(index as usize).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        (r, g, b)
    }
}

/// Formatting applied to the whole editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub font: FontChoice,
    pub font_size: u32,
    pub text_color: Rgb,
    pub background_color: Rgb,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: FontChoice::default(),
            font_size: DEFAULT_FONT_SIZE,
            text_color: Rgb::BLACK,
            background_color: Rgb::WHITE,
        }
    }
}

impl TextStyle {
    pub fn with_font(self, font: FontChoice, size: u32) -> Self {
        Self {
            font,
            font_size: clamp_font_size(size),
            ..self
        }
    }
}

pub fn clamp_font_size(size: u32) -> u32 {
    size.clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = TextStyle::default();
        assert_eq!(style.font, FontChoice::Helvetica);
        assert_eq!(style.font_size, 14);
        assert_eq!(style.text_color, Rgb::BLACK);
        assert_eq!(style.background_color, Rgb::WHITE);
    }

    #[test]
    fn test_font_index_round_trips_through_choice_widget() {
        for font in FontChoice::all() {
            assert_eq!(FontChoice::from_index(font.index() as i32), Some(*font));
        }
        assert_eq!(FontChoice::from_index(-1), None);
        assert_eq!(FontChoice::from_index(FontChoice::all().len() as i32), None);
    }

    #[test]
    fn test_with_font_clamps_size() {
        let style = TextStyle::default().with_font(FontChoice::Courier, 200);
        assert_eq!(style.font, FontChoice::Courier);
        assert_eq!(style.font_size, 72);
        assert_eq!(TextStyle::default().with_font(FontChoice::Times, 1).font_size, 6);
    }

    #[test]
    fn test_rgb_converts_to_chooser_tuple() {
        let seed: (u8, u8, u8) = Rgb(12, 34, 56).into();
        assert_eq!(seed, (12, 34, 56));
        assert_eq!(Rgb::from(seed), Rgb(12, 34, 56));
        let background: (u8, u8, u8) = TextStyle::default().background_color.into();
        assert_eq!(background, (255, 255, 255));
    }

    #[test]
    fn test_with_font_keeps_colors() {
        let style = TextStyle {
            text_color: Rgb(10, 20, 30),
            ..Default::default()
        };
        let updated = style.with_font(FontChoice::Screen, 12);
        assert_eq!(updated.text_color, Rgb(10, 20, 30));
        assert_eq!(updated.background_color, Rgb::WHITE);
    }
}

use nanofaker_core::LocaleDefinition;

use crate::errors::GenerateResult;
use crate::modules::field::Field;
use crate::random::Random;

const COLOR_NAMES: &[&str] = &[
    "Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Pink", "Brown", "Black", "White",
    "Gray", "Cyan", "Magenta", "Lime", "Navy", "Teal", "Olive", "Maroon", "Aqua", "Silver",
    "Fuchsia", "Gold", "Indigo", "Violet",
];

/// CSS notation drawn by [`ColorModule::css`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CssFormat {
    Hex,
    Rgb,
    Hsl,
}

impl CssFormat {
    pub const ALL: &'static [CssFormat] = &[CssFormat::Hex, CssFormat::Rgb, CssFormat::Hsl];
}

pub struct ColorModule<'a> {
    random: &'a mut Random,
    locale: &'a LocaleDefinition,
}

impl<'a> ColorModule<'a> {
    pub fn new(random: &'a mut Random, locale: &'a LocaleDefinition) -> Self {
        Self { random, locale }
    }

    /// Six uppercase hex digits after `prefix`, e.g. `#A3F5B2`.
    pub fn hex(&mut self, prefix: &str) -> GenerateResult<String> {
        let value = self.random.int(0, 0xFF_FFFF)?;
        Ok(format!("{prefix}{value:06X}"))
    }

    pub fn rgb_components(&mut self) -> GenerateResult<[u8; 3]> {
        Ok([self.channel()?, self.channel()?, self.channel()?])
    }

    /// `rgb(r, g, b)`
    pub fn rgb(&mut self) -> GenerateResult<String> {
        let [r, g, b] = self.rgb_components()?;
        Ok(format!("rgb({r}, {g}, {b})"))
    }

    /// `rgba(r, g, b, a)` with a two-decimal alpha.
    pub fn rgba(&mut self) -> GenerateResult<String> {
        let [r, g, b] = self.rgb_components()?;
        let alpha = self.random.float(0.0, 1.0, 2)?;
        Ok(format!("rgba({r}, {g}, {b}, {alpha})"))
    }

    /// `hsl(h, s%, l%)`
    pub fn hsl(&mut self) -> GenerateResult<String> {
        let (hue, saturation, lightness) = self.hsl_components()?;
        Ok(format!("hsl({hue}, {saturation}%, {lightness}%)"))
    }

    pub fn hsla(&mut self) -> GenerateResult<String> {
        let (hue, saturation, lightness) = self.hsl_components()?;
        let alpha = self.random.float(0.0, 1.0, 2)?;
        Ok(format!("hsla({hue}, {saturation}%, {lightness}%, {alpha})"))
    }

    /// Any of the CSS notations; `None` draws one.
    pub fn css(&mut self, format: Option<CssFormat>) -> GenerateResult<String> {
        let format = match format {
            Some(format) => format,
            None => *self.random.pick(CssFormat::ALL)?,
        };
        match format {
            CssFormat::Hex => self.hex("#"),
            CssFormat::Rgb => self.rgb(),
            CssFormat::Hsl => self.hsl(),
        }
    }

    /// Color name from the locale's commerce colors, else English names.
    pub fn name(&mut self) -> GenerateResult<String> {
        let locale = self.locale;
        let overrides = locale
            .commerce
            .as_ref()
            .map(|commerce| commerce.color.as_slice());
        Field::resolve(overrides, COLOR_NAMES).pick(self.random)
    }

    fn channel(&mut self) -> GenerateResult<u8> {
        self.random.int(0, 255).map(|value| value as u8)
    }

    fn hsl_components(&mut self) -> GenerateResult<(i64, i64, i64)> {
        Ok((
            self.random.int(0, 360)?,
            self.random.int(0, 100)?,
            self.random.int(0, 100)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use nanofaker_core::{CommerceLocale, english};

    use super::*;

    #[test]
    fn hex_is_padded_and_prefixed() {
        let locale = english();
        let mut random = Random::seeded(0);
        let mut color = ColorModule::new(&mut random, &locale);
        for _ in 0..50 {
            let value = color.hex("#").unwrap();
            assert_eq!(value.len(), 7);
            assert!(value[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn functional_notations_are_well_formed() {
        let locale = english();
        let mut random = Random::seeded(27);
        let mut color = ColorModule::new(&mut random, &locale);
        let rgb = color.rgb().unwrap();
        assert!(rgb.starts_with("rgb(") && rgb.ends_with(')'));
        assert_eq!(rgb.matches(", ").count(), 2);
        let hsl = color.hsl().unwrap();
        assert!(hsl.starts_with("hsl(") && hsl.ends_with("%)"));
        assert!(color.rgba().unwrap().starts_with("rgba("));
        let css = color.css(None).unwrap();
        assert!(css.starts_with('#') || css.starts_with("rgb(") || css.starts_with("hsl("));
    }

    #[test]
    fn name_prefers_locale_colors() {
        let locale = LocaleDefinition {
            commerce: Some(CommerceLocale {
                color: vec!["Rojo".to_string()],
                ..CommerceLocale::default()
            }),
            ..LocaleDefinition::default()
        };
        let mut random = Random::seeded(3);
        assert_eq!(ColorModule::new(&mut random, &locale).name().unwrap(), "Rojo");

        let bare = LocaleDefinition::default();
        let name = ColorModule::new(&mut random, &bare).name().unwrap();
        assert!(COLOR_NAMES.contains(&name.as_str()));
    }
}

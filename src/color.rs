// Simple color struct, created from an unsigned 32 representing RRGGBBAA.
// The alpha byte is ignored when formatting for the canvas, since particles
// and links carry their own opacity.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const PRIMARY: Color = Color::from_u32(0x007bffff);

    pub const fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // CSS `rgba()` string usable as a fill or stroke style
    pub fn to_rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpacks_rrggbbaa() {
        let c = Color::from_u32(0x11223344);
        assert_eq!(c, Color { r: 0x11, g: 0x22, b: 0x33, a: 0x44 });
    }

    #[test]
    fn primary_formats_as_css() {
        assert_eq!(Color::PRIMARY.to_rgba(0.5), "rgba(0, 123, 255, 0.5)");
    }
}

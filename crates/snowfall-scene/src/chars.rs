//! Snowflake glyphs.

/// Glyphs for snowflakes, smallest to largest.
pub const FLAKE_CHARS: [char; 3] = ['·', '•', '❄'];

/// Visual size bucket of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// Bucket a sprite scale factor.
    pub fn of(size: f32) -> Self {
        if size < 0.03 {
            SizeClass::Small
        } else if size < 0.04 {
            SizeClass::Medium
        } else {
            SizeClass::Large
        }
    }

    pub fn glyph(self) -> char {
        match self {
            SizeClass::Small => FLAKE_CHARS[0],
            SizeClass::Medium => FLAKE_CHARS[1],
            SizeClass::Large => FLAKE_CHARS[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_buckets() {
        assert_eq!(SizeClass::of(0.02), SizeClass::Small);
        assert_eq!(SizeClass::of(0.03), SizeClass::Medium);
        assert_eq!(SizeClass::of(0.04), SizeClass::Large);
        assert_eq!(SizeClass::of(0.2), SizeClass::Large);
        assert_eq!(SizeClass::Large.glyph(), '❄');
    }
}

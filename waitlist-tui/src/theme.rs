//! Color roles for the dashboard.

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

/// Named color roles used by the views.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Page background.
    pub background: Rgb,
    /// Default text.
    pub text: Rgb,
    /// Secondary text (hints, placeholders, disabled pagination).
    pub muted: Rgb,
    /// Brand teal: title, drawer, header, active page button.
    pub primary: Rgb,
    /// Light teal: header gradient end, accents.
    pub accent: Rgb,
    /// Text on top of primary surfaces.
    pub on_primary: Rgb,
    /// Drawer item hover/active surface.
    pub primary_dark: Rgb,
    /// Cursor row background.
    pub cursor: Rgb,
    /// Selected row background.
    pub selection: Rgb,
    /// Success toasts.
    pub success: Rgb,
    /// Error toasts.
    pub danger: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb::hex(0xF5F5F5),
            text: Rgb::hex(0x1F2937),
            muted: Rgb::hex(0x9CA3AF),
            primary: Rgb::hex(0x1995AD),
            accent: Rgb::hex(0xA1D6E2),
            on_primary: Rgb::new(255, 255, 255),
            primary_dark: Rgb::hex(0x005F73),
            cursor: Rgb::hex(0xA277FF),
            selection: Rgb::hex(0x6E5494),
            success: Rgb::hex(0x15803D),
            danger: Rgb::hex(0xB91C1C),
        }
    }
}

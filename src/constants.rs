//! Centralized constants for the scene
//!
//! Emoji sets, click-effect counts, and timing shared across the pages.

/// Interactive emoji sets for each page.
pub mod emoji {
    pub const GARDEN_FLOWERS: [&str; 8] = ["🌸", "🌺", "🌻", "🌹", "🌷", "🌼", "💐", "🌾"];
    pub const CONSTELLATION_STAR: &str = "⭐";
    pub const BOTTLES: [&str; 5] = ["💌", "💕", "💖", "💗", "💝"];
    pub const FLOATING_HEARTS: [&str; 7] = ["💕", "💖", "💗", "💓", "💝", "💘", "💞"];
    pub const MAGIC_CHARM: &str = "✨";
}

/// Effect counts per click target.
pub mod clicks {
    pub const FLOWER_BURST: u32 = 20;
    pub const FLOWER_CONFETTI: u32 = 10;
    pub const STAR_BURST: u32 = 30;
    pub const BOTTLE_BURST: u32 = 25;
    pub const BOTTLE_CONFETTI: u32 = 15;
    pub const NAV_CONFETTI: u32 = 20;
    pub const NAV_BURST: u32 = 30;
}

/// Timing for page dressing.
pub mod timing {
    /// Clicked-element scale/spin flourish, reverted at the end.
    pub const FLOURISH_SECS: f32 = 0.5;
    /// Element pop-in growth time, after its stagger delay.
    pub const POP_IN_SECS: f32 = 0.3;
    pub const FLOWER_STAGGER: f32 = 0.2;
    pub const STAR_STAGGER: f32 = 0.3;
    pub const BOTTLE_STAGGER: f32 = 0.5;
    /// One floating heart every this many seconds while on the home page.
    pub const FLOAT_INTERVAL: f32 = 2.0;
    pub const FLOAT_LIFETIME: f32 = 5.0;
    pub const SPLASH_SECS: f32 = 2.0;
}

/// Layout of page furniture, in surface coordinates.
pub mod layout {
    pub const NAV_Y: f32 = 40.0;
    pub const NAV_SPACING: f32 = 170.0;
    pub const ELEMENT_FONT_SIZE: f32 = 48.0;
    pub const ELEMENTS_Z: f32 = 5.0;
    pub const SPLASH_Z: f32 = 30.0;
}

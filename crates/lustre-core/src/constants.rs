use crate::color::Srgb;

// Shared camera poses, palettes and tuning values for the showcase pages.

// Intro flight, played once the first model load completes
pub const INTRO_POSITION_FROM: [f32; 3] = [3.0, -0.8, 1.2];
pub const INTRO_POSITION_TO: [f32; 3] = [1.28, -1.7, 5.86];
pub const INTRO_TARGET_FROM: [f32; 3] = [2.5, -0.07, -0.1];
pub const INTRO_TARGET_TO: [f32; 3] = [0.91, 0.03, -0.25];
pub const INTRO_TARGET_TO_MOBILE: [f32; 3] = [-0.21, 0.03, -0.25];
pub const INTRO_DURATION_SECS: f32 = 4.0;

// "Forever" section
pub const FOREVER_POSITION: [f32; 3] = [-1.83, -0.14, 6.15];
pub const FOREVER_TARGET: [f32; 3] = [-0.78, -0.03, -0.12];
pub const FOREVER_TARGET_MOBILE: [f32; 3] = [0.0, 1.5, -0.12];

// "Emotions" section
pub const EMOTIONS_POSITION: [f32; 3] = [-0.06, -1.15, 4.42];
pub const EMOTIONS_TARGET: [f32; 3] = [-0.01, 0.9, 0.07];

// Configurator poses
pub const EXPLORE_POSITION: [f32; 3] = [-0.17, -0.25, 8.5];
pub const EXPLORE_TARGET: [f32; 3] = [0.0, 0.0, 0.0];
pub const EXPLORE_DURATION_SECS: f32 = 2.5;
pub const GEM_VIEW_POSITION: [f32; 3] = [1.6, 3.66, 2.55];
pub const GEM_VIEW_TARGET: [f32; 3] = [-0.01, 0.89, -0.09];
pub const GEM_VIEW_TARGET_MOBILE: [f32; 3] = [0.0, 0.5, -0.09];
pub const GEM_VIEW_DURATION_SECS: f32 = 1.5;
pub const EXIT_DURATION_SECS: f32 = 1.2;
pub const EXIT_ROTATION_SECS: f32 = 0.5;

// Section color grades (silver/gold metals, gem group)
pub const SILVER_BASE: Srgb = Srgb::hex(0xFEFEFE);
pub const GOLD_BASE: Srgb = Srgb::hex(0xE2BF7F);
pub const METAL_BLUSH: Srgb = Srgb::hex(0xD28B8B);
pub const METAL_HONEY: Srgb = Srgb::hex(0xF7C478);
pub const GEM_BASE: Srgb = Srgb::hex(0xFFFFFF);
pub const GEM_ICE: Srgb = Srgb::hex(0x39CFFE);
pub const GEM_MAGENTA: Srgb = Srgb::hex(0xF70DB1);

// Backgrounds
pub const DAY_BACKGROUND: Srgb = Srgb::hex(0xEEB7B5);
pub const NIGHT_BACKGROUND: Srgb = Srgb::hex(0x22052F);

// Gem swatch palette (menu class name, color)
pub const GEM_SWATCHES: &[(&str, Srgb)] = &[
    ("ruby", Srgb::hex(0xF70DB1)),
    ("faint", Srgb::hex(0xCFECEC)),
    ("fancy", Srgb::hex(0xA9CBE2)),
    ("aqua", Srgb::hex(0x62CFFE)),
    ("swiss", Srgb::hex(0x76DCE4)),
    ("yellow", Srgb::hex(0xEFE75B)),
    ("orange", Srgb::hex(0xEB8E17)),
    ("green", Srgb::hex(0x17EBB5)),
    ("emerald", Srgb::hex(0x5ECA00)),
    ("rose", Srgb::hex(0xFA37D7)),
    ("violet", Srgb::hex(0xC200F2)),
];

// Metal pair palette (menu class name, silver color, gold color)
pub const METAL_PAIRS: &[(&str, Srgb, Srgb)] = &[
    ("default", Srgb::hex(0xFEA04D), Srgb::WHITE),
    ("silver-gold", Srgb::WHITE, Srgb::hex(0xFEA04D)),
    ("silver-silver", Srgb::WHITE, Srgb::WHITE),
    ("gold-gold", Srgb::hex(0xFEA04D), Srgb::hex(0xFEA04D)),
    ("rose-silver", Srgb::hex(0xFA8787), Srgb::WHITE),
    ("gold-rose", Srgb::hex(0xFEA04D), Srgb::hex(0xFA8787)),
    ("rose-rose", Srgb::hex(0xFA8787), Srgb::hex(0xFA8787)),
];

// Orbit controls while exploring
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 13.0;

// Scroll smoothing (approximates the page's ~2 s glide)
pub const SCROLL_SMOOTH_RATE_PER_SEC: f32 = 3.0;

// Mobile downgrades
pub const MOBILE_FOV_DEGREES: f32 = 65.0;

// Background music
pub const MUSIC_VOLUME: f64 = 0.1;

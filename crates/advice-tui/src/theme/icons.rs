//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: dice faces from the Miscellaneous Symbols block
//! - `IconMode::NerdFonts`: Material Design dice glyphs (requires Nerd Font installed)

use advice_app::config::IconMode;

const UNICODE_DICE: [&str; 6] = [
    "\u{2680}", // ⚀
    "\u{2681}", // ⚁
    "\u{2682}", // ⚂
    "\u{2683}", // ⚃
    "\u{2684}", // ⚄
    "\u{2685}", // ⚅
];

const NERD_DICE: [&str; 6] = [
    "\u{f01ca}", // nf-md-dice_1
    "\u{f01cb}", // nf-md-dice_2
    "\u{f01cc}", // nf-md-dice_3
    "\u{f01cd}", // nf-md-dice_4
    "\u{f01ce}", // nf-md-dice_5
    "\u{f01cf}", // nf-md-dice_6
];

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Glyph for a dice face; out-of-range faces clamp to 1..=6
    pub fn dice(&self, face: u8) -> &'static str {
        let index = usize::from(face.clamp(1, 6) - 1);
        match self.mode {
            IconMode::NerdFonts => NERD_DICE[index],
            IconMode::Unicode => UNICODE_DICE[index],
        }
    }

    /// Ornament in the middle of the divider
    pub fn pause(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f04c}", // nf-fa-pause
            IconMode::Unicode => "\u{275a}\u{275a}", // ❚❚
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::Unicode)
    }
}

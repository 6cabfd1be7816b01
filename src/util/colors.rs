use ratatui::style::Color;

pub const GOLD: Color = Color::from_u32(0x00d4af37);
pub const NAVY: Color = Color::from_u32(0x001e2a4a);
pub const CREAM: Color = Color::from_u32(0x00fdfbf7);
pub const PAPER: Color = Color::from_u32(0x00f5f5f4);
pub const STONE: Color = Color::from_u32(0x00a8a29e);
pub const STONE_DARK: Color = Color::from_u32(0x0057534e);
pub const SURFACE_LIGHT: Color = Color::from_u32(0x00ffffff);
pub const SURFACE_DARK: Color = Color::from_u32(0x00292524);
pub const WARM_DARK: Color = Color::from_u32(0x001c1917);

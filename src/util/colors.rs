use ratatui::style::Color;

pub const PRIMARY: Color = Color::from_u32(0x00c084fc);
pub const SECONDARY: Color = Color::from_u32(0x007c3aed);
pub const NEUTRAL: Color = Color::from_u32(0x004a4a4a);
pub const BACKGROUND: Color = Color::from_u32(0x00121212);
pub const ACCENT: Color = Color::from_u32(0x00f0abfc);
pub const SUCCESS: Color = Color::from_u32(0x004ade80);
pub const ERROR: Color = Color::from_u32(0x00f87171);

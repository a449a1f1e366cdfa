// Colors the canvas can be tinted with, by spoken name.

const PALETTE: [(&str, u32); 16] = [
    ("black", 0x000000),
    ("blue", 0x0000FF),
    ("green", 0x00FF00),
    ("cyan", 0x00FFFF),
    ("indigo", 0x4B0082),
    ("magenta", 0x6A0DAD),
    ("maroon", 0x800000),
    ("grey", 0x808080),
    ("brown", 0xA52A2A),
    ("violet", 0xEE82EE),
    ("red", 0xFF0000),
    ("purple", 0xFF00FF),
    ("orange", 0xFFA500),
    ("pink", 0xFFC0CB),
    ("yellow", 0xFFFF00),
    ("white", 0xFFFFFF),
];

/// Looks up a color name, ignoring case and surrounding whitespace.
pub fn tint_for(color: &str) -> Option<u32> {
    let color = color.trim();
    PALETTE
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(color))
        .map(|(_, tint)| *tint)
}

//! Packed light color conversion
//!
//! UVTT stores light colors as 8-hex-digit `RRGGBBAA` strings; the
//! internal model keeps a `#RRGGBB` color and a separate 0..1 opacity.
//! Conversion is exact except for the intentional minimum-opacity clamp
//! applied on import so lights never arrive invisible.

use tracing::warn;

/// Minimum opacity applied when importing packed colors
pub const MIN_IMPORT_OPACITY: f32 = 0.2;

/// Parse a packed `RRGGBBAA` string into `("#rrggbb", opacity)`
///
/// Opacity is floored at [`MIN_IMPORT_OPACITY`]. Malformed (non-8-hex)
/// strings fall back to opaque white rather than erroring.
pub fn unpack_color(packed: &str) -> (String, f32) {
    if packed.len() == 8 && packed.chars().all(|c| c.is_ascii_hexdigit()) {
        let rgb = packed[..6].to_ascii_lowercase();
        // All-hex 8-char strings always parse
        let alpha = u8::from_str_radix(&packed[6..8], 16).unwrap_or(255);
        let opacity = (alpha as f32 / 255.0).max(MIN_IMPORT_OPACITY);
        (format!("#{rgb}"), opacity)
    } else {
        warn!(color = packed, "malformed packed color, using opaque white");
        ("#ffffff".to_string(), 1.0)
    }
}

/// Pack a `#RRGGBB` color and 0..1 opacity into `rrggbbaa`
///
/// Opacity is clamped to 0..1; an unparseable color component becomes
/// white so export never fails.
pub fn pack_color(color: &str, opacity: f32) -> String {
    let rgb = color.strip_prefix('#').unwrap_or(color);
    let rgb = if rgb.len() == 6 && rgb.chars().all(|c| c.is_ascii_hexdigit()) {
        rgb.to_ascii_lowercase()
    } else {
        warn!(color, "malformed light color, exporting as white");
        "ffffff".to_string()
    };
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!("{rgb}{alpha:02x}")
}

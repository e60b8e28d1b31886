//! Texture-name rules shared by the legacy decoder, the legacy encoder and
//! the engine rebuild.

use crate::core::triangle::RenderState;

/// Primary texture that implies alpha blending in legacy files.
pub const ALPHA_TEXTURE: &str = "plant.png";

/// Replaces the retired `bmp` and `tga` extensions with `png`, wherever they occur.
pub fn normalize_extension(name: &str) -> String {
    name.replace("bmp", "png").replace("tga", "png")
}

/// Name of the numbered "dirt" overlay texture, e.g. `dirty05.png`.
/// The number has at least two digits, not counting the sign.
pub fn dirty_texture_name(index: i32) -> String {
    let sign = if index < 0 { "-" } else { "" };
    format!("dirty{}{:02}.png", sign, index.unsigned_abs())
}

/// Recovers the overlay index from a name of the form `dirty<number>...`.
/// Names without that prefix, or without a number after it, give 0.
pub fn dirty_texture_index(name: &str) -> i32 {
    let Some(rest) = name.strip_prefix("dirty") else {
        return 0;
    };
    let rest = rest.trim_start();
    let sign_len = match rest.as_bytes().first() {
        Some(b'+') | Some(b'-') => 1,
        _ => 0,
    };
    let digits_len = rest[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return 0;
    }
    rest[..sign_len + digits_len].parse::<i32>().unwrap_or(0)
}

/// Render-state bit implied by an overlay index: 1..=10 are dark overlays,
/// 11..=20 light ones.
pub fn secondary_state(index: i32) -> RenderState {
    match index {
        1..=10 => RenderState::DUAL_BLACK,
        11..=20 => RenderState::DUAL_WHITE,
        _ => RenderState::NORMAL,
    }
}

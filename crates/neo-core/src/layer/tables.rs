//! Compiled-in Neo translation tables.
//!
//! All tables are indexed by scan code (set 1) as produced by a German ISO
//! keyboard.  Rows of sixteen entries cover 0x00–0x0F, 0x10–0x1F, 0x20–0x2F and
//! 0x30–0x3F.  `'\0'` marks a position without a mapping.
//!
//! | Scan codes  | Physical keys (QWERTZ labels)       |
//! |-------------|-------------------------------------|
//! | 0x02–0x0D   | `1` … `0`, `ß`, `´`                 |
//! | 0x10–0x1B   | `Q` … `P`, `Ü`, `+`                 |
//! | 0x1E–0x28   | `A` … `L`, `Ö`, `Ä`                 |
//! | 0x2C–0x35   | `Y` … `M`, `,`, `.`, `-`            |
//! | 0x39        | Space                               |

use crate::keymap::VirtualKey;

/// Number of scan codes covered by every table.
pub const TABLE_LEN: usize = 64;

/// Scan code → character.
pub type CharTable = [Option<char>; TABLE_LEN];

/// Scan code → virtual key.
pub type VirtualKeyTable = [Option<VirtualKey>; TABLE_LEN];

const fn chars(raw: [char; TABLE_LEN]) -> CharTable {
    let mut table = [None; TABLE_LEN];
    let mut i = 0;
    while i < TABLE_LEN {
        if raw[i] != '\0' {
            table[i] = Some(raw[i]);
        }
        i += 1;
    }
    table
}

/// Layer 1: lowercase letters and digits.
pub static LAYER1: CharTable = chars([
    '\0', '\0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-', '`', '\0', '\0',
    'x', 'v', 'l', 'c', 'w', 'k', 'h', 'g', 'f', 'q', 'ß', '´', '\0', '\0', 'u', 'i',
    'a', 'e', 'o', 's', 'n', 'r', 't', 'd', 'y', '\0', '\0', '\0', 'ü', 'ö', 'ä', 'p',
    'z', 'b', 'm', ',', '.', 'j', '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
]);

/// Layer 2 (Shift): uppercase letters and typographic symbols.
pub static LAYER2: CharTable = chars([
    '\0', '\0', '°', '§', 'ℓ', '»', '«', '$', '€', '„', '“', '”', '—', '\0', '\0', '\0',
    'X', 'V', 'L', 'C', 'W', 'K', 'H', 'G', 'F', 'Q', 'ẞ', '´', '\0', '\0', 'U', 'I',
    'A', 'E', 'O', 'S', 'N', 'R', 'T', 'D', 'Y', '\0', '\0', '\0', 'Ü', 'Ö', 'Ä', 'P',
    'Z', 'B', 'M', '\0', '•', 'J', '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
]);

/// Layer 3 (Mod3): programming symbols.
pub static LAYER3: CharTable = chars([
    '\0', '\0', '¹', '²', '³', '›', '‹', '¢', '¥', '‚', '‘', '’', '‐', '\0', '\0', '\0',
    '…', '_', '[', ']', '^', '!', '<', '>', '=', '&', 'ẞ', '´', '\0', '\0', '\\', '/',
    '{', '}', '*', '?', '(', ')', '-', ':', '@', '\0', '\0', '\0', '#', '$', '|', '~',
    '`', '+', '%', '"', '\'', ';', '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0', '\0',
]);

/// Layer 4 (Mod4): navigation on the left hand, numeric keypad on the right.
pub static LAYER4: VirtualKeyTable = {
    use VirtualKey as Vk;
    let mut t = [None; TABLE_LEN];

    // ── Top letter row ───────────────────────────────────────────────────────
    t[0x11] = Some(Vk::BACK);
    t[0x12] = Some(Vk::UP);
    t[0x13] = Some(Vk::DELETE);
    t[0x16] = Some(Vk::NUMPAD7);
    t[0x17] = Some(Vk::NUMPAD8);
    t[0x18] = Some(Vk::NUMPAD9);

    // ── Home row ─────────────────────────────────────────────────────────────
    t[0x1E] = Some(Vk::HOME);
    t[0x1F] = Some(Vk::LEFT);
    t[0x20] = Some(Vk::DOWN);
    t[0x21] = Some(Vk::RIGHT);
    t[0x22] = Some(Vk::END);
    t[0x24] = Some(Vk::NUMPAD4);
    t[0x25] = Some(Vk::NUMPAD5);
    t[0x26] = Some(Vk::NUMPAD6);

    // ── Bottom row ───────────────────────────────────────────────────────────
    t[0x2C] = Some(Vk::ESCAPE);
    t[0x2D] = Some(Vk::TAB);
    t[0x2F] = Some(Vk::RETURN);
    t[0x32] = Some(Vk::NUMPAD1);
    t[0x33] = Some(Vk::NUMPAD2);
    t[0x34] = Some(Vk::NUMPAD3);

    // Space
    t[0x39] = Some(Vk::NUMPAD0);
    t
};

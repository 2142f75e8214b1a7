//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306
//! display controller, plus builders for the multi-byte sequences the
//! driver sends (initialization, address window).
//!
//! ## Command Structure
//!
//! Every I2C transaction starts with a control byte selecting how the
//! controller interprets the rest of the transfer:
//! 1. [`CONTROL_CMD_STREAM`] (0x00): remaining bytes are commands
//! 2. [`CONTROL_DATA_STREAM`] (0x40): remaining bytes are GDDRAM pixel data
//!
//! ## Example
//!
//! ```
//! use ssd1306_i2c::command;
//!
//! // Address window covering the whole 128x64 panel
//! let window = command::address_window(0, 127, 0, 7);
//! assert_eq!(window, [0x21, 0, 127, 0x22, 0, 7]);
//! ```

use crate::config::Config;

/// Control byte announcing a command stream (D/C# = 0)
pub const CONTROL_CMD_STREAM: u8 = 0x00;

/// Control byte announcing a GDDRAM data stream (D/C# = 1)
pub const CONTROL_DATA_STREAM: u8 = 0x40;

// Fundamental commands

/// Display off, sleep mode (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on (0xAF)
///
/// Must come after the charge pump is enabled, otherwise the panel
/// stays dark.
pub const DISPLAY_ON: u8 = 0xAF;

/// Set contrast command (0x81)
///
/// Requires 1 byte: contrast level 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from GDDRAM contents (0xA4)
pub const DISPLAY_RAM: u8 = 0xA4;

/// Normal (non-inverted) display (0xA6)
pub const DISPLAY_NORMAL: u8 = 0xA6;

/// Inverted display: RAM 0 lights the pixel (0xA7)
pub const DISPLAY_INVERTED: u8 = 0xA7;

// Addressing commands

/// Set memory addressing mode (0x20)
///
/// Requires 1 byte: 0x00 = horizontal, 0x01 = vertical, 0x02 = page.
/// The driver relies on horizontal mode; the address pointer then
/// auto-increments across the full column/page window during data writes.
pub const SET_MEMORY_ADDR_MODE: u8 = 0x20;

/// Horizontal addressing mode data byte for [`SET_MEMORY_ADDR_MODE`]
pub const ADDR_MODE_HORIZONTAL: u8 = 0x00;

/// Set column address range (0x21)
///
/// Requires 2 bytes: start column, end column (0..=127).
pub const SET_COLUMN_RANGE: u8 = 0x21;

/// Set page address range (0x22)
///
/// Requires 2 bytes: start page, end page (0..=7 on a 64-row panel).
pub const SET_PAGE_RANGE: u8 = 0x22;

// Hardware configuration commands

/// Set display start line 0 (0x40)
///
/// The start line is encoded in the low 6 bits of the opcode itself;
/// 0x40 selects line 0.
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap: column 127 mapped to SEG0 (0xA1)
pub const SEGMENT_REMAP: u8 = 0xA1;

/// Segment remap off: column 0 mapped to SEG0 (0xA0)
pub const SEGMENT_NORMAL_REMAP: u8 = 0xA0;

/// Set multiplex ratio (0xA8)
///
/// Requires 1 byte: number of rows - 1.
pub const SET_MUX_RATIO: u8 = 0xA8;

/// COM scan direction: COM0 to COM\[N-1\] (0xC0)
pub const COM_SCAN_NORMAL: u8 = 0xC0;

/// COM scan direction remapped: COM\[N-1\] to COM0 (0xC8)
pub const COM_SCAN_REMAP: u8 = 0xC8;

/// Set vertical display offset (0xD3)
///
/// Requires 1 byte: COM shift 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Requires 1 byte; 0x12 = alternative COM pin layout, no left/right
/// remap (the layout used by common 128x64 modules).
pub const SET_COM_PIN_MAP: u8 = 0xDA;

// Timing and driving scheme commands

/// Set display clock divider / oscillator frequency (0xD5)
///
/// Requires 1 byte: low nibble divide ratio, high nibble oscillator
/// frequency.
pub const SET_CLOCK_DIVIDER: u8 = 0xD5;

/// Set pre-charge period (0xD9)
///
/// Requires 1 byte: low nibble phase 1, high nibble phase 2, in DCLKs.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
///
/// Requires 1 byte.
pub const SET_VCOMH_DESELECT: u8 = 0xDB;

/// Set charge pump (0x8D)
///
/// Requires 1 byte: 0x14 = enable, 0x10 = disable. The on-chip charge
/// pump drives the OLED supply voltage and must be enabled before
/// [`DISPLAY_ON`].
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enable data byte for [`SET_CHARGE_PUMP`]
pub const CHARGE_PUMP_ON: u8 = 0x14;

// Scrolling commands

/// Deactivate scroll (0x2E)
///
/// GDDRAM writes while a scroll is active corrupt the displayed image,
/// so initialization always stops scrolling.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Number of bytes in the initialization sequence
pub const INIT_SEQUENCE_LEN: usize = 27;

/// Build the full initialization command sequence.
///
/// The order is load-bearing: the charge pump must be enabled before
/// [`DISPLAY_ON`], and the addressing mode must be set before any data
/// write. Panel-tweakable data bytes (clock divider, COM pin map,
/// contrast, pre-charge, VCOMH) come from the [`Config`].
pub fn init_sequence(config: &Config) -> [u8; INIT_SEQUENCE_LEN] {
    [
        DISPLAY_OFF,
        SET_CLOCK_DIVIDER,
        config.clock_divider,
        SET_MUX_RATIO,
        (crate::HEIGHT - 1) as u8,
        SET_DISPLAY_OFFSET,
        0x00,
        SET_START_LINE,
        0x00,
        SET_CHARGE_PUMP,
        config.charge_pump,
        SET_MEMORY_ADDR_MODE,
        ADDR_MODE_HORIZONTAL,
        SEGMENT_REMAP,
        COM_SCAN_REMAP,
        SET_COM_PIN_MAP,
        config.com_pin_map,
        SET_CONTRAST,
        config.contrast,
        SET_PRECHARGE,
        config.precharge,
        SET_VCOMH_DESELECT,
        config.vcomh_deselect,
        DISPLAY_RAM,
        DISPLAY_NORMAL,
        DEACTIVATE_SCROLL,
        DISPLAY_ON,
    ]
}

/// Build the column-range/page-range command pair.
///
/// Establishes where subsequent GDDRAM data bytes land. Issued before
/// every bulk pixel write and every line-wrapped text write.
pub fn address_window(col_start: u8, col_end: u8, page_start: u8, page_end: u8) -> [u8; 6] {
    [
        SET_COLUMN_RANGE,
        col_start,
        col_end,
        SET_PAGE_RANGE,
        page_start,
        page_end,
    ]
}

/// Command byte for horizontal mirroring.
///
/// NOTE: on the reference module, "invert" selects the *normal* segment
/// remap (0xA0) and disabling it selects the remapped variant (0xA1).
/// This is a wiring convention of the panel, not a literal color-invert
/// instruction ([`DISPLAY_INVERTED`] exists for that); the mapping is
/// preserved exactly. Verify against your hardware before relying on it.
pub fn invert(enable: bool) -> u8 {
    if enable {
        SEGMENT_NORMAL_REMAP
    } else {
        SEGMENT_REMAP
    }
}

/// Command byte for vertical scan direction.
///
/// Same convention as [`invert`]: enabling the flip selects the normal
/// COM scan (0xC0), disabling it restores the remapped scan (0xC8) used
/// by the init sequence.
pub fn scan_flip(enable: bool) -> u8 {
    if enable {
        COM_SCAN_NORMAL
    } else {
        COM_SCAN_REMAP
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;

    #[test]
    fn init_sequence_order_is_preserved() {
        let seq = init_sequence(&Builder::new().build());
        assert_eq!(seq.len(), INIT_SEQUENCE_LEN);
        assert_eq!(seq[0], DISPLAY_OFF);
        assert_eq!(seq[seq.len() - 1], DISPLAY_ON);

        // Charge pump enable must precede display-on.
        let pump = seq.iter().position(|&b| b == SET_CHARGE_PUMP);
        let on = seq.iter().rposition(|&b| b == DISPLAY_ON);
        assert!(pump < on);

        // Mux ratio is rows - 1.
        let mux = seq
            .iter()
            .position(|&b| b == SET_MUX_RATIO)
            .map(|i| seq[i + 1]);
        assert_eq!(mux, Some(63));
    }

    #[test]
    fn init_sequence_uses_config_bytes() {
        let config = Builder::new().contrast(0x10).com_pin_map(0x02).build();
        let seq = init_sequence(&config);
        let contrast_idx = seq.iter().position(|&b| b == SET_CONTRAST).map(|i| i + 1);
        assert_eq!(contrast_idx.map(|i| seq[i]), Some(0x10));
    }

    #[test]
    fn address_window_layout() {
        assert_eq!(address_window(0, 127, 0, 7), [0x21, 0, 127, 0x22, 0, 7]);
        assert_eq!(address_window(0, 127, 3, 7), [0x21, 0, 127, 0x22, 3, 7]);
    }

    #[test]
    fn invert_mapping_matches_reference_module() {
        // Controller-specific convention: enabling "invert" issues the
        // normal segment remap.
        assert_eq!(invert(true), SEGMENT_NORMAL_REMAP);
        assert_eq!(invert(false), SEGMENT_REMAP);
    }

    #[test]
    fn scan_flip_mapping_matches_reference_module() {
        assert_eq!(scan_flip(true), COM_SCAN_NORMAL);
        assert_eq!(scan_flip(false), COM_SCAN_REMAP);
    }
}

//! Display configuration types and builder

/// Display configuration
///
/// Holds the panel-tweakable data bytes of the initialization sequence.
/// The defaults are the values used by common 128x64 modules; most
/// applications can use `Builder::new().build()` unchanged.
#[derive(Clone, Debug)]
pub struct Config {
    /// Clock divider / oscillator frequency byte (command 0xD5)
    pub clock_divider: u8,
    /// Charge pump setting byte (command 0x8D)
    pub charge_pump: u8,
    /// COM pins hardware configuration byte (command 0xDA)
    pub com_pin_map: u8,
    /// Initial contrast level (command 0x81)
    pub contrast: u8,
    /// Pre-charge period byte (command 0xD9)
    pub precharge: u8,
    /// VCOMH deselect level byte (command 0xDB)
    pub vcomh_deselect: u8,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().build()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1306_i2c::Builder;
///
/// let config = Builder::new().contrast(0x8F).build();
/// assert_eq!(config.contrast, 0x8F);
/// ```
#[must_use]
pub struct Builder {
    /// Clock divider / oscillator frequency byte
    clock_divider: u8,
    /// Charge pump setting byte
    charge_pump: u8,
    /// COM pins hardware configuration byte
    com_pin_map: u8,
    /// Initial contrast level
    contrast: u8,
    /// Pre-charge period byte
    precharge: u8,
    /// VCOMH deselect level byte
    vcomh_deselect: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            // Default oscillator frequency, divide ratio 1
            clock_divider: 0x80,
            // Internal charge pump enabled
            charge_pump: crate::command::CHARGE_PUMP_ON,
            // Alternative COM pin layout (128x64 modules)
            com_pin_map: 0x12,
            contrast: 0xCF,
            // Phase 1 = 1 DCLK, phase 2 = 15 DCLK (charge-pump operation)
            precharge: 0xF1,
            // ~0.77 x Vcc
            vcomh_deselect: 0x40,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the clock divider / oscillator frequency byte
    pub fn clock_divider(mut self, value: u8) -> Self {
        self.clock_divider = value;
        self
    }

    /// Set the charge pump byte
    ///
    /// 0x14 enables the internal pump; 0x10 disables it for panels with
    /// external supply.
    pub fn charge_pump(mut self, value: u8) -> Self {
        self.charge_pump = value;
        self
    }

    /// Set the COM pins hardware configuration byte
    pub fn com_pin_map(mut self, value: u8) -> Self {
        self.com_pin_map = value;
        self
    }

    /// Set the initial contrast level
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set the pre-charge period byte
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set the VCOMH deselect level byte
    pub fn vcomh_deselect(mut self, value: u8) -> Self {
        self.vcomh_deselect = value;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        Config {
            clock_divider: self.clock_divider,
            charge_pump: self.charge_pump,
            com_pin_map: self.com_pin_map,
            contrast: self.contrast,
            precharge: self.precharge,
            vcomh_deselect: self.vcomh_deselect,
        }
    }
}

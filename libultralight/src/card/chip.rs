// libultralight/src/card/chip.rs

/// Static description of the chip and this driver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChipInfo {
    /// Chip name.
    pub chip_name: &'static str,
    /// Manufacturer.
    pub manufacturer_name: &'static str,
    /// Host interface.
    pub interface: &'static str,
    /// Minimum supply voltage in volts.
    pub supply_voltage_min_v: f32,
    /// Maximum supply voltage in volts.
    pub supply_voltage_max_v: f32,
    /// Maximum current in mA.
    pub max_current_ma: f32,
    /// Minimum operating temperature in C.
    pub temperature_min: f32,
    /// Maximum operating temperature in C.
    pub temperature_max: f32,
    /// Driver version, major * 1000 + minor * 100.
    pub driver_version: u32,
}

const CHIP_INFO: ChipInfo = ChipInfo {
    chip_name: "NXP Ultralight",
    manufacturer_name: "NXP",
    interface: "RF",
    supply_voltage_min_v: 3.3,
    supply_voltage_max_v: 4.0,
    max_current_ma: 30.0,
    temperature_min: -25.0,
    temperature_max: 70.0,
    driver_version: 1000,
};

/// Chip description; needs no handle and performs no I/O.
pub fn info() -> ChipInfo {
    CHIP_INFO
}

//! One-shot hardware peripheral initialization.
//!
//! Configures the three LED output pins and installs the internal
//! temperature sensor using raw ESP-IDF sys calls.  Called once from
//! `main()` before the timers start.
//!
//! Acquisition order is LED lines first (RED, YELLOW, GREEN), then the
//! temperature sensor.  Any failure releases everything already acquired
//! in reverse order and surfaces a typed error — partial setup never
//! survives a failed init.  [`release_peripherals`] tears down in the
//! same reverse order at shutdown; the timers must already be stopped.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    GpioConfigFailed(i32),
    TempSensorInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GpioConfigFailed(rc) => write!(f, "LED GPIO config failed (rc={})", rc),
            Self::TempSensorInitFailed(rc) => {
                write!(f, "temperature sensor init failed (rc={})", rc)
            }
        }
    }
}

// ── LED output lines ──────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_led_outputs() -> Result<(), HwInitError> {
    for (i, &pin) in pins::LED_GPIOS.iter().enumerate() {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_OUTPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_DISABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            // Unwind the lines acquired so far, newest first.
            for &done in pins::LED_GPIOS[..i].iter().rev() {
                unsafe { gpio_reset_pin(done) };
            }
            return Err(HwInitError::GpioConfigFailed(ret));
        }
        // Boot indication: every line starts asserted.
        unsafe { gpio_set_level(pin, 1) };
    }
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_write(pin: i32, high: bool) {
    // SAFETY: gpio_set_level writes to an already-configured output pin;
    // pin was validated during init_led_outputs().  Register writes are
    // safe from timer-callback context.
    unsafe {
        gpio_set_level(pin, if high { 1 } else { 0 });
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn gpio_write(_pin: i32, _high: bool) {}

// ── Internal temperature sensor ───────────────────────────────

#[cfg(target_os = "espidf")]
static mut TEMP_HANDLE: temperature_sensor_handle_t = core::ptr::null_mut();

/// SAFETY: TEMP_HANDLE is written once in `init_temp_sensor()` before the
/// thermal timer is armed; afterwards it is only read.
#[cfg(target_os = "espidf")]
unsafe fn temp_handle() -> temperature_sensor_handle_t {
    unsafe { TEMP_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_temp_sensor() -> Result<(), HwInitError> {
    let cfg = temperature_sensor_config_t {
        range_min: -10,
        range_max: 100,
        ..Default::default()
    };
    // SAFETY: TEMP_HANDLE is only written here, once at boot.
    let ret = unsafe { temperature_sensor_install(&cfg, &raw mut TEMP_HANDLE) };
    if ret != ESP_OK as i32 {
        return Err(HwInitError::TempSensorInitFailed(ret));
    }
    let ret = unsafe { temperature_sensor_enable(temp_handle()) };
    if ret != ESP_OK as i32 {
        unsafe { temperature_sensor_uninstall(temp_handle()) };
        return Err(HwInitError::TempSensorInitFailed(ret));
    }
    Ok(())
}

/// Read the die temperature in milli-degrees.  `Err` carries the IDF
/// return code.
#[cfg(target_os = "espidf")]
pub fn temp_read_millidegrees() -> Result<i32, i32> {
    let mut celsius: f32 = 0.0;
    // SAFETY: temp_handle() contract — handle installed before timers run.
    let ret = unsafe { temperature_sensor_get_celsius(temp_handle(), &mut celsius) };
    if ret != ESP_OK as i32 {
        return Err(ret);
    }
    Ok((celsius * 1000.0) as i32)
}

// ── Init / teardown ───────────────────────────────────────────

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<(), HwInitError> {
    // SAFETY: Called once from main() before the timers start; single-threaded.
    unsafe {
        init_led_outputs()?;
        if let Err(e) = init_temp_sensor() {
            // Sensor failed after the lines were acquired — unwind them.
            for &pin in pins::LED_GPIOS.iter().rev() {
                gpio_reset_pin(pin);
            }
            return Err(e);
        }
    }
    info!("hw_init: LED lines asserted, temperature sensor enabled");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<(), HwInitError> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

/// Release every peripheral in reverse order of acquisition.  The timers
/// must be stopped first — see `hw_timer::stop_timers`.
#[cfg(target_os = "espidf")]
pub fn release_peripherals() {
    // SAFETY: Called after stop_timers() has joined both callbacks, so no
    // firing can touch the handle or the pins from here on.
    unsafe {
        let th = temp_handle();
        if !th.is_null() {
            temperature_sensor_disable(th);
            temperature_sensor_uninstall(th);
        }
        for &pin in pins::LED_GPIOS.iter().rev() {
            gpio_reset_pin(pin);
        }
    }
}

#[cfg(not(target_os = "espidf"))]
pub fn release_peripherals() {}

//! 1 kHz hardware tick timer.
//!
//! Auto-reload alarm whose ISR feeds [`TickAccumulator::tick`]. The HAL
//! acknowledges the interrupt before invoking the callback.
//!
//! [`TickAccumulator::tick`]: crate::tick::TickAccumulator::tick

#[cfg(target_os = "espidf")]
use crate::config::TickTimerConfig;
#[cfg(target_os = "espidf")]
use crate::tick::TickAccumulator;

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::peripheral::Peripheral;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::timer::{self, Timer, TimerDriver};
#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::EspError;

/// Start the tick timer. The returned driver must be kept alive;
/// dropping it stops the interrupt.
#[cfg(target_os = "espidf")]
pub fn start_tick_timer<'d, T: Timer>(
    timer: impl Peripheral<P = T> + 'd,
    ticks: &'static TickAccumulator,
    config: &TickTimerConfig,
) -> Result<TimerDriver<'d>, EspError> {
    let mut driver = TimerDriver::new(timer, &timer::config::Config::new().auto_reload(true))?;

    driver.set_counter(0)?;
    driver.set_alarm(config.alarm_count(driver.tick_hz()))?;

    // SAFETY: the callback only touches atomics in a 'static and never blocks.
    unsafe {
        driver.subscribe(move || ticks.tick())?;
    }

    driver.enable_interrupt()?;
    driver.enable_alarm(true)?;
    driver.enable(true)?;

    Ok(driver)
}

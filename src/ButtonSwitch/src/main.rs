use anyhow::{Context, Result};
use gpio_sysfs::debounce;
use gpio_sysfs::{
    DebounceWindow, Direction, GpioPaths, Level, PinControl, SysfsPins, export_pin, unexport_pin,
};
use log::{error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const LED_PIN: u8 = 4;
const SWITCH_PIN: u8 = 17;
// back to back polling; file I/O paces the loop
const POLL_INTERVAL: Duration = Duration::ZERO;

fn main() -> Result<()> {
    init_logger();
    println!("Program is starting...");

    let paths = GpioPaths::default();
    let mut pins = SysfsPins;
    initialize_gpio(&mut pins, &paths)?;

    let running = setup_signal_handler()?;
    println!("Waiting for switch...");

    let mut window = DebounceWindow::new();
    let cycles = debounce::run(
        &mut pins,
        &mut window,
        &paths.value(SWITCH_PIN),
        &paths.value(LED_PIN),
        POLL_INTERVAL,
        &running,
    );
    info!("stopped after {cycles} sampling cycles");

    cleanup(&mut pins, &paths);
    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Switch as input first, then the LED as output.
fn initialize_gpio<P: PinControl>(pins: &mut P, paths: &GpioPaths) -> Result<()> {
    export_pin(pins, paths, SWITCH_PIN, Direction::In)
        .with_context(|| format!("could not make gpio{SWITCH_PIN} an input"))?;
    export_pin(pins, paths, LED_PIN, Direction::Out)
        .with_context(|| format!("could not make gpio{LED_PIN} an output"))
}

fn setup_signal_handler() -> Result<Arc<AtomicBool>> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;
    Ok(running)
}

fn cleanup<P: PinControl>(pins: &mut P, paths: &GpioPaths) {
    println!("Ending program");
    if let Err(e) = pins.set_pin(&paths.value(LED_PIN), Level::Low.as_str()) {
        error!("could not turn LED off: {e}");
    }
    for pin in [SWITCH_PIN, LED_PIN] {
        if let Err(e) = unexport_pin(pins, paths, pin) {
            error!("could not release gpio{pin}: {e}");
        }
    }
}

use anyhow::{Context, Result};
use gpio_sysfs::{
    Blinker, Direction, GpioPaths, Level, PinControl, SysfsPins, export_pin, unexport_pin,
};
use log::{error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

const LED_PIN: u8 = 4;
const BLINK_INTERVAL: Duration = Duration::from_millis(500);

fn main() -> Result<()> {
    init_logger();
    println!("Program is starting...");

    let paths = GpioPaths::default();
    let mut pins = SysfsPins;
    initialize_gpio(&mut pins, &paths)?;

    let running = setup_signal_handler()?;
    println!("LED will blink every {} ms.", BLINK_INTERVAL.as_millis());

    let mut blinker = Blinker::new();
    let steps = blinker.run(&mut pins, &paths.value(LED_PIN), BLINK_INTERVAL, &running);
    info!("stopped after {steps} transitions");

    cleanup(&mut pins, &paths);
    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn initialize_gpio<P: PinControl>(pins: &mut P, paths: &GpioPaths) -> Result<()> {
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
    if let Err(e) = unexport_pin(pins, paths, LED_PIN) {
        error!("could not release gpio{LED_PIN}: {e}");
    }
}

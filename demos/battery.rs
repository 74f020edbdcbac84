//! Prints the battery status of a robot connected over serial.
//!
//! Run with `cargo run --example battery -- /dev/ttyUSB0`.

use std::env;

use roomba_oi::connection::{serial, Roomba};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simplelog::TermLogger::init(
        log::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "/dev/ttyUSB0".to_string());
    let port = serial::open(&path, 115200)?;
    let roomba = Roomba::new(port);

    roomba.start()?;
    let battery = roomba.sensors(3)?;

    let charging = battery.data.constituent(21).and_then(|p| p.data.charging_state());
    println!("charging state: {charging:?}");
    if let Some(voltage) = battery.data.constituent(22).and_then(|p| p.data.as_u16()) {
        println!("voltage: {voltage} mV");
    }
    if let Some(current) = battery.data.constituent(23).and_then(|p| p.data.as_i16()) {
        println!("current: {current} mA");
    }
    if let Some(temperature) = battery.data.constituent(24).and_then(|p| p.data.as_i8()) {
        println!("temperature: {temperature} C");
    }
    let charge = battery.data.constituent(25).and_then(|p| p.data.as_u16());
    let capacity = battery.data.constituent(26).and_then(|p| p.data.as_u16());
    if let (Some(charge), Some(capacity)) = (charge, capacity) {
        println!("charge: {charge} / {capacity} mAh");
    }

    roomba.power()?;
    Ok(())
}

#![no_std]
#![no_main]

#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]

mod board;
mod button;
mod storage;

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::gpio::Io;
use esp_hal::timer::timg::TimerGroup;
use log::{info, warn};
use reset_button::{config::RESET_PIN, setup};

use self::board::{EspBoard, EspSetup};
use self::storage::NvsStorage;

#[panic_handler]
fn panic(info: &core::panic::PanicInfo) -> ! {
    info!("{}", info);
    loop {}
}

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    let board = EspBoard::new(NvsStorage::new(peripherals.FLASH));
    let io = Io::new(peripherals.IO_MUX);
    let mut reset_setup = EspSetup::new(spawner, io, peripherals.GPIO9.into(), board);

    if let Err(e) = setup::install(&mut reset_setup, RESET_PIN) {
        warn!("Running without factory reset button: {e}");
    }

    loop {
        info!("Running...");
        Timer::after(Duration::from_secs(10)).await;
    }
}

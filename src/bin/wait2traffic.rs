//! Runs the wait-button controller on an STM32WL board: the wait button and a
//! reset switch in, one red/amber/green head out.
#![no_std]
#![no_main]

use defmt::info;
use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Input, Level, Output, Pin, Pull, Speed};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

use wait2traffic::*;

/// Raised by the button task on every press, consumed by the next tick.
static BUTTON: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_stm32::init(create_stm32_config());

    let button = ExtiInput::new(p.PA0, p.EXTI0, Pull::Up);
    let reset = Input::new(p.PA1, Pull::Up);

    let mut head = SignalHead::new(
        Output::new(p.PC6.degrade(), Level::High, Speed::Low), // Pin 12 on the board.
        Output::new(p.PC0.degrade(), Level::High, Speed::Low), // Pin 14 on the board.
        Output::new(p.PA8.degrade(), Level::High, Speed::Low), // Pin 16 on the board.
    )
    .unwrap_or_else(|err| match err {});

    // Startup checks.
    for phase in LAMP_TEST {
        info!("lamp test: {}", phase);
        head.show(phase.lights()).unwrap_or_else(|err| match err {});
        Timer::after(Duration::from_secs(1)).await;
    }

    let timings = match Timings::reference(DEFAULT_TICK_HZ) {
        Ok(timings) => timings,
        Err(err) => defmt::panic!("Invalid timings = {}", err),
    };
    info!("timings = {}, tick rate = {} Hz", timings, DEFAULT_TICK_HZ);
    let mut controller = Controller::new(timings);

    spawner.must_spawn(button_task(button));

    let mut ticker = Ticker::every(Duration::from_hz(u64::from(DEFAULT_TICK_HZ)));
    loop {
        ticker.next().await;

        let pressed = BUTTON.try_take().is_some();
        let lights = controller.tick(reset.is_low(), pressed);
        head.show(lights).unwrap_or_else(|err| match err {});
    }
}

#[embassy_executor::task]
async fn button_task(mut button: ExtiInput<'static>) {
    loop {
        button.wait_for_falling_edge().await;
        info!("Button pressed");
        BUTTON.signal(());
        button.wait_for_rising_edge().await;
        info!("Button released");
    }
}

fn create_stm32_config() -> embassy_stm32::Config {
    let mut config = embassy_stm32::Config::default();
    {
        use embassy_stm32::{rcc::*, time::Hertz};
        // The board's 32 MHz TCXO drives sysclk directly; nothing here needs the PLL.
        config.rcc.hse = Some(Hse {
            freq: Hertz(32_000_000),
            mode: HseMode::Bypass,
            prescaler: HsePrescaler::DIV1,
        });
        config.rcc.sys = Sysclk::HSE;
    }

    config
}

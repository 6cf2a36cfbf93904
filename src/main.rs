//! tipcalc firmware entry point.
//!
//! Task layout:
//!
//! ```text
//! button(UP) ──┐
//! button(DOWN) ├──► BUTTON_CHANNEL ──► ui_task ◄── blink deadline
//! button(SEL) ─┘                         │
//!                                        ▼
//!                                   SSD1306 panel
//! ```
//!
//! `ui_task` is the only owner of the session, so button presses and
//! blink ticks are applied strictly one after another.

#![no_std]
#![no_main]

use defmt::{debug, info, warn};
use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Pin as _};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use {defmt_rtt as _, panic_probe as _};

use tipcalc::config::UI_EVENT_QUEUE_DEPTH;
use tipcalc::ui::buttons::button_task;
use tipcalc::ui::display::{self, Panel};
use tipcalc::ui::input_logic::handle_button;
use tipcalc::ui::ticker::{self, Deadline};
use tipcalc::{ButtonEvent, Rearm, Screen, Session};

bind_interrupts!(struct Irqs {
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

type PanelBus = Twim<'static, peripherals::TWISPI0>;

static BUTTON_CHANNEL: Channel<CriticalSectionRawMutex, ButtonEvent, UI_EVENT_QUEUE_DEPTH> =
    Channel::new();

#[embassy_executor::task(pool_size = 3)]
async fn button(pin: AnyPin, event: ButtonEvent) {
    button_task(pin, event, BUTTON_CHANNEL.sender()).await
}

#[embassy_executor::task]
async fn ui_task(mut panel: Panel<PanelBus>) {
    let rx = BUTTON_CHANNEL.receiver();
    let mut session = Session::new(Screen::new(), Deadline::new());
    session.start();
    info!("Session started, focus={}", session.focus());

    loop {
        if session.display_mut().take_dirty() {
            if let Err(e) = panel.draw(session.display()) {
                warn!("Display refresh failed: {}", e);
            }
        }

        let due = session.scheduler().due();
        match select(rx.receive(), ticker::wait_until(due)).await {
            Either::First(event) => {
                let before = session.focus();
                handle_button(&mut session, event);
                if session.focus() != before {
                    info!("Focus: {} -> {}", before, session.focus());
                }
                debug!(
                    "bill={} tip%={} tip={} total={}",
                    session.bill().units(),
                    session.tip_percent(),
                    session.tip_amount().units(),
                    session.total().units()
                );
            }
            Either::Second(()) => {
                if session.on_tick() == Rearm::Exhausted {
                    debug!("Blink budget exhausted");
                }
            }
        }
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("tipcalc starting");
    let p = embassy_nrf::init(Default::default());

    let mut i2c_config = twim::Config::default();
    i2c_config.frequency = twim::Frequency::K400;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, i2c_config);

    let panel = match display::init(i2c) {
        Ok(panel) => panel,
        Err(e) => {
            warn!("Display init failed: {}", e);
            return;
        }
    };

    spawner.must_spawn(button(p.P0_11.degrade(), ButtonEvent::Up));
    spawner.must_spawn(button(p.P0_12.degrade(), ButtonEvent::Down));
    spawner.must_spawn(button(p.P0_24.degrade(), ButtonEvent::Select));
    spawner.must_spawn(ui_task(panel));

    info!("All tasks spawned");
}

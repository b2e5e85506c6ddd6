mod host;

use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use anyhow::ensure;
use slidetoggle_ui::{Lifecycle, ToggleState};

use host::Host;

/// Stand-in for a confirmation dialog: answers after a few frames.
struct Confirmation {
    frames_left: u32,
    block: bool,
}

impl Future for Confirmation {
    type Output = bool;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<bool> {
        if self.frames_left == 0 {
            return Poll::Ready(self.block);
        }
        self.frames_left -= 1;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut host = Host::new(Host::default_config())?;
    let toggle = host.toggle().clone();
    let slide = toggle.geometry().slide_total();
    log::info!("track ready; block travels {slide}px");

    toggle.set_on_state_changed(|state| log::info!("state changed -> {state:?}"));

    // The first open attempt is refused, every later one goes through.
    let attempts = Rc::new(Cell::new(0u32));
    toggle.set_on_open_before({
        let attempts = attempts.clone();
        move || {
            attempts.set(attempts.get() + 1);
            let block = attempts.get() == 1;
            log::info!(
                "asking to open (attempt {}): {}",
                attempts.get(),
                if block { "deny" } else { "allow" }
            );
            Confirmation {
                frames_left: 5,
                block,
            }
        }
    });
    let weak = toggle.downgrade();
    toggle.set_on_click(move || {
        log::info!("block tapped");
        if let Some(toggle) = weak.upgrade() {
            let runtime = toggle.runtime().clone();
            runtime.spawn_ui(async move {
                let committed = toggle.toggle().await;
                log::info!("tap toggle committed: {committed}");
            });
        }
    });

    log::info!("-- short drag falls back");
    // Past the touch slop, short of the 10px open threshold.
    host.drag(9.0, 3);
    host.run_until_idle();
    ensure!(toggle.state() == ToggleState::Closed, "short drag should not open");

    log::info!("-- full drag, vetoed");
    host.drag(slide, 8);
    host.run_until_idle();
    ensure!(toggle.state() == ToggleState::Closed, "first open is vetoed");

    log::info!("-- full drag, allowed");
    host.drag(slide, 8);
    host.run_until_idle();
    ensure!(toggle.state() == ToggleState::Open, "second open is allowed");
    log::info!("display text now {:?}", host.surface().text());

    log::info!("-- tap closes");
    host.tap();
    host.run_until_idle();
    ensure!(toggle.state() == ToggleState::Closed, "tap toggles back to closed");

    log::info!("-- programmatic open, then reset");
    let runtime = host.runtime().handle();
    runtime.spawn_ui({
        let toggle = toggle.clone();
        async move {
            toggle.toggle().await;
        }
    });
    host.run_until_idle();
    ensure!(toggle.is_open(), "programmatic toggle opens");
    toggle.reset();
    host.run_until_idle();
    ensure!(toggle.state() == ToggleState::Closed, "reset closes");

    runtime.set_lifecycle(Lifecycle::Destroyed);
    log::info!("done after {} open request(s)", attempts.get());
    Ok(())
}

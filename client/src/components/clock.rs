//! Navbar clock refreshed once a minute.

use leptos::prelude::*;

use crate::util::clock;

#[component]
pub fn RealTimeClock() -> impl IntoView {
    let text = RwSignal::new(clock::now());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(clock::CLOCK_REFRESH_MS).await;
            // Stop once the signal has been disposed with the component.
            if text.try_set(clock::now()).is_some() {
                break;
            }
        }
    });

    view! {
        <span class="clock">
            <span class="current-time">{move || text.get().time}</span>
            " "
            <span class="current-date">{move || text.get().date}</span>
        </span>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Route, Router, Routes},
};

use crate::components::{clock::RealTimeClock, notification_stack::NotificationStack, theme_toggle::ThemeToggle};
use crate::pages::{dashboard::DashboardPage, sleep_log::SleepLogPage};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides the shared UI state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::with_theme(dark_mode::read_preference()));
    provide_context(ui);

    // Mirror the theme onto the document whenever it changes.
    Effect::new(move || dark_mode::apply(ui.with(|s| s.theme)));

    view! {
        <Stylesheet id="leptos" href="/pkg/sleeplog.css"/>
        <Title text="Sleep Tracker"/>

        <Router>
            <nav class="navbar">
                <A href="/">"Dashboard"</A>
                <A href="/sleep-log">"Log Sleep"</A>
                <span class="navbar__spacer"></span>
                <RealTimeClock/>
                <ThemeToggle/>
            </nav>
            <main class="container">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("sleep-log") view=SleepLogPage/>
                </Routes>
            </main>
        </Router>
        <NotificationStack/>
    }
}

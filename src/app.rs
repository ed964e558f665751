//! file: app.rs
//! author: Jacob Xie
//! date: 2025/12/21 10:11:30 Sunday
//! brief:

use gpui::{
    App, AppContext, Application, Bounds, Focusable, KeyBinding, Timer, WindowBounds,
    WindowOptions, px, size,
};
use tracing::{debug, error};

use crate::settings::Settings;
use crate::view::{QuitViewer, Restart, Retreat, StepOnce, TogglePause, WalkView};

pub fn run(settings: Settings) {
    Application::new().run(move |cx: &mut App| {
        cx.bind_keys([
            KeyBinding::new("enter", Restart, None),
            KeyBinding::new("space", TogglePause, None),
            KeyBinding::new("right", StepOnce, None),
            KeyBinding::new("n", StepOnce, None),
            KeyBinding::new("backspace", Retreat, None),
            KeyBinding::new("left", Retreat, None),
            KeyBinding::new("escape", QuitViewer, None),
        ]);

        let (width, height) = settings.window_size();
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let window = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |_, cx| cx.new(|cx| WalkView::new(settings, cx)),
        );
        let window = match window {
            Ok(window) => window,
            Err(err) => {
                error!(%err, "failed to open viewer window");
                cx.quit();
                return;
            }
        };

        let view = window.update(cx, |view: &mut WalkView, window, cx| {
            window.focus(&view.focus_handle(cx));
            cx.activate(true);
            cx.entity()
        });
        match view {
            Ok(view) => spawn_walk_loop(view, cx),
            Err(err) => {
                error!(%err, "failed to focus viewer window");
                cx.quit();
                return;
            }
        }

        cx.on_action(|_: &QuitViewer, cx| cx.quit());
        cx.activate(true);
    });
}

/// Ticks the view on a timer until its window goes away. Each tick hands
/// back the delay before the next one.
fn spawn_walk_loop(view: gpui::Entity<WalkView>, cx: &mut App) {
    let mut delay = view.read(cx).tick_delay();
    cx.spawn(async move |cx| {
        loop {
            Timer::after(delay).await;
            let next = view.update(cx, |view, cx| {
                view.tick(cx);
                view.tick_delay()
            });
            match next {
                Ok(next) => delay = next,
                Err(_) => break,
            }
        }
        debug!("walk loop stopped");
    })
    .detach();
}

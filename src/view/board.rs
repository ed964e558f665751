//! file: board.rs
//! author: Jacob Xie
//! date: 2025/12/21 10:40:55 Sunday
//! brief: gpui view of a growing walk

use std::time::Duration;

use gpui::{
    App, Context, Div, FocusHandle, Focusable, Render, Rgba, SharedString, Window, div,
    prelude::*, px, rgb, rgba,
};
use unique_walker::Cell;

use super::{Restart, Retreat, Session, StepOnce, TogglePause, WalkStatus};
use crate::settings::Settings;

const HEAD: u32 = 0x34d399;
const START: u32 = 0xf97316;
const BODY: u32 = 0x10b981;
const EMPTY: u32 = 0x0f172a;
const MUTED: u32 = 0x94a3b8;

const KEYS: [(&str, &str); 5] = [
    ("Enter", "start / restart"),
    ("Space", "pause"),
    ("Right, N", "step"),
    ("Left, Backspace", "retreat"),
    ("Esc", "quit"),
];

pub struct WalkView {
    session: Session,
    focus_handle: FocusHandle,
}

impl WalkView {
    pub fn new(settings: Settings, cx: &mut Context<Self>) -> Self {
        Self {
            session: Session::new(settings),
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn tick_delay(&self) -> Duration {
        self.session.tick_delay()
    }

    pub fn tick(&mut self, cx: &mut Context<Self>) {
        if self.session.status() != WalkStatus::Running {
            return;
        }
        self.session.tick();
        cx.notify();
    }

    fn apply(&mut self, cx: &mut Context<Self>, action: impl FnOnce(&mut Session)) {
        action(&mut self.session);
        cx.notify();
    }

    fn cell_color(&self, cell: Cell) -> Rgba {
        let walker = self.session.walker();
        match walker.index_of(cell) {
            Some(i) if i + 1 == walker.len() => rgb(HEAD),
            Some(0) => rgb(START),
            Some(_) => rgb(BODY),
            None => rgb(EMPTY),
        }
    }

    fn grid(&self) -> Div {
        let settings = self.session.settings();
        let size = px(settings.cell_size);
        let rows = (0..settings.height).map(|row| {
            let cells = (0..settings.width).map(|col| {
                let color = self.cell_color(self.session.cell_at(col, row));
                div().w(size).h(size).rounded_sm().bg(color)
            });
            div().flex().gap_1().children(cells)
        });

        let board = div().relative().p_3().rounded_xl().bg(rgb(0x111827));
        let board = board.child(div().flex().flex_col().gap_1().children(rows));
        match self.session.status().overlay() {
            Some(message) => board.child(veil(message)),
            None => board,
        }
    }

    fn stats(&self, is_focused: bool) -> Div {
        let session = &self.session;
        let (status, status_color) = session.status().label();
        let (span_w, span_h) = session.span();
        let rows = [
            ("length", session.walker().len().to_string()),
            ("span", format!("{span_w} x {span_h}")),
            ("seed", session.seed().to_string()),
            ("backtracks", session.backtracks().to_string()),
            ("tick", format!("{}ms", self.tick_delay().as_millis())),
        ];

        div()
            .w(px(220.))
            .flex()
            .flex_col()
            .gap_2()
            .child(div().text_2xl().text_color(rgb(status_color)).child(status))
            .children(rows.into_iter().map(|(name, value)| stat_row(name, value)))
            .child(div().h(px(12.)))
            .children(KEYS.into_iter().map(|(key, what)| {
                stat_row(key, what.to_string()).text_xs()
            }))
            .when(!is_focused, |this| {
                this.child(
                    div()
                        .text_xs()
                        .text_color(rgb(0xfbbf24))
                        .child("Click the grid to take control"),
                )
            })
    }
}

fn stat_row(name: &str, value: String) -> Div {
    div()
        .flex()
        .justify_between()
        .text_sm()
        .child(div().text_color(rgb(MUTED)).child(SharedString::from(name.to_string())))
        .child(value)
}

fn veil(message: &'static str) -> Div {
    div()
        .absolute()
        .inset_0()
        .flex()
        .items_center()
        .justify_center()
        .rounded_xl()
        .bg(rgba(0x020617A6))
        .text_xl()
        .child(message)
}

impl Render for WalkView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);

        div()
            .size_full()
            .p_5()
            .flex()
            .gap_5()
            .bg(rgb(0x020617))
            .text_color(rgb(0xf8fafc))
            .track_focus(&self.focus_handle)
            .key_context("walker-view")
            .on_action(cx.listener(|this, _: &Restart, _, cx| this.apply(cx, Session::restart)))
            .on_action(
                cx.listener(|this, _: &TogglePause, _, cx| this.apply(cx, Session::toggle_pause)),
            )
            .on_action(cx.listener(|this, _: &StepOnce, _, cx| this.apply(cx, Session::step)))
            .on_action(cx.listener(|this, _: &Retreat, _, cx| this.apply(cx, Session::retreat)))
            .child(self.grid())
            .child(self.stats(is_focused))
    }
}

impl Focusable for WalkView {
    fn focus_handle(&self, _: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

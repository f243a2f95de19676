use crate::config::Config;
use crate::input::desktop::step_destination;
use crate::input::{
    Command, DesktopRecognizer, DragOutcome, DragReorder, ElementId, FocusTarget, Haptic,
    Haptics, InputMode, Point, Swipe, TouchRecognizer, ViewGeometry, WheelEvent,
};
use crate::store::{NavOrder, OrderStore, Storage};
use crossterm::event::KeyEvent;
use log::*;
use std::time::Instant;

use super::navigation::{Mode, NavigationState, Navigator};
use super::page::{PageId, Route};

/// Houses the dashboard core: the navigation controller, the recognizers,
/// the drag controller and the persisted order.
///
/// Page components hold one `State` and talk to the core only through its
/// methods.
pub struct State {
    navigator: Navigator,
    order_store: OrderStore,
    input_mode: InputMode,
    touch: TouchRecognizer,
    desktop: DesktopRecognizer,
    drag: DragReorder,
    caption_editor_open: bool,
    haptics: Box<dyn Haptics>,
}

impl State {
    pub fn new(
        config: &Config,
        storage: Box<dyn Storage>,
        touch_capable: bool,
        haptics: Box<dyn Haptics>,
    ) -> Self {
        let gestures = &config.gestures;
        let input_mode = InputMode::detect(touch_capable);
        info!("Input mode: {:?}", input_mode);
        State {
            navigator: Navigator::new(),
            order_store: OrderStore::load(storage, gestures.sync_poll_ms),
            input_mode,
            touch: TouchRecognizer::new(gestures.swipe_thresholds()),
            desktop: DesktopRecognizer::new(
                config.keymap.clone(),
                config.primary_modifier,
                gestures.chord_timeout_ms,
            ),
            drag: DragReorder::new(gestures.long_press_ms),
            caption_editor_open: false,
            haptics,
        }
    }

    pub fn navigation(&self) -> &NavigationState {
        self.navigator.state()
    }

    pub fn current_page(&self) -> PageId {
        self.navigator.current_page()
    }

    pub fn mode(&self) -> Mode {
        self.navigator.mode()
    }

    pub fn order(&self) -> &NavOrder {
        self.order_store.order()
    }

    pub fn input_mode(&self) -> InputMode {
        self.input_mode
    }

    pub fn desktop(&self) -> &DesktopRecognizer {
        &self.desktop
    }

    pub fn dragged_index(&self) -> Option<usize> {
        self.drag.dragged_index()
    }

    pub fn drag_over_index(&self) -> Option<usize> {
        self.drag.drag_over_index()
    }

    pub fn caption_editor_open(&self) -> bool {
        self.caption_editor_open
    }

    /// Consume the scroll reset raised by the last navigation.
    ///
    pub fn take_scroll_reset(&mut self) -> bool {
        self.navigator.take_scroll_reset()
    }

    /// Navigate to a route, optionally naming the page the request came from.
    ///
    pub fn navigate(&mut self, route: impl Into<Route>, from: Option<PageId>) -> &mut Self {
        let route = route.into();
        self.guard_overlays(|navigator| {
            navigator.navigate(route, from);
        });
        self
    }

    /// Navigate using request identifiers, as page components send them.
    ///
    pub fn navigate_to(&mut self, request: &str, from: Option<&str>) -> &mut Self {
        let from = from.map(|id| PageId::from_id(id).unwrap_or(PageId::NotFound));
        self.navigate(Route::parse(request), from)
    }

    pub fn toggle_settings(&mut self) -> &mut Self {
        self.guard_overlays(|navigator| {
            navigator.toggle_settings();
        });
        self
    }

    pub fn close_settings(&mut self) -> &mut Self {
        self.guard_overlays(|navigator| {
            navigator.close_settings();
        });
        self
    }

    pub fn toggle_notifications(&mut self) -> &mut Self {
        self.guard_overlays(|navigator| {
            navigator.toggle_notifications();
        });
        self
    }

    pub fn close_shortcuts_help(&mut self) -> &mut Self {
        self.guard_overlays(|navigator| {
            navigator.close_shortcuts_help();
        });
        self
    }

    pub fn back(&mut self) -> &mut Self {
        self.navigator.back();
        self
    }

    /// A page component opened or closed an exclusive text editing surface.
    /// While open, every gesture and shortcut is ignored.
    ///
    pub fn on_caption_editor_change(&mut self, open: bool) -> &mut Self {
        debug!("Caption editor {}", if open { "opened" } else { "closed" });
        self.caption_editor_open = open;
        if open {
            self.cancel_gestures();
            self.drag.cancel();
            self.navigator.set_dragging(false);
        }
        self
    }

    /// Return to session defaults. The persisted order is kept.
    ///
    pub fn logout(&mut self) -> &mut Self {
        info!("Logging out, resetting navigation");
        self.navigator.reset();
        self.drag.cancel();
        self.cancel_gestures();
        self.caption_editor_open = false;
        self
    }

    /// Apply a recognizer command.
    ///
    pub fn apply(&mut self, command: Command) -> &mut Self {
        if self.navigator.is_dragging() {
            debug!("Ignoring {:?} while dragging", command);
            return self;
        }
        match command {
            Command::Navigate(route) => {
                self.navigate(route, None);
            }
            Command::JumpToDestination(position) => match self.order().get(position) {
                Some(page) => {
                    self.navigate(page, None);
                }
                None => debug!("No destination at position {}", position),
            },
            Command::PreviousDestination => self.step_destination(false),
            Command::NextDestination => self.step_destination(true),
            Command::ToggleSettings => {
                self.toggle_settings();
            }
            Command::CloseSettings => {
                self.close_settings();
            }
            Command::ToggleNotifications => {
                self.toggle_notifications();
            }
            Command::CloseNotifications => {
                self.guard_overlays(|navigator| {
                    navigator.close_notifications();
                });
            }
            Command::CloseShortcutsHelp => {
                self.close_shortcuts_help();
            }
        }
        self
    }

    /// A finger went down. `nav_index` is the bottom bar item under it, if
    /// any.
    ///
    pub fn touch_start(
        &mut self,
        point: Point,
        origin: Option<ElementId>,
        nav_index: Option<usize>,
        now: Instant,
    ) {
        if self.caption_editor_open {
            return;
        }
        if !self.drag.is_dragging() {
            self.touch.start(point, origin);
        }
        if let Some(index) = nav_index {
            self.drag.touch_start(index, now);
        }
    }

    pub fn touch_move(&mut self, point: Point, geometry: &dyn ViewGeometry) {
        self.touch.move_to(point);
        if let Some(haptic) = self.drag.touch_move(point, geometry) {
            self.haptics.play(haptic);
        }
    }

    pub fn touch_end(&mut self, point: Point, geometry: &dyn ViewGeometry, now: Instant) {
        self.tick_drag(now);
        let was_dragging = self.drag.is_dragging();
        let (outcome, haptic) = self.drag.touch_end(now);
        if let Some(haptic) = haptic {
            self.haptics.play(haptic);
        }
        if was_dragging {
            self.navigator.set_dragging(false);
        }

        let swipe = self.touch.end(point, geometry, self.current_page());
        if self.caption_editor_open {
            return;
        }

        match outcome {
            DragOutcome::Reorder { from, to } => match self.order_store.reorder(from, to) {
                Ok(true) => self.haptics.play(Haptic::Success),
                Ok(false) => {}
                Err(e) => error!("Failed to save navigation order: {}", e),
            },
            DragOutcome::Tap(index) if swipe.is_none() => {
                if let Some(page) = self.order().get(index) {
                    self.navigate(page, None);
                }
            }
            DragOutcome::Tap(_) | DragOutcome::Unchanged => {}
        }

        if let Some(swipe) = swipe {
            self.apply_swipe(swipe);
        }
    }

    /// Keyboard input. Only used on devices without touch.
    ///
    pub fn key(&mut self, event: &KeyEvent, focus: FocusTarget, now: Instant) {
        if self.input_mode != InputMode::Desktop || self.caption_editor_open {
            return;
        }
        let overlays = self.navigator.overlays();
        if let Some(command) = self.desktop.key(event, focus, overlays, now) {
            self.apply(command);
        }
    }

    /// Wheel input. Only used on devices without touch.
    ///
    pub fn wheel(&mut self, event: &WheelEvent) {
        if self.input_mode != InputMode::Desktop || self.caption_editor_open {
            return;
        }
        if let Some(command) = self.desktop.wheel(event, self.navigator.overlays()) {
            self.apply(command);
        }
    }

    /// Advance timers: long press, chord expiry and order polling.
    ///
    pub fn tick(&mut self, now: Instant) {
        self.tick_drag(now);
        self.desktop.tick(now);
        self.order_store.poll(now);
    }

    /// Storage change notification from another instance.
    ///
    pub fn on_storage_event(&mut self, key: &str) {
        self.order_store.on_storage_event(key);
    }

    fn tick_drag(&mut self, now: Instant) {
        if let Some(haptic) = self.drag.tick(now) {
            self.navigator.set_dragging(true);
            self.cancel_gestures();
            self.haptics.play(haptic);
        }
    }

    /// With a panel open only a right swipe acts, and it dismisses the panel.
    ///
    fn apply_swipe(&mut self, swipe: Swipe) {
        let overlays = self.navigator.overlays();
        match swipe {
            Swipe::Right if overlays.notifications => {
                self.apply(Command::CloseNotifications);
            }
            Swipe::Right if overlays.settings => {
                self.apply(Command::CloseSettings);
            }
            _ if overlays.any_panel() => trace!("Ignoring {:?} swipe over open panel", swipe),
            Swipe::Left => {
                self.apply(Command::NextDestination);
            }
            Swipe::Right => {
                self.apply(Command::PreviousDestination);
            }
        }
    }

    fn step_destination(&mut self, forward: bool) {
        let target = step_destination(self.order().pages(), self.current_page(), forward);
        match target {
            Some(page) => {
                self.navigate(page, None);
            }
            None => {
                let side = if forward { "after" } else { "before" };
                trace!("No destination {} '{}'", side, self.current_page());
            }
        }
    }

    fn cancel_gestures(&mut self) {
        self.touch.cancel();
        self.desktop.cancel_chord();
    }

    /// Run a navigator change; an overlay transition cancels in-flight
    /// gestures.
    ///
    fn guard_overlays(&mut self, change: impl FnOnce(&mut Navigator)) {
        let before = self.navigator.overlays();
        change(&mut self.navigator);
        if self.navigator.overlays() != before {
            self.cancel_gestures();
        }
    }
}

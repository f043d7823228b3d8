//! The board owns the cards and drives one event/render cycle at a time.
//!
//! Events mutate navigation, modal and viewport state; [`Board::render`] recomputes
//! the grid geometry from scratch, asks each widget for its body at the new size,
//! frames and composes the blocks, then lays the modal over the result.
//!
//! The board never sleeps. Widgets that animate hand back a [`Schedule`], which the
//! board turns into a [`ScheduledTick`] for the caller to deliver later as
//! [`Event::Tick`].

use std::time::Duration;

use tessera_config::BoardConfig;
use tracing::debug;

use crate::compositor::{title_band_height, Compositor};
use crate::event::{CardId, Event, NavAction, TickId};
use crate::focus::{Direction, FocusNavigator, Hook};
use crate::frame::{Frame, FrameTheme};
use crate::layout::{GridGeometry, GridOptions, GridPolicy, Viewport};
use crate::modal::{Modal, ModalPolicy, OverlayMode};
use crate::spinner::Schedule;
use crate::widget::Widget;

/// Default viewport until the first resize.
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

/// A tick the caller should deliver back as [`Event::Tick`] after `after`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTick {
    pub tick: TickId,
    pub after: Duration,
}

struct Card {
    id: CardId,
    widget: Box<dyn Widget>,
}

impl Card {
    fn schedule(&self, schedule: Schedule) -> ScheduledTick {
        ScheduledTick {
            tick: TickId {
                card: self.id,
                epoch: schedule.epoch,
            },
            after: schedule.after,
        }
    }
}

pub struct Board {
    cards: Vec<Card>,
    next_id: u64,
    viewport: Viewport,
    options: GridOptions,
    title: Option<String>,
    nav: FocusNavigator,
    modal: Modal,
    theme: FrameTheme,
    overlay: OverlayMode,
    padding: usize,
    scheduled: Vec<ScheduledTick>,
}

impl Board {
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn focused(&self) -> Option<usize> {
        self.nav.focused()
    }

    pub fn selected(&self) -> Option<usize> {
        self.nav.selected()
    }

    pub fn card_id(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).map(|card| card.id)
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal.is_visible()
    }

    /// Column count for the current viewport and card count.
    pub fn columns(&self) -> usize {
        self.options.columns(self.viewport.width, self.cards.len())
    }

    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::compute(
            self.viewport,
            &self.options,
            self.cards.len(),
            title_band_height(self.title()),
        )
    }

    /// Process one event and return the ticks requested since the last call.
    pub fn update(&mut self, event: Event) -> Vec<ScheduledTick> {
        match event {
            Event::Resize { width, height } => {
                self.viewport = Viewport::from((width, height));
                debug!(width, height, "viewport resized");
            }
            Event::Key(key) => {
                if let Some(action) = NavAction::from_key(&key) {
                    self.dispatch(action);
                }
            }
            Event::Tick(tick) => self.deliver_tick(tick),
        }
        self.drain_scheduled()
    }

    /// Ticks requested by widgets that have not yet been handed to the caller.
    pub fn drain_scheduled(&mut self) -> Vec<ScheduledTick> {
        std::mem::take(&mut self.scheduled)
    }

    fn dispatch(&mut self, action: NavAction) {
        if self.modal.is_visible() {
            if action == NavAction::Cancel {
                self.modal.close();
            }
            return;
        }

        let columns = self.columns();
        let hooks = match action {
            NavAction::Left => self.nav.move_focus(Direction::Left, columns),
            NavAction::Right => self.nav.move_focus(Direction::Right, columns),
            NavAction::Up => self.nav.move_focus(Direction::Up, columns),
            NavAction::Down => self.nav.move_focus(Direction::Down, columns),
            NavAction::ToggleSelect => self.nav.toggle_select(),
            NavAction::Cancel => self.nav.cancel(),
        };
        if !hooks.is_empty() {
            debug!(
                ?action,
                focused = ?self.nav.focused(),
                selected = ?self.nav.selected(),
                "navigation"
            );
        }
        self.apply_hooks(hooks);
    }

    fn apply_hooks(&mut self, hooks: Vec<Hook>) {
        for hook in hooks {
            let Some(card) = self.cards.get_mut(hook.index()) else {
                continue;
            };
            match hook {
                Hook::Focus(_) => card.widget.focus(),
                Hook::Blur(_) => card.widget.blur(),
                Hook::Select(_) => card.widget.select(),
                Hook::Deselect(_) => card.widget.deselect(),
            }
        }
    }

    fn deliver_tick(&mut self, tick: TickId) {
        let Some(card) = self.cards.iter_mut().find(|card| card.id == tick.card) else {
            debug!(card = tick.card.0, "tick for removed card dropped");
            return;
        };
        if let Some(next) = card.widget.tick(tick.epoch) {
            let scheduled = card.schedule(next);
            self.scheduled.push(scheduled);
        }
    }

    /// Append a card. Its `init` runs immediately and any schedule it returns is
    /// queued for the next [`update`](Self::update) or [`drain_scheduled`](Self::drain_scheduled).
    pub fn add_card(&mut self, widget: Box<dyn Widget>) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;

        let mut card = Card { id, widget };
        if let Some(schedule) = card.widget.init() {
            self.scheduled.push(card.schedule(schedule));
        }
        self.cards.push(card);
        self.nav.push();
        debug!(card = id.0, cards = self.cards.len(), "card added");
        id
    }

    /// Remove a card, returning its widget. Unknown ids are ignored.
    pub fn remove_card(&mut self, id: CardId) -> Option<Box<dyn Widget>> {
        let index = self.cards.iter().position(|card| card.id == id)?;
        let card = self.cards.remove(index);
        let hooks = self.nav.remove(index);
        self.apply_hooks(hooks);
        debug!(card = id.0, cards = self.cards.len(), "card removed");
        Some(card.widget)
    }

    pub fn focus(&mut self, index: usize) {
        let hooks = self.nav.focus(index);
        self.apply_hooks(hooks);
    }

    pub fn open_modal(&mut self, title: Option<String>, content: impl Into<String>) {
        self.modal.open(title, content);
    }

    pub fn close_modal(&mut self) -> bool {
        self.modal.close()
    }

    pub fn set_options(&mut self, options: GridOptions) {
        self.options = options;
    }

    pub fn set_modal_policy(&mut self, policy: ModalPolicy) {
        self.modal.set_policy(policy);
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title = title.filter(|t| !t.trim().is_empty());
    }

    pub fn set_overlay(&mut self, overlay: OverlayMode) {
        self.overlay = overlay;
    }

    /// Render the full canvas, one entry per output row.
    pub fn render_lines(&self) -> Vec<String> {
        let geometry = self.geometry();

        let blocks: Vec<Vec<String>> = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let frame = Frame::new(self.nav.frame_state(index), &self.theme)
                    .title(card.widget.title())
                    .padding(self.padding);
                let body = card.widget.render(
                    frame.interior_width(geometry.cell_width),
                    frame.interior_height(geometry.cell_height),
                );
                frame.render(&body, geometry.cell_width, geometry.cell_height)
            })
            .collect();

        let canvas = Compositor::new(&geometry, &self.theme)
            .title(self.title())
            .compose(&blocks);

        self.modal
            .overlay(canvas, self.viewport, self.overlay, &self.theme, self.padding)
    }

    pub fn render(&self) -> String {
        self.render_lines().join("\n")
    }
}

/// Collects board settings and cards before building.
pub struct BoardBuilder {
    viewport: Viewport,
    options: GridOptions,
    title: Option<String>,
    modal_policy: ModalPolicy,
    theme: FrameTheme,
    overlay: OverlayMode,
    padding: usize,
    cards: Vec<Box<dyn Widget>>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::from_config(&BoardConfig::default())
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        let options = if config.responsive {
            GridOptions::responsive(config.min_cell_width, config.gap)
        } else {
            GridOptions::fixed(config.columns, config.gap)
        };
        Self {
            viewport: DEFAULT_VIEWPORT,
            options,
            title: config.title().map(str::to_string),
            modal_policy: config.modal.into(),
            theme: FrameTheme::DEFAULT,
            overlay: config.overlay.into(),
            padding: config.frame_padding,
            cards: Vec::new(),
        }
    }

    pub fn viewport(&mut self, width: usize, height: usize) -> &mut Self {
        self.viewport = Viewport::new(width, height);
        self
    }

    pub fn columns(&mut self, columns: usize) -> &mut Self {
        self.options.policy = GridPolicy::Fixed(columns);
        self
    }

    pub fn responsive(&mut self, min_cell_width: usize) -> &mut Self {
        self.options.policy = GridPolicy::Responsive { min_cell_width };
        self
    }

    pub fn gap(&mut self, gap: usize) -> &mut Self {
        self.options.gap = gap;
        self
    }

    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        let title = title.into();
        self.title = (!title.trim().is_empty()).then_some(title);
        self
    }

    pub fn modal_policy(&mut self, policy: ModalPolicy) -> &mut Self {
        self.modal_policy = policy;
        self
    }

    pub fn theme(&mut self, theme: FrameTheme) -> &mut Self {
        self.theme = theme;
        self
    }

    pub fn overlay(&mut self, overlay: OverlayMode) -> &mut Self {
        self.overlay = overlay;
        self
    }

    pub fn padding(&mut self, padding: usize) -> &mut Self {
        self.padding = padding;
        self
    }

    pub fn card(&mut self, widget: impl Widget + 'static) -> &mut Self {
        self.cards.push(Box::new(widget));
        self
    }

    /// Build the board and focus its first card. Cards move out of the builder.
    pub fn build(&mut self) -> Board {
        let mut board = Board {
            cards: Vec::new(),
            next_id: 0,
            viewport: self.viewport,
            options: self.options,
            title: self.title.clone(),
            nav: FocusNavigator::new(0),
            modal: Modal::new(self.modal_policy),
            theme: self.theme,
            overlay: self.overlay,
            padding: self.padding,
            scheduled: Vec::new(),
        };
        for widget in std::mem::take(&mut self.cards) {
            board.add_card(widget);
        }
        board.focus(0);
        debug!(cards = board.len(), viewport = ?board.viewport, "board built");
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::{strip_ansi, visible_width};
    use crate::spinner::TaskStatus;
    use crate::widgets::{TaskCard, TextCard};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    /// Records every hook it receives.
    struct Probe {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Widget for Probe {
        fn render(&self, _width: usize, _height: usize) -> String {
            self.name.to_string()
        }

        fn focus(&mut self) {
            self.log.borrow_mut().push(format!("focus {}", self.name));
        }

        fn blur(&mut self) {
            self.log.borrow_mut().push(format!("blur {}", self.name));
        }

        fn select(&mut self) {
            self.log.borrow_mut().push(format!("select {}", self.name));
        }

        fn deselect(&mut self) {
            self.log.borrow_mut().push(format!("deselect {}", self.name));
        }
    }

    fn probe_board(names: &[&'static str]) -> (Board, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut builder = Board::builder();
        builder.viewport(100, 40).columns(2).gap(1).theme(FrameTheme::PLAIN);
        for &name in names {
            builder.card(Probe {
                name,
                log: Rc::clone(&log),
            });
        }
        (builder.build(), log)
    }

    #[test]
    fn build_focuses_first_card() {
        let (board, log) = probe_board(&["a", "b"]);
        assert_eq!(board.focused(), Some(0));
        assert_eq!(*log.borrow(), vec!["focus a"]);
    }

    #[test]
    fn empty_board_stays_unfocused() {
        let mut board = Board::builder().build();
        assert_eq!(board.focused(), None);
        board.update(key(KeyCode::Down));
        assert_eq!(board.focused(), None);
        assert!(board.render().is_empty());
    }

    #[test]
    fn keys_drive_navigation_hooks() {
        let (mut board, log) = probe_board(&["a", "b", "c", "d", "e"]);
        log.borrow_mut().clear();

        board.update(key(KeyCode::Down));
        board.update(key(KeyCode::Char('j')));
        board.update(key(KeyCode::Down));
        assert_eq!(board.focused(), Some(4));

        board.update(key(KeyCode::Enter));
        board.update(key(KeyCode::Esc));
        assert_eq!(
            *log.borrow(),
            vec!["blur a", "focus c", "blur c", "focus e", "select e", "deselect e"]
        );
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn visible_modal_swallows_everything_but_esc() {
        let (mut board, _) = probe_board(&["a", "b"]);
        board.update(key(KeyCode::Enter));
        board.open_modal(Some("Help".to_string()), "keys");

        board.update(key(KeyCode::Right));
        board.update(key(KeyCode::Enter));
        assert_eq!(board.focused(), Some(0));
        assert_eq!(board.selected(), Some(0));

        board.update(key(KeyCode::Esc));
        assert!(!board.is_modal_visible());
        assert_eq!(board.selected(), Some(0));

        board.update(key(KeyCode::Esc));
        assert_eq!(board.selected(), None);
    }

    #[test]
    fn resize_changes_responsive_columns() {
        let mut builder = Board::builder();
        builder.responsive(30).gap(2).viewport(80, 24);
        for i in 0..6 {
            builder.card(TextCard::new([format!("card {i}")]));
        }
        let mut board = builder.build();
        assert_eq!(board.columns(), 2);

        board.update(Event::Resize {
            width: 200,
            height: 40,
        });
        assert_eq!(board.columns(), 6);
        assert_eq!(board.geometry().rows, 1);
    }

    #[test]
    fn render_has_uniform_width() {
        let mut builder = Board::builder();
        builder.viewport(64, 30).columns(3).gap(2).title("Status");
        for i in 0..5 {
            builder.card(TextCard::new([format!("\x1b[32mline {i}\x1b[0m")]).with_title(format!("#{i}")));
        }
        let board = builder.build();
        let geometry = board.geometry();
        let lines = board.render_lines();

        assert_eq!(
            lines.len(),
            3 + geometry.rows * geometry.cell_height + geometry.gap * (geometry.rows - 1)
        );
        assert!(lines.iter().all(|line| visible_width(line) == geometry.total_width()));
        assert!(strip_ansi(&lines[1]).contains("Status"));
        assert!(strip_ansi(&lines[3]).contains("#0"));
    }

    #[test]
    fn sequential_modal_replaces_grid() {
        let mut builder = Board::builder();
        builder.viewport(40, 20).theme(FrameTheme::PLAIN).card(TextCard::new(["body"]));
        builder.modal_policy(ModalPolicy {
            pct_width: 0.5,
            pct_height: 0.5,
            min_width: 10,
            min_height: 5,
        });
        let mut board = builder.build();
        board.open_modal(None, "modal text");

        let lines = board.render_lines();
        assert_eq!(lines.len(), 15);
        assert!(lines.iter().all(|line| !line.contains("body")));
        assert!(lines[6].contains("modal text"));
    }

    #[test]
    fn layered_modal_keeps_grid_visible() {
        let mut builder = Board::builder();
        builder
            .viewport(40, 20)
            .columns(1)
            .theme(FrameTheme::PLAIN)
            .overlay(OverlayMode::Layered)
            .card(TextCard::new(["body"]));
        builder.modal_policy(ModalPolicy {
            pct_width: 0.5,
            pct_height: 0.5,
            min_width: 10,
            min_height: 5,
        });
        let mut board = builder.build();
        board.open_modal(None, "modal text");

        let lines = board.render_lines();
        assert_eq!(lines.len(), 20);
        assert!(strip_ansi(&lines[1]).contains("body"));
        assert!(strip_ansi(&lines[6]).contains("modal text"));
    }

    #[test]
    fn ticks_reschedule_until_task_settles() {
        let mut builder = Board::builder();
        builder.card(TaskCard::new("sync", Duration::from_millis(50)).finish_after(3, TaskStatus::Succeeded));
        let mut board = builder.build();

        let mut pending = board.drain_scheduled();
        assert_eq!(pending.len(), 1);
        let mut delivered = 0;
        while let Some(next) = pending.pop() {
            assert_eq!(next.after, Duration::from_millis(50));
            pending.extend(board.update(Event::Tick(next.tick)));
            delivered += 1;
        }
        assert_eq!(delivered, 3);
        assert!(strip_ansi(&board.render()).contains("✓ sync"));
    }

    #[test]
    fn tick_for_removed_card_is_dropped() {
        let mut builder = Board::builder();
        builder.card(TaskCard::new("gone", Duration::from_millis(10)));
        let mut board = builder.build();
        let pending = board.drain_scheduled();
        let id = board.card_id(0).expect("one card");

        assert!(board.remove_card(id).is_some());
        assert!(board.update(Event::Tick(pending[0].tick)).is_empty());
        assert!(board.remove_card(id).is_none());
    }

    #[test]
    fn removing_focused_card_moves_focus_hook() {
        let (mut board, log) = probe_board(&["a", "b", "c"]);
        log.borrow_mut().clear();
        let first = board.card_id(0).expect("card");
        board.remove_card(first);
        assert_eq!(board.focused(), Some(0));
        assert_eq!(*log.borrow(), vec!["focus b"]);
    }

    #[test]
    fn setters_take_effect_on_next_render() {
        let (mut board, _) = probe_board(&["a", "b", "c", "d"]);
        assert_eq!(board.columns(), 2);

        board.set_options(GridOptions::fixed(4, 0));
        assert_eq!(board.columns(), 4);
        assert_eq!(board.geometry().rows, 1);

        board.open_modal(None, "x");
        board.set_overlay(OverlayMode::Layered);
        assert_eq!(board.render_lines().len(), board.viewport().height);
        assert!(board.close_modal());
        assert!(!board.close_modal());
    }

    #[test]
    fn from_config_carries_settings() {
        let config = BoardConfig {
            columns: 3,
            gap: 2,
            title: Some("Ops".to_string()),
            overlay: tessera_config::OverlayKind::Layered,
            ..BoardConfig::default()
        };
        let mut board = BoardBuilder::from_config(&config).build();
        assert_eq!(board.options(), &GridOptions::fixed(3, 2));
        assert_eq!(board.title(), Some("Ops"));

        board.set_title(Some("   ".to_string()));
        assert_eq!(board.title(), None);
    }
}

use super::*;
use crate::core::event::{
    InputEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use crate::core::view::EventResult;
use crate::kernel::services::adapters::InMemoryMarket;
use crate::kernel::{ConfirmOptions, ModalKind, ModalName, NoticeOptions, OrderId, OrderStatus};
use crate::ui::backend::test::TestBackend;
use crate::ui::core::geom::Rect;
use crate::ui::core::tree::NodeKind;
use crate::views::modal::{backdrop_id, button_id, dialog_id};
use std::time::{Duration, Instant};

const AREA: Rect = Rect::new(0, 0, 80, 24);
const WAIT: Duration = Duration::from_secs(5);

fn app_with(settings: Settings, market: InMemoryMarket) -> App {
    let market = market.with_settings(&settings.market);
    App::new(&settings, Arc::new(market)).unwrap()
}

fn empty_app() -> App {
    app_with(Settings::default(), InMemoryMarket::new(Vec::new()))
}

fn loaded_app(settings: Settings) -> App {
    let mut app = app_with(settings, InMemoryMarket::seeded());
    app.start();
    assert!(app.wait_messages(WAIT, Instant::now()));
    assert_eq!(app.state().orders.items.len(), 8);
    app
}

fn frame(app: &mut App) -> TestBackend {
    let mut backend = TestBackend::new(AREA.w, AREA.h);
    app.render(&mut backend, AREA);
    backend
}

fn backdrops(app: &App) -> Vec<ModalName> {
    app.tree()
        .nodes()
        .iter()
        .filter_map(|n| match n.kind {
            NodeKind::Backdrop { modal } => Some(modal),
            _ => None,
        })
        .collect()
}

fn open_names(app: &App) -> Vec<ModalName> {
    app.state().modals.names().collect()
}

fn key(app: &mut App, code: KeyCode) -> EventResult {
    app.handle_input(&InputEvent::Key(KeyEvent::simple(code)), Instant::now())
}

fn click(app: &mut App, x: u16, y: u16) {
    for kind in [
        MouseEventKind::Down(MouseButton::Left),
        MouseEventKind::Up(MouseButton::Left),
    ] {
        let event = InputEvent::Mouse(MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        });
        app.handle_input(&event, Instant::now());
    }
}

fn click_node(app: &mut App, id: crate::ui::core::id::Id) {
    let rect = app.tree().node(id).unwrap().rect;
    click(app, rect.x, rect.y);
}

fn confirm(message: &str) -> ModalKind {
    ModalKind::Confirm(ConfirmOptions::message(message))
}

fn notice() -> ModalKind {
    ModalKind::Notice(NoticeOptions {
        title: "Note".to_string(),
        lines: vec!["hello".to_string()],
    })
}

#[test]
fn confirm_opens_renders_and_closes_end_to_end() {
    let mut app = empty_app();
    assert!(app.dispatch(Action::OpenModal(confirm("sure?"))));
    assert!(app.needs_redraw());

    let backend = frame(&mut app);
    assert!(!app.needs_redraw());
    assert_eq!(backdrops(&app), vec![ModalName::Confirm]);
    assert!(backend.buffer().contains_text("sure?"));

    assert_eq!(key(&mut app, KeyCode::Enter), EventResult::Consumed);
    assert!(app.state().modals.is_empty());

    let backend = frame(&mut app);
    assert!(backdrops(&app).is_empty());
    assert!(!backend.buffer().contains_text("sure?"));
}

#[test]
fn handle_actions_apply_on_tick() {
    let mut app = empty_app();
    let handle = app.modal_handle();
    handle.open(confirm("sure?")).unwrap();
    assert!(app.state().modals.is_empty());

    assert!(app.tick(Instant::now()));
    assert_eq!(open_names(&app), vec![ModalName::Confirm]);

    handle.close(ModalName::Confirm).unwrap();
    app.tick(Instant::now());
    assert!(app.state().modals.is_empty());
}

#[test]
fn backdrop_click_closes_the_modal() {
    let mut app = empty_app();
    app.dispatch(Action::OpenModal(confirm("sure?")));
    frame(&mut app);

    click(&mut app, 0, 0);
    assert!(app.state().modals.is_empty());
}

#[test]
fn click_on_the_dialog_body_keeps_it_open() {
    let mut app = empty_app();
    app.dispatch(Action::OpenModal(confirm("sure?")));
    frame(&mut app);

    let rect = app.tree().node(dialog_id(ModalName::Confirm)).unwrap().rect;
    click(&mut app, rect.x + 1, rect.y + 1);
    click(&mut app, rect.x, rect.y);
    assert_eq!(open_names(&app), vec![ModalName::Confirm]);
}

#[test]
fn backdrop_click_with_two_modals_closes_only_the_top() {
    let mut app = empty_app();
    app.dispatch(Action::OpenModal(notice()));
    app.dispatch(Action::OpenModal(confirm("sure?")));
    frame(&mut app);
    assert_eq!(backdrops(&app), vec![ModalName::Notice, ModalName::Confirm]);

    click(&mut app, 0, 0);
    assert_eq!(open_names(&app), vec![ModalName::Notice]);

    frame(&mut app);
    assert_eq!(backdrops(&app), vec![ModalName::Notice]);
    click(&mut app, 0, 0);
    assert!(app.state().modals.is_empty());
}

#[test]
fn press_and_release_on_different_nodes_is_not_a_click() {
    let mut app = empty_app();
    app.dispatch(Action::OpenModal(confirm("sure?")));
    frame(&mut app);
    let rect = app.tree().node(dialog_id(ModalName::Confirm)).unwrap().rect;

    let now = Instant::now();
    app.handle_input(
        &InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }),
        now,
    );
    app.handle_input(
        &InputEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: rect.x + 1,
            row: rect.y + 1,
            modifiers: KeyModifiers::NONE,
        }),
        now,
    );
    assert_eq!(open_names(&app), vec![ModalName::Confirm]);
}

#[test]
fn backdrop_dismissal_can_be_disabled() {
    let mut settings = Settings::default();
    settings.modal.dismiss_on_backdrop = false;
    let mut app = app_with(settings, InMemoryMarket::new(Vec::new()));
    app.dispatch(Action::OpenModal(confirm("sure?")));
    frame(&mut app);

    click(&mut app, 0, 0);
    assert_eq!(open_names(&app), vec![ModalName::Confirm]);

    // Esc does not depend on the backdrop setting.
    key(&mut app, KeyCode::Esc);
    assert!(app.state().modals.is_empty());
}

#[test]
fn escape_closes_the_top_modal_first() {
    let mut app = empty_app();
    app.dispatch(Action::OpenModal(notice()));
    app.dispatch(Action::OpenModal(confirm("sure?")));

    key(&mut app, KeyCode::Esc);
    assert_eq!(open_names(&app), vec![ModalName::Notice]);
    key(&mut app, KeyCode::Esc);
    assert!(app.state().modals.is_empty());
}

#[test]
fn dialog_buttons_route_to_their_dialog() {
    let mut app = empty_app();
    app.dispatch(Action::OpenModal(confirm("sure?")));
    frame(&mut app);
    click_node(&mut app, button_id(ModalName::Confirm, 1));
    assert!(app.state().modals.is_empty());

    app.dispatch(Action::OpenModal(confirm("sure?")));
    frame(&mut app);
    click_node(&mut app, button_id(ModalName::Confirm, 0));
    assert!(app.state().modals.is_empty());
}

#[test]
fn buttons_of_a_covered_dialog_do_not_fire() {
    let mut app = empty_app();
    app.dispatch(Action::OpenModal(notice()));
    frame(&mut app);
    let close = app.tree().node(button_id(ModalName::Notice, 0)).unwrap().rect;

    // A confirm opens before the next frame is painted.
    app.dispatch(Action::OpenModal(confirm("sure?")));
    click(&mut app, close.x, close.y);
    assert_eq!(open_names(&app), vec![ModalName::Notice, ModalName::Confirm]);
}

#[test]
fn keys_go_to_the_top_modal_only() {
    let mut app = loaded_app(Settings::default());
    app.dispatch(Action::OpenModal(notice()));

    // Page bindings are shadowed while a modal is open.
    assert_eq!(key(&mut app, KeyCode::Down), EventResult::Consumed);
    assert_eq!(app.state().orders.selected, 0);

    // `q` closes the notice instead of quitting.
    assert_eq!(key(&mut app, KeyCode::Char('q')), EventResult::Consumed);
    assert!(app.state().modals.is_empty());
    assert_eq!(key(&mut app, KeyCode::Char('q')), EventResult::Quit);
}

#[test]
fn ctrl_c_quits_even_with_modals_open() {
    let mut app = empty_app();
    app.dispatch(Action::OpenModal(confirm("sure?")));
    let event = InputEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(app.handle_input(&event, Instant::now()), EventResult::Quit);
}

#[test]
fn key_releases_are_ignored() {
    let mut app = empty_app();
    app.dispatch(Action::OpenModal(confirm("sure?")));
    let mut release = KeyEvent::simple(KeyCode::Esc);
    release.kind = KeyEventKind::Release;
    assert_eq!(
        app.handle_input(&InputEvent::Key(release), Instant::now()),
        EventResult::Ignored
    );
    assert_eq!(open_names(&app), vec![ModalName::Confirm]);
}

#[test]
fn help_key_opens_the_key_notice() {
    let mut app = empty_app();
    key(&mut app, KeyCode::Char('?'));
    assert_eq!(open_names(&app), vec![ModalName::Notice]);
    let backend = frame(&mut app);
    assert!(backend.buffer().contains_text("Esc       close dialog"));
}

#[test]
fn row_clicks_select_then_open_status() {
    let mut app = loaded_app(Settings::default());
    frame(&mut app);

    // Title and column header take the first two rows.
    click(&mut app, 2, 3);
    assert_eq!(app.state().orders.selected, 1);
    assert!(app.state().modals.is_empty());

    click(&mut app, 2, 3);
    assert_eq!(open_names(&app), vec![ModalName::OrderStatus]);
    let backend = frame(&mut app);
    assert!(backend.buffer().contains_text("Order #1002"));
}

#[test]
fn page_rows_are_not_clickable_under_a_modal() {
    let mut app = loaded_app(Settings::default());
    frame(&mut app);
    app.dispatch(Action::OpenModal(notice()));

    // The stale tree still has the row; the click must not reach the page.
    click(&mut app, 2, 3);
    assert_eq!(app.state().orders.selected, 0);
}

#[test]
fn advancing_an_order_through_the_status_dialog() {
    let mut app = loaded_app(Settings::default());
    key(&mut app, KeyCode::Enter);
    assert_eq!(open_names(&app), vec![ModalName::OrderStatus]);

    key(&mut app, KeyCode::Char('a'));
    assert_eq!(
        open_names(&app),
        vec![ModalName::OrderStatus, ModalName::Confirm]
    );
    let backend = frame(&mut app);
    assert_eq!(
        backdrops(&app),
        vec![ModalName::OrderStatus, ModalName::Confirm]
    );
    assert!(backend.buffer().contains_text("as paid?"));

    key(&mut app, KeyCode::Enter);
    let pending = app.state().modals.get(ModalName::Confirm).unwrap();
    assert!(pending.local.pending);
    assert!(frame(&mut app).buffer().contains_text("Working…"));

    // Dismissal waits for the action to settle.
    key(&mut app, KeyCode::Esc);
    click(&mut app, 0, 0);
    assert!(app.state().modals.contains(ModalName::Confirm));

    assert!(app.wait_messages(WAIT, Instant::now()));
    assert_eq!(open_names(&app), vec![ModalName::OrderStatus]);
    let order = app.state().orders.find(OrderId(1001)).unwrap();
    assert_eq!(order.status, OrderStatus::Paid);
    let snackbar = app.state().snackbar.as_ref().unwrap();
    assert_eq!(snackbar.message, "Order #1001 is now paid");

    let backend = frame(&mut app);
    assert!(backend.buffer().contains_text("Order #1001 is now paid"));
    assert!(backend.buffer().contains_text("● Paid"));
}

#[test]
fn failed_confirm_keeps_the_dialog_open_with_the_error() {
    let mut settings = Settings::default();
    settings.market.fail_every = 1;
    let mut app = loaded_app(settings);

    key(&mut app, KeyCode::Char('c'));
    assert_eq!(open_names(&app), vec![ModalName::Confirm]);
    key(&mut app, KeyCode::Enter);
    assert!(app.wait_messages(WAIT, Instant::now()));

    let entry = app.state().modals.get(ModalName::Confirm).unwrap();
    assert!(!entry.local.pending);
    assert_eq!(
        entry.local.error.as_deref(),
        Some("marketplace unavailable: simulated outage")
    );
    assert_eq!(
        app.state().orders.find(OrderId(1001)).unwrap().status,
        OrderStatus::Registered
    );
    assert!(app.state().snackbar.is_none());

    let backend = frame(&mut app);
    assert!(backend
        .buffer()
        .contains_text("marketplace unavailable: simulated outage"));

    // Not pending any more, so the user can back out.
    key(&mut app, KeyCode::Esc);
    assert!(app.state().modals.is_empty());
}

#[test]
fn missing_dialog_renders_placeholder_and_stays_dismissable() {
    let mut app = App::with_dialogs(
        &Settings::default(),
        Arc::new(InMemoryMarket::new(Vec::new())),
        DialogTable::empty(),
    )
    .unwrap();
    app.dispatch(Action::OpenModal(confirm("sure?")));

    let backend = frame(&mut app);
    assert!(backend.buffer().contains_text("No dialog registered for"));
    assert!(app.tree().node(backdrop_id(ModalName::Confirm)).is_some());

    // No dialog to take the key, but the stack still owns the keyboard.
    assert_eq!(key(&mut app, KeyCode::Enter), EventResult::Consumed);
    assert_eq!(open_names(&app), vec![ModalName::Confirm]);

    click(&mut app, 0, 0);
    assert!(app.state().modals.is_empty());
}

#[test]
fn resize_requests_a_redraw() {
    let mut app = empty_app();
    frame(&mut app);
    assert!(!app.needs_redraw());
    assert_eq!(
        app.handle_input(&InputEvent::Resize(100, 30), Instant::now()),
        EventResult::Consumed
    );
    assert!(app.needs_redraw());
}

#[test]
fn snackbar_expires_on_tick() {
    let mut app = loaded_app(Settings::default());
    // Received orders cannot advance; the page says so in the status line.
    for _ in 0..6 {
        key(&mut app, KeyCode::Down);
    }
    let now = Instant::now();
    app.handle_input(&InputEvent::Key(KeyEvent::simple(KeyCode::Char('a'))), now);
    assert!(app.state().modals.is_empty());
    assert!(app.state().snackbar.is_some());

    assert!(app.tick(now + Duration::from_secs(60)));
    assert!(app.state().snackbar.is_none());
}

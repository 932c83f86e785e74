use super::*;
use crate::kernel::{ConfirmOptions, ModalKind, ModalName, NoticeOptions};
use crate::views::modal::dialog_id;

fn notice() -> ModalKind {
    ModalKind::Notice(NoticeOptions {
        title: "Keys".to_string(),
        lines: vec!["q quit".to_string()],
    })
}

fn confirm() -> ModalKind {
    ModalKind::Confirm(ConfirmOptions::message("sure?"))
}

fn enabled() -> DismissPolicy {
    DismissPolicy::new(&ModalSettings {
        dismiss_on_backdrop: true,
    })
}

#[test]
fn click_on_own_backdrop_dismisses_that_modal() {
    let mut modals = ModalRegistry::new();
    modals.open(confirm());

    let action = enabled().on_click(backdrop_id(ModalName::Confirm), &modals);
    assert!(matches!(
        action,
        Some(Action::DismissModal(ModalName::Confirm))
    ));
}

#[test]
fn click_on_dialog_body_does_not_dismiss() {
    let mut modals = ModalRegistry::new();
    modals.open(confirm());

    assert!(enabled()
        .on_click(dialog_id(ModalName::Confirm), &modals)
        .is_none());
    assert!(enabled()
        .on_click(Id::from_parts("orders.row", &[0]), &modals)
        .is_none());
}

#[test]
fn click_on_backdrop_of_a_closed_modal_is_ignored() {
    let mut modals = ModalRegistry::new();
    modals.open(notice());

    assert!(enabled()
        .on_click(backdrop_id(ModalName::Confirm), &modals)
        .is_none());
}

#[test]
fn target_picks_the_matching_modal_only() {
    let mut modals = ModalRegistry::new();
    modals.open(notice());
    modals.open(confirm());

    let action = enabled().on_click(backdrop_id(ModalName::Confirm), &modals);
    assert!(matches!(
        action,
        Some(Action::DismissModal(ModalName::Confirm))
    ));
}

#[test]
fn disabled_backdrop_dismissal_ignores_clicks() {
    let mut modals = ModalRegistry::new();
    modals.open(confirm());

    let policy = DismissPolicy::new(&ModalSettings {
        dismiss_on_backdrop: false,
    });
    assert!(policy
        .on_click(backdrop_id(ModalName::Confirm), &modals)
        .is_none());
}

#[test]
fn default_policy_dismisses_on_backdrop() {
    let mut modals = ModalRegistry::new();
    modals.open(confirm());
    assert!(DismissPolicy::new(&ModalSettings::default())
        .on_click(backdrop_id(ModalName::Confirm), &modals)
        .is_some());
}

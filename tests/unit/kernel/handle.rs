use super::*;
use crate::kernel::ConfirmOptions;

#[test]
fn open_and_close_are_forwarded_as_actions() {
    let (handle, rx) = ModalHandle::channel();
    handle
        .open(ModalKind::Confirm(ConfirmOptions::message("sure?")))
        .unwrap();
    handle.close(ModalName::Confirm).unwrap();

    match rx.try_recv().unwrap() {
        AppMessage::Action(Action::OpenModal(kind)) => assert_eq!(kind.name(), ModalName::Confirm),
        other => panic!("unexpected message: {other:?}"),
    }
    match rx.try_recv().unwrap() {
        AppMessage::Action(Action::CloseModal(name)) => assert_eq!(name, ModalName::Confirm),
        other => panic!("unexpected message: {other:?}"),
    }
    assert!(rx.try_recv().is_err());
}

#[test]
fn calls_fail_fast_once_the_loop_is_gone() {
    let (handle, rx) = ModalHandle::channel();
    let clone = handle.clone();
    drop(rx);

    assert_eq!(
        handle.open(ModalKind::Confirm(ConfirmOptions::message("late"))),
        Err(KernelError::RegistryClosed)
    );
    assert_eq!(
        clone.close(ModalName::Notice),
        Err(KernelError::RegistryClosed)
    );
    assert_eq!(
        clone.dispatch(Action::ShowHelp),
        Err(KernelError::RegistryClosed)
    );
}

#[test]
fn registry_closed_has_a_readable_message() {
    assert_eq!(
        KernelError::RegistryClosed.to_string(),
        "modal registry is no longer running"
    );
}

use super::*;

#[test]
fn default_toast_is_hidden() {
    let toast = ToastState::default();
    assert!(!toast.visible);
    assert_eq!(toast.seq, 0);
    assert_eq!(toast.kind, ToastKind::Success);
}

#[test]
fn show_makes_visible_and_returns_seq() {
    let mut toast = ToastState::default();
    let seq = toast.show("Copied to clipboard!", ToastKind::Success);
    assert_eq!(seq, 1);
    assert!(toast.visible);
    assert_eq!(toast.message, "Copied to clipboard!");
}

#[test]
fn expire_hides_matching_toast() {
    let mut toast = ToastState::default();
    let seq = toast.show("Entry deleted!", ToastKind::Success);
    assert!(toast.expire(seq));
    assert!(!toast.visible);
}

#[test]
fn newer_toast_survives_older_timer() {
    let mut toast = ToastState::default();
    let first = toast.show("Entry created!", ToastKind::Success);
    let second = toast.show("Failed to copy", ToastKind::Error);

    assert!(!toast.expire(first));
    assert!(toast.visible);
    assert_eq!(toast.message, "Failed to copy");
    assert_eq!(toast.kind, ToastKind::Error);

    assert!(toast.expire(second));
    assert!(!toast.visible);
}

#[test]
fn expire_after_dismiss_is_noop() {
    let mut toast = ToastState::default();
    let seq = toast.show("x", ToastKind::Success);
    toast.dismiss();
    assert!(!toast.expire(seq));
}

#[test]
fn kind_maps_to_css_class() {
    assert_eq!(ToastKind::Success.css_class(), "toast--success");
    assert_eq!(ToastKind::Error.css_class(), "toast--error");
}

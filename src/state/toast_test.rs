use super::*;

#[test]
fn toast_state_default_is_empty() {
    assert!(ToastState::default().items.is_empty());
}

#[test]
fn push_assigns_increasing_ids() {
    let mut t = ToastState::default();
    let a = t.push(ToastLevel::Success, "一");
    let b = t.push(ToastLevel::Error, "二");
    assert!(b > a);
    assert_eq!(t.items.len(), 2);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut t = ToastState::default();
    let a = t.push(ToastLevel::Info, "same");
    let b = t.push(ToastLevel::Info, "same");
    t.dismiss(a);
    assert_eq!(t.items.len(), 1);
    assert_eq!(t.items[0].id, b);
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut t = ToastState::default();
    t.push(ToastLevel::Success, "保存成功");
    t.dismiss(99);
    assert_eq!(t.items.len(), 1);
}

//! Tests for widgets/popup

use super::*;

const BOUNDS: Rect = Rect {
    x: 0,
    y: 0,
    width: 100,
    height: 50,
};

#[test]
fn test_popup_above_anchor_basic() {
    let anchor = Rect {
        x: 10,
        y: 30,
        width: 80,
        height: 3,
    };

    let popup = popup_above_anchor(anchor, 60, 10, 2);

    assert_eq!(popup.x, 12);
    assert_eq!(popup.y, 20);
    assert_eq!(popup.width, 60);
    assert_eq!(popup.height, 10);
}

#[test]
fn test_popup_above_anchor_clamped_at_top() {
    let anchor = Rect {
        x: 0,
        y: 4,
        width: 80,
        height: 3,
    };

    let popup = popup_above_anchor(anchor, 60, 10, 2);

    assert_eq!(popup.y, 0);
    assert_eq!(popup.height, 4);
}

#[test]
fn test_popup_below_anchor_basic() {
    let anchor = Rect {
        x: 0,
        y: 3,
        width: 80,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, 40, 8, 2, BOUNDS);

    assert_eq!(popup.x, 2);
    assert_eq!(popup.y, 6);
    assert_eq!(popup.width, 40);
    assert_eq!(popup.height, 8);
}

#[test]
fn test_popup_below_anchor_width_limited_by_anchor() {
    let anchor = Rect {
        x: 0,
        y: 0,
        width: 20,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, 60, 5, 2, BOUNDS);

    assert_eq!(popup.width, 16);
}

#[test]
fn test_popup_below_anchor_clamped_at_bottom() {
    let anchor = Rect {
        x: 0,
        y: 44,
        width: 80,
        height: 3,
    };

    let popup = popup_below_anchor(anchor, 40, 10, 2, BOUNDS);

    assert_eq!(popup.y, 47);
    assert_eq!(popup.height, 3);
}

#[test]
fn test_popup_near_anchor_prefers_below() {
    let anchor = Rect {
        x: 0,
        y: 20,
        width: 80,
        height: 3,
    };

    let popup = popup_near_anchor(anchor, 40, 10, 2, BOUNDS);

    assert_eq!(popup.y, 23);
    assert_eq!(popup.height, 10);
}

#[test]
fn test_popup_near_anchor_flips_above_when_cramped() {
    let anchor = Rect {
        x: 0,
        y: 40,
        width: 80,
        height: 3,
    };

    let popup = popup_near_anchor(anchor, 40, 12, 2, BOUNDS);

    assert_eq!(popup.y, 28);
    assert_eq!(popup.height, 12);
}

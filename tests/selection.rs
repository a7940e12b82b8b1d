//! Selection tests - caret movement, modifier matrix, pointer gestures

mod common;

use common::{assert_invariants, press, sel, test_input, test_input_with_selection, typed_input};
use hangul_textinput::{
    Direction, InputType, KeyCode, Modifiers, MoveUnit, Selection, TextEditMsg, TextInput,
};

const SHIFT: Modifiers = Modifiers::SHIFT;

// ========================================================================
// Collapsed caret
// ========================================================================

#[test]
fn test_arrow_matrix_from_collapsed_caret() {
    // "foo bar baz", caret at 5 (inside "bar")
    let cases = [
        (KeyCode::Left, Modifiers::NONE, sel(4, 4)),
        (KeyCode::Right, Modifiers::NONE, sel(6, 6)),
        (KeyCode::Left, SHIFT, sel(5, 4)),
        (KeyCode::Right, SHIFT, sel(5, 6)),
        (KeyCode::Left, Modifiers::ALT, sel(4, 4)),
        (KeyCode::Right, Modifiers::ALT, sel(7, 7)),
        (KeyCode::Left, Modifiers::ALT | SHIFT, sel(5, 4)),
        (KeyCode::Right, Modifiers::CTRL | SHIFT, sel(5, 7)),
        (KeyCode::Left, Modifiers::META, sel(0, 0)),
        (KeyCode::Right, Modifiers::META, sel(11, 11)),
        (KeyCode::Left, Modifiers::META | SHIFT, sel(5, 0)),
        (KeyCode::Right, Modifiers::META | SHIFT, sel(5, 11)),
        (KeyCode::Home, Modifiers::NONE, sel(0, 0)),
        (KeyCode::End, SHIFT, sel(5, 11)),
    ];
    for (key, mods, expected) in cases {
        let mut input = test_input("foo bar baz", 5);
        press(&mut input, key, mods);
        assert_eq!(input.selection(), expected, "{:?} {:?}", key, mods);
        assert_invariants(&input);
    }
}

#[test]
fn test_moves_clamp_at_bounds() {
    let mut input = test_input("ab", 0);
    press(&mut input, KeyCode::Left, Modifiers::NONE);
    press(&mut input, KeyCode::Left, Modifiers::ALT);
    assert_eq!(input.selection(), sel(0, 0));

    let mut input = test_input("ab", 2);
    press(&mut input, KeyCode::Right, SHIFT);
    press(&mut input, KeyCode::Right, Modifiers::ALT | SHIFT);
    assert_eq!(input.selection(), sel(2, 2));
}

// ========================================================================
// Existing selection
// ========================================================================

#[test]
fn test_collapse_matrix_with_selection() {
    let cases = [
        (KeyCode::Left, Modifiers::NONE, sel(4, 4)),
        (KeyCode::Right, Modifiers::NONE, sel(7, 7)),
        (KeyCode::Left, Modifiers::ALT, sel(4, 4)),
        (KeyCode::Right, Modifiers::ALT, sel(7, 7)),
        (KeyCode::Left, Modifiers::META, sel(0, 0)),
        (KeyCode::Right, Modifiers::META, sel(11, 11)),
        (KeyCode::Escape, Modifiers::NONE, sel(4, 4)),
    ];
    for (key, mods, expected) in cases {
        // "bar" selected leftward: anchor 7, caret 4
        let mut input = test_input_with_selection("foo bar baz", 7, 4);
        press(&mut input, key, mods);
        assert_eq!(input.selection(), expected, "{:?} {:?}", key, mods);
    }
}

#[test]
fn test_extend_matrix_with_selection() {
    let cases = [
        (KeyCode::Left, SHIFT, sel(4, 5)),
        (KeyCode::Right, SHIFT, sel(4, 7)),
        (KeyCode::Right, Modifiers::ALT | SHIFT, sel(4, 7)),
        (KeyCode::Left, Modifiers::ALT | SHIFT, sel(4, 4)),
        (KeyCode::Left, Modifiers::META | SHIFT, sel(6, 0)),
        (KeyCode::Right, Modifiers::META | SHIFT, sel(4, 11)),
    ];
    for (key, mods, expected) in cases {
        // "ba" selected rightward: anchor 4, caret 6
        let mut input = test_input_with_selection("foo bar baz", 4, 6);
        press(&mut input, key, mods);
        assert_eq!(input.selection(), expected, "{:?} {:?}", key, mods);
    }
}

#[test]
fn test_word_extension_never_overshoots_anchor() {
    // Selection "o b" leftward, anchor inside "bar"
    let mut input = test_input_with_selection("foo bar baz", 5, 2);
    press(&mut input, KeyCode::Right, Modifiers::ALT | SHIFT);
    assert_eq!(input.selection(), sel(5, 3));
    press(&mut input, KeyCode::Right, Modifiers::ALT | SHIFT);
    assert_eq!(input.selection(), sel(5, 5));
    press(&mut input, KeyCode::Right, Modifiers::ALT | SHIFT);
    assert_eq!(input.selection(), sel(5, 7));
}

#[test]
fn test_word_stops_across_scripts_and_delimiters() {
    let text = "hello한글@@!!!world";
    let mut input = test_input(text, 0);
    let mut prefixes = Vec::new();
    for _ in 0..5 {
        input.move_caret(Direction::Right, true, MoveUnit::Word);
        assert_eq!(input.selection().anchor, 0);
        prefixes.push(input.selected_text());
    }
    assert_eq!(
        prefixes,
        vec![
            "hello",
            "hello한글",
            "hello한글@@",
            "hello한글@@!!!",
            "hello한글@@!!!world"
        ]
    );
}

#[test]
fn test_word_stops_leftward() {
    let text = "hello한글@@!!!world";
    let mut input = test_input(text, 17);
    let mut carets = Vec::new();
    for _ in 0..5 {
        press(&mut input, KeyCode::Left, Modifiers::ALT | SHIFT);
        carets.push(input.selection().caret);
    }
    assert_eq!(carets, vec![12, 9, 7, 5, 0]);
    assert_eq!(input.selection().anchor, 17);
}

#[test]
fn test_select_all_idempotence() {
    for text in ["", "a", "hello 한글", "@@@"] {
        let mut input = test_input(text, 0);
        input.select_all();
        input.select_all();
        assert_eq!(input.selection(), Selection::new(0, input.len()));

        input.move_caret(Direction::Right, false, MoveUnit::Character);
        assert_eq!(input.selection(), Selection::collapsed(input.len()));

        input.select_all();
        input.move_caret(Direction::Left, false, MoveUnit::Character);
        assert_eq!(input.selection(), Selection::collapsed(0));
    }
}

#[test]
fn test_select_all_shortcut_on_korean_layout() {
    let mut input = test_input("안녕", 1);
    press(&mut input, KeyCode::Char('ㅁ'), Modifiers::META);
    assert_eq!(input.selection(), sel(0, 2));
}

#[test]
fn test_password_word_moves_go_to_ends() {
    let mut input = typed_input(InputType::Password, "foo bar", 7);
    press(&mut input, KeyCode::Left, Modifiers::ALT | SHIFT);
    assert_eq!(input.selection(), sel(7, 0));

    let mut input = typed_input(InputType::Password, "foo bar", 2);
    press(&mut input, KeyCode::Right, Modifiers::ALT);
    assert_eq!(input.selection(), sel(7, 7));
}

// ========================================================================
// Pointer gestures
// ========================================================================

#[test]
fn test_drag_selection_is_ascending() {
    let mut input = TextInput::with_text("hello world");
    input.update(TextEditMsg::PointerDown {
        index: 9,
        click_count: 1,
    });
    input.update(TextEditMsg::PointerMove(3));
    assert_eq!(input.selection(), sel(3, 9));
    input.update(TextEditMsg::PointerMove(99));
    assert_eq!(input.selection(), sel(9, 11));
    input.update(TextEditMsg::PointerUp);
    input.update(TextEditMsg::PointerMove(0));
    assert_eq!(input.selection(), sel(9, 11));
}

#[test]
fn test_drag_without_release_keeps_anchor() {
    let mut input = TextInput::with_text("abc");
    input.pointer_down(1, 1);
    input.extend_selection_to_pointer(3);
    assert_eq!(input.mouse_anchor(), Some(1));
}

#[test]
fn test_double_click_selects_stop_range() {
    let mut input = test_input("foo@@bar", 0);
    input.double_click(3);
    assert_eq!(input.selection(), sel(3, 5));
    input.double_click(6);
    assert_eq!(input.selection(), sel(5, 8));
}

#[test]
fn test_double_click_in_password_selects_all() {
    let mut input = typed_input(InputType::Password, "foo bar", 0);
    input.double_click(1);
    assert_eq!(input.selection(), sel(0, 7));
}

#[test]
fn test_triple_click_outside_selection_collapses() {
    let mut input = test_input_with_selection("foo bar baz", 4, 7);
    input.pointer_down(1, 3);
    assert_eq!(input.selection(), sel(1, 1));
}

#[test]
fn test_click_outside_blurs() {
    let mut input = test_input_with_selection("hello", 1, 4);
    input.update(TextEditMsg::PointerDownOutside);
    assert!(!input.is_focused());
    assert_eq!(input.selection(), sel(0, 0));
}

#[test]
fn test_out_of_range_selection_is_clamped() {
    let mut input = test_input("abc", 0);
    input.update(TextEditMsg::SetSelection {
        anchor: usize::MAX,
        caret: 1,
    });
    assert_eq!(input.selection(), sel(3, 1));
    assert_invariants(&input);
}

use super::*;

#[test]
fn nav_link_class_marks_exact_match_active() {
    assert_eq!(nav_link_class("/projects", "/projects"), "nav__link nav__link--active");
    assert_eq!(nav_link_class("/projects/", "/projects"), "nav__link nav__link--active");
}

#[test]
fn nav_link_class_ignores_other_routes() {
    assert_eq!(nav_link_class("/work", "/projects"), "nav__link");
    assert_eq!(nav_link_class("/", "/home"), "nav__link");
}

#[test]
fn menu_class_reflects_open_state() {
    assert_eq!(menu_class(false), "nav__links");
    assert_eq!(menu_class(true), "nav__links nav__links--open");
}

use backhaul_addon::{esc_html, Notices};

#[test]
fn set_notices_replaces_a_category() {
    let mut notices = Notices::new();
    notices.set_notices("license_check", vec!["first".to_string()]);
    notices.set_notices("license_check", vec!["second".to_string()]);
    assert_eq!(notices.all(), vec!["second"]);
}

#[test]
fn categories_accumulate_in_stable_order() {
    let mut notices = Notices::new();
    notices.set_notices("license_check", vec!["check".to_string()]);
    notices.set_notices("compatibility", vec!["compat".to_string()]);
    assert_eq!(notices.all(), vec!["compat", "check"]);
}

#[test]
fn clear_removes_one_category() {
    let mut notices = Notices::new();
    notices.set_notices("a", vec!["one".to_string()]);
    notices.set_notices("b", vec!["two".to_string()]);
    notices.clear("a");
    assert_eq!(notices.all(), vec!["two"]);
}

#[test]
fn clear_all_empties_the_registry() {
    let mut notices = Notices::new();
    notices.set_notices("a", vec!["one".to_string()]);
    notices.clear_all();
    assert!(notices.is_empty());
    assert_eq!(notices.render(), "");
}

#[test]
fn render_wraps_each_message_in_an_error_box() {
    let mut notices = Notices::new();
    notices.set_notices("a", vec!["first".to_string(), "second".to_string()]);

    let html = notices.render();
    assert_eq!(html.matches("<div class=\"error\">").count(), 2);
    assert!(html.contains("<p>first</p>"));
    assert!(html.contains("<p>second</p>"));
}

#[test]
fn render_escapes_markup_in_messages() {
    let mut notices = Notices::new();
    notices.set_notices("a", vec!["<script>alert(1)</script>".to_string()]);

    let html = notices.render();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn esc_html_escapes_the_usual_suspects() {
    assert_eq!(
        esc_html(r#"<a href="x">&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#039;&lt;/a&gt;"
    );
    assert_eq!(esc_html("plain text"), "plain text");
}

use std::fs;

use markdown_convert::{render_document, render_fragment, ConvertError, RenderOptions};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn options() -> RenderOptions {
    RenderOptions::default()
}

#[test]
fn default_document_is_a_complete_skeleton() {
    // Given
    let markdown = "# Hello\n\nSome text.";

    // When
    let document = render_document(markdown, None, options()).unwrap();

    // Then
    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("<html lang=\"en\">"));
    assert!(document.contains("<meta charset=\"UTF-8\">"));
    assert!(document.contains("<link rel=\"stylesheet\" href=\"style.css\">"));
    assert!(document.contains("<style>"));
    assert!(document.ends_with("</body>\n</html>"));
}

#[test]
fn body_content_is_exactly_the_parser_output() {
    // Given
    let markdown = "# Title\n\nA paragraph with **bold** text.";

    // When
    let document = render_document(markdown, None, options()).unwrap();
    let fragment = render_fragment(markdown, options());

    // Then
    let body_start = document.find("<body>\n").unwrap() + "<body>\n".len();
    let body_end = document.rfind("\n</body>").unwrap();
    assert_eq!(&document[body_start..body_end], fragment);
}

#[test]
fn empty_input_yields_an_empty_body() {
    // When
    let document = render_document("", None, options()).unwrap();

    // Then
    assert!(document.contains("<body>\n\n</body>"));
}

#[test]
fn heading_levels_map_to_heading_tags() {
    // Given
    let markdown = "# Main Title\n## Subtitle\n### Level 3";

    // When
    let fragment = render_fragment(markdown, options());

    // Then
    assert!(fragment.contains("<h1>Main Title</h1>"));
    assert!(fragment.contains("<h2>Subtitle</h2>"));
    assert!(fragment.contains("<h3>Level 3</h3>"));
}

#[test]
fn nested_lists_produce_nested_containers() {
    // Given
    let markdown = "- parent one\n  - child one\n  - child two\n- parent two\n";

    // When
    let fragment = render_fragment(markdown, options());

    // Then
    assert!(fragment.matches("<ul>").count() > 1);
    assert!(fragment.contains("parent one"));
    assert!(fragment.contains("child one"));
    assert!(fragment.contains("child two"));
}

#[test]
fn single_newlines_become_line_breaks() {
    // Given
    let markdown = "first line\nsecond line";

    // When
    let fragment = render_fragment(markdown, options());

    // Then
    assert!(fragment.contains("<br />"));
}

#[test]
fn bare_urls_are_autolinked() {
    // Given
    let markdown = "visit https://example.com today";

    // When
    let fragment = render_fragment(markdown, options());

    // Then
    assert!(fragment.contains("<a href=\"https://example.com\">"));
}

#[test]
fn strikethrough_and_tables_are_enabled() {
    // Given
    let markdown = "~~gone~~\n\n| a | b |\n| --- | --- |\n| 1 | 2 |\n";

    // When
    let fragment = render_fragment(markdown, options());

    // Then
    assert!(fragment.contains("<del>gone</del>"));
    assert!(fragment.contains("<table>"));
}

#[test]
fn raw_html_passes_through_unmodified() {
    // Given: sanitisation is deliberately not performed
    let markdown = "<script>alert('hi')</script>\n\nplain text";

    // When
    let fragment = render_fragment(markdown, options());

    // Then
    assert!(fragment.contains("<script>alert('hi')</script>"));
}

#[test]
fn template_placeholder_is_substituted_exactly_once() {
    // Given
    let dir = tempdir().unwrap();
    let template_path = dir.path().join("page.html");
    fs::write(&template_path, "<main>{{content}}</main> {{content}}").unwrap();
    let markdown = "plain";

    // When
    let document = render_document(markdown, Some(&template_path), options()).unwrap();

    // Then: the first occurrence is replaced, the second stays literal
    let fragment = render_fragment(markdown, options());
    assert_eq!(document, format!("<main>{}</main> {}", fragment, "{{content}}"));
}

#[test]
fn template_without_placeholder_drops_the_content() {
    // Given
    let dir = tempdir().unwrap();
    let template_path = dir.path().join("static.html");
    fs::write(&template_path, "<p>fixed page</p>").unwrap();

    // When
    let document = render_document("# Dropped", Some(&template_path), options()).unwrap();

    // Then: the template text comes back unchanged
    assert_eq!(document, "<p>fixed page</p>");
}

#[test]
fn unreadable_template_fails_the_render() {
    // Given
    let dir = tempdir().unwrap();
    let template_path = dir.path().join("absent.html");

    // When
    let err = render_document("# Title", Some(&template_path), options()).unwrap_err();

    // Then: no fallback to the default skeleton
    assert!(matches!(err, ConvertError::TemplateRead { .. }));
}

#[test]
fn hard_breaks_can_be_disabled() {
    // Given
    let opts = RenderOptions {
        hard_breaks: false,
        ..RenderOptions::default()
    };

    // When
    let fragment = render_fragment("first line\nsecond line", opts);

    // Then
    assert!(!fragment.contains("<br />"));
}

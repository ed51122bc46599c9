//! Whole-document conversions through the default pipeline.

use insta::assert_snapshot;
use mdh_pipeline::convert;

#[test]
fn test_heading_list_and_inline_document() {
    let md = "# Title\n\n- item1\n- item2\n\nSome **bold** and __em__ text.\n";
    let html = convert(md);

    assert_snapshot!(html.trim_end(), @r"
    <p>
    <h1>Title</h1>
    </p>
    <p>
    <ul>
    <li>item1</li>
    <li>item2</li>
    </ul>
    </p>
    <p>
    Some <b>bold</b> and <em>em</em> text.
    </p>
    ");
}

#[test]
fn test_two_paragraphs() {
    assert_eq!(
        convert("line1\n\nline2\n"),
        "<p>\nline1\n</p>\n<p>\nline2\n</p>\n"
    );
}

#[test]
fn test_directives_in_paragraph() {
    let html = convert("id: [[Hello]]\nname: ((Core))\n");
    assert_eq!(
        html,
        "<p>\nid: 8b1a9953c4611296a827abf8c47804d7\nname: ore\n</p>\n"
    );
}

#[test]
fn test_ordered_list() {
    let html = convert("* first\n* second\n");
    assert_eq!(
        html,
        "<p>\n<ol>\n<li>first</li>\n<li>second</li>\n</ol>\n</p>\n"
    );
}

#[test]
fn test_crlf_input() {
    assert_eq!(convert("# Hi\r\n\r\ntext\r\n"), convert("# Hi\n\ntext\n"));
}

#[test]
fn test_lone_carriage_return_separates_items() {
    assert_eq!(
        convert("- a\r- b\n"),
        "<p>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n</p>\n"
    );
}

#[test]
fn test_every_output_line_is_newline_terminated() {
    let html = convert("a\n\n- b\n\n## c");
    assert!(html.ends_with('\n'));
    assert!(!html.contains("\n\n"));
}

#[test]
fn test_empty_input() {
    assert_eq!(convert(""), "");
    assert_eq!(convert("\n\n   \n"), "");
}

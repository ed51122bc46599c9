use mdh_pipeline::blocks::{group_list, ListKind};
use mdh_pipeline::headings::convert_heading;
use mdh_pipeline::inline::directives::md5_hex;
use mdh_pipeline::inline::{hash_directive, strip_directive};
use mdh_pipeline::Document;
use proptest::prelude::*;

proptest! {
    #[test]
    fn heading_level_matches_marker_run(level in 1usize..=6, rest in "[A-Za-z][A-Za-z ]{0,20}") {
        let line = format!("{} {rest}", "#".repeat(level));
        prop_assert_eq!(
            convert_heading(&line),
            format!("<h{level}>{}</h{level}>", rest.trim())
        );
    }

    #[test]
    fn single_run_gets_one_container(items in prop::collection::vec("[a-z]{1,10}", 1..20)) {
        let doc: Document = items.iter().map(|item| format!("- {item}")).collect();
        let out = group_list(&doc, ListKind::Unordered, "- ");

        prop_assert_eq!(out.len(), items.len() + 2);
        prop_assert_eq!(out.lines().first().map(String::as_str), Some("<ul>"));
        prop_assert_eq!(out.lines().last().map(String::as_str), Some("</ul>"));
        prop_assert_eq!(out.iter().filter(|line| *line == "<ul>").count(), 1);
    }

    #[test]
    fn hash_directive_is_md5_hex(text in "[a-zA-Z0-9 ]{1,30}") {
        let digest = hash_directive(&format!("[[{text}]]"));
        prop_assert_eq!(&digest, &md5_hex(&text));
        prop_assert_eq!(digest.len(), 32);
        prop_assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn strip_directive_removes_every_c(text in "[a-zA-Z]{1,30}") {
        let out = strip_directive(&format!("(({text}))"));
        prop_assert!(!out.contains('c') && !out.contains('C'));
        prop_assert_eq!(out.len(), text.chars().filter(|c| !matches!(c, 'c' | 'C')).count());
    }
}

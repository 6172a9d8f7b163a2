use super::*;

fn texts(lines: &[PreviewLine]) -> Vec<String> {
    lines.iter().map(PreviewLine::text).collect()
}

#[test]
fn plain_text_keeps_lines() {
    let lines = plain_lines("a\n\n\tb\n");
    assert_eq!(texts(&lines), vec!["a", "", "    b"]);
    assert_eq!(render("# not a heading", PreviewKind::Plain)[0].text(), "# not a heading");
}

#[test]
fn heading_paragraph_and_list_are_separated() {
    let lines = render_markdown("# Title\n\nHello **world**\n\n- a\n- b\n");
    assert_eq!(
        texts(&lines),
        vec!["Title", "", "Hello world", "", "• a", "• b"]
    );

    let title = &lines[0].spans[0];
    assert_eq!(title.style.heading, Some(1));
    assert!(title.style.bold);

    let world = lines[2].spans.iter().find(|s| s.text == "world").unwrap();
    assert!(world.style.bold);
    assert_eq!(world.style.heading, None);
}

#[test]
fn ordered_and_nested_lists() {
    let lines = render_markdown("3. x\n4. y\n\n- a\n  - b\n");
    let text = texts(&lines);
    assert!(text.contains(&"3. x".to_string()));
    assert!(text.contains(&"4. y".to_string()));
    assert!(text.contains(&"• a".to_string()));
    assert!(text.contains(&"  • b".to_string()));
}

#[test]
fn fenced_code_block_is_code_styled() {
    let lines = render_markdown("```rust\nfn main() {}\n```\n");
    assert_eq!(texts(&lines), vec!["rust", "fn main() {}"]);
    assert!(lines[0].spans[0].style.muted);
    assert!(lines[1].spans[0].style.code);
}

#[test]
fn inline_styles() {
    let lines = render_markdown("*it* ~~gone~~ `code` [link](https://example.com)");
    let spans = &lines[0].spans;
    let find = |t: &str| spans.iter().find(|s| s.text == t).unwrap().style;

    assert!(find("it").italic);
    assert!(find("gone").strikethrough);
    assert!(find("code").code);
    let link = find("link");
    assert!(link.link && link.underline);
}

#[test]
fn rule_renders_muted_line() {
    let lines = render_markdown("above\n\n---\n\nbelow");
    let rule = lines
        .iter()
        .find(|l| l.text().starts_with('─'))
        .expect("rule line");
    assert!(rule.spans[0].style.muted);
    assert_eq!(lines.first().unwrap().text(), "above");
    assert_eq!(lines.last().unwrap().text(), "below");
}

#[test]
fn empty_document_has_no_lines() {
    assert!(render_markdown("").is_empty());
    assert!(plain_lines("").is_empty());
}

use seq_extract_rs::structure::{parse_blocks, Tree};
use seq_extract_rs::ExtractorError;

fn leaf(text: &str) -> Tree<String> {
    Tree::Leaf(text.to_string())
}

#[test]
fn test_top_level_list_elements_are_root_blocks() {
    let blocks = parse_blocks("[[a, b], [c]]").unwrap();
    assert_eq!(
        blocks,
        vec![
            Tree::Sequence(vec![leaf("a"), leaf("b")]),
            Tree::Sequence(vec![leaf("c")]),
        ]
    );
}

#[test]
fn test_bare_tuple_top_level_is_normalized() {
    let blocks = parse_blocks("[a], [b]").unwrap();
    assert_eq!(
        blocks,
        vec![
            Tree::Sequence(vec![leaf("a")]),
            Tree::Sequence(vec![leaf("b")]),
        ]
    );
}

#[test]
fn test_nested_plain_list_is_a_nested_sequence() {
    let blocks = parse_blocks("[[a, [b, c], d]]").unwrap();
    assert_eq!(
        blocks,
        vec![Tree::Sequence(vec![
            leaf("a"),
            Tree::Sequence(vec![leaf("b"), leaf("c")]),
            leaf("d"),
        ])]
    );
}

#[test]
fn test_list_of_lists_is_an_alternation() {
    // a root block whose first element is a list is itself an alternation
    let blocks = parse_blocks("[[[a], [b]], [c]]").unwrap();
    assert_eq!(
        blocks,
        vec![
            Tree::Alternation(vec![vec![leaf("a")], vec![leaf("b")]]),
            Tree::Sequence(vec![leaf("c")]),
        ]
    );
}

#[test]
fn test_alternative_containing_an_alternation() {
    let blocks = parse_blocks("[[s, [[a, [[b], [c]]], [d]]]]").unwrap();
    assert_eq!(
        blocks,
        vec![Tree::Sequence(vec![
            leaf("s"),
            Tree::Alternation(vec![
                vec![
                    leaf("a"),
                    Tree::Alternation(vec![vec![leaf("b")], vec![leaf("c")]]),
                ],
                vec![leaf("d")],
            ]),
        ])]
    );
}

#[test]
fn test_call_style_tokens_keep_their_parentheses() {
    let blocks = parse_blocks("[[assign(JFrame), call(add)]]").unwrap();
    assert_eq!(
        blocks,
        vec![Tree::Sequence(vec![leaf("assign(JFrame)"), leaf("call(add)")])]
    );
}

#[test]
fn test_empty_list_parses_as_empty_leaf_everywhere() {
    let blocks = parse_blocks("[[a, []]]").unwrap();
    assert_eq!(
        blocks,
        vec![Tree::Sequence(vec![
            leaf("a"),
            Tree::Sequence(vec![leaf("")]),
        ])]
    );
    // as a branch alternative it is one empty-statement sequence
    let blocks = parse_blocks("[[s, [[a], []]]]").unwrap();
    assert_eq!(
        blocks,
        vec![Tree::Sequence(vec![
            leaf("s"),
            Tree::Alternation(vec![vec![leaf("a")], vec![leaf("")]]),
        ])]
    );
}

#[test]
fn test_explicitly_quoted_empty_leaf() {
    let blocks = parse_blocks("[[s, \"\"]]").unwrap();
    assert_eq!(blocks, vec![Tree::Sequence(vec![leaf("s"), leaf("")])]);
}

#[test]
fn test_trailing_comma_is_tolerated() {
    let blocks = parse_blocks("[[a, b,]]").unwrap();
    assert_eq!(blocks, vec![Tree::Sequence(vec![leaf("a"), leaf("b")])]);
}

#[test]
fn test_unterminated_list_is_malformed() {
    assert!(matches!(
        parse_blocks("[[a, b]"),
        Err(ExtractorError::MalformedLiteral { .. })
    ));
}

#[test]
fn test_stray_token_is_malformed() {
    assert!(matches!(
        parse_blocks("[a] junk"),
        Err(ExtractorError::MalformedLiteral { .. })
    ));
}

#[test]
fn test_alternation_with_bare_token_element_is_invalid() {
    assert!(matches!(
        parse_blocks("[[[a], b]]"),
        Err(ExtractorError::InvalidStructure { .. })
    ));
}

#[test]
fn test_whitespace_only_input_has_no_blocks() {
    assert!(parse_blocks("\n\t ").unwrap().is_empty());
}

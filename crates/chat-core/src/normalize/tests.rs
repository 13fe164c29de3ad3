use super::*;

#[test]
fn test_split_camel_case() {
    assert_eq!(split_camel_case("SystemDesignis"), "System Designis");
    assert_eq!(split_camel_case("HTTPServer"), "HTTPServer");
    // Over-eager, but that's the contract.
    assert_eq!(split_camel_case("iPhone"), "i Phone");
}

#[test]
fn test_join_hyphen_breaks() {
    assert_eq!(join_hyphen_breaks("data - base"), "database");
    assert_eq!(join_hyphen_breaks("well-known"), "wellknown");
    assert_eq!(join_hyphen_breaks("Foo-Bar"), "Foo-Bar");
    assert_eq!(join_hyphen_breaks("x  -  y"), "x  -  y");
}

#[test]
fn test_join_mid_word_spaces() {
    assert_eq!(join_mid_word_spaces("Data base"), "Database");
    assert_eq!(join_mid_word_spaces("a b c"), "ab c");
    assert_eq!(join_mid_word_spaces("one\ntwo"), "onetwo");
    assert_eq!(join_mid_word_spaces("a   b"), "a   b");
    assert_eq!(join_mid_word_spaces("Hello World"), "Hello World");
}

#[test]
fn test_rewrite_bold_labels() {
    assert_eq!(
        rewrite_bold_labels("- **Performance** : good"),
        "\n\n- **Performance:** good"
    );
    assert_eq!(
        rewrite_bold_labels("Intro - ** Key Point ** : value"),
        "Intro \n\n- **Key Point:** value"
    );
    // Punctuation is not part of a label.
    assert_eq!(rewrite_bold_labels("- **Q&A**:"), "- **Q&A**:");
}

#[test]
fn test_rewrite_bold_headings() {
    assert_eq!(rewrite_bold_headings("# **Title**"), "\n\n## Title\n\n");
    assert_eq!(
        rewrite_bold_headings("Intro\n#  **  Big Title  **\nBody"),
        "Intro\n\n## Big Title\n\n\nBody"
    );
    assert_eq!(rewrite_bold_headings("# Plain"), "# Plain");
}

#[test]
fn test_space_numbered_items() {
    assert_eq!(space_numbered_items("1. foo 2. bar"), "\n1. foo \n2. bar");
    assert_eq!(space_numbered_items("10.x"), "\n10. x");
}

#[test]
fn test_separate_bullet_blocks() {
    assert_eq!(
        separate_bullet_blocks("\n\n- **A:** one   \n\n\n## Next"),
        "\n\n- **A:** one\n\n## Next"
    );
    assert_eq!(
        separate_bullet_blocks("- **A:** x\n- **B:** y"),
        "- **A:** x\n\n- **B:** y\n"
    );
    assert_eq!(
        separate_bullet_blocks("text\n- **Label**: rest"),
        "text\n- **Label**: rest\n"
    );
    assert_eq!(separate_bullet_blocks("- plain item"), "- plain item");
}

#[test]
fn test_collapse_whitespace() {
    assert_eq!(collapse_whitespace("a  \t b\n\n\n\nc"), "a b\n\nc");
    assert_eq!(collapse_whitespace("a \nb\n\nc"), "a \nb\n\nc");
}

#[test]
fn test_normalize_examples() {
    assert_eq!(normalize("SystemDesignis"), "System Designis");
    assert_eq!(normalize("Data base"), "Database");
    assert_eq!(normalize("# **Title**"), "## Title");
    assert_eq!(normalize("- **Performance** : good"), "- **Performance:** good");
    assert_eq!(normalize("1. foo 2. bar"), "1. foo \n2. bar");
}

#[test]
fn test_normalize_heading_gets_blank_lines() {
    let output = normalize("Overview # **Title** Details here");
    assert_eq!(output, "Overview \n\n## Title\n\n Detailshere");
    assert!(output.contains("\n\n## Title\n\n"));
}

#[test]
fn test_normalize_bullet_gets_own_paragraph() {
    let output = normalize("Summary - **Performance** : good");
    assert_eq!(output, "Summary \n\n- **Performance:** good");
    assert!(output.contains("\n\n- **Performance:** good"));
}

#[test]
fn test_normalize_is_idempotent_on_well_formed_input() {
    let inputs = [
        "## Title\n\n- **Performance:** good\n\nDone.",
        "System Designis",
        "- **Performance** : good",
        "Intro # **Title** Body",
        "Database",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "input: {input:?}");
    }
    assert_eq!(normalize(inputs[0]), inputs[0]);
}

#[test]
fn test_normalize_output_shape() {
    let inputs = [
        "",
        "   ",
        "\n\n\n\n",
        "  padded  ",
        "1.2.3.4.",
        "# ** **",
        "- ** ** :",
        "***",
        "a\n\n\n\n\nb",
        "- **A:** x\n\n\n\n- **B:** y\n\n\n",
        "ünïcödé  wörds 😓 and\u{a0}\u{a0}spaces",
        "\t# **Heading**\t",
    ];
    for input in inputs {
        let output = normalize(input);
        assert_eq!(output, output.trim(), "input: {input:?}");
        assert!(!output.contains("\n\n\n"), "input: {input:?}");
    }
}

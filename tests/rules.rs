mod common;

use common::{assert_format_eq, pretty};

#[test]
fn rules_and_atrules_start_on_a_new_line() {
    let actual = pretty(
        "
        selector { property: value; }
        @media (min-width: 1000px) {
            selector { property: value; }
        }
        selector { property: value; }
        @layer test {
            selector { property: value; }
        }
        ",
    );
    let expected = "selector {
\tproperty: value;
}

@media (min-width: 1000px) {
\tselector {
\t\tproperty: value;
\t}
}

selector {
\tproperty: value;
}

@layer test {
\tselector {
\t\tproperty: value;
\t}
}";
    assert_format_eq(&actual, expected, "rules_and_atrules_start_on_a_new_line");
}

#[test]
fn empty_line_between_rules() {
    let actual = pretty("rule1 { property: value } rule2 { property: value }");
    let expected = "rule1 {\n\tproperty: value;\n}\n\nrule2 {\n\tproperty: value;\n}";
    assert_format_eq(&actual, expected, "empty_line_between_rules");
}

#[test]
fn empty_line_between_declarations_and_nested_rules() {
    let actual = pretty(
        "
        test {
            property1: value1;
            & > item {
                property2: value2;
                & + another {
                    property3: value3;
                }
            }
        }
        ",
    );
    let expected = "test {
\tproperty1: value1;

\t& > item {
\t\tproperty2: value2;

\t\t& + another {
\t\t\tproperty3: value3;
\t\t}
\t}
}";
    assert_format_eq(&actual, expected, "empty_line_between_declarations_and_nested_rules");
}

#[test]
fn declarations_after_nested_rules() {
    let actual = pretty("a { font: 0/0; & b { color: red; } color: green;}");
    let expected = "a {
\tfont: 0/0;

\t& b {
\t\tcolor: red;
\t}

\tcolor: green;
}";
    assert_format_eq(&actual, expected, "declarations_after_nested_rules");
}

#[test]
fn empty_nested_rule_stays_on_one_line() {
    let actual = pretty("@layer test { empty {} }");
    assert_format_eq(&actual, "@layer test {\n\tempty {}\n}", "empty_nested_rule_stays_on_one_line");
}

#[test]
fn relaxed_nesting() {
    let actual = pretty("selector { a & { color:red } b { color: blue } }");
    let expected = "selector {
\ta & {
\t\tcolor: red;
\t}

\tb {
\t\tcolor: blue;
\t}
}";
    assert_format_eq(&actual, expected, "relaxed_nesting");
}

#[test]
fn nested_rules_starting_with_a_combinator() {
    let actual = pretty(
        "
        selector {
            > a { color:red }
            ~ a { color:red }
            + a { color:red }
        }
        ",
    );
    let expected = "selector {
\t> a {
\t\tcolor: red;
\t}

\t~ a {
\t\tcolor: red;
\t}

\t+ a {
\t\tcolor: red;
\t}
}";
    assert_format_eq(&actual, expected, "nested_rules_starting_with_a_combinator");
}

#[test]
fn unknown_content_in_curly_braces() {
    let actual = pretty("selector { { color: red; } }");
    assert_format_eq(
        &actual,
        "selector {\n\t{ color: red; }\n}",
        "unknown_content_in_curly_braces",
    );
}

#[test]
fn unclosed_block() {
    assert_eq!(pretty("a { mumblejumble"), "a {\n\tmumblejumble\n}");
}

#[test]
fn prematurely_closed_declaration() {
    assert_eq!(pretty("a { mumblejumble: }"), "a {\n\tmumblejumble: ;\n}");
}

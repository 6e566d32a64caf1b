mod common;

use common::{assert_format_eq, pretty};
use format_css::minify;

#[test]
fn prelude_spacing() {
    let fixtures = [
        ("@media all   and print {}", "@media all and print {}"),
        ("@media (min-width:1000px) {}", "@media (min-width: 1000px) {}"),
        ("@media (width>1000px) {}", "@media (width > 1000px) {}"),
        ("@media (width=>1000px) {}", "@media (width => 1000px) {}"),
        ("@media (width<=1000px) {}", "@media (width <= 1000px) {}"),
        ("@media (200px<width<1000px) {}", "@media (200px < width < 1000px) {}"),
        (
            "@media (min-width:1px)and (max-width:2px) {}",
            "@media (min-width: 1px) and (max-width: 2px) {}",
        ),
        ("@layer tbody,thead;", "@layer tbody, thead;"),
        ("@supports (display:grid) {}", "@supports (display: grid) {}"),
        ("@supports selector(a:hover) {}", "@supports selector(a:hover) {}"),
    ];

    for (css, expected) in fixtures {
        assert_format_eq(&pretty(css), expected, css);
    }
}

#[test]
fn lowercases_names_but_not_preludes() {
    assert_eq!(pretty("@LAYER test {}"), "@layer test {}");
    assert_eq!(pretty("@keyframes TEST {}"), "@keyframes TEST {}");
}

#[test]
fn statements() {
    let actual = pretty("@charset \"utf-8\";@import url('test');@layer a,b;");
    let expected = "@charset \"utf-8\";\n\n@import url('test');\n\n@layer a, b;";
    assert_format_eq(&actual, expected, "statements");
}

#[test]
fn empty_blocks_stay_on_one_line() {
    assert_eq!(pretty("@media print {\n\n}"), "@media print {}");
    assert_eq!(pretty("@font-face{}"), "@font-face {}");
}

#[test]
fn nested_at_rules() {
    let actual = pretty("@media print { @supports (display:grid) { a { color: red } } }");
    let expected = "@media print {
\t@supports (display: grid) {
\t\ta {
\t\t\tcolor: red;
\t\t}
\t}
}";
    assert_format_eq(&actual, expected, "nested_at_rules");
}

#[test]
fn at_rules_inside_style_rules() {
    let actual = pretty("a { color: red; @media (width > 0) { color: blue } }");
    let expected = "a {
\tcolor: red;

\t@media (width > 0) {
\t\tcolor: blue;
\t}
}";
    assert_format_eq(&actual, expected, "at_rules_inside_style_rules");
}

#[test]
fn comments_in_preludes_are_kept() {
    assert_eq!(
        pretty("@supports not /*0*/(/*1*/flex :/*3*/1/*4*/)/*5*/{}"),
        "@supports not /*0*/(/*1*/flex: /*3*/1/*4*/)/*5*/ {}"
    );
}

#[test]
fn calc_in_preludes() {
    assert_eq!(
        pretty("@media (min-width: calc(1px*2)) {}"),
        "@media (min-width: calc(1px * 2)) {}"
    );
    assert_eq!(
        minify("@media (min-width: calc(1px*2)) {}"),
        "@media (min-width: calc(1px*2)){}"
    );
}

#[test]
fn font_face() {
    let actual = pretty("@font-face{font-family:Test;src:url(test.woff2)format('woff2')}");
    let expected = "@font-face {\n\tfont-family: Test;\n\tsrc: url(\"test.woff2\") format(\"woff2\");\n}";
    assert_format_eq(&actual, expected, "font_face");
}

//! Inline Markdown/HTML styling wrappers.

/// `**text**`
pub fn bold(text: &str) -> String {
    format!("**{text}**")
}

/// `_text_`
pub fn italic(text: &str) -> String {
    format!("_{text}_")
}

/// `` `text` ``
pub fn code(text: &str) -> String {
    format!("`{text}`")
}

/// `(text)`
pub fn parentheses(text: &str) -> String {
    format!("({text})")
}

/// HTML subscript.
pub fn sub(text: &str) -> String {
    format!("<sub>{text}</sub>")
}

/// HTML `<font>` color wrapper; `color` is any CSS color, e.g. `#498efc`.
pub fn color(color: &str, text: &str) -> String {
    format!("<font color=\"{color}\">{text}</font>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrappers() {
        assert_eq!(bold("a"), "**a**");
        assert_eq!(italic("a"), "_a_");
        assert_eq!(code("a"), "`a`");
        assert_eq!(parentheses("a"), "(a)");
        assert_eq!(sub("a"), "<sub>a</sub>");
        assert_eq!(color("#498efc", "a"), "<font color=\"#498efc\">a</font>");
    }

    #[test]
    fn wrappers_compose() {
        assert_eq!(parentheses(&italic("float")), "(_float_)");
        assert_eq!(sub(&italic("- Modifiable")), "<sub>_- Modifiable_</sub>");
        assert_eq!(
            bold(&color("#498efc", "vehicle.car")),
            "**<font color=\"#498efc\">vehicle.car</font>**"
        );
    }
}

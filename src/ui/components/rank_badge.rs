use dioxus::prelude::*;

use crate::domain::rank;

/// Inline badge for a rank label. Unknown labels render with the fallback style.
#[component]
pub fn RankBadge(rank: String) -> Element {
    let badge = rank::render(&rank);

    rsx! {
        span {
            class: "{badge.class}",
            "{badge.text}"
        }
    }
}

/// The badge for `label` as an HTML string.
pub fn badge_markup(label: &str) -> String {
    dioxus_ssr::render_element(rsx! {
        RankBadge { rank: label.to_string() }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rank::{FALLBACK_STYLE, STRUCTURAL_TOKENS};

    #[test]
    fn renders_s_rank_span() {
        let html = badge_markup("S");
        assert_eq!(
            html,
            format!("<span class=\"bg-red-600 font-bold {STRUCTURAL_TOKENS}\">S</span>")
        );
    }

    #[test]
    fn renders_unknown_label_with_fallback() {
        let html = badge_markup("Q");
        assert_eq!(
            html,
            format!("<span class=\"{FALLBACK_STYLE} {STRUCTURAL_TOKENS}\">Q</span>")
        );
    }

    #[test]
    fn a_plus_keeps_its_own_style() {
        let plus = badge_markup("A+");
        let plain = badge_markup("A");
        assert!(plus.contains("bg-yellow-500"));
        assert!(plus.contains(">A+</span>"));
        assert!(plain.contains("bg-purple-500"));
        assert!(!plain.contains("bg-yellow-500"));
    }

    fn inner_text(html: &str) -> &str {
        let start = html.find('>').map(|idx| idx + 1).unwrap_or(0);
        let end = html.rfind("</span>").unwrap_or(html.len());
        &html[start..end]
    }

    #[test]
    fn markup_text_is_escaped_not_rewritten() {
        let html = badge_markup("<b>");
        assert!(html.contains(FALLBACK_STYLE));
        assert_eq!(inner_text(&html), "&#60;b&#62;");
        assert!(!html.contains("<b>"));

        let html = badge_markup("a&b");
        assert_eq!(inner_text(&html), "a&#38;b");
    }

    #[test]
    fn empty_label_renders_empty_fallback_span() {
        assert_eq!(
            badge_markup(""),
            format!("<span class=\"{FALLBACK_STYLE} {STRUCTURAL_TOKENS}\"></span>")
        );
    }

    #[test]
    fn badge_renders_inside_sibling_content() {
        let html = dioxus_ssr::render_element(rsx! {
            p {
                "Grade: "
                RankBadge { rank: "B".to_string() }
            }
        });
        assert!(html.starts_with("<p>Grade: <span"));
        assert!(html.contains("bg-blue-500"));
        assert!(html.ends_with(">B</span></p>"));
    }
}

//! The substitution engine.

use tracing::instrument;

use crate::vars::VarMap;

/// Render a template string by replacing `{{KEY}}` placeholders.
///
/// # Algorithm
///
/// One global literal (non-regex) `str::replace` per variable, applied in
/// map order. Not the most efficient for large templates with many
/// variables (would benefit from Aho-Corasick or similar), but adequate for
/// the file sizes this tool targets.
///
/// # Sequential Semantics
///
/// Replacements are applied one after another on the evolving text, so a
/// later pair can re-match `{{...}}`-shaped text introduced by an earlier
/// pair's value. This is observable behaviour, kept deliberately — a
/// simultaneous single-pass scheme would be a different tool.
///
/// # Edge Cases
///
/// - `{{UNKNOWN}}` → remains as literal `{{UNKNOWN}}`, braces and all
/// - `{{K}}{{K}}` → both occurrences replaced
/// - Nested braces `{{{K}}}` → outer braces preserved, inner replaced
/// - Empty variable map → output is the template, byte for byte
#[instrument(skip_all, fields(template_len = template.len(), vars = vars.len()))]
pub fn render(template: &str, vars: &VarMap) -> String {
    let mut text = template.to_string();

    for (key, value) in vars.iter() {
        let placeholder = format!("{{{{{key}}}}}");
        text = text.replace(&placeholder, value);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> VarMap {
        let mut map = VarMap::new();
        for (k, v) in pairs {
            map.insert(*k, *v);
        }
        map
    }

    #[test]
    fn template_without_placeholders_is_unchanged() {
        let text = "no placeholders here, just {braces} and text";
        assert_eq!(render(text, &vars(&[("k", "v")])), text);
    }

    #[test]
    fn replaces_every_occurrence() {
        let out = render("{{k}} and {{k}} again {{k}}", &vars(&[("k", "x")]));
        assert_eq!(out, "x and x again x");
    }

    #[test]
    fn unsupplied_placeholder_stays_verbatim() {
        let out = render("keep {{missing}} intact", &vars(&[("k", "v")]));
        assert_eq!(out, "keep {{missing}} intact");
    }

    #[test]
    fn multiple_variables_in_one_template() {
        let out = render(
            "Hello, {{name}}! You are {{age}}.",
            &vars(&[("name", "Ada"), ("age", "36")]),
        );
        assert_eq!(out, "Hello, Ada! You are 36.");
    }

    #[test]
    fn empty_template_renders_empty() {
        assert_eq!(render("", &vars(&[("k", "v")])), "");
    }

    #[test]
    fn empty_var_map_is_identity() {
        let text = "text with {{anything}} inside";
        assert_eq!(render(text, &VarMap::new()), text);
    }

    #[test]
    fn nested_braces_keep_outer_pair() {
        let out = render("{{{k}}}", &vars(&[("k", "v")]));
        assert_eq!(out, "{v}");
    }

    #[test]
    fn value_may_be_empty_string() {
        let out = render("a{{k}}b", &vars(&[("k", "")]));
        assert_eq!(out, "ab");
    }

    #[test]
    fn unicode_values_and_templates() {
        let out = render("héllo {{naïve}} ✓", &vars(&[("naïve", "wørld")]));
        assert_eq!(out, "héllo wørld ✓");
    }

    // Sequential application: a later pair re-matches text introduced by
    // an earlier pair's value.
    #[test]
    fn later_pair_rematches_earlier_output() {
        let out = render("{{a}}", &vars(&[("a", "{{b}}"), ("b", "X")]));
        assert_eq!(out, "X");
    }

    #[test]
    fn earlier_pair_does_not_see_later_output() {
        // "b" runs after "a", so text it inserts is never re-scanned by "a".
        let out = render("{{b}}", &vars(&[("a", "X"), ("b", "{{a}}")]));
        assert_eq!(out, "{{a}}");
    }

    #[test]
    fn rendering_is_deterministic() {
        let map = vars(&[("name", "Ada")]);
        let first = render("Hello, {{name}}!", &map);
        let second = render("Hello, {{name}}!", &map);
        assert_eq!(first, second);
    }
}

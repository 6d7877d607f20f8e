//! Literal placeholder substitution.

/// How often each bound token is replaced in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// Every occurrence of every token.
    Global,
    /// Only the first occurrence of each token.
    FirstOccurrence,
}

/// Ordered token → value bindings for one render.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    entries: Vec<(String, String)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the delimited token `{{name}}`.
    pub fn bind(self, name: &str, value: impl Into<String>) -> Self {
        self.bind_literal(format!("{{{{{name}}}}}"), value)
    }

    /// Binds an arbitrary literal token, such as a sentinel string.
    pub fn bind_literal(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        let token = token.into();
        if !token.is_empty() {
            self.entries.push((token, value.into()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Replaces bound tokens in `source` according to `policy`.
///
/// Works in a single pass over `source`: inserted values are never scanned for
/// further tokens, and tokens with no binding are left verbatim. When matches
/// overlap, the one starting first wins; ties go to the earlier binding.
pub fn substitute(source: &str, bindings: &Bindings, policy: Substitution) -> String {
    let mut matches: Vec<(usize, usize, &str)> = Vec::new();

    for (token, value) in &bindings.entries {
        let mut found = source.match_indices(token.as_str());
        match policy {
            Substitution::Global => {
                matches.extend(found.map(|(start, t)| (start, start + t.len(), value.as_str())));
            }
            Substitution::FirstOccurrence => {
                if let Some((start, t)) = found.next() {
                    matches.push((start, start + t.len(), value.as_str()));
                }
            }
        }
    }

    // Stable sort keeps binding order for matches at the same offset.
    matches.sort_by_key(|&(start, _, _)| start);

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for (start, end, value) in matches {
        if start < cursor {
            continue;
        }
        out.push_str(&source[cursor..start]);
        out.push_str(value);
        cursor = end;
    }
    out.push_str(&source[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_replaces_every_occurrence() {
        let bindings = Bindings::new().bind("TITLE", "Crop Yields for 2019");
        let out = substitute(
            "<title>{{TITLE}}</title><h1>{{TITLE}}</h1>",
            &bindings,
            Substitution::Global,
        );
        assert_eq!(
            out,
            "<title>Crop Yields for 2019</title><h1>Crop Yields for 2019</h1>"
        );
    }

    #[test]
    fn test_first_occurrence_replaces_once() {
        let bindings = Bindings::new().bind_literal("$$$CHART_DATA$$$", "[]");
        let out = substitute(
            "a $$$CHART_DATA$$$ b $$$CHART_DATA$$$",
            &bindings,
            Substitution::FirstOccurrence,
        );
        assert_eq!(out, "a [] b $$$CHART_DATA$$$");
    }

    #[test]
    fn test_unknown_tokens_are_left_verbatim() {
        let bindings = Bindings::new().bind("TITLE", "T");
        let out = substitute("{{TITLE}} {{FOOTER}}", &bindings, Substitution::Global);
        assert_eq!(out, "T {{FOOTER}}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let bindings = Bindings::new()
            .bind("TITLE", "{{TABLE_ROWS}}")
            .bind("TABLE_ROWS", "<tr></tr>");
        let out = substitute("{{TITLE}}|{{TABLE_ROWS}}", &bindings, Substitution::Global);
        assert_eq!(out, "{{TABLE_ROWS}}|<tr></tr>");
    }

    #[test]
    fn test_empty_bindings_return_source() {
        let source = "<p>{{ANYTHING}}</p>";
        assert_eq!(
            substitute(source, &Bindings::new(), Substitution::Global),
            source
        );
    }

    #[test]
    fn test_bind_builds_delimited_token() {
        let bindings = Bindings::new().bind("NAV_LINKS", "x").bind_literal("", "ignored");
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings.entries[0].0, "{{NAV_LINKS}}");
    }
}

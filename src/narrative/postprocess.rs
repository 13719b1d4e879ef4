//! Cleanup of provider responses into plain prose sections.
//!
//! Providers answer in loosely formatted text. Markdown emphasis, heading
//! markers and list markers are stripped, then the text is split into the
//! executive summary and the detailed analysis.

use super::fallback::Narrative;
use regex::Regex;
use std::sync::LazyLock;

static BOLD_STARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("static regex"));
static BOLD_UNDERSCORES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__(.+?)__").expect("static regex"));
static ITALIC_STAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*\n]+)\*").expect("static regex"));
static ITALIC_UNDERSCORE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|[\s(])_([^_\n]+)_").expect("static regex"));
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*#{1,6}[ \t]*").expect("static regex"));
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:\d+[.)]|[-*•+])[ \t]+").expect("static regex")
});
static EXTRA_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*\n(?:[ \t]*\n)+").expect("static regex"));
// Headers only count at the start of a line.
static SUMMARY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*resumo\s+executivo[ \t]*:?").expect("static regex")
});
static ANALYSIS_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^[ \t]*an[aá]lise\s+detalhada[ \t]*:?").expect("static regex")
});

/// Remove markdown emphasis, headings and list markers.
#[must_use]
pub fn strip_markup(text: &str) -> String {
    let text = text.replace("\r\n", "\n");
    let text = BOLD_STARS.replace_all(&text, "$1");
    let text = BOLD_UNDERSCORES.replace_all(&text, "$1");
    let text = HEADING.replace_all(&text, "");
    let text = LIST_MARKER.replace_all(&text, "");
    let text = ITALIC_STAR.replace_all(&text, "$1");
    let text = ITALIC_UNDERSCORE.replace_all(&text, "$1$2");
    let text = EXTRA_BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Split cleaned text into summary and analysis.
///
/// Uses the section headers when present, otherwise the first paragraph
/// break. Either side may come back empty; callers check
/// [`Narrative::is_usable`].
#[must_use]
pub fn split_sections(text: &str) -> Narrative {
    let summary_header = SUMMARY_HEADER.find(text);
    let analysis_header = ANALYSIS_HEADER.find(text);

    let (summary, analysis) = match (summary_header, analysis_header) {
        (Some(s), Some(a)) if s.end() <= a.start() => {
            (&text[s.end()..a.start()], &text[a.end()..])
        }
        (Some(s), Some(a)) => (&text[s.end()..], &text[a.end()..s.start()]),
        (None, Some(a)) => (&text[..a.start()], &text[a.end()..]),
        (Some(s), None) => split_paragraph(&text[s.end()..]),
        (None, None) => split_paragraph(text),
    };

    Narrative {
        summary: summary.trim().to_string(),
        analysis: analysis.trim().to_string(),
    }
}

fn split_paragraph(text: &str) -> (&str, &str) {
    let text = text.trim();
    text.split_once("\n\n").unwrap_or((text, ""))
}

/// Strip markup and split a raw provider response.
#[must_use]
pub fn parse_response(raw: &str) -> Narrative {
    split_sections(&strip_markup(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(strip_markup("um **risco** alto"), "um risco alto");
        assert_eq!(strip_markup("um __risco__ alto"), "um risco alto");
        assert_eq!(strip_markup("um *risco* alto"), "um risco alto");
        assert_eq!(strip_markup("um _risco_ alto"), "um risco alto");
    }

    #[test]
    fn test_underscores_inside_identifiers_survive() {
        assert_eq!(strip_markup("prática gestao_de_riscos"), "prática gestao_de_riscos");
    }

    #[test]
    fn test_strip_headings_and_lists() {
        let raw = "## Título\n1. primeiro\n2) segundo\n- terceiro\n* quarto\n• quinto";
        assert_eq!(
            strip_markup(raw),
            "Título\nprimeiro\nsegundo\nterceiro\nquarto\nquinto"
        );
    }

    #[test]
    fn test_collapses_blank_lines() {
        assert_eq!(strip_markup("a\n\n\n\nb"), "a\n\nb");
    }

    #[test]
    fn test_split_on_headers() {
        let text = "RESUMO EXECUTIVO:\nResumo aqui.\n\nANÁLISE DETALHADA:\nAnálise aqui.\n\nMais.";
        let narrative = split_sections(text);
        assert_eq!(narrative.summary, "Resumo aqui.");
        assert_eq!(narrative.analysis, "Análise aqui.\n\nMais.");
    }

    #[test]
    fn test_headers_are_case_and_accent_tolerant() {
        let narrative = split_sections("Resumo Executivo\nR.\nAnalise detalhada\nA.");
        assert_eq!(narrative.summary, "R.");
        assert_eq!(narrative.analysis, "A.");
    }

    #[test]
    fn test_header_words_inside_prose_do_not_split() {
        let text = "RESUMO EXECUTIVO\nConforme este resumo executivo, a análise detalhada segue.\nANÁLISE DETALHADA\nA.";
        let narrative = split_sections(text);
        assert_eq!(
            narrative.summary,
            "Conforme este resumo executivo, a análise detalhada segue."
        );
        assert_eq!(narrative.analysis, "A.");

        let narrative = split_sections("O resumo executivo abaixo.\n\nSegundo bloco.");
        assert_eq!(narrative.summary, "O resumo executivo abaixo.");
        assert_eq!(narrative.analysis, "Segundo bloco.");
    }

    #[test]
    fn test_split_on_first_paragraph_break() {
        let narrative = split_sections("Primeiro parágrafo.\n\nSegundo.\n\nTerceiro.");
        assert_eq!(narrative.summary, "Primeiro parágrafo.");
        assert_eq!(narrative.analysis, "Segundo.\n\nTerceiro.");
    }

    #[test]
    fn test_single_paragraph_is_unusable() {
        let narrative = split_sections("Apenas um bloco de texto.");
        assert!(!narrative.is_usable());
    }

    #[test]
    fn test_empty_response_is_unusable() {
        assert!(!parse_response("   ").is_usable());
        assert!(!parse_response("**RESUMO EXECUTIVO**\n\n**ANÁLISE DETALHADA**").is_usable());
    }

    #[test]
    fn test_parse_markdown_response() {
        let raw = "## RESUMO EXECUTIVO\n\nA empresa está no nível **Reativo**.\n\n## ANÁLISE DETALHADA\n\n1. A operação é *reativa*.\n2. Há riscos.";
        let narrative = parse_response(raw);
        assert_eq!(narrative.summary, "A empresa está no nível Reativo.");
        assert_eq!(narrative.analysis, "A operação é reativa.\nHá riscos.");
    }
}

//! Sector detection from free-text sector names.
//!
//! The sector supplied with an assessment is natural language, so it is
//! matched against a closed keyword table. Anything unmatched is
//! [`SectorKind::Generic`] and keeps the original text for interpolation.

use serde::{Deserialize, Serialize};

/// Known sector families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectorKind {
    Health,
    Financial,
    Manufacturing,
    Retail,
    Generic,
}

/// Lowercase keyword fragment → sector. First match wins.
pub const SECTOR_KEYWORDS: &[(&str, SectorKind)] = &[
    ("saúde", SectorKind::Health),
    ("hospital", SectorKind::Health),
    ("médic", SectorKind::Health),
    ("financ", SectorKind::Financial),
    ("banco", SectorKind::Financial),
    ("manufat", SectorKind::Manufacturing),
    ("indust", SectorKind::Manufacturing),
    ("indúst", SectorKind::Manufacturing),
    ("varejo", SectorKind::Retail),
    ("comércio", SectorKind::Retail),
    ("e-commerce", SectorKind::Retail),
];

impl SectorKind {
    /// Classify a free-text sector by case-insensitive substring match.
    #[must_use]
    pub fn detect(sector: &str) -> Self {
        let lowered = sector.to_lowercase();
        SECTOR_KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map_or(Self::Generic, |(_, kind)| *kind)
    }

    /// Name used in generated text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Health => "saúde",
            Self::Financial => "financeiro",
            Self::Manufacturing => "manufatura",
            Self::Retail => "varejo",
            Self::Generic => "genérico",
        }
    }
}

/// A sector as used by the rule tables: its family plus the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sector<'a> {
    pub kind: SectorKind,
    pub name: &'a str,
}

impl<'a> Sector<'a> {
    #[must_use]
    pub fn new(name: &'a str) -> Self {
        Self {
            kind: SectorKind::detect(name),
            name,
        }
    }

    /// Context clause appended to a critical-point diagnosis.
    #[must_use]
    pub fn diagnosis_clause(&self) -> String {
        match self.kind {
            SectorKind::Health => "No setor de saúde, essas fragilidades podem comprometer a disponibilidade de sistemas clínicos e de prontuário eletrônico, afetando diretamente a segurança do paciente e a conformidade com a LGPD.".to_string(),
            SectorKind::Financial => "No setor financeiro, essas lacunas elevam a exposição a falhas em transações críticas, a sanções regulatórias do Banco Central e a perdas de confiança dos clientes.".to_string(),
            SectorKind::Manufacturing => "Na indústria, essas deficiências podem provocar paradas de linha de produção, falhas na integração entre TI e automação (TO) e atrasos na cadeia de suprimentos.".to_string(),
            SectorKind::Retail => "No varejo, essas fragilidades impactam diretamente a experiência do cliente, a disponibilidade dos canais de venda e a operação em períodos de pico, como datas promocionais.".to_string(),
            SectorKind::Generic => format!(
                "No setor de {}, essas lacunas tendem a reduzir a eficiência operacional e a capacidade da TI de responder às demandas do negócio.",
                self.name
            ),
        }
    }

    /// Sector-specific risks appended to practice risks.
    #[must_use]
    pub fn risks(&self) -> Vec<String> {
        match self.kind {
            SectorKind::Health => vec![
                "Indisponibilidade de sistemas assistenciais afetando o atendimento a pacientes".to_string(),
                "Vazamento de dados sensíveis de saúde com sanções da LGPD".to_string(),
            ],
            SectorKind::Financial => vec![
                "Não conformidade com exigências do Banco Central e auditorias externas".to_string(),
                "Interrupção de transações financeiras com perdas diretas de receita".to_string(),
            ],
            SectorKind::Manufacturing => vec![
                "Paradas não planejadas da produção por falhas de sistemas".to_string(),
            ],
            SectorKind::Retail => vec![
                "Perda de vendas por indisponibilidade dos canais digitais em períodos de pico".to_string(),
            ],
            SectorKind::Generic => vec![format!(
                "Perda de competitividade no setor de {} por baixa eficiência da TI",
                self.name
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_known_sectors() {
        assert_eq!(SectorKind::detect("Saúde"), SectorKind::Health);
        assert_eq!(SectorKind::detect("Rede Hospitalar"), SectorKind::Health);
        assert_eq!(SectorKind::detect("Clínica Médica"), SectorKind::Health);
        assert_eq!(SectorKind::detect("Serviços Financeiros"), SectorKind::Financial);
        assert_eq!(SectorKind::detect("BANCO DIGITAL"), SectorKind::Financial);
        assert_eq!(SectorKind::detect("Manufatura"), SectorKind::Manufacturing);
        assert_eq!(SectorKind::detect("Indústria química"), SectorKind::Manufacturing);
        assert_eq!(SectorKind::detect("Varejo"), SectorKind::Retail);
        assert_eq!(SectorKind::detect("Comércio atacadista"), SectorKind::Retail);
        assert_eq!(SectorKind::detect("E-commerce de moda"), SectorKind::Retail);
    }

    #[test]
    fn test_detect_accented_industry() {
        assert_eq!(SectorKind::detect("Indústria"), SectorKind::Manufacturing);
        assert_eq!(SectorKind::detect("INDÚSTRIA ALIMENTÍCIA"), SectorKind::Manufacturing);
        assert_eq!(SectorKind::detect("Industrial"), SectorKind::Manufacturing);
        assert!(Sector::new("Indústria química")
            .diagnosis_clause()
            .starts_with("Na indústria"));
    }

    #[test]
    fn test_detect_unknown_is_generic() {
        assert_eq!(SectorKind::detect(""), SectorKind::Generic);
        assert_eq!(SectorKind::detect("Educação"), SectorKind::Generic);
        assert_eq!(SectorKind::detect("xyzzy 123"), SectorKind::Generic);
    }

    #[test]
    fn test_generic_clause_interpolates_name() {
        let sector = Sector::new("Logística");
        assert!(sector.diagnosis_clause().contains("setor de Logística"));
        assert!(sector.risks()[0].contains("Logística"));
    }

    #[test]
    fn test_every_sector_has_risks() {
        for name in ["Saúde", "Banco", "Indústria", "Varejo", ""] {
            assert!(!Sector::new(name).risks().is_empty(), "{name}");
        }
    }
}

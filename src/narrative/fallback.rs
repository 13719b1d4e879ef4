//! Deterministic narrative used when no provider produces usable text.

use crate::diagnostics::{Sector, SectorKind};
use serde::{Deserialize, Serialize};

/// Executive summary and detailed analysis prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub summary: String,
    pub analysis: String,
}

impl Narrative {
    /// Both sections carry text.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.summary.trim().is_empty() && !self.analysis.trim().is_empty()
    }
}

/// Pre-written paragraphs for one sector family.
///
/// `{sector}` is replaced by the company sector text.
struct SectorBlock {
    context: &'static str,
    risks: &'static str,
    opportunities: &'static str,
    financial: &'static str,
    benchmark: &'static str,
    technology: &'static str,
    compliance: &'static str,
}

const HEALTH: SectorBlock = SectorBlock {
    context: "Organizações de saúde dependem de sistemas clínicos, prontuário eletrônico e integrações com laboratórios e operadoras, o que torna a gestão de serviços de TI um fator direto de segurança do paciente.",
    risks: "Falhas de TI podem interromper atendimentos, atrasar diagnósticos e comprometer a rastreabilidade de informações clínicas.",
    opportunities: "A evolução da maturidade permite ampliar a telemedicina, integrar a jornada do paciente e reduzir o tempo de indisponibilidade de sistemas assistenciais.",
    financial: "Cada hora de indisponibilidade de sistemas assistenciais gera custos com remarcações, glosas e perda de produtividade das equipes clínicas.",
    benchmark: "Instituições de saúde de referência operam com processos de ITSM no nível Gerenciado, com SLAs diferenciados para serviços críticos ao cuidado.",
    technology: "A modernização deve priorizar alta disponibilidade, interoperabilidade (HL7/FHIR) e monitoramento contínuo dos sistemas clínicos.",
    compliance: "A LGPD trata dados de saúde como sensíveis, e normas de acreditação hospitalar exigem controles formais sobre a TI.",
};

const FINANCIAL: SectorBlock = SectorBlock {
    context: "No setor financeiro, a TI sustenta transações em tempo real, canais digitais e obrigações regulatórias, exigindo disponibilidade e controle elevados.",
    risks: "Falhas em mudanças ou incidentes mal gerenciados podem interromper transações, gerar perdas financeiras diretas e sanções regulatórias.",
    opportunities: "Processos maduros aceleram o lançamento de produtos digitais com segurança e reduzem o custo operacional por transação.",
    financial: "Indisponibilidades em canais transacionais representam perda direta de receita e elevam o risco de multas e ressarcimentos.",
    benchmark: "Instituições financeiras líderes mantêm processos de gestão de mudanças, riscos e continuidade no nível Gerenciado ou superior.",
    technology: "A prioridade tecnológica envolve automação de mudanças, observabilidade dos canais digitais e resiliência da infraestrutura.",
    compliance: "Resoluções do Banco Central sobre segurança cibernética e continuidade de negócios exigem governança de TI formal e auditável.",
};

const MANUFACTURING: SectorBlock = SectorBlock {
    context: "Na indústria, a TI integra sistemas de gestão (ERP), chão de fábrica e cadeia de suprimentos, e sua estabilidade afeta diretamente a produção.",
    risks: "Falhas de TI podem parar linhas de produção, comprometer a rastreabilidade de lotes e atrasar entregas a clientes.",
    opportunities: "A maturidade em ITSM viabiliza iniciativas de Indústria 4.0, com integração entre TI e automação industrial (TO).",
    financial: "Paradas não planejadas de produção geram custos elevados por hora, além de perdas com refugo e multas contratuais.",
    benchmark: "Indústrias de referência tratam a TI como parte do processo produtivo, com gestão de mudanças integrada à engenharia de manutenção.",
    technology: "A modernização deve priorizar monitoramento de sistemas industriais, gestão de ativos e segurança da rede de automação.",
    compliance: "Normas de qualidade e rastreabilidade (ISO 9001, requisitos setoriais) dependem de sistemas de TI controlados e auditáveis.",
};

const RETAIL: SectorBlock = SectorBlock {
    context: "No varejo, a TI sustenta canais de venda físicos e digitais, meios de pagamento e logística, com forte sazonalidade de demanda.",
    risks: "Indisponibilidades em períodos de pico comprometem vendas, a experiência do cliente e a reputação da marca.",
    opportunities: "Processos maduros permitem escalar operações omnicanal e reduzir o tempo de resposta a falhas nos canais de venda.",
    financial: "Cada minuto de indisponibilidade em datas promocionais representa perda direta de receita e de clientes.",
    benchmark: "Varejistas de referência operam com gestão de capacidade e disponibilidade planejadas para eventos sazonais.",
    technology: "A prioridade tecnológica envolve escalabilidade dos canais digitais, monitoramento de ponta a ponta e automação de implantações.",
    compliance: "A LGPD e as normas do setor de pagamentos (PCI DSS) exigem controles formais sobre dados de clientes e transações.",
};

const GENERIC: SectorBlock = SectorBlock {
    context: "No setor de {sector}, a TI é um habilitador essencial da operação e da entrega de valor aos clientes.",
    risks: "Processos de TI pouco estruturados aumentam a probabilidade de indisponibilidades e retrabalho, afetando a operação em {sector}.",
    opportunities: "A evolução da maturidade permite ganhos de eficiência, previsibilidade e maior alinhamento da TI com as prioridades do negócio.",
    financial: "A baixa maturidade se traduz em custos ocultos com retrabalho, indisponibilidade e baixa produtividade das equipes.",
    benchmark: "Organizações de referência em {sector} operam com processos de ITSM formalizados, medidos e em melhoria contínua.",
    technology: "A modernização deve priorizar automação, monitoramento e integração das ferramentas de gestão de serviços.",
    compliance: "A LGPD e as exigências de auditoria tornam necessários controles formais sobre os serviços e os dados tratados pela TI.",
};

fn block_for(kind: SectorKind) -> &'static SectorBlock {
    match kind {
        SectorKind::Health => &HEALTH,
        SectorKind::Financial => &FINANCIAL,
        SectorKind::Manufacturing => &MANUFACTURING,
        SectorKind::Retail => &RETAIL,
        SectorKind::Generic => &GENERIC,
    }
}

/// Generate the fallback narrative.
///
/// Never fails and never returns an empty section. `critical` and `strong`
/// are dimension display names.
#[must_use]
pub fn generate_fallback(
    sector: &str,
    maturity_level: &str,
    critical: &[String],
    strong: &[String],
) -> Narrative {
    let sector = Sector::new(sector);
    let block = block_for(sector.kind);
    let fill = |text: &str| text.replace("{sector}", sector.name);

    let critical_sentence = if critical.is_empty() {
        "Nenhuma dimensão apresentou pontuação crítica.".to_string()
    } else {
        format!(
            "As dimensões que exigem atenção prioritária são: {}.",
            critical.join(", ")
        )
    };
    let strong_sentence = if strong.is_empty() {
        "Ainda não há dimensões consolidadas como pontos fortes.".to_string()
    } else {
        format!("Os pontos fortes identificados são: {}.", strong.join(", "))
    };

    let summary = format!(
        "A organização encontra-se no nível de maturidade {maturity_level} em gestão de serviços de TI. {} {critical_sentence} {strong_sentence} {}",
        fill(block.context),
        fill(block.financial),
    );

    let analysis = [
        fill(block.context),
        format!("{} {critical_sentence}", fill(block.risks)),
        format!("{} {strong_sentence}", fill(block.opportunities)),
        fill(block.benchmark),
        fill(block.technology),
        fill(block.compliance),
        format!(
            "Recomenda-se seguir o roadmap proposto, priorizando as lacunas de maior impacto para evoluir a partir do nível {maturity_level}."
        ),
    ]
    .join("\n\n");

    Narrative { summary, analysis }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_deterministic() {
        let a = generate_fallback("Saúde", "Reativo", &names(&["Operacional Core"]), &[]);
        let b = generate_fallback("Saúde", "Reativo", &names(&["Operacional Core"]), &[]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_sector_block_selected() {
        let narrative = generate_fallback("Banco Digital", "Definido", &[], &[]);
        assert!(narrative.analysis.contains("Banco Central"));
        assert!(narrative.summary.contains("Definido"));
    }

    #[test]
    fn test_lists_are_interpolated() {
        let narrative = generate_fallback(
            "Varejo",
            "Reativo",
            &names(&["Estratégica", "Governança e Riscos"]),
            &names(&["Operacional Core"]),
        );
        assert!(narrative
            .summary
            .contains("atenção prioritária são: Estratégica, Governança e Riscos."));
        assert!(narrative.summary.contains("pontos fortes identificados são: Operacional Core."));
    }

    #[test]
    fn test_empty_sector_renders_generic_block() {
        let narrative = generate_fallback("", "Inicial", &[], &[]);
        assert!(narrative.is_usable());
        assert!(narrative.summary.contains("No setor de , a TI"));
        assert!(!narrative.summary.contains("{sector}"));
        assert!(!narrative.analysis.contains("{sector}"));
    }

    #[test]
    fn test_analysis_has_paragraphs() {
        let narrative = generate_fallback("Indústria", "Gerenciado", &[], &[]);
        assert_eq!(narrative.analysis.split("\n\n").count(), 7);
        assert!(narrative.analysis.contains("Indústria 4.0"));
    }

    #[test]
    fn test_usable_requires_both_sections() {
        let narrative = Narrative {
            summary: "texto".into(),
            analysis: "  ".into(),
        };
        assert!(!narrative.is_usable());
    }
}

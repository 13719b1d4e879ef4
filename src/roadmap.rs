//! Three-phase improvement roadmap.
//!
//! Each phase starts from a fixed action/KPI template with the sector name
//! interpolated, then closed augmentation tables adjust it for weak
//! dimensions and for specific practices among the top gaps.

use crate::model::{CriticalPoint, InvestmentLevel, RoadmapPhase};
use crate::scoring::{PracticeGap, Scores};

struct PhaseTemplate {
    name: &'static str,
    timeframe: &'static str,
    /// `{sector}` is replaced by the company sector
    actions: &'static [&'static str],
    kpis: &'static [&'static str],
}

const PHASES: [PhaseTemplate; 3] = [
    PhaseTemplate {
        name: "Estruturação e Quick Wins",
        timeframe: "1-3 meses",
        actions: &[
            SERVICE_DESK_ACTION,
            "Mapear os serviços de TI críticos para o negócio de {sector}",
            "Formalizar o processo de gestão de incidentes com priorização por impacto",
            "Definir papéis e responsabilidades dos processos de ITSM",
            "Implantar ferramenta de registro e acompanhamento de chamados",
            "Realizar diagnóstico detalhado das lacunas prioritárias",
        ],
        kpis: &[
            "Percentual de chamados registrados na ferramenta de ITSM",
            "Tempo médio de atendimento (TMA)",
            "Número de serviços críticos mapeados",
            "Satisfação dos usuários com o suporte de TI",
        ],
    },
    PhaseTemplate {
        name: "Padronização e Governança",
        timeframe: "4-8 meses",
        actions: &[
            "Implantar gestão de mudanças com avaliação de risco e impacto",
            "Estabelecer acordos de nível de serviço (SLA) com as áreas de negócio de {sector}",
            "Implantar gestão de problemas com análise de causa raiz",
            "Criar base de conhecimento para a Central de Serviços",
            "Estruturar base de dados de configuração (CMDB) para serviços críticos",
            "Instituir relatórios mensais de desempenho dos serviços",
        ],
        kpis: &[
            "Percentual de SLAs cumpridos",
            "Taxa de mudanças com sucesso",
            "Redução de incidentes recorrentes",
            "Percentual de resolução no primeiro contato",
            "Cobertura da CMDB sobre serviços críticos",
        ],
    },
    PhaseTemplate {
        name: "Otimização e Inovação",
        timeframe: "9-18 meses",
        actions: &[
            "Automatizar fluxos de atendimento e requisições recorrentes",
            "Implantar monitoramento proativo e gestão de eventos",
            "Estabelecer programa de melhoria contínua baseado em indicadores",
            "Integrar a gestão de serviços às iniciativas de transformação digital em {sector}",
            "Adotar práticas de gestão de capacidade e disponibilidade",
            "Avaliar certificação ISO/IEC 20000 para os processos de TI",
            "Implantar análise preditiva de incidentes",
        ],
        kpis: &[
            "Percentual de requisições automatizadas",
            "Disponibilidade dos serviços críticos",
            "Índice de maturidade ITSM na reavaliação",
            "Redução do custo por chamado",
            "Número de melhorias implementadas por trimestre",
        ],
    },
];

const SERVICE_DESK_ACTION: &str = "Estruturar ponto único de contato para atendimento de TI";

/// Priority action and KPI prepended to a phase when a dimension is critical.
struct DimensionAugmentation {
    dimension_id: &'static str,
    /// Zero-based phase index
    phase: usize,
    action: &'static str,
    kpi: &'static str,
}

const DIMENSION_AUGMENTATIONS: &[DimensionAugmentation] = &[
    DimensionAugmentation {
        dimension_id: "estrategica",
        phase: 0,
        action: "PRIORIDADE: Elaborar plano estratégico de TI alinhado aos objetivos do negócio",
        kpi: "Percentual de iniciativas de TI alinhadas ao plano estratégico",
    },
    DimensionAugmentation {
        dimension_id: "operacional",
        phase: 0,
        action: "PRIORIDADE: Estabilizar os processos operacionais de atendimento e incidentes",
        kpi: "Redução do volume de incidentes críticos",
    },
    DimensionAugmentation {
        dimension_id: "governanca",
        phase: 1,
        action: "PRIORIDADE: Estruturar governança de TI com gestão de riscos e controles",
        kpi: "Percentual de riscos de TI com plano de tratamento",
    },
];

enum PracticeAdjustment {
    /// Replace the phase-1 service desk action
    ReplaceServiceDesk(&'static str),
    /// Insert at the front of phase 1
    Urgent(&'static str),
}

/// Practice-name fragment → phase-1 adjustment.
const PRACTICE_ADJUSTMENTS: &[(&str, PracticeAdjustment)] = &[
    (
        "Central de Serviços",
        PracticeAdjustment::ReplaceServiceDesk(
            "Implantar Central de Serviços com ferramenta de ITSM, SLAs de atendimento e base de conhecimento inicial",
        ),
    ),
    (
        "Gestão de Estratégia",
        PracticeAdjustment::Urgent(
            "URGENTE: Definir diretrizes estratégicas de TI com a alta direção",
        ),
    ),
    (
        "Controle de Mudanças",
        PracticeAdjustment::Urgent(
            "URGENTE: Instituir controle formal de mudanças em produção",
        ),
    ),
];

/// Build the three roadmap phases.
///
/// Phases 1 and 2 carry the baseline investment for the total score, phase 3
/// one tier higher. Weak dimensions are taken from `critical_points`; gaps
/// of zero never trigger a practice adjustment.
#[must_use]
pub fn build_roadmap(
    scores: &Scores,
    critical_points: &[CriticalPoint],
    sector: &str,
    top_gaps: &[PracticeGap],
) -> Vec<RoadmapPhase> {
    let baseline = InvestmentLevel::for_total(scores.total);

    let mut phases: Vec<RoadmapPhase> = PHASES
        .iter()
        .zip(1u8..)
        .map(|(template, number)| RoadmapPhase {
            phase: number,
            name: template.name.to_string(),
            timeframe: template.timeframe.to_string(),
            investment: if number == 3 { baseline.raised() } else { baseline },
            actions: interpolate(template.actions, sector),
            kpis: interpolate(template.kpis, sector),
        })
        .collect();

    for augmentation in DIMENSION_AUGMENTATIONS {
        let critical = critical_points
            .iter()
            .any(|point| point.dimension_id == augmentation.dimension_id);
        if critical {
            let phase = &mut phases[augmentation.phase];
            phase.actions.insert(0, augmentation.action.to_string());
            phase.kpis.insert(0, augmentation.kpi.to_string());
        }
    }

    for (fragment, adjustment) in PRACTICE_ADJUSTMENTS {
        let present = top_gaps
            .iter()
            .any(|gap| gap.gap > 0.0 && gap.practice_name.contains(fragment));
        if !present {
            continue;
        }
        let actions = &mut phases[0].actions;
        match adjustment {
            PracticeAdjustment::ReplaceServiceDesk(text) => {
                if let Some(action) = actions.iter_mut().find(|a| a.as_str() == SERVICE_DESK_ACTION) {
                    *action = (*text).to_string();
                }
            }
            PracticeAdjustment::Urgent(text) => actions.insert(0, (*text).to_string()),
        }
    }

    tracing::debug!(investment = %baseline, "Built roadmap");
    phases
}

fn interpolate(templates: &[&str], sector: &str) -> Vec<String> {
    templates
        .iter()
        .map(|t| t.replace("{sector}", sector))
        .collect()
}

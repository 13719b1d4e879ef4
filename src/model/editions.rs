//! Built-in rubric editions.
//!
//! `full` is the complete 34-practice assessment over five dimensions;
//! `poc` is the reduced 6-practice edition over three dimensions used for
//! quick self-checks. Both share the same maturity bands.

use super::rubric::{Dimension, MaturityBand, Practice, Rubric};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Selectable built-in rubric.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RubricEdition {
    /// 34 practices, 5 dimensions
    #[default]
    Full,
    /// 6 practices, 3 dimensions
    Poc,
}

impl RubricEdition {
    #[must_use]
    pub fn rubric(self) -> Rubric {
        match self {
            Self::Full => Rubric::full(),
            Self::Poc => Rubric::poc(),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Poc => "poc",
        }
    }
}

// (id, name) for every practice in the full catalog, grouped by dimension.
const STRATEGIC_PRACTICES: &[(&str, &str)] = &[
    ("gestao_estrategia", "Gestão de Estratégia"),
    ("gestao_portfolio", "Gestão de Portfólio"),
    ("gestao_arquitetura", "Gestão de Arquitetura"),
    ("gestao_financeira", "Gestão Financeira de Serviços"),
    ("gestao_relacionamento", "Gestão de Relacionamento"),
    ("gestao_fornecedores", "Gestão de Fornecedores"),
];

const OPERATIONAL_PRACTICES: &[(&str, &str)] = &[
    ("central_servicos", "Central de Serviços"),
    ("gestao_incidentes", "Gestão de Incidentes"),
    ("gestao_problemas", "Gestão de Problemas"),
    ("gestao_requisicoes", "Gestão de Requisições de Serviço"),
    ("controle_mudancas", "Controle de Mudanças"),
    ("gestao_liberacao", "Gestão de Liberação"),
    ("gestao_configuracao", "Gestão de Configuração de Serviços"),
    ("gestao_ativos", "Gestão de Ativos de TI"),
    ("monitoramento_eventos", "Monitoramento e Gestão de Eventos"),
];

const GOVERNANCE_PRACTICES: &[(&str, &str)] = &[
    ("gestao_riscos", "Gestão de Riscos"),
    ("seguranca_informacao", "Gestão de Segurança da Informação"),
    ("continuidade_servicos", "Gestão de Continuidade de Serviços"),
    ("gestao_disponibilidade", "Gestão de Disponibilidade"),
    ("gestao_capacidade", "Gestão de Capacidade e Desempenho"),
    ("gestao_nivel_servico", "Gestão de Nível de Serviço"),
    ("melhoria_continua", "Melhoria Contínua"),
];

const PEOPLE_PRACTICES: &[(&str, &str)] = &[
    ("gestao_conhecimento", "Gestão do Conhecimento"),
    ("gestao_talentos", "Gestão de Força de Trabalho e Talentos"),
    ("mudanca_organizacional", "Gestão de Mudança Organizacional"),
    ("gestao_projetos", "Gestão de Projetos"),
    ("analise_negocios", "Análise de Negócios"),
    ("medicao_relatorios", "Medição e Relatórios"),
];

const TECHNOLOGY_PRACTICES: &[(&str, &str)] = &[
    ("gestao_implantacao", "Gestão de Implantação"),
    ("gestao_infraestrutura", "Gestão de Infraestrutura e Plataforma"),
    ("desenvolvimento_software", "Desenvolvimento e Gestão de Software"),
    ("catalogo_servicos", "Gestão do Catálogo de Serviços"),
    ("design_servicos", "Design de Serviços"),
    ("validacao_testes", "Validação e Teste de Serviços"),
];

fn practices(table: &[(&str, &str)]) -> Vec<Practice> {
    table
        .iter()
        .map(|(id, name)| Practice {
            id: (*id).to_string(),
            name: (*name).to_string(),
        })
        .collect()
}

fn ids(table: &[(&str, &str)]) -> Vec<String> {
    table.iter().map(|(id, _)| (*id).to_string()).collect()
}

fn dimension(id: &str, name: &str, description: &str, weight: f64, practice_ids: Vec<String>) -> Dimension {
    Dimension {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        weight,
        practice_ids,
    }
}

/// The five maturity bands shared by every edition.
#[must_use]
pub fn standard_bands() -> Vec<MaturityBand> {
    let band = |level: u8, name: &str, range: (f64, f64), characteristics: &str, risks: &str| {
        MaturityBand {
            level,
            name: name.to_string(),
            score_range: range,
            characteristics: characteristics.to_string(),
            risks: risks.to_string(),
        }
    };

    vec![
        band(
            1,
            "Inicial",
            (1.00, 1.80),
            "Processos inexistentes ou informais. O atendimento depende de esforços individuais e não há registro consistente de incidentes, requisições ou mudanças.",
            "Alta exposição a indisponibilidades prolongadas, perda de conhecimento com a saída de pessoas-chave e incapacidade de demonstrar conformidade.",
        ),
        band(
            2,
            "Reativo",
            (1.81, 2.60),
            "Processos básicos existem, mas são aplicados de forma inconsistente. A TI atua principalmente apagando incêndios, com pouca medição de resultados.",
            "Recorrência de incidentes, mudanças sem avaliação de impacto e baixa previsibilidade de custos e prazos.",
        ),
        band(
            3,
            "Definido",
            (2.61, 3.40),
            "Processos documentados e padronizados, com papéis definidos e ferramentas de apoio. A TI começa a atuar de forma proativa e a medir níveis de serviço.",
            "Dependência de controles manuais, integração limitada entre práticas e dificuldade em escalar a operação.",
        ),
        band(
            4,
            "Gerenciado",
            (3.41, 4.20),
            "Processos medidos e controlados por indicadores, com gestão orientada a dados e alinhamento claro entre serviços de TI e objetivos do negócio.",
            "Risco de acomodação, burocracia excessiva e perda de agilidade frente a mudanças tecnológicas.",
        ),
        band(
            5,
            "Otimizado",
            (4.21, 5.00),
            "Melhoria contínua institucionalizada, automação extensiva e inovação orientada ao valor. A TI é parceira estratégica do negócio.",
            "Custo elevado de manutenção do patamar atingido e necessidade de renovação constante de competências.",
        ),
    ]
}

impl Rubric {
    /// Complete edition: 34 practices over five dimensions.
    #[must_use]
    pub fn full() -> Self {
        let mut catalog = Vec::new();
        for table in [
            STRATEGIC_PRACTICES,
            OPERATIONAL_PRACTICES,
            GOVERNANCE_PRACTICES,
            PEOPLE_PRACTICES,
            TECHNOLOGY_PRACTICES,
        ] {
            catalog.extend(practices(table));
        }

        Self {
            edition: "Completa (34 práticas)".to_string(),
            dimensions: vec![
                dimension(
                    "estrategica",
                    "Estratégica",
                    "Alinhamento da TI à estratégia, portfólio, finanças e parcerias.",
                    0.20,
                    ids(STRATEGIC_PRACTICES),
                ),
                dimension(
                    "operacional",
                    "Operacional Core",
                    "Práticas de suporte e entrega do dia a dia dos serviços.",
                    0.30,
                    ids(OPERATIONAL_PRACTICES),
                ),
                dimension(
                    "governanca",
                    "Governança e Riscos",
                    "Controle de riscos, segurança, continuidade e níveis de serviço.",
                    0.20,
                    ids(GOVERNANCE_PRACTICES),
                ),
                dimension(
                    "pessoas",
                    "Pessoas e Conhecimento",
                    "Competências, conhecimento, projetos e gestão da mudança organizacional.",
                    0.15,
                    ids(PEOPLE_PRACTICES),
                ),
                dimension(
                    "tecnologia",
                    "Tecnologia e Inovação",
                    "Plataformas, desenvolvimento, implantação e desenho de serviços.",
                    0.15,
                    ids(TECHNOLOGY_PRACTICES),
                ),
            ],
            practices: catalog,
            bands: standard_bands(),
        }
    }

    /// Reduced edition: 6 practices over three dimensions.
    #[must_use]
    pub fn poc() -> Self {
        let strategic = &STRATEGIC_PRACTICES[..1];
        let operational = [
            OPERATIONAL_PRACTICES[0],
            OPERATIONAL_PRACTICES[1],
            OPERATIONAL_PRACTICES[4],
        ];
        let governance = &GOVERNANCE_PRACTICES[..2];

        let mut catalog = practices(strategic);
        catalog.extend(practices(&operational));
        catalog.extend(practices(governance));

        Self {
            edition: "POC (6 práticas)".to_string(),
            dimensions: vec![
                dimension(
                    "estrategica",
                    "Estratégica",
                    "Alinhamento da TI à estratégia do negócio.",
                    0.30,
                    ids(strategic),
                ),
                dimension(
                    "operacional",
                    "Operacional Core",
                    "Suporte, incidentes e mudanças.",
                    0.40,
                    ids(&operational),
                ),
                dimension(
                    "governanca",
                    "Governança e Riscos",
                    "Riscos e segurança da informação.",
                    0.30,
                    ids(governance),
                ),
            ],
            practices: catalog,
            bands: standard_bands(),
        }
    }
}

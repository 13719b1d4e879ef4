//! Closed rule tables for the diagnostic engine.
//!
//! Practice rules match on a fragment of the practice display name. Dimension
//! rules are keyed by dimension id; unknown ids resolve to
//! [`DEFAULT_DIMENSION_RULE`].

/// Risks and mitigations contributed by one weak practice.
#[derive(Debug, Clone, Copy)]
pub struct PracticeRule {
    pub fragment: &'static str,
    pub risks: [&'static str; 2],
    pub mitigations: [&'static str; 2],
}

/// Fallback text for a weak dimension.
#[derive(Debug, Clone, Copy)]
pub struct DimensionRule {
    /// Dimension id; empty for the default entry
    pub dimension_id: &'static str,
    /// Problem statement; `{practices}` is replaced by the weak practice names
    pub problem: &'static str,
    pub risks: [&'static str; 2],
    pub mitigations: [&'static str; 2],
}

pub const PRACTICE_RULES: &[PracticeRule] = &[
    PracticeRule {
        fragment: "Gestão Financeira",
        risks: [
            "Custos de TI sem visibilidade nem alocação por serviço",
            "Orçamento de TI desalinhado das prioridades do negócio",
        ],
        mitigations: [
            "Implantar modelo de custeio de serviços (showback/chargeback)",
            "Estabelecer ciclo orçamentário de TI integrado ao planejamento financeiro",
        ],
    },
    PracticeRule {
        fragment: "Central de Serviços",
        risks: [
            "Atendimento ao usuário fragmentado e sem ponto único de contato",
            "Baixa satisfação dos usuários com o suporte de TI",
        ],
        mitigations: [
            "Estruturar Central de Serviços com ferramenta de ITSM e ponto único de contato",
            "Definir catálogo de atendimento e níveis de suporte (N1/N2/N3)",
        ],
    },
    PracticeRule {
        fragment: "Gestão de Incidentes",
        risks: [
            "Tempo elevado de restauração de serviços críticos",
            "Incidentes graves tratados sem processo de escalonamento",
        ],
        mitigations: [
            "Formalizar processo de incidentes com classificação por impacto e urgência",
            "Definir matriz de escalonamento e gestão de incidentes graves",
        ],
    },
    PracticeRule {
        fragment: "Controle de Mudanças",
        risks: [
            "Mudanças não autorizadas causando indisponibilidade",
            "Ausência de rastreabilidade sobre alterações em produção",
        ],
        mitigations: [
            "Instituir comitê de mudanças (CAB) com avaliação de risco",
            "Padronizar mudanças de baixo risco e registrar todas as alterações",
        ],
    },
    PracticeRule {
        fragment: "Gestão de Problemas",
        risks: [
            "Recorrência de incidentes sem tratamento da causa raiz",
            "Custo operacional elevado com retrabalho no suporte",
        ],
        mitigations: [
            "Implantar análise de causa raiz para incidentes recorrentes",
            "Manter base de erros conhecidos integrada à Central de Serviços",
        ],
    },
    PracticeRule {
        fragment: "Gestão de Riscos",
        risks: [
            "Riscos de TI não identificados nem tratados de forma sistemática",
            "Exposição a eventos de alto impacto sem plano de resposta",
        ],
        mitigations: [
            "Estabelecer matriz de riscos de TI com responsáveis e planos de tratamento",
            "Integrar a gestão de riscos de TI à gestão de riscos corporativos",
        ],
    },
    PracticeRule {
        fragment: "Segurança da Informação",
        risks: [
            "Vazamento de dados e incidentes de segurança",
            "Não conformidade com a LGPD e normas de segurança",
        ],
        mitigations: [
            "Implantar política de segurança da informação baseada na ISO 27001",
            "Estabelecer gestão de acessos e monitoramento de vulnerabilidades",
        ],
    },
    PracticeRule {
        fragment: "Gestão de Estratégia",
        risks: [
            "Investimentos em TI desconectados dos objetivos do negócio",
            "Falta de direcionamento para priorização de iniciativas",
        ],
        mitigations: [
            "Elaborar plano estratégico de TI (PETI) alinhado ao planejamento corporativo",
            "Instituir comitê de governança de TI com participação do negócio",
        ],
    },
    PracticeRule {
        fragment: "Continuidade",
        risks: [
            "Interrupção prolongada de serviços críticos em caso de desastre",
            "Perda de dados sem capacidade de recuperação",
        ],
        mitigations: [
            "Elaborar plano de continuidade e recuperação de desastres (PCN/DRP)",
            "Testar periodicamente backups e procedimentos de recuperação",
        ],
    },
    PracticeRule {
        fragment: "Configuração",
        risks: [
            "Desconhecimento das dependências entre serviços e infraestrutura",
            "Análise de impacto de mudanças imprecisa",
        ],
        mitigations: [
            "Implantar base de dados de configuração (CMDB) para serviços críticos",
            "Automatizar a descoberta e a atualização de itens de configuração",
        ],
    },
    PracticeRule {
        fragment: "Conhecimento",
        risks: [
            "Dependência de pessoas-chave e perda de conhecimento",
            "Resolução lenta por falta de documentação",
        ],
        mitigations: [
            "Criar base de conhecimento com artigos revisados e acessíveis",
            "Incorporar registro de conhecimento ao fluxo de atendimento",
        ],
    },
    PracticeRule {
        fragment: "Fornecedores",
        risks: [
            "Dependência de fornecedores sem contratos com níveis de serviço",
            "Baixo controle sobre desempenho e custos de terceiros",
        ],
        mitigations: [
            "Definir SLAs contratuais e indicadores de desempenho de fornecedores",
            "Realizar avaliações periódicas de fornecedores críticos",
        ],
    },
    PracticeRule {
        fragment: "Nível de Serviço",
        risks: [
            "Expectativas do negócio não formalizadas nem medidas",
            "Conflitos entre TI e áreas usuárias sobre a qualidade do serviço",
        ],
        mitigations: [
            "Negociar acordos de nível de serviço (SLA) para serviços críticos",
            "Publicar relatórios periódicos de desempenho dos serviços",
        ],
    },
    PracticeRule {
        fragment: "Monitoramento",
        risks: [
            "Falhas detectadas pelos usuários antes da equipe de TI",
            "Ausência de visibilidade sobre a saúde da infraestrutura",
        ],
        mitigations: [
            "Implantar monitoramento centralizado com alertas automáticos",
            "Correlacionar eventos para detecção proativa de falhas",
        ],
    },
];

pub const DIMENSION_RULES: &[DimensionRule] = &[
    DimensionRule {
        dimension_id: "estrategica",
        problem: "A dimensão estratégica apresenta baixa maturidade, com fragilidades em {practices}, indicando que a TI ainda atua de forma desconectada dos objetivos do negócio.",
        risks: [
            "Desalinhamento entre investimentos de TI e estratégia corporativa",
            "Dificuldade em demonstrar o valor da TI para a organização",
        ],
        mitigations: [
            "Elaborar plano estratégico de TI com metas mensuráveis",
            "Criar comitê de governança de TI com a alta direção",
        ],
    },
    DimensionRule {
        dimension_id: "operacional",
        problem: "A operação de serviços apresenta deficiências em {practices}, resultando em atendimento reativo e baixa previsibilidade na entrega dos serviços.",
        risks: [
            "Indisponibilidade frequente de serviços de TI",
            "Baixa produtividade dos usuários por falhas no suporte",
        ],
        mitigations: [
            "Padronizar os processos operacionais essenciais de ITSM",
            "Implantar ferramenta de gestão de serviços com indicadores operacionais",
        ],
    },
    DimensionRule {
        dimension_id: "governanca",
        problem: "A governança e a gestão de riscos são insuficientes, com lacunas em {practices}, expondo a organização a riscos operacionais e regulatórios.",
        risks: [
            "Exposição a riscos regulatórios e de conformidade",
            "Incapacidade de responder adequadamente a incidentes de grande impacto",
        ],
        mitigations: [
            "Estruturar framework de governança de TI (COBIT/ISO 38500)",
            "Implantar gestão de riscos e controles internos de TI",
        ],
    },
    DimensionRule {
        dimension_id: "pessoas",
        problem: "A gestão de pessoas e conhecimento apresenta fragilidades em {practices}, com dependência de indivíduos e baixa retenção de conhecimento.",
        risks: [
            "Perda de conhecimento crítico com a rotatividade da equipe",
            "Equipe sem as competências necessárias para a evolução dos serviços",
        ],
        mitigations: [
            "Implantar programa de capacitação e certificação em ITSM",
            "Estruturar gestão do conhecimento com responsáveis definidos",
        ],
    },
    DimensionRule {
        dimension_id: "tecnologia",
        problem: "A dimensão de tecnologia e inovação apresenta lacunas em {practices}, limitando a automação e a capacidade de evolução da infraestrutura.",
        risks: [
            "Obsolescência tecnológica e aumento da dívida técnica",
            "Baixa automação elevando custos e erros operacionais",
        ],
        mitigations: [
            "Elaborar roadmap de modernização tecnológica",
            "Investir em automação de implantação e testes",
        ],
    },
];

pub const DEFAULT_DIMENSION_RULE: DimensionRule = DimensionRule {
    dimension_id: "",
    problem: "A dimensão apresenta maturidade abaixo do esperado, com fragilidades em {practices}.",
    risks: [
        "Processos informais com resultados inconsistentes",
        "Dificuldade em sustentar a melhoria dos serviços de TI",
    ],
    mitigations: [
        "Formalizar e documentar os processos da dimensão",
        "Definir indicadores e responsáveis para acompanhamento contínuo",
    ],
};

/// Rules whose fragment appears in the practice name.
pub fn practice_rules_for<'a>(practice_name: &'a str) -> impl Iterator<Item = &'static PracticeRule> + 'a {
    PRACTICE_RULES
        .iter()
        .filter(move |rule| practice_name.contains(rule.fragment))
}

/// Rule for a dimension id, falling back to the default entry.
#[must_use]
pub fn dimension_rule(dimension_id: &str) -> &'static DimensionRule {
    DIMENSION_RULES
        .iter()
        .find(|rule| rule.dimension_id == dimension_id)
        .unwrap_or(&DEFAULT_DIMENSION_RULE)
}

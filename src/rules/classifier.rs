use crate::types::Nature;

/// Text field a [`ClassificationRule`] looks into.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RuleField {
    History,
    Occurrence,
    Document
}

/// Assigns `nature` when any of its keywords appears in the paired field.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ClassificationRule {
    pub nature: Nature,
    conditions: Vec<(RuleField, String)>
}

impl ClassificationRule {
    pub fn new(nature: Nature) -> Self {
        Self {
            nature,
            conditions: Vec::new()
        }
    }

    pub fn when(mut self, field: RuleField, keyword: &str) -> Self {
        self.conditions.push((field, keyword.to_string()));
        self
    }

    pub fn conditions(&self) -> &[(RuleField, String)] {
        &self.conditions
    }

    pub fn matches(&self, history: &str, occurrence: &str, document: &str) -> bool {
        self.conditions.iter().any(|(field, keyword)| {
            let value = match field {
                RuleField::History => history,
                RuleField::Occurrence => occurrence,
                RuleField::Document => document
            };

            value.contains(keyword.as_str())
        })
    }
}

/// Ordered rule cascade; the first matching rule wins.
///
/// Several keywords overlap (`PAGSEG` is a prefix of `PAGSEGURO`), so reordering the rules
/// changes the result.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<ClassificationRule>
}

impl Default for Classifier {
    fn default() -> Self {
        use RuleField::{Document, History, Occurrence};

        Self::new(vec![
            ClassificationRule::new(Nature::Banrisul).when(History, "BANRISUL"),
            ClassificationRule::new(Nature::Bin).when(History, "BIN"),
            ClassificationRule::new(Nature::Credz).when(History, "CREDZ").when(Document, "12109247000120"),
            ClassificationRule::new(Nature::Getnet).when(History, "GETNET"),
            ClassificationRule::new(Nature::Global).when(History, "GLOBAL"),
            ClassificationRule::new(Nature::Cielo).when(History, "CIELO").when(Document, "CIELO"),
            ClassificationRule::new(Nature::Rede).when(History, "REDE").when(Document, "REDE"),
            ClassificationRule::new(Nature::Bin).when(Occurrence, "VERO"),
            ClassificationRule::new(Nature::Pagseguro).when(History, "PAGSEGURO"),
            ClassificationRule::new(Nature::TedPagseg).when(History, "PAGSEG"),
            ClassificationRule::new(Nature::Bin).when(History, "FISERV").when(Document, "FISERV"),
            ClassificationRule::new(Nature::SispagPagseg).when(History, "SISPAG"),
            ClassificationRule::new(Nature::Sfpay).when(History, "SFPAY"),
        ])
    }
}

impl Classifier {
    pub fn new(rules: Vec<ClassificationRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Returns `None` when no rule matches.
    pub fn classify(&self, history: &str, occurrence: &str, document: &str) -> Option<Nature> {
        self.rules
            .iter()
            .find(|rule| rule.matches(history, occurrence, document))
            .map(|rule| rule.nature)
    }
}

use crate::models::RawTransaction;

const CREDIT_FLAG: &str = "Credito";

const HISTORY_KEYWORDS: [&str; 15] = [
    "BIN",
    "BANRISUL",
    "CREDZ",
    "ELOSGATE",
    "GETNET",
    "GLOBAL",
    "CIELO",
    "REDE",
    "CONTAS A RECEBER TRANSI",
    "STONE",
    "PAGSEGURO",
    "FISERV",
    "PAGSEG",
    "SISPAG",
    "SFPAY"
];

const DOCUMENT_KEYWORDS: [&str; 4] = ["12109247", "FISERV", "REDE-", "CIELO"];

const EXCLUSION_KEYWORDS: [&str; 1] = ["MORAIS"];

/// Why a row was kept or dropped by the [`ChannelFilter`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FilterDecision {
    Accepted,
    NotCredit,
    NoChannelMatch,
    Excluded
}

/// Keeps credit rows that came through a known payment-processor channel.
///
/// Keywords are matched as case-sensitive substrings. Absent text never matches.
#[derive(Debug, Clone)]
pub struct ChannelFilter {
    credit_flag: String,
    history_keywords: Vec<String>,
    document_keywords: Vec<String>,
    exclusion_keywords: Vec<String>
}

impl Default for ChannelFilter {
    fn default() -> Self {
        Self::new(CREDIT_FLAG, &HISTORY_KEYWORDS, &DOCUMENT_KEYWORDS, &EXCLUSION_KEYWORDS)
    }
}

impl ChannelFilter {
    pub fn new(credit_flag: &str, history_keywords: &[&str], document_keywords: &[&str], exclusion_keywords: &[&str]) -> Self {
        Self {
            credit_flag: credit_flag.to_string(),
            history_keywords: to_owned(history_keywords),
            document_keywords: to_owned(document_keywords),
            exclusion_keywords: to_owned(exclusion_keywords)
        }
    }

    pub fn evaluate(&self, transaction: &RawTransaction) -> FilterDecision {
        if transaction.debit_credit_flag.as_deref() != Some(self.credit_flag.as_str()) {
            return FilterDecision::NotCredit;
        }

        let history = transaction.history.as_deref();
        let document = transaction.document.as_deref();

        if !contains_any(history, &self.history_keywords) && !contains_any(document, &self.document_keywords) {
            return FilterDecision::NoChannelMatch;
        }

        if contains_any(history, &self.exclusion_keywords) {
            return FilterDecision::Excluded;
        }

        FilterDecision::Accepted
    }

    /// Returns the in-scope subset, preserving input order.
    pub fn filter(&self, transactions: Vec<RawTransaction>) -> Vec<RawTransaction> {
        transactions
            .into_iter()
            .filter(|transaction| self.evaluate(transaction) == FilterDecision::Accepted)
            .collect()
    }
}

fn contains_any(value: Option<&str>, keywords: &[String]) -> bool {
    value.is_some_and(|value| keywords.iter().any(|keyword| value.contains(keyword.as_str())))
}

fn to_owned(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|keyword| keyword.to_string()).collect()
}

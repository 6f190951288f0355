use super::{ChannelFilter, ClassificationRule, Classifier, FilterDecision, NatureCodeTable, RuleField, RuleSet};

use crate::models::RawTransaction;
use crate::types::{Nature, NatureCode};

fn create_transaction(flag: &str, history: Option<&str>, document: Option<&str>) -> RawTransaction {
    RawTransaction {
        line: 2,
        debit_credit_flag: Some(flag.to_string()),
        history: history.map(str::to_string),
        document: document.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn test_filter_rejects_every_non_credit_row() {
    let filter = ChannelFilter::default();

    for flag in ["Debito", "credito", "CREDITO", ""] {
        let transaction = create_transaction(flag, Some("CIELO VENDAS"), Some("CIELO"));
        assert_eq!(filter.evaluate(&transaction), FilterDecision::NotCredit, "flag: {flag}");
    }

    let unflagged = RawTransaction { history: Some("CIELO VENDAS".to_string()), ..Default::default() };

    assert_eq!(filter.evaluate(&unflagged), FilterDecision::NotCredit);
}

#[test]
fn test_filter_accepts_history_or_document_channel_matches() {
    let filter = ChannelFilter::default();

    assert_eq!(filter.evaluate(&create_transaction("Credito", Some("TED GETNET SA"), None)), FilterDecision::Accepted);
    assert_eq!(filter.evaluate(&create_transaction("Credito", Some("DEPOSITO"), Some("REDE-4412"))), FilterDecision::Accepted);
    assert_eq!(filter.evaluate(&create_transaction("Credito", None, Some("12109247000120"))), FilterDecision::Accepted);
}

#[test]
fn test_filter_rejects_rows_without_channel_keywords() {
    let filter = ChannelFilter::default();

    assert_eq!(filter.evaluate(&create_transaction("Credito", Some("PIX RECEBIDO"), Some("998877"))), FilterDecision::NoChannelMatch);
    assert_eq!(filter.evaluate(&create_transaction("Credito", None, None)), FilterDecision::NoChannelMatch);
    // "REDE" alone is not a document keyword, only "REDE-" is
    assert_eq!(filter.evaluate(&create_transaction("Credito", Some("PIX"), Some("REDE"))), FilterDecision::NoChannelMatch);
    // matching is case-sensitive
    assert_eq!(filter.evaluate(&create_transaction("Credito", Some("cielo vendas"), None)), FilterDecision::NoChannelMatch);
}

#[test]
fn test_filter_exclusion_keyword_wins_over_channel_matches() {
    let filter = ChannelFilter::default();
    let transaction = create_transaction("Credito", Some("TED CIELO JOAO MORAIS"), Some("CIELO"));

    assert_eq!(filter.evaluate(&transaction), FilterDecision::Excluded);
}

#[test]
fn test_filter_returns_accepted_subset_in_order() {
    let filter = ChannelFilter::default();
    let transactions = vec![
        create_transaction("Credito", Some("STONE PAGAMENTOS"), None),
        create_transaction("Debito", Some("STONE PAGAMENTOS"), None),
        create_transaction("Credito", Some("MORAIS STONE"), None),
        create_transaction("Credito", Some("SFPAY"), None),
    ];

    let accepted = filter.filter(transactions);

    assert_eq!(accepted.len(), 2);
    assert_eq!(accepted[0].history.as_deref(), Some("STONE PAGAMENTOS"));
    assert_eq!(accepted[1].history.as_deref(), Some("SFPAY"));
}

#[test]
fn test_filter_supports_custom_keywords() {
    let filter = ChannelFilter::new("C", &["ACME"], &[], &["VOID"]);

    assert_eq!(filter.evaluate(&create_transaction("C", Some("ACME 01"), None)), FilterDecision::Accepted);
    assert_eq!(filter.evaluate(&create_transaction("C", Some("ACME VOID"), None)), FilterDecision::Excluded);
    assert_eq!(filter.evaluate(&create_transaction("Credito", Some("ACME 01"), None)), FilterDecision::NotCredit);
}

#[test]
fn test_classifier_cascade_order_is_preserved() {
    let classifier = Classifier::default();
    let natures: Vec<Nature> = classifier.rules().iter().map(|rule| rule.nature).collect();

    assert_eq!(natures, vec![
        Nature::Banrisul,
        Nature::Bin,
        Nature::Credz,
        Nature::Getnet,
        Nature::Global,
        Nature::Cielo,
        Nature::Rede,
        Nature::Bin,
        Nature::Pagseguro,
        Nature::TedPagseg,
        Nature::Bin,
        Nature::SispagPagseg,
        Nature::Sfpay,
    ]);

    let vero = &classifier.rules()[7];

    assert_eq!(vero.conditions(), &[(RuleField::Occurrence, "VERO".to_string())]);
}

#[test]
fn test_classifier_assigns_each_channel() {
    let classifier = Classifier::default();
    let test_cases = vec![
        (("CRED BANRISUL VERO", "N/A", ""), Some(Nature::Banrisul)),
        (("TED BIN", "N/A", ""), Some(Nature::Bin)),
        (("CREDZ ADM", "N/A", ""), Some(Nature::Credz)),
        (("TED RECEBIDA", "N/A", "12109247000120"), Some(Nature::Credz)),
        (("GETNET SA", "N/A", ""), Some(Nature::Getnet)),
        (("GLOBAL PAYMENTS", "N/A", ""), Some(Nature::Global)),
        (("VENDAS", "N/A", "CIELO"), Some(Nature::Cielo)),
        (("REDE VISA", "N/A", ""), Some(Nature::Rede)),
        (("DEPOSITO", "N/A", "REDE-77"), Some(Nature::Rede)),
        (("DEPOSITO", "VERO CREDITO", ""), Some(Nature::Bin)),
        (("PAGSEGURO XYZ", "N/A", ""), Some(Nature::Pagseguro)),
        (("PAGSEG TARIFA", "N/A", ""), Some(Nature::TedPagseg)),
        (("TED FISERV", "N/A", ""), Some(Nature::Bin)),
        (("DEPOSITO", "N/A", "FISERV"), Some(Nature::Bin)),
        (("SISPAG FORNECEDOR", "N/A", ""), Some(Nature::SispagPagseg)),
        (("SFPAY", "N/A", ""), Some(Nature::Sfpay)),
        (("STONE PAGAMENTOS", "N/A", ""), None),
        (("ELOSGATE", "N/A", "12109247"), None),
        (("", "", ""), None),
    ];

    for ((history, occurrence, document), expected) in test_cases {
        assert_eq!(classifier.classify(history, occurrence, document), expected, "history: {history}, document: {document}");
    }
}

#[test]
fn test_classifier_first_match_wins_on_overlapping_keywords() {
    let classifier = Classifier::default();

    assert_eq!(classifier.classify("PAGSEGURO PAGSEG", "N/A", ""), Some(Nature::Pagseguro));
    assert_eq!(classifier.classify("REDE CIELO", "N/A", ""), Some(Nature::Cielo));
    assert_eq!(classifier.classify("GETNET", "VERO", ""), Some(Nature::Getnet));
    assert_eq!(classifier.classify("SISPAG PAGSEG", "N/A", ""), Some(Nature::TedPagseg));
}

#[test]
fn test_classifier_with_custom_rules() {
    let classifier = Classifier::new(vec![
        ClassificationRule::new(Nature::Sfpay).when(RuleField::Document, "XYZ"),
    ]);

    assert_eq!(classifier.classify("SFPAY", "N/A", ""), None);
    assert_eq!(classifier.classify("", "", "ABC XYZ"), Some(Nature::Sfpay));
}

#[test]
fn test_nature_code_table_resolves_fixed_codes() {
    let table = NatureCodeTable::default();

    assert_eq!(table.resolve(Some(Nature::Rede)), Some(NatureCode::new("101111")));
    assert_eq!(table.resolve(Some(Nature::Banrisul)), Some(NatureCode::new("A10801")));
    assert_eq!(table.resolve(Some(Nature::Global)), Some(NatureCode::new("A10806")));
    assert_eq!(table.resolve(Some(Nature::SispagPagseg)), Some(NatureCode::new("101117")));
    assert_eq!(table.resolve(None), None);
}

#[test]
fn test_every_nature_has_a_code() {
    let rules = RuleSet::default();

    for nature in Nature::ALL {
        assert!(rules.nature_codes.resolve(Some(nature)).is_some(), "nature without code: {nature}");
    }
}

#[test]
fn test_partial_code_table_leaves_unknown_natures_unresolved() {
    let table = NatureCodeTable::new([(Nature::Bin, NatureCode::new("1"))]);

    assert_eq!(table.resolve(Some(Nature::Bin)), Some(NatureCode::new("1")));
    assert_eq!(table.resolve(Some(Nature::Rede)), None);
}

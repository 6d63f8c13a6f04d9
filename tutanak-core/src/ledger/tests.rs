use super::*;
use std::str::FromStr;

const DATE: &str = "15.01.2024";

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn pay(t: PaymentType, amount: &str, currency: Currency) -> Payment {
    Payment::with(t, amount, currency, DATE)
}

// ========== Ledger operations ==========

#[test]
fn test_new_ledger_has_one_expanded_default_slot() {
    let ledger = PaymentLedger::new(DATE);
    assert_eq!(ledger.len(), 1);
    let entry = &ledger.entries()[0];
    assert!(entry.expanded);
    assert_eq!(entry.payment.payment_type, PaymentType::WireTransfer);
    assert_eq!(entry.payment.currency, Currency::Try);
    assert_eq!(entry.payment.date, DATE);
    assert!(entry.payment.amount.is_empty());
}

#[test]
fn test_add_payment_expands_only_new_entry() {
    let mut ledger = PaymentLedger::new(DATE);
    let first = ledger.entries()[0].payment.id;
    let second = ledger.add_payment("16.01.2024");

    assert_eq!(ledger.len(), 2);
    assert_ne!(first, second);
    assert!(!ledger.entries()[0].expanded);
    assert!(ledger.entries()[1].expanded);
    assert_eq!(ledger.get(second).unwrap().date, "16.01.2024");
}

#[test]
fn test_remove_last_slot_is_noop() {
    let mut ledger = PaymentLedger::new(DATE);
    let only = ledger.entries()[0].payment.id;
    assert!(!ledger.can_remove());
    assert!(!ledger.remove_payment(only));
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_remove_payment() {
    let mut ledger = PaymentLedger::new(DATE);
    let first = ledger.entries()[0].payment.id;
    let second = ledger.add_payment(DATE);
    assert!(ledger.can_remove());

    assert!(ledger.remove_payment(first));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.entries()[0].payment.id, second);

    // Unknown id
    ledger.add_payment(DATE);
    assert!(!ledger.remove_payment(first));
    assert_eq!(ledger.len(), 2);
}

#[test]
fn test_update_field_touches_one_entry() {
    let mut ledger = PaymentLedger::new(DATE);
    let first = ledger.entries()[0].payment.id;
    let second = ledger.add_payment(DATE);
    let untouched = ledger.get(first).unwrap().clone();

    assert!(ledger.update_field(second, PaymentField::Amount("5.000".into())));
    assert!(ledger.update_field(second, PaymentField::Type(PaymentType::Cash)));

    let updated = ledger.get(second).unwrap();
    assert_eq!(updated.amount, "5.000");
    assert_eq!(updated.payment_type, PaymentType::Cash);
    // update_field never touches the currency
    assert_eq!(updated.currency, Currency::Try);
    assert_eq!(ledger.get(first).unwrap(), &untouched);

    assert!(!ledger.update_field(uuid::Uuid::new_v4(), PaymentField::Date("x".into())));
}

#[test]
fn test_change_type_resets_currency() {
    let mut ledger = PaymentLedger::new(DATE);
    let id = ledger.entries()[0].payment.id;

    ledger.change_type(id, PaymentType::CreditAccount);
    assert_eq!(ledger.get(id).unwrap().currency, Currency::Eur);

    ledger.change_type(id, PaymentType::CreditCard);
    assert_eq!(ledger.get(id).unwrap().currency, Currency::Try);

    ledger.change_type(id, PaymentType::Cash);
    assert_eq!(ledger.get(id).unwrap().currency, Currency::Eur);
    assert_eq!(ledger.get(id).unwrap().payment_type, PaymentType::Cash);
}

#[test]
fn test_normalize_amount() {
    let mut ledger = PaymentLedger::new(DATE);
    let id = ledger.entries()[0].payment.id;

    ledger.update_field(id, PaymentField::Amount("17500".into()));
    ledger.normalize_amount(id);
    assert_eq!(ledger.get(id).unwrap().amount, "17.500");

    // already normalized stays stable
    ledger.normalize_amount(id);
    assert_eq!(ledger.get(id).unwrap().amount, "17.500");

    ledger.update_field(id, PaymentField::Amount("1250,5".into()));
    ledger.normalize_amount(id);
    assert_eq!(ledger.get(id).unwrap().amount, "1.250,5");

    ledger.update_field(id, PaymentField::Amount("abc".into()));
    ledger.normalize_amount(id);
    assert_eq!(ledger.get(id).unwrap().amount, "");
}

#[test]
fn test_toggle_expanded() {
    let mut ledger = PaymentLedger::new(DATE);
    let first = ledger.entries()[0].payment.id;
    ledger.add_payment(DATE);

    assert!(ledger.toggle_expanded(first));
    assert!(ledger.entries()[0].expanded);
    assert!(!ledger.entries()[1].expanded);

    assert!(ledger.toggle_expanded(first));
    assert!(ledger.entries().iter().all(|e| !e.expanded));
}

#[test]
fn test_from_payments_expands_last() {
    let ledger = PaymentLedger::from_payments(vec![
        pay(PaymentType::Cash, "1", Currency::Eur),
        pay(PaymentType::Cash, "2", Currency::Eur),
    ]);
    assert!(!ledger.entries()[0].expanded);
    assert!(ledger.entries()[1].expanded);
    assert!(PaymentLedger::from_payments(Vec::new()).is_empty());
}

// ========== Totals ==========

#[test]
fn test_totals_of_empty_ledger() {
    let totals = compute_totals(&[]);
    assert!(totals.per_currency.is_empty());
    assert_eq!(totals.display_string, "0 ₺");
    assert_eq!(PaymentLedger::empty().totals(), totals);
}

#[test]
fn test_totals_exclude_zero_blank_and_garbage() {
    let payments = vec![
        pay(PaymentType::WireTransfer, "0", Currency::Try),
        pay(PaymentType::WireTransfer, "", Currency::Eur),
        pay(PaymentType::WireTransfer, "abc", Currency::Usd),
        pay(PaymentType::WireTransfer, "-50", Currency::Try),
    ];
    let totals = compute_totals(&payments);
    assert!(totals.per_currency.is_empty());
    assert_eq!(totals.display_string, "0 ₺");
}

#[test]
fn test_totals_in_first_occurrence_order() {
    let payments = vec![
        pay(PaymentType::WireTransfer, "10000", Currency::Try),
        pay(PaymentType::Cash, "1000", Currency::Eur),
        pay(PaymentType::CreditCard, "500", Currency::Usd),
    ];
    let totals = compute_totals(&payments);
    assert_eq!(totals.display_string, "10.000 ₺ + 1.000 € + 500 $");
    assert_eq!(totals.per_currency.len(), 3);
    assert_eq!(totals.per_currency.get(Currency::Try), Some(d("10000")));
    assert_eq!(totals.per_currency.get(Currency::Eur), Some(d("1000")));
    assert_eq!(totals.per_currency.get(Currency::Usd), Some(d("500")));

    let reversed: Vec<Payment> = payments.into_iter().rev().collect();
    assert_eq!(
        compute_totals(&reversed).display_string,
        "500 $ + 1.000 € + 10.000 ₺"
    );
}

#[test]
fn test_totals_sum_same_currency() {
    let payments = vec![
        pay(PaymentType::WireTransfer, "17.500", Currency::Try),
        pay(PaymentType::CreditAccount, "2.500,50", Currency::Try),
    ];
    let totals = compute_totals(&payments);
    assert_eq!(totals.per_currency.get(Currency::Try), Some(d("20000.50")));
    assert_eq!(totals.display_string, "20.000,5 ₺");
}

#[test]
fn test_split_totals() {
    let payments = vec![
        pay(PaymentType::Cash, "5.000", Currency::Eur),
        pay(PaymentType::CreditAccount, "2.000", Currency::Eur),
        pay(PaymentType::WireTransfer, "100.000", Currency::Try),
        pay(PaymentType::CreditAccount, "0", Currency::Usd),
    ];
    let split = compute_split_totals(&payments);
    assert_eq!(split.paid.get(Currency::Eur), Some(d("5000")));
    assert_eq!(split.paid.get(Currency::Try), Some(d("100000")));
    assert_eq!(split.on_credit.get(Currency::Eur), Some(d("2000")));
    assert_eq!(split.on_credit.get(Currency::Usd), None);
}

#[test]
fn test_summary_text_marks_credit() {
    let payments = vec![
        pay(PaymentType::CreditAccount, "2.000", Currency::Eur),
        pay(PaymentType::WireTransfer, "10.000", Currency::Try),
    ];
    assert_eq!(summary_text(&payments), "10.000 ₺ + 2.000 € Cari");
    assert_eq!(summary_text(&[]), "0 ₺");
}

#[test]
fn test_totals_are_idempotent() {
    let mut ledger = PaymentLedger::new(DATE);
    let id = ledger.entries()[0].payment.id;
    ledger.update_field(id, PaymentField::Amount("25000".into()));
    let snapshot = ledger.clone();

    assert_eq!(ledger.totals(), ledger.totals());
    assert_eq!(ledger.split_totals(), ledger.split_totals());
    assert_eq!(ledger, snapshot);
}

#[test]
fn test_totals_skip_amounts_beyond_limit() {
    let huge = "79.228.162.514.264.337.593.543.950.335";
    let payments = vec![
        pay(PaymentType::Cash, huge, Currency::Try),
        pay(PaymentType::Cash, huge, Currency::Try),
        pay(PaymentType::CreditAccount, huge, Currency::Eur),
    ];
    let totals = compute_totals(&payments);
    assert!(totals.per_currency.is_empty());
    assert_eq!(totals.display_string, "0 ₺");
    assert_eq!(compute_split_totals(&payments), SplitTotals::default());
    assert_eq!(summary_text(&payments), "0 ₺");
}

#[test]
fn test_totals_at_the_limit() {
    let payments = vec![
        pay(PaymentType::WireTransfer, "1.000.000.000.000", Currency::Try),
        pay(PaymentType::WireTransfer, "1.000.000.000.000", Currency::Try),
    ];
    assert_eq!(
        compute_totals(&payments).display_string,
        "2.000.000.000.000 ₺"
    );
}

#[test]
fn test_currency_totals_overflow_keeps_previous_sum() {
    let mut totals = CurrencyTotals::default();
    totals.add(Currency::Usd, Decimal::MAX);
    totals.add(Currency::Usd, Decimal::MAX);
    totals.add(Currency::Eur, d("10"));
    assert_eq!(totals.get(Currency::Usd), Some(Decimal::MAX));
    assert_eq!(totals.get(Currency::Eur), Some(d("10")));
}

#[test]
fn test_totals_exclude_amounts_rounding_to_zero() {
    let payments = vec![
        pay(PaymentType::Cash, "0,001", Currency::Try),
        pay(PaymentType::Cash, "250", Currency::Eur),
    ];
    let totals = compute_totals(&payments);
    assert_eq!(totals.per_currency.get(Currency::Try), None);
    assert_eq!(totals.display_string, "250 €");

    let dust = vec![pay(PaymentType::Cash, "0,001", Currency::Try)];
    assert_eq!(compute_totals(&dust).display_string, "0 ₺");
}

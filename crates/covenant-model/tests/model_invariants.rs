//! Structural invariants of blueprint instantiation and field editing.

use covenant_model::{Blueprint, Contract, EditOutcome, Field, FieldKind, FieldValue, Status};
use proptest::prelude::*;

fn any_kind() -> impl Strategy<Value = FieldKind> {
    prop::sample::select(FieldKind::ALL.to_vec())
}

fn value_for(kind: FieldKind, seed: &str) -> FieldValue {
    match kind {
        FieldKind::Text => FieldValue::Text(seed.to_owned()),
        FieldKind::Signature => FieldValue::Signature(seed.to_owned()),
        FieldKind::Date => FieldValue::Date(chrono::NaiveDate::from_ymd_opt(2026, 1, 2)),
        FieldKind::Checkbox => FieldValue::Checkbox(!seed.is_empty()),
    }
}

#[test]
fn text_and_date_blueprint_instantiates_empty() {
    let bp = Blueprint::from_kinds("Offer", &[FieldKind::Text, FieldKind::Date]);
    let contract = Contract::instantiate("Offer for Sam", &bp);

    assert_eq!(contract.status(), Status::Created);
    let shape: Vec<_> = contract
        .fields()
        .iter()
        .map(|f| (f.id().clone(), f.kind(), f.label().to_owned(), f.value().cloned()))
        .collect();
    assert_eq!(
        shape,
        vec![
            (
                bp.fields()[0].id().clone(),
                FieldKind::Text,
                "text".to_owned(),
                Some(FieldValue::Text(String::new()))
            ),
            (
                bp.fields()[1].id().clone(),
                FieldKind::Date,
                "date".to_owned(),
                Some(FieldValue::Date(None))
            ),
        ]
    );
}

proptest! {
    #[test]
    fn instantiation_preserves_definition_shape(kinds in prop::collection::vec(any_kind(), 0..12)) {
        let bp = Blueprint::from_kinds("any", &kinds);
        let contract = Contract::instantiate("instance", &bp);

        prop_assert_eq!(contract.fields().len(), bp.fields().len());
        for (inst, def) in contract.fields().iter().zip(bp.fields()) {
            prop_assert_eq!(inst.id(), def.id());
            prop_assert_eq!(inst.kind(), def.kind());
            prop_assert_eq!(inst.label(), def.label());
            prop_assert!(inst.value().is_some_and(FieldValue::is_empty));
        }
    }

    #[test]
    fn editing_one_field_leaves_siblings_alone(
        kinds in prop::collection::vec(any_kind(), 1..8),
        pick in any::<prop::sample::Index>(),
        text in "[a-z]{0,12}",
    ) {
        let bp = Blueprint::from_kinds("any", &kinds);
        let mut contract = Contract::instantiate("instance", &bp);
        let before = contract.clone();
        let target: &Field = &bp.fields()[pick.index(kinds.len())];

        let outcome = contract
            .set_field_value(target.id(), value_for(target.kind(), &text))
            .unwrap();

        prop_assert_eq!(outcome, EditOutcome::Applied);
        for (after, orig) in contract.fields().iter().zip(before.fields()) {
            if after.id() != target.id() {
                prop_assert_eq!(after, orig);
            }
        }
        prop_assert_eq!(contract.status(), before.status());
        prop_assert_eq!(contract.name(), before.name());
    }
}

//! Property-based tests for the ifAlias OID codec and GETNEXT ordering.

mod common;

use common::{BASE, StaticDirectory};
use ifalias_persist::codec::{decode, encode};
use ifalias_persist::handler::{Engine, IndexTable, Request, Response};
use ifalias_persist::Error;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Suffixes that are not a single plain decimal arc.
fn arb_bad_suffix() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "-[0-9]{1,5}",
        "\\+[0-9]{1,5}",
        "[0-9]{1,5}\\.[0-9]{1,5}",
        "[0-9]{1,5}[ \t]",
        "[ \t][0-9]{1,5}",
        Just(String::new()),
    ]
}

fn arb_snapshot() -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1u32..10_000, 0..32)
}

// =============================================================================
// Codec
// =============================================================================

proptest! {
    #[test]
    fn decode_instance_yields_index(n in any::<u32>()) {
        prop_assert_eq!(decode(&format!("{BASE}.{n}")).unwrap(), n);
    }

    #[test]
    fn encode_then_decode_is_identity(n in 1u32..) {
        prop_assert_eq!(decode(&encode(n).to_string()).unwrap(), n);
    }

    #[test]
    fn decode_rejects_bad_suffix(suffix in arb_bad_suffix()) {
        let err = decode(&format!("{BASE}.{suffix}")).unwrap_err();
        prop_assert!(matches!(err, Error::MalformedOid { .. }), "{:?}", err);
    }

    #[test]
    fn decode_rejects_foreign_oids(arcs in prop::collection::vec(any::<u32>(), 1..16)) {
        let text: String = arcs.iter().map(|a| format!(".{a}")).collect();
        prop_assume!(text != BASE && !text.starts_with(&format!("{BASE}.")));
        prop_assert!(decode(&text).is_err());
    }
}

// =============================================================================
// GETNEXT ordering
// =============================================================================

proptest! {
    #[test]
    fn next_is_smallest_strictly_greater(snapshot in arb_snapshot(), probe in 0u32..10_001) {
        let table = IndexTable::from_snapshot(snapshot.clone());
        let expected = snapshot.iter().copied().filter(|&i| i > probe).min();
        prop_assert_eq!(table.get_next(probe), expected);
    }

    #[test]
    fn engine_getnext_matches_table(snapshot in arb_snapshot(), probe in 0u32..10_001) {
        let aliases: Vec<String> = snapshot.iter().map(|i| format!("if{i}")).collect();
        let directory = snapshot
            .iter()
            .zip(&aliases)
            .fold(StaticDirectory::new(), |dir, (index, alias)| dir.with(*index, Some(alias.as_str())));
        let engine = Engine::new(directory);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let response = runtime
            .block_on(engine.handle(&Request::GetNext { oid: format!("{BASE}.{probe}") }))
            .unwrap();

        match IndexTable::from_snapshot(snapshot).get_next(probe) {
            Some(next) => prop_assert_eq!(
                response.to_string(),
                format!("{BASE}.{next}\nstring\nif{next}")
            ),
            None => prop_assert_eq!(response, Response::NoValue),
        }
    }
}

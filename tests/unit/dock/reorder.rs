use super::*;

fn letters() -> Vec<char> {
    vec!['A', 'B', 'C', 'D', 'E']
}

#[test]
fn move_shifts_items_between() {
    let mut items = letters();
    assert!(ReorderPolicy::Move.apply(&mut items, 0, 3));
    assert_eq!(items, vec!['B', 'C', 'D', 'A', 'E']);

    let mut items = letters();
    assert!(ReorderPolicy::Move.apply(&mut items, 4, 1));
    assert_eq!(items, vec!['A', 'E', 'B', 'C', 'D']);
}

#[test]
fn swap_exchanges_two_items() {
    let mut items = letters();
    assert!(ReorderPolicy::Swap.apply(&mut items, 0, 3));
    assert_eq!(items, vec!['D', 'B', 'C', 'A', 'E']);
}

#[test]
fn self_drop_and_out_of_range_are_noops() {
    for policy in [ReorderPolicy::Move, ReorderPolicy::Swap] {
        let mut items = letters();
        assert!(!policy.apply(&mut items, 2, 2));
        assert!(!policy.apply(&mut items, 5, 0));
        assert!(!policy.apply(&mut items, 0, 9));
        assert_eq!(items, letters());
    }
}

#[test]
fn every_drop_preserves_the_multiset() {
    for policy in [ReorderPolicy::Move, ReorderPolicy::Swap] {
        for from in 0..5 {
            for to in 0..5 {
                let mut items = letters();
                policy.apply(&mut items, from, to);
                assert_eq!(items.len(), 5);
                let mut sorted = items.clone();
                sorted.sort_unstable();
                assert_eq!(sorted, letters(), "{policy} {from}->{to}");
            }
        }
    }
}

#[test]
fn origins_describe_where_content_came_from() {
    for policy in [ReorderPolicy::Move, ReorderPolicy::Swap] {
        for from in 0..5 {
            for to in 0..5 {
                let before = letters();
                let mut after = before.clone();
                policy.apply(&mut after, from, to);
                let origins = policy.origins(5, from, to);
                for (pos, origin) in origins.iter().enumerate() {
                    match origin {
                        Some(o) => assert_eq!(after[pos], before[*o], "{policy} {from}->{to}"),
                        None => assert_eq!(after[pos], before[pos], "{policy} {from}->{to}"),
                    }
                }
            }
        }
    }

    assert_eq!(
        ReorderPolicy::Move.origins(5, 0, 3),
        vec![Some(1), Some(2), Some(3), Some(0), None]
    );
}

#[test]
fn parses_policy_names() {
    assert_eq!("move".parse::<ReorderPolicy>(), Ok(ReorderPolicy::Move));
    assert_eq!(" Swap ".parse::<ReorderPolicy>(), Ok(ReorderPolicy::Swap));
    let err = "shuffle".parse::<ReorderPolicy>().unwrap_err();
    assert!(err.to_string().contains("shuffle"));
    assert_eq!(ReorderPolicy::default(), ReorderPolicy::Move);
}

#[test]
fn serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&ReorderPolicy::Swap).unwrap(),
        "\"swap\""
    );
    let parsed: ReorderPolicy = serde_json::from_str("\"move\"").unwrap();
    assert_eq!(parsed, ReorderPolicy::Move);
}

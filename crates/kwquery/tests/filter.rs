mod common;

use common::{Status, Treatment, session};
use kwquery::prelude::*;
use proptest::prelude::*;

#[test]
fn count_by_related_name() {
    let db = session();

    assert_eq!(Treatment::count(&db, criteria!(status__name = "ok")).unwrap(), 10);
    assert_eq!(Treatment::count(&db, criteria!(status__name = "ko")).unwrap(), 8);
    assert_eq!(Treatment::count(&db, criteria!()).unwrap(), 18);
}

#[test]
fn filter_by_primary_key() {
    let db = session();

    assert_eq!(Treatment::filter(&db, criteria!(id = 1)).unwrap().len(), 1);
    assert_eq!(Treatment::filter(&db, !q!(id = 1)).unwrap().len(), 17);
}

#[test]
fn negated_partition_matches_positive_filter() {
    let db = session();

    let ok = Treatment::filter(&db, criteria!(status__name = "ok")).unwrap();
    let not_ko = Treatment::filter(&db, !q!(status__name = "ko")).unwrap();

    assert_eq!(ok.len(), not_ko.len());
    assert_eq!(ok, not_ko);
}

#[test]
fn or_and_combinations() {
    let db = session();

    let either = q!(id = 1) | q!(id = 2);
    assert_eq!(Treatment::count(&db, &either).unwrap(), 2);

    let ok_tail = q!(status__name = "ok") & q!(id__gt = 5);
    assert_eq!(Treatment::count(&db, &ok_tail).unwrap(), 5);

    let grouped = (q!(id__le = 3) | q!(id__ge = 17)) & !q!(status__name = "ko");
    assert_eq!(Treatment::count(&db, grouped).unwrap(), 3);
}

#[test]
fn operators_and_flat_criteria_combine() {
    let db = session();
    let search = (vec![q!(id__lt = 15)], criteria!(status__name = "ko"));

    assert_eq!(Treatment::count(&db, search).unwrap(), 4);
}

#[test]
fn operator_suffixes() {
    let db = session();

    assert_eq!(Treatment::count(&db, criteria!(id__not = 1)).unwrap(), 17);
    assert_eq!(Treatment::count(&db, criteria!(id__lt = 4)).unwrap(), 3);
    assert_eq!(Treatment::count(&db, criteria!(id__le = 4)).unwrap(), 4);
    assert_eq!(Treatment::count(&db, criteria!(id__gt = 16)).unwrap(), 2);
    assert_eq!(Treatment::count(&db, criteria!(id__ge = 16)).unwrap(), 3);
    assert_eq!(
        Treatment::count(&db, criteria!(id__in = vec![1, 3, 99])).unwrap(),
        2
    );
    assert_eq!(
        Treatment::count(&db, criteria!(name__like = "test_ko%")).unwrap(),
        8
    );
    assert_eq!(
        Treatment::count(&db, criteria!(name__ilike = "TEST 1")).unwrap(),
        1
    );
}

#[test]
fn reverse_relationship_filters_parent() {
    let db = session();

    let statuses = Status::filter(&db, criteria!(treatments__name = "test_ko 3")).unwrap();
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].name, "ko");

    assert_eq!(Status::count(&db, criteria!(treatments__id__gt = 0)).unwrap(), 2);
}

#[test]
fn back_reference_leaves_root_criteria_on_root() {
    let db = session();

    let found = Treatment::filter(
        &db,
        criteria!(id = 1, status__treatments__name = "test 3"),
    )
    .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);

    assert_eq!(
        Treatment::count(&db, criteria!(status__treatments__name = "test_ko 0")).unwrap(),
        8
    );
}

#[test]
fn reused_q_gives_stable_results() {
    let db = session();
    let ok = q!(status__name = "ok");

    let before = Treatment::count(&db, &ok).unwrap();
    let _combined = &ok & &q!(id = 1);
    let _negated = !&ok;
    let after = Treatment::count(&db, &ok).unwrap();

    assert_eq!(before, after);
}

#[test]
fn chained_select_refines_one_plan() {
    let db = session();
    let select = Treatment::search(&db, criteria!(status__name = "ok"))
        .unwrap()
        .filter(&q!(id__gt = 8))
        .unwrap();

    assert_eq!(select.count().unwrap(), 2);
    assert_eq!(
        select.plan().to_string(),
        "SELECT treatment.* FROM treatment \
         JOIN status AS status_1 ON treatment.status_id = status_1.id \
         WHERE (status_1.name = 'ok' AND treatment.id > 8)"
    );
}

#[test]
fn all_returns_every_row() {
    let db = session();

    assert_eq!(Treatment::all(&db).unwrap().len(), 18);
    assert_eq!(Status::all(&db).unwrap().len(), 2);
}

proptest! {
    #[test]
    fn threshold_partitions_every_row(n in 0u64..25) {
        let db = session();
        let below = Treatment::count(&db, criteria!(id__lt = n)).unwrap();
        let rest = Treatment::count(&db, !q!(id__lt = n)).unwrap();

        prop_assert_eq!(below + rest, 18);
        prop_assert_eq!(rest, Treatment::count(&db, criteria!(id__ge = n)).unwrap());
    }
}

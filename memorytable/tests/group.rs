use memorytable::{table, Record, Table};

#[derive(Debug, Clone, PartialEq, Record)]
#[record(key(fields(id)))]
#[record(key(fields(team), getter = by_team))]
pub struct Member {
    pub id: &'static str,
    pub team: &'static str,
    pub version: u32,
}

fn member(id: &'static str, team: &'static str, version: u32) -> Member {
    Member { id, team, version }
}

#[test]
pub fn test_index_last_wins() {
    let table = table![member("x", "core", 1), member("x", "core", 2)];

    let index = table.index(Member::by_id);

    assert_eq!(index.len(), 1);
    assert_eq!(index["x"].version, 2);
}

#[test]
pub fn test_unique_first_wins() {
    let table = table![member("x", "core", 1), member("x", "core", 2)];

    let unique = table.unique(Member::by_id);

    assert_eq!(unique.to_slice(), &[member("x", "core", 1)]);
}

#[test]
pub fn test_unique_keeps_order() {
    let table = table![3, 1, 3, 2, 1];
    assert_eq!(table.unique(|n| *n).to_slice(), &[3, 1, 2]);
}

#[test]
pub fn test_group_by_keeps_order_within_groups() {
    let table = table![
        member("a", "core", 1),
        member("b", "web", 1),
        member("c", "core", 1),
        member("d", "core", 1),
    ];

    let groups = table.group_by(Member::by_team);

    assert_eq!(groups.len(), 2);
    let core: Vec<_> = groups["core"].iter().map(|m| m.id).collect();
    assert_eq!(core, ["a", "c", "d"]);
    assert_eq!(groups["web"], vec![member("b", "web", 1)]);
}

#[test]
pub fn test_empty_table_groups() {
    let table: Table<Member> = Table::default();
    assert!(table.group_by(Member::by_team).is_empty());
    assert!(table.index(Member::by_id).is_empty());
    assert!(table.unique(Member::by_id).is_empty());
}

#[test]
#[allow(deprecated)]
pub fn test_map_is_index() {
    let table = table![member("x", "core", 1), member("y", "core", 2)];
    assert_eq!(*table.map(Member::by_id), *table.index(Member::by_id));
}

use memorytable::{table, Blank, Record, Table};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Record, Blank)]
#[record(key(fields(role, resource), getter = permission))]
#[record(key(fields(role)))]
pub struct Grant {
    role: String,
    resource: String,
    level: u8,
}

fn grant(role: &str, resource: &str, level: u8) -> Grant {
    Grant {
        role: role.to_string(),
        resource: resource.to_string(),
        level,
    }
}

pub fn main() {
    let catalog = table![
        grant("admin", "users", 3),
        grant("admin", "billing", 3),
        grant("viewer", "users", 1),
    ];

    // Restore the stored grants on top of the catalog, keeping unknown grants out.
    let stored = table![grant("viewer", "users", 2), grant("guest", "users", 1)];
    let mut restored = catalog.clone();
    restored.update(Grant::permission, stored.clone());
    println!("{:#?}", restored);

    let unknown = stored.diff(&catalog, Grant::permission);
    println!("unknown grants: {}", unknown.json_must());

    for (role, grants) in restored.group_by(Grant::by_role) {
        let resources = Table::from(grants).columns().column(|g| g.resource.clone());
        println!("{role}: {resources:?}");
    }

    let mut levels = restored.clone();
    levels.order_by(|a, b| b.level.cmp(&a.level));
    println!("total level: {}", levels.sum(|g| i64::from(g.level)));

    let blanks = table![grant("", "", 0), grant("admin", "", 0)];
    println!("{:#?}", blanks.filter_empty());
}

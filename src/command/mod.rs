//! Command scripts - the driver layer around the catalog.
//!
//! A script is a count followed by that many commands:
//! ```text
//! 4
//! add 1 3 pan 2 1
//! purchase 2 3 1
//! restock 3 10
//! delete 3
//! ```
//!
//! This module only calls the catalog's public operations:
//! - [`Command`] - One parsed operation
//! - [`Script`] - A parsed script, applied in order
//! - [`run_script`] / [`write_snapshot`] - File I/O for the `warehouse` binary

mod driver;
mod script;

use std::fmt;

use crate::common::ProductId;
use crate::store::{Catalog, Placement};

pub use driver::{run_script, write_snapshot};
pub use script::Script;

/// One catalog operation read from a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <day> <id> <name> <stock> <demand>`
    Add {
        day: u32,
        id: ProductId,
        name: String,
        stock: u64,
        demand: u64,
    },
    /// `restock <id> <amount>`
    Restock { id: ProductId, amount: u32 },
    /// `purchase <day> <id> <amount>`
    Purchase { day: u32, id: ProductId, amount: u32 },
    /// `delete <id>`
    Delete { id: ProductId },
}

impl Command {
    /// Run this command against `catalog`.
    ///
    /// `placement` decides where `add` puts new records. Returns whether the
    /// command changed the catalog; adds always do.
    pub fn apply(&self, catalog: &mut Catalog, placement: Placement) -> bool {
        match self {
            Command::Add {
                day,
                id,
                name,
                stock,
                demand,
            } => {
                match placement {
                    Placement::Home => catalog.add_product(*id, name.as_str(), *stock, *day, *demand),
                    Placement::Probing => {
                        catalog.better_add_product(*id, name.as_str(), *stock, *day, *demand)
                    }
                };
                true
            }
            Command::Restock { id, amount } => catalog.restock_product(*id, *amount).is_found(),
            Command::Purchase { day, id, amount } => {
                catalog.purchase_product(*id, *day, *amount).is_applied()
            }
            Command::Delete { id } => catalog.delete_product(*id).is_some(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Add {
                day,
                id,
                name,
                stock,
                demand,
            } => write!(f, "add {day} {id} {name} {stock} {demand}"),
            Command::Restock { id, amount } => write!(f, "restock {id} {amount}"),
            Command::Purchase { day, id, amount } => write!(f, "purchase {day} {id} {amount}"),
            Command::Delete { id } => write!(f, "delete {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(id: u32, demand: u64) -> Command {
        Command::Add {
            day: 1,
            id: ProductId::new(id),
            name: format!("p{id}"),
            stock: 10,
            demand,
        }
    }

    #[test]
    fn test_apply_reports_effect() {
        let mut catalog = Catalog::new();

        assert!(add(7, 2).apply(&mut catalog, Placement::Home));

        let purchase = Command::Purchase {
            day: 5,
            id: ProductId::new(7),
            amount: 4,
        };
        assert!(purchase.apply(&mut catalog, Placement::Home));

        let too_much = Command::Purchase {
            day: 6,
            id: ProductId::new(7),
            amount: 100,
        };
        assert!(!too_much.apply(&mut catalog, Placement::Home));

        let restock_missing = Command::Restock {
            id: ProductId::new(17),
            amount: 1,
        };
        assert!(!restock_missing.apply(&mut catalog, Placement::Home));

        let delete = Command::Delete { id: ProductId::new(7) };
        assert!(delete.apply(&mut catalog, Placement::Home));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_apply_probing_placement() {
        let mut catalog = Catalog::new();
        for n in 0..5 {
            add(3 + 10 * n, 1).apply(&mut catalog, Placement::Home);
        }

        add(53, 0).apply(&mut catalog, Placement::Probing);
        assert_eq!(catalog.bucket(4).unwrap().size(), 1);
        assert_eq!(catalog.bucket(3).unwrap().size(), 5);
    }

    #[test]
    fn test_command_display() {
        assert_eq!(add(3, 1).to_string(), "add 1 3 p3 10 1");
        assert_eq!(
            Command::Restock {
                id: ProductId::new(3),
                amount: 10
            }
            .to_string(),
            "restock 3 10"
        );
        assert_eq!(
            Command::Purchase {
                day: 2,
                id: ProductId::new(3),
                amount: 1
            }
            .to_string(),
            "purchase 2 3 1"
        );
        assert_eq!(Command::Delete { id: ProductId::new(3) }.to_string(), "delete 3");
    }
}

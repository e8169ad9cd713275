// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SqlitePersistence;
use crate::error::PersistenceError;
use crate::tests::{create_test_payload, create_test_seed};

#[test]
fn test_persistence_initialization() {
    let result: Result<SqlitePersistence, PersistenceError> = SqlitePersistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    let mut db2: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();

    db1.seed_roster(&create_test_seed()).unwrap();
    db1.create_session(&create_test_payload()).unwrap();

    assert_eq!(db1.roster().unwrap().members().len(), 2);
    assert!(db2.roster().unwrap().members().is_empty());
    assert!(db2.list_sessions().unwrap().is_empty());
}

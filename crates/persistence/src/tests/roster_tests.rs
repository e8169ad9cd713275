// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_seed;
use crate::{PersistenceError, RosterSeed, SqlitePersistence};
use shotlog_domain::{DomainError, Duty, Roster, RosterMember, SquadId, UserId, WeaponId};

#[test]
fn test_seeded_roster_keeps_insertion_order_and_defaults() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    persistence.seed_roster(&create_test_seed()).unwrap();

    let roster: Roster = persistence.roster().unwrap();

    assert_eq!(roster.members(), create_test_seed().members.as_slice());
    assert_eq!(
        roster.squad_member_ids(&SquadId::new("s1")),
        vec![UserId::new("u1"), UserId::new("u2")]
    );
}

#[test]
fn test_catalogs_are_loaded() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    persistence.seed_roster(&create_test_seed()).unwrap();

    assert_eq!(persistence.weapons().unwrap(), create_test_seed().weapons);
    assert_eq!(persistence.equipment().unwrap(), create_test_seed().equipment);
    assert_eq!(
        persistence.assignments().unwrap(),
        create_test_seed().assignments
    );
}

#[test]
fn test_upsert_updates_member_in_place() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    persistence.seed_roster(&create_test_seed()).unwrap();

    let mut alice: RosterMember = create_test_seed().members[0].clone();
    alice.name = String::from("Alice Smith");
    alice.default_duty = Some(Duty::Spotter);
    alice.default_weapon_id = None;
    persistence.upsert_roster_member(&alice).unwrap();

    let roster: Roster = persistence.roster().unwrap();
    assert_eq!(roster.members().len(), 2);
    assert_eq!(roster.members()[0].name, "Alice Smith");
    assert_eq!(roster.members()[0].default_duty, Some(Duty::Spotter));
}

#[test]
fn test_member_with_unknown_weapon_is_rejected() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    let mut carol: RosterMember = RosterMember::new("u3", "Carol");
    carol.default_weapon_id = Some(WeaponId::new("missing"));

    let result: Result<(), PersistenceError> = persistence.upsert_roster_member(&carol);

    assert!(matches!(result, Err(PersistenceError::DatabaseError(_))));
}

#[test]
fn test_failed_seed_stores_nothing() {
    let mut persistence: SqlitePersistence = SqlitePersistence::new_in_memory().unwrap();
    let mut seed: RosterSeed = create_test_seed();
    seed.members.push(RosterMember::new("u3", "  "));

    let result: Result<(), PersistenceError> = persistence.seed_roster(&seed);

    assert!(matches!(
        result,
        Err(PersistenceError::InvalidRecord(DomainError::InvalidName(_)))
    ));
    assert!(persistence.roster().unwrap().members().is_empty());
    assert!(persistence.weapons().unwrap().is_empty());
}

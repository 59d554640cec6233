//! Unit tests for mutation protocols against a toy store.

use crate::mutation::{ChangeProtocol, CreateProtocol, MutationOutcome, ReplaceProtocol};
use rstest::{fixture, rstest};

#[derive(Debug, Default)]
struct Rows {
    emails: Vec<String>,
    writes: usize,
    fail_lookups: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct StoreDown;

impl Rows {
    fn holds(&self, email: &str) -> Result<bool, StoreDown> {
        if self.fail_lookups {
            return Err(StoreDown);
        }
        Ok(self.emails.iter().any(|held| held == email))
    }

    fn rename(&mut self, old: &str, new: &str) -> u64 {
        let mut affected = 0;
        for held in &mut self.emails {
            if held == old {
                new.clone_into(held);
                affected += 1;
            }
        }
        self.writes += 1;
        affected
    }
}

#[fixture]
fn rows() -> Rows {
    Rows {
        emails: vec!["a@x.com".to_owned(), "c@x.com".to_owned()],
        ..Rows::default()
    }
}

fn change_email(rows: &mut Rows, old: &str, new: &str) -> Result<MutationOutcome, StoreDown> {
    let (old_key, new_key) = (old.to_owned(), new.to_owned());
    let (old_apply, new_apply) = (old.to_owned(), new.to_owned());
    ChangeProtocol::new(
        old == new,
        move |rows: &mut Rows| rows.holds(&old_key),
        move |rows: &mut Rows| rows.holds(&new_key),
        move |rows: &mut Rows| Ok(rows.rename(&old_apply, &new_apply)),
    )
    .not_found_message("Old email not found.")
    .conflict_message("New email is already in use.")
    .execute(rows)
}

fn create_email(rows: &mut Rows, email: &str) -> Result<MutationOutcome, StoreDown> {
    let lookup = email.to_owned();
    let insert = email.to_owned();
    CreateProtocol::new(move |rows: &mut Rows| {
        rows.emails.push(insert);
        rows.writes += 1;
        Ok(())
    })
    .require_unique("This email is already in use.", move |rows: &mut Rows| {
        rows.holds(&lookup)
    })
    .execute(rows)
}

#[rstest]
fn create_inserts_when_value_is_free(mut rows: Rows) {
    let outcome = create_email(&mut rows, "b@x.com").expect("store available");

    assert_eq!(outcome, MutationOutcome::Applied);
    assert!(rows.emails.contains(&"b@x.com".to_owned()));
}

#[rstest]
fn create_rejects_taken_value_without_writing(mut rows: Rows) {
    let outcome = create_email(&mut rows, "a@x.com").expect("store available");

    assert_eq!(
        outcome,
        MutationOutcome::Conflict("This email is already in use.".to_owned())
    );
    assert_eq!(rows.writes, 0);
}

#[rstest]
fn create_reports_first_failing_constraint(mut rows: Rows) {
    let outcome = CreateProtocol::new(|rows: &mut Rows| {
        rows.writes += 1;
        Ok::<(), StoreDown>(())
    })
    .require_unique("ID already in use", |_: &mut Rows| Ok(true))
    .require_unique("email already in use", |_: &mut Rows| Ok(true))
    .execute(&mut rows)
    .expect("store available");

    assert_eq!(outcome.rejection(), Some("ID already in use"));
    assert_eq!(rows.writes, 0);
}

#[rstest]
fn change_applies_when_old_exists_and_new_is_free(mut rows: Rows) {
    let outcome = change_email(&mut rows, "a@x.com", "b@x.com").expect("store available");

    assert_eq!(outcome, MutationOutcome::Applied);
    assert_eq!(rows.emails, vec!["b@x.com".to_owned(), "c@x.com".to_owned()]);
}

#[rstest]
fn change_with_missing_old_value_is_not_found(mut rows: Rows) {
    let outcome = change_email(&mut rows, "z@x.com", "b@x.com").expect("store available");

    assert_eq!(
        outcome,
        MutationOutcome::NotFound("Old email not found.".to_owned())
    );
    assert_eq!(rows.writes, 0);
}

#[rstest]
fn change_to_value_held_by_another_row_conflicts(mut rows: Rows) {
    let outcome = change_email(&mut rows, "a@x.com", "c@x.com").expect("store available");

    assert_eq!(
        outcome,
        MutationOutcome::Conflict("New email is already in use.".to_owned())
    );
    assert_eq!(rows.writes, 0);
}

#[rstest]
fn change_to_same_value_is_permitted(mut rows: Rows) {
    let outcome = change_email(&mut rows, "a@x.com", "a@x.com").expect("store available");

    assert_eq!(outcome, MutationOutcome::Applied);
    assert_eq!(rows.writes, 1);
}

#[rstest]
fn repeating_a_successful_change_is_not_found(mut rows: Rows) {
    let first = change_email(&mut rows, "a@x.com", "b@x.com").expect("store available");
    let second = change_email(&mut rows, "a@x.com", "b@x.com").expect("store available");

    assert!(first.is_applied());
    assert_eq!(
        second,
        MutationOutcome::NotFound("Old email not found.".to_owned())
    );
}

#[rstest]
fn store_errors_propagate(mut rows: Rows) {
    rows.fail_lookups = true;

    let result = change_email(&mut rows, "a@x.com", "b@x.com");

    assert_eq!(result, Err(StoreDown));
    assert_eq!(rows.writes, 0);
}

#[rstest]
fn replace_reports_not_found_for_zero_affected_rows(mut rows: Rows) {
    let outcome = ReplaceProtocol::new("Account not found.", |_: &mut Rows| Ok::<u64, StoreDown>(0))
        .execute(&mut rows)
        .expect("store available");

    assert_eq!(
        outcome,
        MutationOutcome::NotFound("Account not found.".to_owned())
    );
}

#[rstest]
fn replace_applies_when_guarded_write_hits_a_row(mut rows: Rows) {
    let outcome = ReplaceProtocol::new("Account not found.", |rows: &mut Rows| {
        Ok::<u64, StoreDown>(rows.rename("c@x.com", "d@x.com"))
    })
    .execute(&mut rows)
    .expect("store available");

    assert!(outcome.is_applied());
    assert!(rows.emails.contains(&"d@x.com".to_owned()));
}

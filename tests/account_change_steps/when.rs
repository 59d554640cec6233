//! When steps for account change BDD scenarios.

use super::world::AccountWorld;
use rstest_bdd_macros::when;
use serde_json::json;

#[when(r#"account {id:i64} is created with name "{name}" and email "{email}""#)]
fn create_account(world: &mut AccountWorld, id: i64, name: String, email: String) {
    world.send(
        "POST",
        "/accounts",
        json!({"id": id, "name": name, "email": email, "password": "hopper"}),
    );
}

#[when(r#"the email "{old}" is changed to "{new}""#)]
fn change_email(world: &mut AccountWorld, old: String, new: String) {
    world.send(
        "PUT",
        "/accounts/email",
        json!({"old_email": old, "new_email": new}),
    );
}

#[when(r#"an email change carrying an "{field}" field is sent"#)]
fn change_email_with_extra_field(world: &mut AccountWorld, field: String) {
    let mut payload = json!({"old_email": "a@x.com", "new_email": "b@x.com"});
    if let Some(object) = payload.as_object_mut() {
        object.insert(field, json!(1));
    }
    world.send("PUT", "/accounts/email", payload);
}

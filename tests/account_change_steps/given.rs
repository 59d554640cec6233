//! Given steps for account change BDD scenarios.

use super::world::AccountWorld;
use rstest_bdd_macros::given;
use serde_json::json;
use tollgate::gateway::domain::Disposition;

#[given(r#"an account {id:i64} named "{name}" with email "{email}""#)]
fn an_existing_account(
    world: &mut AccountWorld,
    id: i64,
    name: String,
    email: String,
) -> Result<(), eyre::Report> {
    let response = world.send(
        "POST",
        "/accounts",
        json!({"id": id, "name": name, "email": email, "password": "correct horse"}),
    );
    if response.disposition != Disposition::Completed {
        return Err(eyre::eyre!(
            "seeding account {id} failed: {}",
            response.envelope.message
        ));
    }
    Ok(())
}

use serde_json::{json, Value};

use crate::drill_engine::{models::Phase, session::SessionState};

/// Hint line; stays empty until the player asks for hints.
fn hint_text(session: &SessionState) -> String {
    if session.hint_shown() {
        session.hints().hint_text()
    } else {
        String::new()
    }
}

fn phase_str(phase: Phase) -> &'static str {
    match phase {
        Phase::AwaitingAnswer => "awaiting_answer",
        Phase::Scored         => "scored",
    }
}

/// Map a `SessionState` to the JSON object a UI shell renders.
///
/// The correct answer is never included; hint values appear only once
/// revealed.
pub fn to_client_view(session: &SessionState) -> Value {
    let problem = session.current_problem();
    json!({
        "question_text": problem.question_text(),
        "score_text": session.score().to_string(),
        "hint_text": hint_text(session),
        "operation": problem.operator.code().to_string(),
        "phase": phase_str(session.phase()),
    })
}

use std::{cell::RefCell, path::PathBuf, sync::Arc};

use recforge::core::{RecordType, ValidationErrorKind};
use recforge::{
    Extraction, ExtractionSession, Extractor, ExtractorError, Message, ModelCompiler,
    RecforgeError, Role, Route,
};
use serde_json::json;

fn resume_type() -> Arc<RecordType> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("resume.json");
    ModelCompiler::new().compile_file("ResumeData", &path).unwrap()
}

/// Replays canned responses and records the conversations it was shown.
struct ScriptedExtractor {
    responses: RefCell<Vec<serde_json::Value>>,
    seen: RefCell<Vec<Vec<Message>>>,
}

impl ScriptedExtractor {
    fn new(responses: Vec<serde_json::Value>) -> Self {
        Self {
            responses: RefCell::new(responses),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl Extractor for ScriptedExtractor {
    fn extract(
        &self,
        conversation: &[Message],
        _record: &RecordType,
    ) -> Result<serde_json::Value, ExtractorError> {
        self.seen.borrow_mut().push(conversation.to_vec());
        let mut responses = self.responses.borrow_mut();
        if responses.is_empty() {
            return Err("no more responses".into());
        }
        Ok(responses.remove(0))
    }
}

#[test]
fn missing_fields_follow_declaration_order() {
    let resume = resume_type();
    let extraction = Extraction::from_arguments(
        &resume,
        &json!({ "summary": "Backend engineer", "name": "Alice", "unknown": 1 }),
    )
    .unwrap();

    assert_eq!(extraction.supplied(), ["name", "summary"]);
    assert_eq!(extraction.missing(), ["title", "email", "experience", "skills"]);
    assert!(!extraction.is_complete());
    assert_eq!(
        extraction.route(),
        Route::AskMore(vec![
            "title".to_string(),
            "email".to_string(),
            "experience".to_string(),
            "skills".to_string(),
        ])
    );
    assert_eq!(extraction.record().get_str("name").unwrap(), Some("Alice"));
    assert_eq!(extraction.record().get_str("email").unwrap(), Some(""));
}

#[test]
fn null_arguments_count_as_missing() {
    let resume = resume_type();
    let extraction =
        Extraction::from_arguments(&resume, &json!({ "name": "Alice", "email": null })).unwrap();
    assert!(extraction.missing().contains(&"email".to_string()));
    assert_eq!(extraction.record().get_str("email").unwrap(), Some(""));
}

#[test]
fn complete_arguments_route_to_complete() {
    let resume = resume_type();
    let extraction = Extraction::from_arguments(
        &resume,
        &json!({
            "name": "Alice",
            "title": "Engineer",
            "email": "alice@example.com",
            "summary": "Builds things",
            "experience": [
                { "title": "Engineer", "company": "Acme", "date": "2020", "description": ["APIs"] }
            ],
            "skills": { "languages": ["Rust"] }
        }),
    )
    .unwrap();
    assert!(extraction.is_complete());
    assert_eq!(extraction.route(), Route::Complete);
    assert_eq!(extraction.route().to_string(), "complete");

    let jobs = extraction.record().get_list("experience").unwrap().unwrap();
    let job = jobs[0].try_record().unwrap().unwrap();
    assert_eq!(job.type_name(), "ResumeData_ExperienceItem");
    assert_eq!(job.get_str("company").unwrap(), Some("Acme"));
}

#[test]
fn invalid_arguments_fail_with_a_path() {
    let resume = resume_type();
    let err = Extraction::from_arguments(
        &resume,
        &json!({ "experience": [{ "title": "Engineer", "description": "not a list" }] }),
    )
    .unwrap_err();
    assert_eq!(err.path, "$.experience[0].description");
    assert!(matches!(err.kind, ValidationErrorKind::TypeMismatch { .. }));
}

#[test]
fn session_merges_turns() {
    let mut session = ExtractionSession::new(resume_type());
    assert!(session.latest().is_none());
    assert_eq!(session.route().to_string(), "missing");

    session.submit(&json!({ "name": "Alice", "title": "Engineer" })).unwrap();
    let second = session
        .submit(&json!({ "title": "Staff Engineer", "email": "alice@example.com", "name": null }))
        .unwrap();

    assert_eq!(second.supplied(), ["name", "title", "email"]);
    assert_eq!(second.missing(), ["summary", "experience", "skills"]);
    assert_eq!(second.record().get_str("name").unwrap(), Some("Alice"));
    assert_eq!(second.record().get_str("title").unwrap(), Some("Staff Engineer"));
}

#[test]
fn rejected_turn_leaves_session_unchanged() {
    let mut session = ExtractionSession::new(resume_type());
    session.submit(&json!({ "name": "Alice" })).unwrap();

    assert!(session.submit(&json!({ "email": 42 })).is_err());
    assert!(session.submit(&json!(["not", "an", "object"])).is_err());

    let latest = session.latest().unwrap();
    assert_eq!(latest.supplied(), ["name"]);
    assert_eq!(latest.record().get_str("email").unwrap(), Some(""));
}

#[test]
fn follow_up_prompt_lists_missing_fields() {
    let mut session = ExtractionSession::new(resume_type());
    session
        .submit(&json!({ "name": "Alice", "title": "Engineer", "email": "a@b.c", "summary": "x" }))
        .unwrap();

    assert_eq!(
        session.follow_up_prompt().unwrap(),
        "Please provide the following information:\n- experience: Job experience\n- skills: Skills"
    );

    session
        .submit(&json!({ "experience": [], "skills": {} }))
        .unwrap();
    assert_eq!(session.follow_up_prompt(), None);
}

#[test]
fn extract_with_sends_current_data_on_later_turns() {
    let extractor = ScriptedExtractor::new(vec![
        json!({ "name": "Alice" }),
        json!({ "email": "alice@example.com" }),
    ]);
    let mut session = ExtractionSession::new(resume_type());

    session
        .extract_with(&extractor, &[Message::user("I'm Alice")])
        .unwrap();
    let extraction = session
        .extract_with(&extractor, &[Message::user("Reach me at alice@example.com")])
        .unwrap();
    assert_eq!(extraction.supplied(), ["name", "email"]);

    let seen = extractor.seen.borrow();
    assert_eq!(seen[0].len(), 1);
    assert_eq!(seen[1].len(), 2);
    assert_eq!(seen[1][0].role, Role::System);
    assert!(seen[1][0].content.starts_with("Current ResumeData data: "));
    assert!(seen[1][0].content.contains("\"name\":\"Alice\""));
}

#[test]
fn extractor_failures_are_wrapped() {
    let extractor = ScriptedExtractor::new(Vec::new());
    let mut session = ExtractionSession::new(resume_type());
    let err = session
        .extract_with(&extractor, &[Message::user("hello")])
        .unwrap_err();
    assert!(matches!(err, RecforgeError::Extractor(_)));
    assert_eq!(err.to_string(), "extractor failed: no more responses");
}

#[test]
fn messages_serialize_with_lowercase_roles() {
    let message = Message::assistant("What is your email?");
    assert_eq!(
        serde_json::to_value(&message).unwrap(),
        json!({ "role": "assistant", "content": "What is your email?" })
    );
}

#[test]
fn instance_check_rejects_null_values() {
    let customer = ModelCompiler::new()
        .compile_value(
            "Customer",
            json!({
                "name": { "type": "string" },
                "age": { "type": "integer" },
                "extra": { "type": "currency" }
            }),
        )
        .unwrap();

    let err = Extraction::from_instance(&customer, &json!({ "age": null })).unwrap_err();
    assert_eq!(err.path, "$.age");
    assert!(matches!(err.kind, ValidationErrorKind::NullValue { .. }));

    // The lenient path drops the null and reports the field as missing.
    let lenient = Extraction::from_arguments(&customer, &json!({ "age": null })).unwrap();
    assert!(lenient.missing().contains(&"age".to_string()));

    let checked = Extraction::from_instance(&customer, &json!({ "name": "Alice", "extra": null })).unwrap();
    assert_eq!(checked.supplied(), ["name", "extra"]);
    assert_eq!(checked.missing(), ["age"]);
}

#[test]
fn follow_up_prompt_before_any_turn_lists_every_field() {
    let session = ExtractionSession::new(resume_type());
    let prompt = session.follow_up_prompt().unwrap();
    let listed: Vec<_> = prompt.lines().skip(1).collect();
    assert_eq!(
        listed,
        [
            "- name: Name of the resource",
            "- title: Title of the resource",
            "- email: Email address",
            "- summary: Executive summary",
            "- experience: Job experience",
            "- skills: Skills",
        ]
    );
}

use formroll_core::{
    aggregate_responses, project_all_sections, project_form_responses,
    project_latest_form_responses, AggregatedResponses, FormSchemaVersion, Question,
    QuestionResponse, Section, Submission,
};
use uuid::Uuid;

struct Scenario {
    form_id: String,
    s1: String,
    s2: String,
    q1: String,
    q2: String,
    q3: String,
    v1: FormSchemaVersion,
    v2: FormSchemaVersion,
    submissions: Vec<Submission>,
}

fn id() -> String {
    Uuid::new_v4().to_string()
}

fn section(question_ids: &[&String]) -> Section {
    question_ids.iter().fold(Section::page(), |section, question_id| {
        section.with_question(question_id.as_str(), Question::new("prompt", "text"))
    })
}

fn respond(form_version: u32, form_id: &str, question_ids: &[&String]) -> Submission {
    question_ids
        .iter()
        .fold(Submission::new(form_id, form_version, id()), |submission, question_id| {
            submission.with_response(question_id.as_str(), QuestionResponse::new(id(), "answer"))
        })
}

/// v1: S1 = {Q1, Q2, Q3}; v2: S1 = {Q1, Q3}, S2 = {Q2}; one submission per version.
fn scenario() -> Scenario {
    let (form_id, s1, s2, q1, q2, q3) = (id(), id(), id(), id(), id(), id());
    let v1 = FormSchemaVersion::new(form_id.clone(), 1)
        .with_section(s1.clone(), section(&[&q1, &q2, &q3]));
    let v2 = FormSchemaVersion::new(form_id.clone(), 2)
        .with_section(s1.clone(), section(&[&q1, &q3]))
        .with_section(s2.clone(), section(&[&q2]));
    let submissions = vec![
        respond(1, &form_id, &[&q1, &q2, &q3]),
        respond(2, &form_id, &[&q1, &q2, &q3]),
    ];
    Scenario {
        form_id,
        s1,
        s2,
        q1,
        q2,
        q3,
        v1,
        v2,
        submissions,
    }
}

#[test]
fn responses_follow_question_into_new_section() {
    let sc = scenario();
    let aggregated = aggregate_responses(&sc.submissions);
    for question_id in [&sc.q1, &sc.q2, &sc.q3] {
        assert_eq!(aggregated.get(question_id).map(|set| set.len()), Some(2));
    }

    let collection = project_form_responses(Some(&sc.v2), &aggregated).expect("projection");
    assert_eq!(collection.form_id, sc.form_id);
    assert_eq!(collection.form_version, 2);
    assert_eq!(collection.sections.len(), 2);

    let s1 = collection.section(&sc.s1).expect("S1 present");
    assert_eq!(s1.len(), 2);
    assert_eq!(s1[&sc.q1].len(), 2);
    assert_eq!(s1[&sc.q3].len(), 2);
    assert!(!s1.contains_key(&sc.q2));

    let s2 = collection.section(&sc.s2).expect("S2 present");
    assert_eq!(s2.len(), 1);
    assert_eq!(collection.responses_for(&sc.s2, &sc.q2).map(|set| set.len()), Some(2));
    assert_eq!(collection.response_count(), 6);
}

#[test]
fn old_layout_regroups_newer_responses() {
    let sc = scenario();
    let aggregated = aggregate_responses(&sc.submissions);

    let collection = project_form_responses(Some(&sc.v1), &aggregated).expect("projection");
    assert_eq!(collection.form_version, 1);
    assert_eq!(collection.sections.len(), 1);
    let s1 = collection.section(&sc.s1).expect("S1 present");
    assert_eq!(s1.len(), 3);
    assert!(collection.section(&sc.s2).is_none());
}

#[test]
fn projection_reports_schema_not_response_origin() {
    let sc = scenario();
    let only_v1: Vec<Submission> = sc
        .submissions
        .iter()
        .filter(|submission| submission.form_version == 1)
        .cloned()
        .collect();
    let aggregated = aggregate_responses(&only_v1);

    let collection = project_form_responses(Some(&sc.v2), &aggregated).expect("projection");
    assert_eq!(collection.form_version, 2);
    assert_eq!(collection.responses_for(&sc.s2, &sc.q2).map(|set| set.len()), Some(1));
}

#[test]
fn every_section_key_present_and_no_foreign_questions() {
    let sc = scenario();
    let aggregated = aggregate_responses(&sc.submissions);

    for schema in [&sc.v1, &sc.v2] {
        let sections = project_all_sections(schema, &aggregated);
        assert_eq!(
            sections.keys().collect::<Vec<_>>(),
            schema.sections.keys().collect::<Vec<_>>()
        );
        for (section_id, responses) in &sections {
            let layout = &schema.sections[section_id];
            assert!(responses.keys().all(|question_id| layout.contains_question(question_id)));
        }
    }
}

#[test]
fn projection_with_unrelated_answers_keeps_empty_sections() {
    let sc = scenario();
    let stray = Submission::new(sc.form_id.clone(), 2, id())
        .with_response("unknown-question", QuestionResponse::new(id(), "x"));
    let aggregated = aggregate_responses([&stray]);

    let collection = project_form_responses(Some(&sc.v2), &aggregated).expect("projection");
    assert_eq!(collection.sections.len(), 2);
    assert_eq!(collection.response_count(), 0);
    assert!(collection.sections.values().all(|section| section.is_empty()));
}

#[test]
fn projection_returns_none_without_schema_or_data() {
    let sc = scenario();
    let aggregated = aggregate_responses(&sc.submissions);

    assert!(project_form_responses(Some(&sc.v2), &AggregatedResponses::new()).is_none());
    assert!(project_form_responses(None, &aggregated).is_none());

    let only_empty = vec![Submission::new(sc.form_id.clone(), 1, id())];
    assert!(project_form_responses(Some(&sc.v1), &aggregate_responses(&only_empty)).is_none());
}

#[test]
fn latest_projection_uses_highest_version() {
    let sc = scenario();
    let aggregated = aggregate_responses(&sc.submissions);
    let history = vec![sc.v2.clone(), sc.v1.clone()];

    let collection =
        project_latest_form_responses(&history, &sc.form_id, &aggregated).expect("projection");
    assert_eq!(collection, project_form_responses(Some(&sc.v2), &aggregated).unwrap());
    assert!(project_latest_form_responses(&history, "missing", &aggregated).is_none());
}

#[test]
fn projection_serializes_with_wire_field_names() {
    let sc = scenario();
    let aggregated = aggregate_responses(&sc.submissions);
    let collection = project_form_responses(Some(&sc.v2), &aggregated).expect("projection");

    let json = serde_json::to_value(&collection).unwrap();
    assert_eq!(json["formId"], sc.form_id.as_str());
    assert_eq!(json["formVersion"], 2);
    let entries = json["sections"][&sc.s2][&sc.q2].as_array().expect("array");
    assert_eq!(entries.len(), 2);
    assert!(entries[0]["submissionId"].is_string());
}

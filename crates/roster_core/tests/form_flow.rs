use roster_core::service::form::{
    ADDED_MESSAGE, ADD_LABEL, CLEARED_MESSAGE, DELETED_MESSAGE, DELETE_PROMPT, EDITING_MESSAGE,
    UPDATED_MESSAGE, UPDATE_LABEL,
};
use roster_core::service::table_view::EMPTY_MESSAGE;
use roster_core::{
    EditState, FormOutcome, InMemoryStorage, KvStudentRepository, RecordStore, StudentForm,
    StudentRecord, TableView,
};

type MemoryStore = RecordStore<KvStudentRepository<InMemoryStorage>>;

fn empty_store() -> MemoryStore {
    RecordStore::open(KvStudentRepository::new(InMemoryStorage::new()))
}

fn fill(form: &mut StudentForm, name: &str, student_id: &str, email: &str, contact: &str) {
    form.set_name(name);
    form.set_student_id(student_id);
    form.set_email(email);
    form.set_contact(contact);
}

fn accept(_prompt: &str) -> bool {
    true
}

fn decline(_prompt: &str) -> bool {
    false
}

#[test]
fn submit_in_idle_mode_adds_and_resets_fields() {
    let mut store = empty_store();
    let mut form = StudentForm::new();
    assert_eq!(form.submit_label(&store), ADD_LABEL);

    fill(&mut form, " Ann Lee ", "123", " a@b.com ", "1234567890");
    let outcome = form.submit(&mut store);

    assert_eq!(outcome, FormOutcome::Done(ADDED_MESSAGE));
    assert_eq!(form.message(), Some(ADDED_MESSAGE));
    assert_eq!(form.fields(), &StudentRecord::default());
    assert_eq!(
        store.records(),
        [StudentRecord::new("Ann Lee", "123", "a@b.com", "1234567890")]
    );
}

#[test]
fn failed_submit_keeps_fields_and_reports_message() {
    let mut store = empty_store();
    let mut form = StudentForm::new();
    fill(&mut form, "Ann", "1", "bad-email", "1234567890");

    let outcome = form.submit(&mut store);

    assert!(outcome.is_error());
    assert_eq!(outcome.message(), Some("Please enter a valid email address."));
    assert_eq!(form.fields().email, "bad-email");
    assert!(store.is_empty());
}

#[test]
fn keystroke_filters_apply_to_name_id_and_contact() {
    let mut form = StudentForm::new();
    fill(&mut form, "Ann2 Lee!", "12-34", "any thing", "(555) 123-4567");

    assert_eq!(form.fields().name, "Ann Lee");
    assert_eq!(form.fields().student_id, "1234");
    assert_eq!(form.fields().email, "any thing");
    assert_eq!(form.fields().contact, "5551234567");
}

#[test]
fn begin_edit_prefills_and_submit_updates() {
    let mut store = empty_store();
    let mut form = StudentForm::new();
    fill(&mut form, "Ann Lee", "123", "a@b.com", "1234567890");
    form.submit(&mut store);

    assert_eq!(form.begin_edit(&mut store, 0), FormOutcome::Done(EDITING_MESSAGE));
    assert_eq!(form.fields().student_id, "123");
    assert_eq!(form.submit_label(&store), UPDATE_LABEL);

    form.set_email("ann@school.edu");
    assert_eq!(form.submit(&mut store), FormOutcome::Done(UPDATED_MESSAGE));
    assert_eq!(store.records()[0].email, "ann@school.edu");
    assert_eq!(store.edit_state(), EditState::Idle);
    assert_eq!(form.submit_label(&store), ADD_LABEL);
}

#[test]
fn begin_edit_on_missing_row_is_rejected() {
    let mut store = empty_store();
    let mut form = StudentForm::new();
    assert!(form.begin_edit(&mut store, 3).is_error());
    assert_eq!(store.edit_state(), EditState::Idle);
}

#[test]
fn reset_cancels_edit_and_clears_everything() {
    let mut store = empty_store();
    let mut form = StudentForm::new();
    fill(&mut form, "Ann Lee", "123", "a@b.com", "1234567890");
    form.submit(&mut store);
    form.begin_edit(&mut store, 0);

    form.reset(&mut store);

    assert_eq!(store.edit_state(), EditState::Idle);
    assert_eq!(form.fields(), &StudentRecord::default());
    assert_eq!(form.message(), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn declined_confirmation_skips_delete_and_clear() {
    let mut store = empty_store();
    let mut form = StudentForm::new();
    fill(&mut form, "Ann Lee", "123", "a@b.com", "1234567890");
    form.submit(&mut store);

    assert_eq!(
        form.delete_record(&mut store, 0, &mut decline),
        FormOutcome::Cancelled
    );
    assert_eq!(
        form.clear_all_records(&mut store, &mut decline),
        FormOutcome::Cancelled
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn confirmed_delete_uses_delete_prompt() {
    let mut store = empty_store();
    let mut form = StudentForm::new();
    fill(&mut form, "Ann Lee", "123", "a@b.com", "1234567890");
    form.submit(&mut store);

    let mut prompts = Vec::new();
    let mut gate = |prompt: &str| {
        prompts.push(prompt.to_string());
        true
    };
    assert_eq!(
        form.delete_record(&mut store, 0, &mut gate),
        FormOutcome::Done(DELETED_MESSAGE)
    );
    assert_eq!(prompts, [DELETE_PROMPT]);
    assert!(store.is_empty());
}

#[test]
fn deleting_the_edited_row_clears_the_prefilled_form() {
    let mut store = empty_store();
    let mut form = StudentForm::new();
    fill(&mut form, "Ann Lee", "123", "a@b.com", "1234567890");
    form.submit(&mut store);
    form.begin_edit(&mut store, 0);

    form.delete_record(&mut store, 0, &mut accept);

    assert_eq!(store.edit_state(), EditState::Idle);
    assert_eq!(form.fields(), &StudentRecord::default());
}

#[test]
fn clear_all_records_empties_store() {
    let mut store = empty_store();
    let mut form = StudentForm::new();
    for id in ["1", "2"] {
        fill(&mut form, "Ann Lee", id, "a@b.com", "1234567890");
        form.submit(&mut store);
    }

    assert_eq!(
        form.clear_all_records(&mut store, &mut accept),
        FormOutcome::Done(CLEARED_MESSAGE)
    );
    assert!(store.is_empty());
}

#[test]
fn table_view_tracks_rows_scroll_and_editing() {
    let mut store = empty_store();
    let view = TableView::build(&store);
    assert!(view.rows.is_empty());
    assert_eq!(view.empty_message, Some(EMPTY_MESSAGE));
    assert!(!view.scroll_enabled);

    for id in 1..=6 {
        let record = StudentRecord::new("Ann Lee", id.to_string(), "a@b.com", "1234567890");
        store.add(&record).unwrap();
        let view = TableView::build(&store);
        assert_eq!(view.scroll_enabled, id > 5, "rows: {id}");
    }

    store.start_edit(4).unwrap();
    let view = TableView::build(&store);
    assert_eq!(view.rows.len(), 6);
    assert_eq!(view.rows[4].index, 4);
    assert_eq!(view.rows[4].record.student_id, "5");
    assert_eq!(view.editing, Some(4));
    assert_eq!(view.empty_message, None);
}

#[test]
fn delete_and_clear_outcomes_replace_the_form_message() {
    let mut store = empty_store();
    let mut form = StudentForm::new();
    fill(&mut form, "Ann Lee", "123", "a@b.com", "1234567890");
    form.submit(&mut store);
    assert_eq!(form.message(), Some(ADDED_MESSAGE));

    let outcome = form.delete_record(&mut store, 7, &mut accept);
    assert!(outcome.is_error());
    assert_eq!(form.message(), outcome.message());

    form.delete_record(&mut store, 0, &mut decline);
    assert_eq!(form.message(), outcome.message());

    form.delete_record(&mut store, 0, &mut accept);
    assert_eq!(form.message(), Some(DELETED_MESSAGE));

    form.clear_all_records(&mut store, &mut accept);
    assert_eq!(form.message(), Some(CLEARED_MESSAGE));
}

use lektio_core::error::CoreError;
use lektio_core::models::plan::LessonPlanRequest;

#[test]
fn empty_syllabus_is_rejected() {
    let request = LessonPlanRequest::new("");
    assert!(matches!(request.validate(), Err(CoreError::EmptySyllabus)));
}

#[test]
fn whitespace_only_syllabus_is_rejected() {
    let request = LessonPlanRequest::new("   \n\t  ");
    assert!(matches!(request.validate(), Err(CoreError::EmptySyllabus)));
}

#[test]
fn non_empty_syllabus_passes() {
    let request = LessonPlanRequest::new("Unit 3: History of AI, 7 hours");
    assert!(request.validate().is_ok());
}
